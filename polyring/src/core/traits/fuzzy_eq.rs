/// Scalar comparison within a tolerance.
///
/// Scalars (parametric values, areas, lengths) compare with [FuzzyEq::fuzzy_epsilon]. Point
/// positions use the coarser [Real::pos_equal_eps](super::Real::pos_equal_eps) through
/// `Vector2`'s `==` instead.
///
/// # Examples
///
/// ```
/// # use polyring::core::traits::*;
/// let area = 0.1 + 0.2;
/// assert_ne!(area, 0.3);
/// assert!(area.fuzzy_eq(0.3));
/// assert!((area - 0.3).fuzzy_eq_zero());
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Tolerance used by the methods without an `_eps` suffix.
    fn fuzzy_epsilon() -> Self;

    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                1e-8
            }

            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }

            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_eq!(f32);
impl_fuzzy_eq!(f64);
