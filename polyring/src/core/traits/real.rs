use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared and ordered.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + std::fmt::Display
    + IndexableNum
    + 'static
{
    #[inline]
    fn pi() -> Self {
        Self::from(std::f64::consts::PI).unwrap()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Shared positional epsilon. Two points closer than this distance are the same point.
    #[inline]
    fn pos_equal_eps() -> Self {
        Self::from(1e-5).unwrap()
    }

    /// Square of [Real::pos_equal_eps].
    #[inline]
    fn pos_equal_eps_squared() -> Self {
        Self::pos_equal_eps() * Self::pos_equal_eps()
    }

    #[inline]
    fn min_value() -> Self {
        num_traits::real::Real::min_value()
    }

    #[inline]
    fn max_value() -> Self {
        num_traits::real::Real::max_value()
    }
}

impl Real for f32 {
    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn pos_equal_eps() -> Self {
        1e-5f32
    }
}

impl Real for f64 {
    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn pos_equal_eps() -> Self {
        1e-5f64
    }
}
