use crate::core::traits::Real;
use std::{fmt, ops};

/// Two dimensional point or vector.
///
/// Equality is positional: two vectors compare equal when the distance between them is within
/// [Real::pos_equal_eps]. This means `==` is not transitive for chains of nearly equal points, and
/// every container holding points inherits the same tolerance.
///
/// # Examples
///
/// ```
/// # use polyring::core::math::*;
/// let a = Vector2::new(1.0, 1.0);
/// assert_eq!(a, Vector2::new(1.0 + 1e-7, 1.0));
/// assert_ne!(a, Vector2::new(1.001, 1.0));
/// ```
#[derive(Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Create a zero vector (x = 0, y = 0).
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Uniformly scale the vector by `scale_factor`.
    pub fn scale(&self, scale_factor: T) -> Self {
        vec2(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Compute the perpendicular dot product (`self.x * other.y - self.y * other.x`).
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length of the vector.
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the vector.
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }


    /// Distance to another point.
    pub fn distance(&self, other: Self) -> T {
        (*self - other).length()
    }

    /// Squared distance to another point.
    pub fn distance_squared(&self, other: Self) -> T {
        (*self - other).length_squared()
    }

    /// Fuzzy equal comparison with another vector using `fuzzy_epsilon` given.
    ///
    /// Compares each component independently, unlike `==` which compares by distance.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using T::fuzzy_epsilon().
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    /// Exact component-wise comparison, bypassing the positional tolerance of `==`.
    pub fn bitwise_eq(&self, other: Self) -> bool {
        self.x == other.x && self.y == other.y
    }


    /// Rotate this point around an `origin` point by some `angle` in radians.
    pub fn rotate_about(&self, origin: Self, angle: T) -> Self {
        // translate to origin
        let translated = self - origin;

        // rotate
        let (s, c) = angle.sin_cos();
        let rotated = vec2(
            translated.x * c - translated.y * s,
            translated.x * s + translated.y * c,
        );

        // translate back
        rotated + origin
    }

    /// Scale this point away from an `origin` point by independent x and y `factors`.
    pub fn scale_about(&self, origin: Self, factors: Self) -> Self {
        let translated = self - origin;
        vec2(translated.x * factors.x, translated.y * factors.y) + origin
    }
}

impl<T> PartialEq for Vector2<T>
where
    T: Real,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.distance_squared(*other) <= T::pos_equal_eps_squared()
    }
}

impl<T> fmt::Display for Vector2<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T> From<(T, T)> for Vector2<T>
where
    T: Real,
{
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Vector2::new(x, y)
    }
}

#[inline(always)]
pub fn vec2<T>(x: T, y: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(x, y)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: &Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }


        impl<'a, 'b, T: Real> ops::$op_trait<&'b Vector2<T>> for &'a Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, _rhs: &'b Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op _rhs.x, self.y $op _rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

macro_rules! ImplUnaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self) -> Self::Output {
                Vector2::new($op self.x, $op self.y)
            }
        }

        impl<T: Real> ops::$op_trait for &Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self) -> Self::Output {
                Vector2::new($op self.x, $op self.y)
            }
        }

    };
}

ImplUnaryOp!(Neg, neg, -);

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_binary_op {
        ($v1:ident, $v2:ident, $op:tt, $expected:expr) => {
            assert!(($v1 $op $v2).fuzzy_eq($expected));
            assert!((&$v1 $op $v2).fuzzy_eq($expected));
            assert!(($v1 $op &$v2).fuzzy_eq($expected));
            assert!((&$v1 $op &$v2).fuzzy_eq($expected));
        };
    }

    #[test]
    fn ops() {
        let v1 = vec2(4.0, 5.0);
        let v2 = vec2(1.0, 2.0);
        test_binary_op!(v1, v2, +, vec2(5.0, 7.0));
        test_binary_op!(v1, v2, -, vec2(3.0, 3.0));
    }

    #[test]
    fn positional_equality() {
        let v = vec2(3.0, -2.0);
        assert_eq!(v, vec2(3.0 + 5e-6, -2.0));
        assert_ne!(v, vec2(3.0 + 2e-5, -2.0));
        // diagonal offset under the epsilon in each axis but over it in distance
        assert_ne!(v, vec2(3.0 + 8e-6, -2.0 + 8e-6));
        assert!(!v.bitwise_eq(vec2(3.0 + 5e-6, -2.0)));
    }

    #[test]
    fn rotate_and_scale_about() {
        let v = vec2(2.0, 0.0);
        let rotated = v.rotate_about(vec2(1.0, 0.0), std::f64::consts::FRAC_PI_2);
        assert!(rotated.fuzzy_eq(vec2(1.0, 1.0)));

        let scaled = v.scale_about(vec2(1.0, 1.0), vec2(2.0, 3.0));
        assert!(scaled.fuzzy_eq(vec2(3.0, -2.0)));
    }
}
