use static_aabb2d_index as aabb_index;
/// Trait for control flow inside visiting methods.
///
/// This trait provides a way to control iteration and visiting patterns in spatial queries and
/// ring walks. It allows early termination of a visit when the visitor has what it needs.
///
/// # Examples
///
/// ```
/// # use polyring::core::*;
/// # use polyring::core::math::*;
/// # use polyring::polygon::*;
/// # use polyring::shapes::*;
/// # use polyring::ring;
/// let square = Polygon::new(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
///
/// let mut visited = 0;
/// square.visit_segments_in_rect(&Rect::new(-1.0, -1.0, 5.0, 5.0), &mut |_index, _seg| {
///     visited += 1;
///     // Return Control::Break to stop iteration early
///     Control::Break(())
/// });
///
/// assert_eq!(visited, 1);
/// ```
pub trait ControlFlow {
    /// Constructs state indicating to continue iteration/visiting.
    fn continuing() -> Self;

    /// Returns `true` if control flow should break/stop iteration.
    fn should_break(&self) -> bool;
}

impl<C> ControlFlow for C
where
    C: aabb_index::ControlFlow,
{
    #[inline]
    fn continuing() -> Self {
        C::continuing()
    }

    #[inline]
    fn should_break(&self) -> bool {
        self.should_break()
    }
}
