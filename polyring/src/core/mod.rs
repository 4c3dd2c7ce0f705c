//! Numeric traits, vector math and the visitor control type shared by shapes and polygons.
pub mod math;
pub mod traits;

use traits::ControlFlow;

/// Result of a visitor passed to segment index queries and ring walks.
///
/// `Break` ends the walk early and carries whatever the visitor found.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Control<B = ()> {
    Continue,
    Break(B),
}

impl<B> ControlFlow for Control<B> {
    #[inline]
    fn continuing() -> Self {
        Control::Continue
    }

    #[inline]
    fn should_break(&self) -> bool {
        matches!(self, Control::Break(_))
    }
}
