/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing ring macros. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a closed ring (`Vec<Vector2<f64>>`) from a list of (x, y) tuples.
///
/// The first point is repeated at the end if the list given is not already closed.
///
/// # Examples
///
/// ```
/// # use polyring::ring;
/// # use polyring::core::math::*;
/// let ring = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)];
/// assert_eq!(ring.len(), 4);
/// assert_eq!(ring[0], ring[3]);
/// assert_eq!(ring[1], Vector2::new(4.0, 0.0));
/// ```
#[macro_export]
macro_rules! ring {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut points = ::std::vec::Vec::with_capacity(size + 1);
            $(
                points.push($crate::core::math::Vector2::new($x.0, $x.1));
            )*
            $crate::ring::ensure_closed_ring(points)
        }
    };
}
