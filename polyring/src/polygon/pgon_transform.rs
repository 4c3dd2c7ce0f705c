use super::{internal::pgon_cut, CutOptions, Polygon};
use crate::{
    core::{math::Vector2, traits::Real},
    ring::{catmull_rom_closed, douglas_peucker_closed},
    PolyResult, PolygonError,
};

impl<T> Polygon<T>
where
    T: Real,
{
    /// New polygon with every ring point mapped through `f`, validated.
    fn map_points<F>(&self, f: F) -> PolyResult<Polygon<T>>
    where
        F: Fn(Vector2<T>) -> Vector2<T>,
    {
        self.rebuild_rings(|ring| ring.iter().map(|&p| f(p)).collect())
    }

    /// New polygon rings rebuilt from `f` applied to each ring, validated.
    fn rebuild_rings<F>(&self, f: F) -> PolyResult<Polygon<T>>
    where
        F: Fn(&[Vector2<T>]) -> Vec<Vector2<T>>,
    {
        Polygon::with_interior_rings(f(&self.exterior), self.interior_rings().map(f).collect())
            .map_err(PolygonError::invalid_result)
    }

    /// Translate every ring by `offset`.
    ///
    /// Fails with [PolygonError::InvalidResult] if the moved rings no longer form a valid
    /// polygon, which happens when coordinates are large enough for rounding to merge points.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::ring;
    /// # use polyring::polygon::*;
    /// # use polyring::core::math::*;
    /// let square = Polygon::new(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
    /// let moved = square.translate(Vector2::new(1.0, -1.0)).unwrap();
    /// assert_eq!(moved.centroid(), Vector2::new(3.0, 1.0));
    /// assert_eq!(moved.area(), square.area());
    /// ```
    pub fn translate(&self, offset: Vector2<T>) -> PolyResult<Polygon<T>> {
        self.map_points(|p| p + offset)
    }

    /// Rotate every ring by `angle` radians counter clockwise about `origin`, or about the
    /// centroid if `origin` is `None`.
    pub fn rotate(&self, angle: T, origin: Option<Vector2<T>>) -> PolyResult<Polygon<T>> {
        let origin = origin.unwrap_or(self.centroid);
        self.map_points(|p| p.rotate_about(origin, angle))
    }

    /// Scale every ring uniformly by `factor` about `origin`, or about the centroid if `origin`
    /// is `None`.
    ///
    /// Fails with [PolygonError::InvalidResult] when the scaled rings collapse, for a zero
    /// factor or one small enough to merge ring points.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::ring;
    /// # use polyring::polygon::*;
    /// # use polyring::PolygonError;
    /// let square = Polygon::new(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
    /// assert_eq!(square.scale(0.5, None).unwrap().area(), 4.0);
    /// assert!(matches!(
    ///     square.scale(0.0, None),
    ///     Err(PolygonError::InvalidResult { .. })
    /// ));
    /// ```
    #[inline]
    pub fn scale(&self, factor: T, origin: Option<Vector2<T>>) -> PolyResult<Polygon<T>> {
        self.scale_xy(Vector2::new(factor, factor), origin)
    }

    /// Scale every ring by independent x and y `factors`. A negative factor mirrors the
    /// polygon, rings are rewound counter clockwise. Fails like [Polygon::scale].
    pub fn scale_xy(
        &self,
        factors: Vector2<T>,
        origin: Option<Vector2<T>>,
    ) -> PolyResult<Polygon<T>> {
        let origin = origin.unwrap_or(self.centroid);
        self.map_points(|p| p.scale_about(origin, factors))
    }

    /// Drop ring points that deviate less than `tolerance` from the simplified ring
    /// (Douglas-Peucker). No ring drops below 3 points.
    ///
    /// Fails with [PolygonError::InvalidResult] if the simplified rings no longer form a valid
    /// polygon, for example when a simplified hole crosses the exterior ring.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::ring;
    /// # use polyring::polygon::*;
    /// let bumpy = Polygon::new(ring![(0.0, 0.0), (2.0, 0.01), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
    ///     .unwrap();
    /// let simple = bumpy.simplify(0.1).unwrap();
    /// assert_eq!(simple.unique_vertex_count(), 4);
    /// ```
    pub fn simplify(&self, tolerance: T) -> PolyResult<Polygon<T>> {
        self.rebuild_rings(|ring| douglas_peucker_closed(ring, tolerance))
    }

    /// Densify every ring with a closed Catmull-Rom spline, adding `interpolations` points
    /// between each pair of ring points.
    pub fn smooth(&self, interpolations: usize) -> PolyResult<Polygon<T>> {
        self.rebuild_rings(|ring| catmull_rom_closed(ring, interpolations))
    }

    /// Split along `cut_line`, which must cross one ring exactly twice, returning the piece
    /// selected by `options.direction`.
    ///
    /// Fails with [PolygonError::CutCrossings] if the line does not cross exactly twice,
    /// [PolygonError::CutCrossesMultipleRings] if it crosses more than one ring, and
    /// [PolygonError::CutResultInvalid] if the piece is not a valid polygon.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::ring;
    /// # use polyring::polygon::*;
    /// # use polyring::core::math::*;
    /// let square = Polygon::new(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
    /// let cut_line = [Vector2::new(2.0, -1.0), Vector2::new(2.0, 5.0)];
    ///
    /// let right = square.cut(&cut_line, &CutOptions::new(WalkDirection::Clockwise)).unwrap();
    /// assert_eq!(right.area(), 8.0);
    /// assert_eq!(right.centroid(), Vector2::new(3.0, 2.0));
    ///
    /// let left = square.cut(&cut_line, &CutOptions::new(WalkDirection::CounterClockwise)).unwrap();
    /// assert_eq!(left.centroid(), Vector2::new(1.0, 2.0));
    /// ```
    #[inline]
    pub fn cut(&self, cut_line: &[Vector2<T>], options: &CutOptions) -> PolyResult<Polygon<T>> {
        pgon_cut::cut(self, cut_line, options)
    }
}
