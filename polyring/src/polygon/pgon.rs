use super::{
    internal::{pgon_contains, pgon_intersects, pgon_nearest, pgon_validity},
    segment_index::seg_rect,
    NearestSegmentResult, NearestVertexResult, SegmentIndex, SegmentIndexOptions,
    ValidateOptions, VertexConvexity,
};
use crate::{
    core::{
        math::{turn_direction, Vector2},
        traits::{ControlFlow, Real},
    },
    ring::{
        convex_hull_indices, ring_bounding_rect, ring_centroid, ring_perimeter, ring_segments,
        ring_signed_area, PolygonIndex, PolygonVertexEnum,
    },
    shapes::{Circle, LineSeg, OverlapType, Rect},
    PolyResult, PolygonError,
};
use std::cell::OnceCell;

/// Polygon with an exterior ring and zero or more interior rings (holes).
///
/// Rings are stored closed (the last point repeats the first) and counter clockwise. Each
/// interior ring is held as a polygon of its own without holes. Area, bounding box, centroid and
/// segments of every ring are recomputed whenever the ring changes, and a [SegmentIndex] over the
/// segments of all rings is built on first use and patched by every edit after that.
///
/// Every mutating method either succeeds leaving a valid polygon or fails leaving the polygon
/// exactly as it was before the call.
///
/// # Examples
///
/// ```
/// # use polyring::ring;
/// # use polyring::polygon::*;
/// # use polyring::core::math::*;
/// let mut square = Polygon::new(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
/// assert_eq!(square.area(), 16.0);
/// assert_eq!(square.centroid(), Vector2::new(2.0, 2.0));
///
/// // insert a vertex on the bottom edge, area is unchanged
/// let bottom = square.nearest_segment(Vector2::new(2.0, -1.0)).index;
/// square.insert_vertex(bottom, Vector2::new(2.0, 0.0)).unwrap();
/// assert_eq!(square.unique_vertex_count(), 5);
/// assert_eq!(square.area(), 16.0);
/// ```
#[derive(Debug, Clone)]
pub struct Polygon<T = f64>
where
    T: Real,
{
    pub(super) exterior: Vec<Vector2<T>>,
    pub(super) interiors: Vec<Polygon<T>>,
    pub(super) ring_area: T,
    pub(super) bounding_rect: Rect<T>,
    pub(super) centroid: Vector2<T>,
    pub(super) segments: Vec<LineSeg<T>>,
    pub(super) index: OnceCell<SegmentIndex<T>>,
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Create a polygon from a closed exterior ring.
    ///
    /// The ring is reversed if it winds clockwise. Fails if the ring is not closed, has fewer
    /// than 3 unique points, repeats a point, or intersects itself.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::ring;
    /// # use polyring::polygon::*;
    /// # use polyring::PolygonError;
    /// // clockwise input is stored counter clockwise
    /// let tri = Polygon::new(ring![(0.0, 0.0), (0.0, 3.0), (3.0, 0.0)]).unwrap();
    /// assert_eq!(tri.area(), 4.5);
    ///
    /// let bow_tie = Polygon::new(ring![(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
    /// assert_eq!(bow_tie.unwrap_err(), PolygonError::SelfIntersecting);
    /// ```
    pub fn new(ring: Vec<Vector2<T>>) -> PolyResult<Self> {
        pgon_validity::validate_ring_points(&ring)?;
        let polygon = Self::from_ring_unchecked(ring);
        if pgon_validity::ring_self_intersects(&polygon, None) {
            return Err(PolygonError::SelfIntersecting);
        }

        Ok(polygon)
    }

    /// Create a polygon from a closed exterior ring and closed interior rings.
    ///
    /// Interior rings are checked the same way as the exterior ring and must lie inside the
    /// exterior ring without touching it or each other.
    pub fn with_interior_rings(
        ring: Vec<Vector2<T>>,
        interior_rings: Vec<Vec<Vector2<T>>>,
    ) -> PolyResult<Self> {
        let mut polygon = Self::new(ring)?;
        if !interior_rings.is_empty() {
            polygon.add_interior_rings(interior_rings)?;
        }
        Ok(polygon)
    }

    /// Build a polygon from a closed ring without validating it, the ring is only normalized to
    /// counter clockwise winding.
    pub(crate) fn from_ring_unchecked(mut ring: Vec<Vector2<T>>) -> Self {
        if ring_signed_area(&ring) < T::zero() {
            ring.reverse();
        }

        let mut polygon = Polygon {
            exterior: ring,
            interiors: Vec::new(),
            ring_area: T::zero(),
            bounding_rect: Rect::from_point(Vector2::zero()),
            centroid: Vector2::zero(),
            segments: Vec::new(),
            index: OnceCell::new(),
        };
        polygon.refresh_ring_caches();
        polygon
    }

    /// Recompute everything derived from the exterior ring points.
    pub(super) fn refresh_ring_caches(&mut self) {
        self.ring_area = ring_signed_area(&self.exterior).abs();
        self.bounding_rect = ring_bounding_rect(&self.exterior)
            .unwrap_or_else(|| Rect::from_point(Vector2::zero()));
        self.centroid = ring_centroid(&self.exterior);
        self.segments = ring_segments(&self.exterior);
    }

    fn build_segment_index(&self) -> SegmentIndex<T> {
        let mut items = Vec::with_capacity(self.segment_count());
        for ring in std::iter::once(None).chain((0..self.interiors.len()).map(Some)) {
            let points = self.ring(ring).unwrap_or(&[]);
            let len = points.len().saturating_sub(1);
            for v in 0..len {
                items.push((
                    PolygonIndex::new_in_ring(0, ring, v, len),
                    seg_rect(points, v),
                ));
            }
        }

        SegmentIndex::from_items(items, SegmentIndexOptions::new())
    }

    /// Spatial index over the segments of every ring, built on first use.
    #[inline]
    pub fn segment_index(&self) -> &SegmentIndex<T> {
        self.index.get_or_init(|| self.build_segment_index())
    }

    /// True if the segment index has been built.
    #[inline]
    pub fn is_segment_index_built(&self) -> bool {
        self.index.get().is_some()
    }

    /// Exterior ring, closed and counter clockwise.
    #[inline]
    pub fn exterior_ring(&self) -> &[Vector2<T>] {
        &self.exterior
    }

    /// Interior rings (holes) as polygons, in the order they were added.
    #[inline]
    pub fn interior_polygons(&self) -> &[Polygon<T>] {
        &self.interiors
    }

    /// Interior rings, each closed and counter clockwise.
    pub fn interior_rings(&self) -> impl Iterator<Item = &[Vector2<T>]> + '_ {
        self.interiors.iter().map(|p| p.exterior_ring())
    }

    #[inline]
    pub fn has_interior_rings(&self) -> bool {
        !self.interiors.is_empty()
    }

    /// Points of the exterior ring (`None`) or interior ring `Some(i)`.
    #[inline]
    pub fn ring(&self, inner: Option<usize>) -> Option<&[Vector2<T>]> {
        match inner {
            None => Some(&self.exterior),
            Some(i) => self.interiors.get(i).map(|p| p.exterior_ring()),
        }
    }

    /// Segments of the exterior ring (`None`) or interior ring `Some(i)`.
    #[inline]
    pub fn ring_segments(&self, inner: Option<usize>) -> Option<&[LineSeg<T>]> {
        match inner {
            None => Some(&self.segments),
            Some(i) => self.interiors.get(i).map(|p| p.segments()),
        }
    }

    /// Segments of the exterior ring, segment `i` starts at vertex `i`.
    #[inline]
    pub fn segments(&self) -> &[LineSeg<T>] {
        &self.segments
    }

    /// Every segment of every ring with the address of its start vertex.
    pub fn all_segments(&self) -> impl Iterator<Item = (PolygonIndex, LineSeg<T>)> + '_ {
        std::iter::once(None)
            .chain((0..self.interiors.len()).map(Some))
            .flat_map(move |ring| {
                let segs = self.ring_segments(ring).unwrap_or(&[]);
                let len = segs.len();
                segs.iter()
                    .enumerate()
                    .map(move |(v, s)| (PolygonIndex::new_in_ring(0, ring, v, len), *s))
            })
    }

    /// Number of segments over all rings.
    pub fn segment_count(&self) -> usize {
        self.segments.len() + self.interiors.iter().map(|p| p.segments.len()).sum::<usize>()
    }

    /// Segment starting at the addressed vertex.
    #[inline]
    pub fn segment_at(&self, index: PolygonIndex) -> Option<LineSeg<T>> {
        self.ring_segments(index.inner)?.get(index.vertex).copied()
    }

    /// Position of the addressed vertex, failing if the address is stale or out of range.
    pub fn vertex(&self, index: PolygonIndex) -> PolyResult<Vector2<T>> {
        self.check_index(index)?;
        index
            .point(self)
            .ok_or(PolygonError::InvalidIndex { index })
    }

    /// Fail with [PolygonError::InvalidIndex] unless `index` addresses a vertex of the current
    /// rings.
    pub(super) fn check_index(&self, index: PolygonIndex) -> PolyResult<()> {
        if index.is_current(self) {
            Ok(())
        } else {
            Err(PolygonError::InvalidIndex { index })
        }
    }

    /// Walk of every vertex address, exterior ring first.
    #[inline]
    pub fn vertex_indexes(&self) -> PolygonVertexEnum<'_, T> {
        PolygonVertexEnum::new(self)
    }

    /// Area of the exterior ring minus the area of the interior rings.
    #[inline]
    pub fn area(&self) -> T {
        self.ring_area - self.interiors.iter().fold(T::zero(), |acc, p| acc + p.area())
    }

    /// Area enclosed by the exterior ring, ignoring holes.
    #[inline]
    pub fn exterior_area(&self) -> T {
        self.ring_area
    }

    /// Length of the exterior ring.
    #[inline]
    pub fn perimeter(&self) -> T {
        ring_perimeter(&self.exterior)
    }

    /// Centroid of the exterior ring.
    #[inline]
    pub fn centroid(&self) -> Vector2<T> {
        self.centroid
    }

    #[inline]
    pub fn bounding_rect(&self) -> Rect<T> {
        self.bounding_rect
    }

    /// Number of stored points over all rings, closing duplicates included.
    pub fn total_vertex_count(&self) -> usize {
        self.exterior.len() + self.interiors.iter().map(|p| p.exterior.len()).sum::<usize>()
    }

    /// Number of vertexes over all rings, closing duplicates excluded.
    pub fn unique_vertex_count(&self) -> usize {
        self.total_vertex_count() - (1 + self.interiors.len())
    }

    /// True if every invariant holds.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check every invariant, returning the first violation found.
    #[inline]
    pub fn validate(&self) -> PolyResult<()> {
        pgon_validity::validate(self, &ValidateOptions::new())
    }

    /// Same as [Polygon::validate] with options.
    #[inline]
    pub fn validate_opt(&self, options: &ValidateOptions) -> PolyResult<()> {
        pgon_validity::validate(self, options)
    }

    /// Check interior ring `inner` on its own and against the exterior ring, and against the
    /// other interior rings when `options.check_sibling_holes` is set.
    pub fn validate_interior(&self, inner: usize, options: &ValidateOptions) -> PolyResult<()> {
        if inner >= self.interiors.len() {
            return Err(PolygonError::InvalidInteriorRing { inner });
        }
        pgon_validity::validate_interior(self, inner, options)
    }

    /// Classify `point` against the polygon: inside the area, on a boundary, or outside. A point
    /// inside a hole is outside the polygon, a point on a hole boundary is touching.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::ring;
    /// # use polyring::polygon::*;
    /// # use polyring::core::math::*;
    /// # use polyring::shapes::OverlapType;
    /// let square = Polygon::new(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
    /// assert_eq!(square.contains_point(Vector2::new(1.0, 1.0)), OverlapType::Contained);
    /// assert_eq!(square.contains_point(Vector2::new(4.0, 2.0)), OverlapType::Touching);
    /// assert_eq!(square.contains_point(Vector2::new(5.0, 2.0)), OverlapType::None);
    /// ```
    #[inline]
    pub fn contains_point(&self, point: Vector2<T>) -> OverlapType {
        pgon_contains::contains_point(self, point)
    }

    /// True if `point` is inside or on the boundary.
    #[inline]
    pub fn contains(&self, point: Vector2<T>) -> bool {
        self.contains_point(point).is_inside_or_touching()
    }

    /// True if the segment lies inside the polygon or on its boundary.
    #[inline]
    pub fn contains_segment(&self, seg: &LineSeg<T>) -> bool {
        pgon_contains::contains_segment(self, seg)
    }

    /// True if the circle lies inside the polygon, touching the boundary at most.
    #[inline]
    pub fn contains_circle(&self, circle: &Circle<T>) -> bool {
        pgon_contains::contains_circle(self, circle)
    }

    /// True if `other` lies inside the polygon, touching the boundary at most.
    #[inline]
    pub fn contains_polygon(&self, other: &Polygon<T>) -> bool {
        pgon_contains::contains_polygon(self, other)
    }

    /// Ring containment result against a single ring taken as a filled polygon.
    #[inline]
    pub fn ring_contains_point(&self, inner: Option<usize>, point: Vector2<T>) -> OverlapType {
        pgon_contains::ring_contains_point(self, inner, point)
    }

    /// The interior ring containing `point` (inside or on its boundary).
    pub fn interior_polygon_containing(&self, point: Vector2<T>) -> Option<(usize, &Polygon<T>)> {
        if !self.bounding_rect.contains_point(point) {
            return None;
        }

        (0..self.interiors.len())
            .find(|&i| {
                pgon_contains::ring_contains_point(self, Some(i), point).is_inside_or_touching()
            })
            .map(|i| (i, &self.interiors[i]))
    }

    /// True if the segment touches the polygon area or boundary.
    #[inline]
    pub fn intersects_segment(&self, seg: &LineSeg<T>) -> bool {
        pgon_intersects::intersects_segment(self, seg)
    }

    /// True if the polygons touch or overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::ring;
    /// # use polyring::polygon::*;
    /// # use polyring::core::math::*;
    /// let a = Polygon::new(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
    /// assert!(a.intersects_polygon(&a.translate(Vector2::new(2.0, 0.0)).unwrap()));
    /// assert!(!a.intersects_polygon(&a.translate(Vector2::new(5.0, 0.0)).unwrap()));
    /// ```
    #[inline]
    pub fn intersects_polygon(&self, other: &Polygon<T>) -> bool {
        pgon_intersects::intersects_polygon(self, other)
    }

    /// True if the circle touches the polygon area or boundary.
    pub fn intersects_circle(&self, circle: &Circle<T>) -> bool {
        self.bounding_rect.intersects(&circle.bounding_rect())
            && (self.contains(circle.center)
                || self.distance_to_boundary(circle.center) <= circle.radius + T::pos_equal_eps())
    }

    /// Visit every segment (of any ring) whose bounding box overlaps `rect`.
    pub fn visit_segments_in_rect<C, F>(&self, rect: &Rect<T>, visitor: &mut F) -> C
    where
        C: ControlFlow,
        F: FnMut(PolygonIndex, LineSeg<T>) -> C,
    {
        pgon_intersects::visit_segments_in_rect(self, rect, visitor)
    }

    /// Addresses of every segment whose bounding box overlaps `rect`.
    pub fn segments_in_rect(&self, rect: &Rect<T>) -> Vec<PolygonIndex> {
        self.segment_index().query(rect)
    }

    /// Nearest vertex on any ring to `point`.
    #[inline]
    pub fn nearest_vertex(&self, point: Vector2<T>) -> NearestVertexResult<T> {
        pgon_nearest::nearest_vertex(self, point)
    }

    /// Nearest segment on any ring to `point`.
    #[inline]
    pub fn nearest_segment(&self, point: Vector2<T>) -> NearestSegmentResult<T> {
        pgon_nearest::nearest_segment(self, point)
    }

    /// Distance from `point` to the polygon area, zero inside or on the boundary.
    pub fn distance_to_point(&self, point: Vector2<T>) -> T {
        if self.contains(point) {
            return T::zero();
        }
        self.distance_to_boundary(point)
    }

    /// Distance from `point` to the nearest segment of any ring.
    #[inline]
    pub fn distance_to_boundary(&self, point: Vector2<T>) -> T {
        self.nearest_segment(point).distance
    }

    /// Distance from the segment to the polygon area, zero if they intersect.
    pub fn distance_to_segment(&self, seg: &LineSeg<T>) -> T {
        if self.intersects_segment(seg) {
            return T::zero();
        }

        let end_points = num_traits::real::Real::min(
            self.distance_to_boundary(seg.a()),
            self.distance_to_boundary(seg.b()),
        );
        self.all_segments()
            .map(|(_, s)| seg.distance_to_point(s.a()))
            .fold(end_points, num_traits::real::Real::min)
    }

    /// Distance between the polygon areas, zero if they intersect.
    pub fn distance_to_polygon(&self, other: &Polygon<T>) -> T {
        if self.intersects_polygon(other) {
            return T::zero();
        }

        let to_other = self
            .all_segments()
            .map(|(_, s)| other.distance_to_boundary(s.a()));
        let to_self = other
            .all_segments()
            .map(|(_, s)| self.distance_to_boundary(s.a()));
        to_other
            .chain(to_self)
            .fold(<T as Real>::max_value(), num_traits::real::Real::min)
    }

    /// Circle at the centroid with a radius reaching the nearest exterior vertex.
    pub fn inscribed_circle(&self) -> Circle<T> {
        let center = self.centroid;
        let n = self.exterior.len() - 1;
        let radius = self.exterior[..n]
            .iter()
            .map(|p| p.distance(center))
            .fold(<T as Real>::max_value(), num_traits::real::Real::min);
        Circle::new(center, radius)
    }

    /// Whether the polygon area turns convex, concave or straight at the addressed vertex.
    ///
    /// Interior ring vertexes are classified relative to the polygon area, so a hole corner
    /// pointing into the hole is concave.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::ring;
    /// # use polyring::ring::*;
    /// # use polyring::polygon::*;
    /// let notched = Polygon::new(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 2.0), (0.0, 4.0)])
    ///     .unwrap();
    /// assert_eq!(notched.vertex_convexity(PolygonIndex::new(0, 1, 5)).unwrap(), VertexConvexity::Convex);
    /// assert_eq!(notched.vertex_convexity(PolygonIndex::new(0, 3, 5)).unwrap(), VertexConvexity::Concave);
    /// ```
    pub fn vertex_convexity(&self, index: PolygonIndex) -> PolyResult<VertexConvexity> {
        self.check_index(index)?;
        let invalid = PolygonError::InvalidIndex { index };
        let [prev, next] = index.connected_points(self).ok_or(invalid.clone())?;
        let v = index.point(self).ok_or(invalid)?;

        let mut turn = turn_direction(prev, v, next, T::pos_equal_eps());
        if index.is_inner() {
            turn = -turn;
        }

        Ok(match turn {
            1 => VertexConvexity::Convex,
            -1 => VertexConvexity::Concave,
            _ => VertexConvexity::Collinear,
        })
    }

    /// Positions of the exterior ring vertexes on the convex hull, counter clockwise.
    #[inline]
    pub fn convex_hull_indices(&self) -> Vec<usize> {
        convex_hull_indices(&self.exterior)
    }
}

/// Polygons are equal if their exterior rings hold equal points in the same order and their
/// interior rings are equal in the same order.
impl<T> PartialEq for Polygon<T>
where
    T: Real,
{
    fn eq(&self, other: &Self) -> bool {
        self.exterior == other.exterior && self.interiors == other.interiors
    }
}
