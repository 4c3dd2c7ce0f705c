use super::SegmentIndexOptions;
use crate::{
    core::{
        math::Vector2,
        traits::{ControlFlow, Real},
    },
    ring::PolygonIndex,
    shapes::Rect,
};
use static_aabb2d_index::{
    self as aabb_index, StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder,
};
use std::{collections::HashMap, sync::Arc};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Slot {
    Tree(usize),
    Overlay(usize),
}

/// Spatial index of polygon segment bounding boxes keyed by [PolygonIndex].
///
/// The bulk of the items live in a packed static tree built once. Items removed after the build
/// are tombstoned in place and items added after the build go to a small overlay that is scanned
/// linearly. When the overlay grows past the threshold given by [SegmentIndexOptions] the tree is
/// rebuilt from every live item, so single vertex edits never pay for a full rebuild.
///
/// Keys are segment start vertex addresses with polygon id 0. Interior ring segments are keyed
/// with `inner` set to the interior ring position.
#[derive(Debug, Clone)]
pub struct SegmentIndex<T = f64>
where
    T: Real,
{
    tree: Arc<StaticAABB2DIndex<T>>,
    tree_items: Vec<Option<(PolygonIndex, Rect<T>)>>,
    tree_live: usize,
    overlay: Vec<(PolygonIndex, Rect<T>)>,
    slots: HashMap<PolygonIndex, Slot>,
    options: SegmentIndexOptions,
}

impl<T> SegmentIndex<T>
where
    T: Real,
{
    /// Create an empty index.
    pub fn new() -> Self {
        Self::with_options(SegmentIndexOptions::new())
    }

    /// Create an empty index using `options`.
    pub fn with_options(options: SegmentIndexOptions) -> Self {
        Self::from_items(Vec::new(), options)
    }

    /// Bulk load an index from keyed boxes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::polygon::*;
    /// # use polyring::ring::*;
    /// # use polyring::shapes::*;
    /// let key = |v| PolygonIndex::new(0, v, 3);
    /// let mut index = SegmentIndex::from_items(
    ///     vec![
    ///         (key(0), Rect::new(0.0, 0.0, 1.0, 0.0)),
    ///         (key(1), Rect::new(0.0, 0.0, 1.0, 1.0)),
    ///         (key(2), Rect::new(0.0, 0.0, 0.0, 1.0)),
    ///     ],
    ///     SegmentIndexOptions::new(),
    /// );
    /// let mut hits = index.query(&Rect::new(0.5, -0.5, 2.0, 0.1));
    /// hits.sort();
    /// assert_eq!(hits, vec![key(0), key(1)]);
    ///
    /// index.remove(&key(0));
    /// assert_eq!(index.query(&Rect::new(0.5, -0.5, 2.0, 0.1)), vec![key(1)]);
    /// ```
    pub fn from_items(items: Vec<(PolygonIndex, Rect<T>)>, options: SegmentIndexOptions) -> Self {
        let mut builder = StaticAABB2DIndexBuilder::new(items.len());
        for (_, r) in items.iter() {
            builder.add(r.min_x, r.min_y, r.max_x, r.max_y);
        }

        let tree = unwrap_spatial_index(builder);
        let slots = items
            .iter()
            .enumerate()
            .map(|(i, (key, _))| (*key, Slot::Tree(i)))
            .collect();

        SegmentIndex {
            tree: Arc::new(tree),
            tree_live: items.len(),
            tree_items: items.into_iter().map(Some).collect(),
            overlay: Vec::new(),
            slots,
            options,
        }
    }

    /// Number of live items.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of items waiting in the overlay for the next rebuild.
    #[inline]
    pub fn overlay_len(&self) -> usize {
        self.overlay.len()
    }

    #[inline]
    pub fn options(&self) -> &SegmentIndexOptions {
        &self.options
    }

    #[inline]
    pub fn contains_key(&self, key: &PolygonIndex) -> bool {
        self.slots.contains_key(key)
    }

    /// Box stored for `key`.
    pub fn get(&self, key: &PolygonIndex) -> Option<Rect<T>> {
        match *self.slots.get(key)? {
            Slot::Tree(i) => self.tree_items[i].map(|(_, r)| r),
            Slot::Overlay(i) => Some(self.overlay[i].1),
        }
    }

    /// Iterate all live items in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (PolygonIndex, Rect<T>)> + '_ {
        self.tree_items
            .iter()
            .flatten()
            .copied()
            .chain(self.overlay.iter().copied())
    }

    /// Add or replace the box for `key`.
    pub fn insert(&mut self, key: PolygonIndex, rect: Rect<T>) {
        self.remove_item(&key);
        self.overlay.push((key, rect));
        self.slots.insert(key, Slot::Overlay(self.overlay.len() - 1));
        self.compact_if_needed();
    }

    /// Remove `key`, returning its box if it was present.
    pub fn remove(&mut self, key: &PolygonIndex) -> Option<Rect<T>> {
        let removed = self.remove_item(key);
        if removed.is_some() {
            self.compact_if_needed();
        }
        removed
    }

    fn remove_item(&mut self, key: &PolygonIndex) -> Option<Rect<T>> {
        match self.slots.remove(key)? {
            Slot::Tree(i) => {
                self.tree_live -= 1;
                self.tree_items[i].take().map(|(_, r)| r)
            }
            Slot::Overlay(i) => {
                let (_, rect) = self.overlay.swap_remove(i);
                if let Some((moved, _)) = self.overlay.get(i) {
                    self.slots.insert(*moved, Slot::Overlay(i));
                }
                Some(rect)
            }
        }
    }

    /// Re-key every item of ring `from` (with `old_len` vertexes) to ring `to` with `new_len`
    /// vertexes, mapping each vertex position through `remap`. Boxes are kept as they are.
    pub fn rekey_ring<F>(
        &mut self,
        from: Option<usize>,
        to: Option<usize>,
        old_len: usize,
        new_len: usize,
        mut remap: F,
    ) where
        F: FnMut(usize) -> usize,
    {
        // take every key out first so remapped keys never collide with keys not yet moved
        let mut moved = Vec::with_capacity(old_len);
        for v in 0..old_len {
            let old_key = PolygonIndex::new_in_ring(0, from, v, old_len);
            if let Some(slot) = self.slots.remove(&old_key) {
                moved.push((remap(v), slot));
            }
        }

        for (v, slot) in moved {
            let new_key = PolygonIndex::new_in_ring(0, to, v, new_len);
            match slot {
                Slot::Tree(i) => {
                    if let Some(item) = self.tree_items[i].as_mut() {
                        item.0 = new_key;
                    }
                }
                Slot::Overlay(i) => self.overlay[i].0 = new_key,
            }
            self.slots.insert(new_key, slot);
        }
    }

    /// Rebuild the bulk tree from every live item and empty the overlay.
    pub fn compact(&mut self) {
        let items: Vec<_> = self.iter().collect();
        *self = Self::from_items(items, self.options);
    }

    fn compact_if_needed(&mut self) {
        let ratio = self.options.overlay_ratio.max(1);
        let threshold = self.options.min_overlay.max(self.tree_live / ratio);
        if self.overlay.len() > threshold {
            log::trace!(
                "compacting segment index: {} tree items, {} tombstones, {} overlay items",
                self.tree_live,
                self.tree_items.len() - self.tree_live,
                self.overlay.len()
            );
            self.compact();
        }
    }

    /// Visit every key whose box overlaps `rect`, stopping early when the visitor breaks.
    pub fn visit_query<C, F>(&self, rect: &Rect<T>, mut visitor: F) -> C
    where
        C: ControlFlow,
        F: FnMut(PolygonIndex) -> C,
    {
        let mut broke_with: Option<C> = None;
        let mut query_stack = Vec::new();
        let mut tree_visitor = |i: usize| {
            if let Some((key, _)) = self.tree_items[i] {
                let cf = visitor(key);
                if cf.should_break() {
                    broke_with = Some(cf);
                    return aabb_index::Control::Break(());
                }
            }
            aabb_index::Control::Continue
        };

        self.tree.visit_query_with_stack(
            rect.min_x,
            rect.min_y,
            rect.max_x,
            rect.max_y,
            &mut tree_visitor,
            &mut query_stack,
        );

        if let Some(cf) = broke_with {
            return cf;
        }

        for (key, r) in self.overlay.iter() {
            if r.intersects_eps(rect, T::zero()) {
                let cf = visitor(*key);
                if cf.should_break() {
                    return cf;
                }
            }
        }

        C::continuing()
    }

    /// All keys whose box overlaps `rect`.
    pub fn query(&self, rect: &Rect<T>) -> Vec<PolygonIndex> {
        let mut results = Vec::new();
        self.visit_query(rect, |key| {
            results.push(key);
            aabb_index::Control::<()>::Continue
        });
        results
    }

    /// Add every segment of closed ring `points` keyed on ring `ring`.
    pub(crate) fn insert_ring(&mut self, ring: Option<usize>, points: &[Vector2<T>]) {
        let len = points.len() - 1;
        for v in 0..len {
            self.insert(ring_key(ring, v, len), seg_rect(points, v));
        }
    }

    /// Remove every segment of ring `ring` which has `ring_len` vertexes.
    pub(crate) fn remove_ring(&mut self, ring: Option<usize>, ring_len: usize) {
        for v in 0..ring_len {
            self.remove_item(&ring_key(ring, v, ring_len));
        }
        self.compact_if_needed();
    }

    /// Patch after a vertex was inserted after position `after`. `points` is the edited ring.
    pub(crate) fn vertex_inserted(&mut self, ring: Option<usize>, after: usize, points: &[Vector2<T>]) {
        let new_len = points.len() - 1;
        let old_len = new_len - 1;
        self.remove_item(&ring_key(ring, after, old_len));
        self.rekey_ring(ring, ring, old_len, new_len, |v| if v > after { v + 1 } else { v });
        self.insert(ring_key(ring, after, new_len), seg_rect(points, after));
        self.insert(ring_key(ring, after + 1, new_len), seg_rect(points, after + 1));
    }

    /// Patch after the vertex at `vertex` moved. `points` is the edited ring.
    pub(crate) fn vertex_moved(&mut self, ring: Option<usize>, vertex: usize, points: &[Vector2<T>]) {
        let len = points.len() - 1;
        let prev = if vertex == 0 { len - 1 } else { vertex - 1 };
        self.insert(ring_key(ring, prev, len), seg_rect(points, prev));
        self.insert(ring_key(ring, vertex, len), seg_rect(points, vertex));
    }

    /// Patch after the vertex at `vertex` was removed. `points` is the edited ring.
    pub(crate) fn vertex_removed(&mut self, ring: Option<usize>, vertex: usize, points: &[Vector2<T>]) {
        let new_len = points.len() - 1;
        let old_len = new_len + 1;
        let prev = if vertex == 0 { old_len - 1 } else { vertex - 1 };
        self.remove_item(&ring_key(ring, prev, old_len));
        self.remove_item(&ring_key(ring, vertex, old_len));
        self.rekey_ring(ring, ring, old_len, new_len, |w| if w > vertex { w - 1 } else { w });
        let joined = if vertex == 0 { new_len - 1 } else { vertex - 1 };
        self.insert(ring_key(ring, joined, new_len), seg_rect(points, joined));
    }
}

impl<T> Default for SegmentIndex<T>
where
    T: Real,
{
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn ring_key(ring: Option<usize>, vertex: usize, ring_len: usize) -> PolygonIndex {
    PolygonIndex::new_in_ring(0, ring, vertex, ring_len)
}

#[inline]
pub(crate) fn seg_rect<T>(points: &[Vector2<T>], start: usize) -> Rect<T>
where
    T: Real,
{
    let a = points[start];
    let b = points[start + 1];
    Rect::new(a.x, a.y, b.x, b.y)
}

/// Helper function to unwrap a spatial index from a builder or panic for the unexpected case of
/// failure.
fn unwrap_spatial_index<T>(builder: StaticAABB2DIndexBuilder<T>) -> StaticAABB2DIndex<T>
where
    T: Real,
{
    match builder.build() {
        Ok(x) => x,
        Err(e) => match e {
            StaticAABB2DIndexBuildError::ItemCountError { .. } => {
                unreachable!("internal library error: count mismatch when building spatial index")
            }
            StaticAABB2DIndexBuildError::NumericCastError => {
                panic!("failed to cast numeric type: {e}")
            }
        },
    }
}
