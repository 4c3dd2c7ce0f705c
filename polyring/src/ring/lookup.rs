use crate::{core::traits::Real, polygon::Polygon};
use std::collections::{BTreeMap, HashMap};

/// Collection that [PolygonIndex](super::PolygonIndex) addresses can be resolved against.
///
/// A single [Polygon] resolves every polygon id to itself, slices and vectors resolve by position,
/// maps resolve by key.
pub trait PolygonLookup<T>
where
    T: Real,
{
    /// Polygon with id `poly`, `None` if there is no such polygon.
    fn lookup_polygon(&self, poly: usize) -> Option<&Polygon<T>>;
}

impl<T> PolygonLookup<T> for Polygon<T>
where
    T: Real,
{
    #[inline]
    fn lookup_polygon(&self, _poly: usize) -> Option<&Polygon<T>> {
        Some(self)
    }
}

impl<T> PolygonLookup<T> for [Polygon<T>]
where
    T: Real,
{
    #[inline]
    fn lookup_polygon(&self, poly: usize) -> Option<&Polygon<T>> {
        self.get(poly)
    }
}

impl<T> PolygonLookup<T> for Vec<Polygon<T>>
where
    T: Real,
{
    #[inline]
    fn lookup_polygon(&self, poly: usize) -> Option<&Polygon<T>> {
        self.get(poly)
    }
}

impl<T, S> PolygonLookup<T> for HashMap<usize, Polygon<T>, S>
where
    T: Real,
    S: std::hash::BuildHasher,
{
    #[inline]
    fn lookup_polygon(&self, poly: usize) -> Option<&Polygon<T>> {
        self.get(&poly)
    }
}

impl<T> PolygonLookup<T> for BTreeMap<usize, Polygon<T>>
where
    T: Real,
{
    #[inline]
    fn lookup_polygon(&self, poly: usize) -> Option<&Polygon<T>> {
        self.get(&poly)
    }
}
