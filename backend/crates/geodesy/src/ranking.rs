//! Distance ranking for anything with a position.

use crate::{Coordinates, haversine_km};

/// Items that occupy a single point on the globe.
pub trait Located {
    /// Position used for distance calculations.
    fn coordinates(&self) -> Coordinates;
}

impl Located for Coordinates {
    fn coordinates(&self) -> Coordinates {
        *self
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn coordinates(&self) -> Coordinates {
        (**self).coordinates()
    }
}

/// An item paired with its distance from a reference point.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    item: T,
    distance_km: f64,
}

impl<T> Ranked<T> {
    /// The ranked item.
    #[must_use]
    pub const fn item(&self) -> &T {
        &self.item
    }

    /// Great-circle distance from the reference point in kilometres.
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Split into the item and its distance.
    #[must_use]
    pub fn into_parts(self) -> (T, f64) {
        (self.item, self.distance_km)
    }
}

/// Annotate `items` with their distance from `origin`, nearest first.
///
/// The sort is stable: items at the same distance keep the order in which
/// they were supplied. The input collection is consumed, never reordered in
/// place; pass an iterator of references to keep the originals.
///
/// # Examples
///
/// ```
/// use geodesy::{Coordinates, rank_by_distance};
///
/// let origin = Coordinates::new(0.0, 0.0)?;
/// let far = Coordinates::new(10.0, 10.0)?;
/// let near = Coordinates::new(1.0, 1.0)?;
///
/// let ranked = rank_by_distance(origin, [far, near]);
/// let order: Vec<_> = ranked.iter().map(|r| *r.item()).collect();
/// assert_eq!(order, vec![near, far]);
/// # Ok::<(), geodesy::CoordinateError>(())
/// ```
#[must_use]
pub fn rank_by_distance<I>(origin: Coordinates, items: I) -> Vec<Ranked<I::Item>>
where
    I: IntoIterator,
    I::Item: Located,
{
    let mut ranked: Vec<Ranked<I::Item>> = items
        .into_iter()
        .map(|item| {
            let distance_km = haversine_km(origin, item.coordinates());
            Ranked { item, distance_km }
        })
        .collect();
    ranked.sort_by(|left, right| left.distance_km.total_cmp(&right.distance_km));
    ranked
}
