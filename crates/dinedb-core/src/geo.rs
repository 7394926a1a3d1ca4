// crates/dinedb-core/src/geo.rs

//! # Distance Ranking
//!
//! Great-circle distances on a spherical Earth and the ordering used to rank
//! restaurants around an origin.

use crate::model::{RankedRestaurant, Restaurant};
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Haversine distance to `other`, in kilometres.
    #[inline]
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        distance_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Great-circle distance between two points, in kilometres.
///
/// Uses the haversine formula with [`EARTH_RADIUS_KM`]. Inputs are not range
/// checked: latitudes outside [-90, 90] or longitudes outside [-180, 180]
/// produce a number, but not a meaningful one. Keeping inputs in range is the
/// caller's job.
///
/// ```rust
/// use dinedb_core::geo::distance_km;
///
/// assert_eq!(distance_km(40.7128, -74.0060, 40.7128, -74.0060), 0.0);
///
/// let antipodal = distance_km(0.0, 0.0, 0.0, 180.0);
/// assert!((antipodal - 20015.0).abs() < 1.0);
/// ```
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1.0 near the antipode.
    let a = a.clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance attached to a search result.
///
/// `NotRequested` means the query carried no origin. `Unknown` means an origin
/// was given but the restaurant has no coordinates; such results rank after
/// every known distance instead of pretending to sit at some large but finite
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Distance {
    #[default]
    NotRequested,
    Known(f64),
    Unknown,
}

impl Distance {
    pub fn km(&self) -> Option<f64> {
        match self {
            Distance::Known(km) => Some(*km),
            _ => None,
        }
    }

    pub fn is_not_requested(&self) -> bool {
        matches!(self, Distance::NotRequested)
    }

    /// Ranking order: known distances ascending, then unknown.
    pub fn rank_cmp(&self, other: &Distance) -> Ordering {
        match (self, other) {
            (Distance::Known(a), Distance::Known(b)) => a.total_cmp(b),
            (Distance::Known(_), _) => Ordering::Less,
            (_, Distance::Known(_)) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }
}

/// Serialized as the number of kilometres, or `null` when unknown.
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Known(km) => serializer.serialize_some(km),
            _ => serializer.serialize_none(),
        }
    }
}

/// Attach distances from `origin` and sort ascending, unknown last.
///
/// The sort is stable, so restaurants at equal distance (or all unknown) keep
/// the order they came in.
pub fn rank_by_distance<'a, I>(restaurants: I, origin: Coordinates) -> Vec<RankedRestaurant>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    let mut ranked: Vec<RankedRestaurant> = restaurants
        .into_iter()
        .map(|r| {
            let distance = match &r.coordinates {
                Some(c) => Distance::Known(origin.distance_to(c)),
                None => Distance::Unknown,
            };
            RankedRestaurant::new(r.clone(), distance)
        })
        .collect();

    ranked.sort_by(|a, b| a.distance.rank_cmp(&b.distance));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    const NYC: Coordinates = Coordinates::new(40.7128, -74.0060);
    const LONDON: Coordinates = Coordinates::new(51.5074, -0.1278);

    #[test]
    fn identical_points_are_zero() {
        assert_eq!(NYC.distance_to(&NYC), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let there = NYC.distance_to(&LONDON);
        let back = LONDON.distance_to(&NYC);
        assert!((there - back).abs() < 1e-9);
        // ~5570 km between New York and London
        assert!((there - 5570.0).abs() < 10.0, "got {there}");
    }

    #[test]
    fn antipodes_are_half_the_circumference() {
        let d = distance_km(10.0, 20.0, -10.0, -160.0);
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - half).abs() < 1e-2, "got {d}");
        assert!(!d.is_nan());
    }

    #[test]
    fn out_of_range_input_still_yields_a_number() {
        let d = distance_km(120.0, 400.0, -95.0, 0.0);
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }

    #[test]
    fn unknown_sorts_after_every_known_distance() {
        let far = Distance::Known(19_000.0);
        assert_eq!(far.rank_cmp(&Distance::Unknown), Ordering::Less);
        assert_eq!(Distance::Unknown.rank_cmp(&far), Ordering::Greater);
        assert_eq!(Distance::Unknown.rank_cmp(&Distance::Unknown), Ordering::Equal);
    }
}
