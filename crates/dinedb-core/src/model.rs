// crates/dinedb-core/src/model.rs
use crate::geo::{Coordinates, Distance};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Price band shown on restaurant cards, from `$` to `$$$$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Upscale,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceRange {
    pub fn symbol(&self) -> &'static str {
        match self {
            PriceRange::Budget => "$",
            PriceRange::Moderate => "$$",
            PriceRange::Upscale => "$$$",
            PriceRange::Luxury => "$$$$",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A restaurant record as stored in the catalog.
///
/// Records are immutable once the catalog is built. Search results carry
/// clones wrapped in [`RankedRestaurant`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    /// Display-only; never searched.
    #[serde(default)]
    pub image: Option<String>,
    pub rating: f32,
    pub review_count: u32,
    pub cuisine: String,
    pub price_range: PriceRange,
    pub location: String,
    #[serde(default)]
    pub occasions: Vec<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl Restaurant {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A search result: a copy of the record plus the distance from the query
/// origin, if one was given.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedRestaurant {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    #[serde(skip_serializing_if = "Distance::is_not_requested")]
    pub distance: Distance,
}

impl RankedRestaurant {
    pub fn new(restaurant: Restaurant, distance: Distance) -> Self {
        Self {
            restaurant,
            distance,
        }
    }

    /// Wrap a record with no distance attached.
    pub fn unranked(restaurant: Restaurant) -> Self {
        Self::new(restaurant, Distance::NotRequested)
    }

    pub fn name(&self) -> &str {
        self.restaurant.name()
    }

    pub fn distance_km(&self) -> Option<f64> {
        self.distance.km()
    }
}

/// Simple aggregate statistics for a catalog.
///
/// Returned by [`Catalog::stats`](crate::Catalog::stats); vocabulary counts
/// are distinct values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub restaurants: usize,
    pub with_coordinates: usize,
    pub locations: usize,
    pub cuisines: usize,
    pub occasions: usize,
}
