//! dinedb prelude: bring common types and traits into scope for demos and tools.

#![allow(unused_imports)]

pub use crate::catalog::Catalog;
pub use crate::config::EngineConfig;
pub use crate::engine::Engine;
pub use crate::error::{DineError, Result};
pub use crate::favorites::{Favorites, SortOrder};
pub use crate::geo::{distance_km, Coordinates, Distance};
pub use crate::location::{
    FixedLocationProvider, GeolocationError, LocationProvider, UnavailableLocationProvider,
};
pub use crate::map::MapView;
pub use crate::model::{PriceRange, RankedRestaurant, Restaurant};
pub use crate::search::SearchQuery;
pub use crate::session::{SearchSession, SearchState};
pub use crate::suggest::{Suggestion, SuggestionKind};
pub use crate::traits::RestaurantSearch;
