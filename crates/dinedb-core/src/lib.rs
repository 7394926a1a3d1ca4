// crates/dinedb-core/src/lib.rs

//! # dinedb-core
//!
//! An in-memory restaurant catalog with text search, typed suggestions and
//! distance ranking around a device position.
//!
//! ```rust
//! use dinedb_core::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let catalog = Catalog::load()?;
//! let hits = catalog.search(&SearchQuery::new("sushi"));
//! assert_eq!(hits[0].name(), "Tokyo Sushi Bar");
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod favorites;
pub mod geo;
pub mod loader;
pub mod location;
pub mod map;
pub mod model;
pub mod prelude;
pub mod search; // Query engine over the catalog
pub mod session;
pub mod suggest;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::catalog::Catalog;
pub use crate::config::EngineConfig;
pub use crate::engine::Engine;
pub use crate::error::{DineError, Result};
pub use crate::favorites::{Favorites, SortOrder};
pub use crate::geo::{distance_km, Coordinates, Distance};
#[cfg(feature = "locate")]
pub use crate::location::locate;
pub use crate::location::{
    FixedLocationProvider, GeolocationError, LocationProvider, UnavailableLocationProvider,
};
pub use crate::map::{MapMarker, MapView};
pub use crate::model::{CatalogStats, PriceRange, RankedRestaurant, Restaurant};
pub use crate::search::SearchQuery;
pub use crate::session::{RequestTicket, SearchSession, SearchState};
pub use crate::suggest::{Suggestion, SuggestionKind};
// The search trait has to be in scope for `catalog.search(..)`.
pub use crate::traits::RestaurantSearch;
