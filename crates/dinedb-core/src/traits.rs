// crates/dinedb-core/src/traits.rs
use crate::geo::Coordinates;
use crate::model::{RankedRestaurant, Restaurant};
use crate::search::SearchQuery;
use crate::suggest::Suggestion;

/// The read side of the restaurant engine.
///
/// Implemented by [`Catalog`](crate::Catalog), which uses the default
/// suggestion limit, and by [`Engine`](crate::Engine), which applies its
/// [`EngineConfig`](crate::EngineConfig). All methods are pure: they read the
/// catalog and return owned data.
pub trait RestaurantSearch {
    /// All records in catalog order.
    fn restaurants(&self) -> &[Restaurant];

    /// Look up a record by id (exact match).
    fn get(&self, id: &str) -> Option<&Restaurant>;

    /// Run a text/location query, ranking by distance when the query has an
    /// origin and keeping catalog order otherwise.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dinedb_core::{Catalog, RestaurantSearch, SearchQuery};
    ///
    /// let catalog = Catalog::load().unwrap();
    /// for hit in catalog.search(&SearchQuery::new("sushi")) {
    ///     println!("{}", hit.name());
    /// }
    /// ```
    fn search(&self, query: &SearchQuery) -> Vec<RankedRestaurant>;

    /// Typed completions for a partially typed query.
    fn suggest(&self, partial: &str) -> Vec<Suggestion>;

    /// Rank the whole catalog by distance from `origin`.
    fn near(&self, origin: Coordinates) -> Vec<RankedRestaurant>;
}
