// crates/dinedb-core/src/search.rs
use crate::catalog::Catalog;
use crate::geo::{rank_by_distance, Coordinates};
use crate::model::{RankedRestaurant, Restaurant};
use crate::suggest::{suggest_from, Suggestion, DEFAULT_SUGGESTION_LIMIT};
use crate::text::normalize_query;
use crate::traits::RestaurantSearch;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One search invocation: free text, a location filter and an optional origin.
///
/// Empty (or blank) `term` and `location` disable their filter stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub origin: Option<Coordinates>,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_origin(mut self, origin: Coordinates) -> Self {
        self.origin = Some(origin);
        self
    }
}

impl Catalog {
    /// Records passing both filter stages, in catalog order.
    ///
    /// The text stage keeps a record when the lowercased term is a substring of
    /// its name, cuisine, location or any occasion tag. The location stage keeps
    /// a record when the lowercased filter is a substring of its location. A
    /// record must pass every enabled stage.
    pub fn filter<'a>(&'a self, term: &str, location: &str) -> Vec<&'a Restaurant> {
        let term = normalize_query(term);
        let location = normalize_query(location);

        self.restaurants()
            .iter()
            .zip(&self.folded)
            .filter(|(_, f)| term.as_deref().map_or(true, |t| f.matches_term(t)))
            .filter(|(_, f)| location.as_deref().map_or(true, |l| f.matches_location(l)))
            .map(|(r, _)| r)
            .collect()
    }
}

impl RestaurantSearch for Catalog {
    fn restaurants(&self) -> &[Restaurant] {
        Catalog::restaurants(self)
    }

    fn get(&self, id: &str) -> Option<&Restaurant> {
        Catalog::get(self, id)
    }

    fn search(&self, query: &SearchQuery) -> Vec<RankedRestaurant> {
        let matches = self.filter(&query.term, &query.location);

        let results = match query.origin {
            Some(origin) => rank_by_distance(matches, origin),
            None => matches
                .into_iter()
                .cloned()
                .map(RankedRestaurant::unranked)
                .collect(),
        };

        debug!(
            term = %query.term,
            location = %query.location,
            ranked = query.origin.is_some(),
            hits = results.len(),
            "search"
        );
        results
    }

    fn suggest(&self, partial: &str) -> Vec<Suggestion> {
        suggest_from(self, partial, DEFAULT_SUGGESTION_LIMIT)
    }

    fn near(&self, origin: Coordinates) -> Vec<RankedRestaurant> {
        let results = rank_by_distance(self.restaurants(), origin);
        debug!(
            latitude = origin.latitude,
            longitude = origin.longitude,
            hits = results.len(),
            "near"
        );
        results
    }
}
