// crates/dinedb-core/src/session.rs

//! # Search Session
//!
//! State machine behind one search box:
//!
//! ```text
//! Idle ──begin──▶ Searching ──complete──▶ Results | Empty
//!                     │
//!                     └──────fail───────▶ Failed
//! ```
//!
//! Every `begin` hands out a [`RequestTicket`] with a strictly increasing
//! sequence number. Only the latest ticket may settle the session, so a slow
//! response that lands after a newer request started is dropped instead of
//! overwriting fresher results.

use crate::engine::Engine;
use crate::location::{GeolocationError, LocationProvider};
use crate::model::RankedRestaurant;
use crate::search::SearchQuery;
use crate::traits::RestaurantSearch;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    /// No search performed yet (or the session was reset).
    #[default]
    Idle,
    Searching,
    Results(Vec<RankedRestaurant>),
    /// A search ran and matched nothing. Not the same as `Idle`.
    Empty,
    Failed(GeolocationError),
}

impl SearchState {
    pub fn results(&self) -> &[RankedRestaurant] {
        match self {
            SearchState::Results(r) => r,
            _ => &[],
        }
    }

    pub fn is_searching(&self) -> bool {
        matches!(self, SearchState::Searching)
    }
}

/// Handle for one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct SearchSession {
    state: SearchState,
    latest: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Start a request. Any earlier ticket becomes stale.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.state = SearchState::Searching;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Settle the session with results. Returns `false` (and changes nothing)
    /// when `ticket` is stale.
    pub fn complete(&mut self, ticket: RequestTicket, results: Vec<RankedRestaurant>) -> bool {
        if !self.is_current(ticket) {
            debug!(
                ticket = ticket.0,
                latest = self.latest,
                "dropping stale results"
            );
            return false;
        }
        self.state = if results.is_empty() {
            SearchState::Empty
        } else {
            SearchState::Results(results)
        };
        true
    }

    /// Settle the session with a location failure. Stale tickets are ignored.
    pub fn fail(&mut self, ticket: RequestTicket, error: GeolocationError) -> bool {
        if !self.is_current(ticket) {
            debug!(
                ticket = ticket.0,
                latest = self.latest,
                "dropping stale failure"
            );
            return false;
        }
        self.state = SearchState::Failed(error);
        true
    }

    /// Back to `Idle`. Outstanding tickets become stale.
    pub fn reset(&mut self) {
        self.latest += 1;
        self.state = SearchState::Idle;
    }

    /// Run a text/location search through a full cycle.
    pub fn run_search<S>(&mut self, engine: &S, query: &SearchQuery) -> &SearchState
    where
        S: RestaurantSearch + ?Sized,
    {
        let ticket = self.begin();
        let results = engine.search(query);
        self.complete(ticket, results);
        &self.state
    }

    /// Run a "near me" search through a full cycle.
    pub async fn run_near_me<P>(&mut self, engine: &Engine, provider: &P) -> &SearchState
    where
        P: LocationProvider + ?Sized,
    {
        let ticket = self.begin();
        match engine.near_me(provider).await {
            Ok(results) => self.complete(ticket, results),
            Err(e) => self.fail(ticket, e),
        };
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PriceRange, Restaurant};

    fn hit(id: &str) -> RankedRestaurant {
        RankedRestaurant::unranked(Restaurant {
            id: id.into(),
            name: id.into(),
            image: None,
            rating: 3.0,
            review_count: 0,
            cuisine: "Diner".into(),
            price_range: PriceRange::Budget,
            location: "Main St".into(),
            occasions: Vec::new(),
            coordinates: None,
        })
    }

    #[test]
    fn starts_idle() {
        assert_eq!(SearchSession::new().state(), &SearchState::Idle);
    }

    #[test]
    fn empty_results_are_not_idle() {
        let mut s = SearchSession::new();
        let t = s.begin();
        assert!(s.state().is_searching());
        assert!(s.complete(t, Vec::new()));
        assert_eq!(s.state(), &SearchState::Empty);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut s = SearchSession::new();
        let first = s.begin();
        let second = s.begin();
        assert!(second.sequence() > first.sequence());

        assert!(!s.complete(first, vec![hit("old")]));
        assert!(s.state().is_searching());

        assert!(s.complete(second, vec![hit("new")]));
        assert_eq!(s.state().results()[0].name(), "new");
    }

    #[test]
    fn stale_failure_is_discarded() {
        let mut s = SearchSession::new();
        let first = s.begin();
        let second = s.begin();
        assert!(!s.fail(first, GeolocationError::Timeout));
        assert!(s.fail(second, GeolocationError::PermissionDenied));
        assert_eq!(
            s.state(),
            &SearchState::Failed(GeolocationError::PermissionDenied)
        );
    }

    #[test]
    fn reset_invalidates_outstanding_tickets() {
        let mut s = SearchSession::new();
        let t = s.begin();
        s.reset();
        assert!(!s.complete(t, vec![hit("late")]));
        assert_eq!(s.state(), &SearchState::Idle);
    }
}
