// crates/dinedb-core/tests/session.rs
use async_trait::async_trait;
use dinedb_core::prelude::*;
use std::time::Duration;

fn engine() -> Engine {
    Engine::new(Catalog::load().unwrap())
}

#[tokio::test]
async fn near_me_ranks_around_the_device() {
    let engine = engine();
    let provider = FixedLocationProvider(Coordinates::new(40.7282, -73.9942));

    let mut session = SearchSession::new();
    let state = session.run_near_me(&engine, &provider).await;

    let results = state.results();
    assert_eq!(results.len(), engine.catalog().len());
    assert_eq!(results[0].name(), "Tokyo Sushi Bar");
    assert!(results[0].distance_km().unwrap() < 0.01);
    assert!(results
        .windows(2)
        .all(|w| w[0].distance_km().unwrap() <= w[1].distance_km().unwrap()));
}

#[tokio::test]
async fn denied_permission_fails_the_session() {
    let engine = engine();
    let provider = UnavailableLocationProvider(GeolocationError::PermissionDenied);

    let mut session = SearchSession::new();
    let state = session.run_near_me(&engine, &provider).await;
    assert_eq!(*state, SearchState::Failed(GeolocationError::PermissionDenied));

    // A plain text search still works afterwards.
    let state = session.run_search(&engine, &SearchQuery::new("sushi"));
    assert_eq!(state.results().len(), 1);
}

struct Stalled;

#[async_trait]
impl LocationProvider for Stalled {
    async fn current_position(&self) -> std::result::Result<Coordinates, GeolocationError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Coordinates::new(0.0, 0.0))
    }
}

#[cfg(feature = "locate")]
#[tokio::test(start_paused = true)]
async fn slow_provider_is_cut_off_by_the_configured_timeout() {
    let config = EngineConfig {
        locate_timeout_ms: 250,
        ..EngineConfig::default()
    };
    let engine = Engine::with_config(Catalog::load().unwrap(), config);

    let mut session = SearchSession::new();
    let state = session.run_near_me(&engine, &Stalled).await;
    assert_eq!(*state, SearchState::Failed(GeolocationError::Timeout));
}

#[test]
fn newer_request_wins_over_a_late_response() {
    let engine = engine();
    let mut session = SearchSession::new();

    let first = session.begin();
    let second = session.begin();
    assert!(first.sequence() < second.sequence());

    let sushi = engine.search(&SearchQuery::new("sushi"));
    let nothing = engine.search(&SearchQuery::new("xyz123"));

    assert!(session.complete(second, nothing));
    assert_eq!(*session.state(), SearchState::Empty);

    assert!(!session.complete(first, sushi));
    assert_eq!(*session.state(), SearchState::Empty);
}

#[test]
fn reset_discards_in_flight_requests() {
    let mut session = SearchSession::new();
    let ticket = session.begin();
    assert!(session.state().is_searching());

    session.reset();
    assert_eq!(*session.state(), SearchState::Idle);
    assert!(!session.fail(ticket, GeolocationError::Timeout));
    assert_eq!(*session.state(), SearchState::Idle);
}
