//! "Near me" example for dinedb-rs
//!
//! Runs the search session state machine against a fixed device position and
//! against a provider that refuses permission.

use dinedb_core::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let engine = Engine::new(Catalog::load()?);
    let mut session = SearchSession::new();

    // Somewhere in lower Manhattan
    let here = FixedLocationProvider(Coordinates::new(40.7200, -74.0000));
    match session.run_near_me(&engine, &here).await {
        SearchState::Results(hits) => {
            println!("Closest restaurants:");
            for hit in hits {
                match hit.distance_km() {
                    Some(km) => println!("  {:>5.1} km  {}", km, hit.name()),
                    None => println!("     ?     {}", hit.name()),
                }
            }
        }
        other => println!("Unexpected state: {other:?}"),
    }

    let denied = UnavailableLocationProvider(GeolocationError::PermissionDenied);
    if let SearchState::Failed(reason) = session.run_near_me(&engine, &denied).await {
        println!("\nSecond attempt failed: {reason}");
    }

    Ok(())
}
