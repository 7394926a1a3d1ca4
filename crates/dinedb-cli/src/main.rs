//! dinedb: command-line interface for dinedb-core
//!
//! Inspect and query the restaurant catalog from a terminal: statistics,
//! listings, text search with an optional location filter, typed
//! suggestions, distance ranking around a position, occasion browsing and
//! the map view a front end would render.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ dinedb stats
//!
//! - Search by text, optionally narrowed by location
//!   $ dinedb search sushi
//!   $ dinedb search italian --location downtown
//!
//! - Rank a search (or the whole catalog) by distance
//!   $ dinedb search --lat 40.7128 --lon -74.0060
//!   $ dinedb near --lat 40.7128 --lon -74.0060
//!
//! - Suggestions while typing
//!   $ dinedb suggest tok
//!
//! - Browse by occasion, best rated first
//!   $ dinedb occasion "date night" --sort rating
//!
//! Data source
//! -----------
//!
//! Without `--input` the catalog bundled into `dinedb-core` is used. A JSON
//! file passed with `--input` is cached as bincode next to itself
//! (`<file>.bin`) for faster subsequent runs. Set `RUST_LOG=debug` to see
//! what the engine does.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use dinedb_core::loader::common_io::{FileFormat, Payload};
use dinedb_core::{
    Catalog, Coordinates, Engine, EngineConfig, FixedLocationProvider, MapView, RankedRestaurant,
    Restaurant, RestaurantSearch, SearchQuery, SortOrder,
};
use serde::Serialize;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let catalog = match &args.input {
        Some(path) => load_catalog(path)?,
        None => {
            debug!("using the bundled catalog");
            Catalog::load()?
        }
    };
    let config = match &args.config {
        Some(path) => EngineConfig::load_from_path(path)?,
        None => EngineConfig::default(),
    };
    let engine = Engine::with_config(catalog, config);
    let json = args.json;

    match args.command {
        Commands::Stats => {
            let stats = engine.catalog().stats();
            if json {
                return print_json(&stats);
            }
            println!("Catalog statistics:");
            println!("  Restaurants: {}", stats.restaurants);
            println!("  With coordinates: {}", stats.with_coordinates);
            println!("  Locations: {}", stats.locations);
            println!("  Cuisines: {}", stats.cuisines);
            println!("  Occasions: {}", stats.occasions);
        }

        Commands::List { sort } => {
            let mut all: Vec<&Restaurant> = engine.restaurants().iter().collect();
            dinedb_core::favorites::sort_restaurants(&mut all, SortOrder::from(sort));
            print_restaurants(&all, json)?;
        }

        Commands::Show { id } => match engine.get(&id) {
            Some(r) if json => print_json(r)?,
            Some(r) => {
                println!("Restaurant: {}", r.name);
                println!("Id: {}", r.id);
                println!("Cuisine: {}", r.cuisine);
                println!("Price: {}", r.price_range);
                println!("Rating: {} ({} reviews)", r.rating, r.review_count);
                println!("Location: {}", r.location);
                println!("Occasions: {}", r.occasions.join(", "));
                match r.coordinates {
                    Some(c) => println!("Coordinates: {}, {}", c.latitude, c.longitude),
                    None => println!("Coordinates: unknown"),
                }
            }
            None => eprintln!("No restaurant found for id: {id}"),
        },

        Commands::Search {
            term,
            location,
            lat,
            lon,
        } => {
            let mut query = SearchQuery::new(term).with_location(location);
            if let Some(origin) = origin(lat, lon) {
                query = query.with_origin(origin);
            }
            let hits = engine.search(&query);
            print_hits(&hits, json)?;
        }

        Commands::Suggest { partial, limit } => {
            let out = match limit {
                Some(limit) => dinedb_core::suggest::suggest_from(engine.catalog(), &partial, limit),
                None => engine.suggest(&partial),
            };
            if json {
                return print_json(&out);
            }
            if out.is_empty() {
                println!("No suggestions for: {partial}");
            }
            for s in out {
                println!("{:<10} {}", s.kind.label(), s.value);
            }
        }

        Commands::Near { lat, lon } => {
            let provider = FixedLocationProvider(Coordinates::new(lat, lon));
            let hits = engine
                .near_me(&provider)
                .await
                .context("could not determine position")?;
            print_hits(&hits, json)?;
        }

        Commands::Occasion { tag, sort } => {
            let mut matches = engine.catalog().by_occasion(&tag);
            dinedb_core::favorites::sort_restaurants(&mut matches, SortOrder::from(sort));
            if matches.is_empty() && !json {
                println!("No restaurants found for occasion: {tag}");
            } else {
                print_restaurants(&matches, json)?;
            }
        }

        Commands::Map { term, lat, lon } => {
            let user = origin(lat, lon);
            let mut query = SearchQuery::new(term);
            if let Some(u) = user {
                query = query.with_origin(u);
            }
            let view = MapView::for_results(&engine.search(&query), user);
            if json {
                return print_json(&view);
            }
            println!(
                "Center: {}, {} (zoom {})",
                view.center.latitude, view.center.longitude, view.zoom
            );
            for m in &view.markers {
                println!(
                    "- {} @ {:.4}, {:.4}: {}",
                    m.title,
                    m.latitude,
                    m.longitude,
                    m.description.as_deref().unwrap_or("")
                );
            }
        }
    }

    Ok(())
}

/// JSON sources go through the bincode cache; caches and gzip files are read directly.
fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let format = FileFormat::detect(path);
    let cached = format.payload == Payload::Json && !format.gzip;
    debug!(
        path = %path.display(),
        payload = ?format.payload,
        gzip = format.gzip,
        cached,
        "loading catalog"
    );
    let catalog = if cached {
        Catalog::load_cached(path)
    } else {
        Catalog::load_from_path(path)
    };
    catalog.with_context(|| format!("failed to load catalog from {}", path.display()))
}

fn origin(lat: Option<f64>, lon: Option<f64>) -> Option<Coordinates> {
    Some(Coordinates::new(lat?, lon?))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_restaurants(restaurants: &[&Restaurant], json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(restaurants);
    }
    for r in restaurants {
        println!(
            "{:>3}  {} ({}, {}) {} ⭐ {}",
            r.id, r.name, r.cuisine, r.location, r.price_range, r.rating
        );
    }
    Ok(())
}

fn print_hits(hits: &[RankedRestaurant], json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(hits);
    }
    if hits.is_empty() {
        println!("No restaurants found");
    }
    for hit in hits {
        let r = &hit.restaurant;
        match hit.distance_km() {
            Some(km) => println!("{:>3}  {} ({}) {:.1} km", r.id, r.name, r.location, km),
            None if !hit.distance.is_not_requested() => {
                println!("{:>3}  {} ({}) distance unknown", r.id, r.name, r.location)
            }
            None => println!("{:>3}  {} ({}, {})", r.id, r.name, r.cuisine, r.location),
        }
    }
    Ok(())
}
