//! dinedb-wasm: WebAssembly bindings for dinedb-core
//!
//! A small JS/WASM API over the restaurant engine. The bundled catalog is
//! compiled into the module and parsed on first use.
//!
//! What it provides
//! ----------------
//! - Initialization on module load (via `#[wasm_bindgen(start)]`)
//! - `search(term, location)` and `search_near(term, location, lat, lon)`
//! - `suggest(partial)`: up to 8 typed completions
//! - `near_me(lat, lon)`: the whole catalog ranked around the device
//! - `location_error(code)`: typed reason for a failed browser geolocation
//! - `get_restaurant(id)`, `by_occasion(tag, sort)`, `get_stats()`
//! - `map_view(term, lat?, lon?)`: center, zoom and markers for a map widget
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { search, near_me, location_error } from 'dinedb-wasm';
//!
//! async function main() {
//!   await init();
//!   console.log(search('sushi', ''));
//!
//!   navigator.geolocation.getCurrentPosition(
//!     (pos) => console.log(near_me(pos.coords.latitude, pos.coords.longitude)),
//!     (err) => console.warn(location_error(err.code)),
//!     { timeout: 10000 },
//!   );
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The device position is read by JavaScript; this module only ranks.
//! - Results are plain objects (camelCase fields). `distance` is present only
//!   on ranked results and is `null` when a restaurant has no coordinates.
//! - Map rendering and its credentials stay in the host page.

use dinedb_core::{
    Catalog, Coordinates, DineError, Engine, GeolocationError, MapView, RestaurantSearch,
    SearchQuery, SortOrder,
};
use once_cell::sync::OnceCell;
use serde::Serialize;
use serde_json::json;
use wasm_bindgen::prelude::*;

static ENGINE: OnceCell<Engine> = OnceCell::new();

fn engine() -> Result<&'static Engine, JsValue> {
    ENGINE
        .get_or_try_init(|| Catalog::load().map(Engine::new))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Plain JS objects rather than `Map`s for flattened records.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(value.serialize(&serializer)?)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing dinedb WASM module...".into());

    match engine() {
        Ok(engine) => {
            let stats = engine.catalog().stats();
            web_sys::console::log_1(
                &format!("✓ Loaded {} restaurants", stats.restaurants).into(),
            );
        }
        Err(e) => web_sys::console::error_1(&e),
    }
}

/* --------------------------------------------------------------------------
   Search
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn search(term: &str, location: &str) -> Result<JsValue, JsValue> {
    let query = SearchQuery::new(term).with_location(location);
    to_js(&engine()?.search(&query))
}

#[wasm_bindgen]
pub fn search_near(term: &str, location: &str, lat: f64, lon: f64) -> Result<JsValue, JsValue> {
    let query = SearchQuery::new(term)
        .with_location(location)
        .with_origin(Coordinates::new(lat, lon));
    to_js(&engine()?.search(&query))
}

/* --------------------------------------------------------------------------
   Suggestions
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn suggest(partial: &str) -> Result<JsValue, JsValue> {
    let array = js_sys::Array::new();
    for s in engine()?.suggest(partial) {
        array.push(&to_js(&s)?);
    }
    Ok(array.into())
}

/* --------------------------------------------------------------------------
   Near Me
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn near_me(lat: f64, lon: f64) -> Result<JsValue, JsValue> {
    to_js(&engine()?.near(Coordinates::new(lat, lon)))
}

/// Map a browser `GeolocationPositionError.code` to a typed reason.
///
/// Codes 1, 2 and 3 are permission denied, position unavailable and timeout;
/// anything else is treated as unsupported.
#[wasm_bindgen]
pub fn location_error(code: u16) -> Result<JsValue, JsValue> {
    let reason = match code {
        1 => GeolocationError::PermissionDenied,
        2 => GeolocationError::PositionUnavailable,
        3 => GeolocationError::Timeout,
        _ => GeolocationError::Unsupported,
    };
    to_js(&json!({
        "reason": reason,
        "message": reason.to_string(),
    }))
}

/* --------------------------------------------------------------------------
   Browse
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_restaurant(id: &str) -> Result<JsValue, JsValue> {
    to_js(&engine()?.get(id))
}

#[wasm_bindgen]
pub fn by_occasion(tag: &str, sort: &str) -> Result<JsValue, JsValue> {
    let order: SortOrder = sort.parse().map_err(|e: DineError| JsValue::from_str(&e.to_string()))?;
    let mut matches = engine()?.catalog().by_occasion(tag);
    dinedb_core::favorites::sort_restaurants(&mut matches, order);
    to_js(&matches)
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    to_js(&engine()?.catalog().stats())
}

/* --------------------------------------------------------------------------
   Map
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn map_view(term: &str, lat: Option<f64>, lon: Option<f64>) -> Result<JsValue, JsValue> {
    let user = lat.zip(lon).map(|(lat, lon)| Coordinates::new(lat, lon));
    let mut query = SearchQuery::new(term);
    if let Some(u) = user {
        query = query.with_origin(u);
    }
    let engine = engine()?;
    to_js(&MapView::for_results(&engine.search(&query), user))
}
