// crates/dinedb-core/src/map.rs
use crate::geo::{Coordinates, Distance};
use crate::model::RankedRestaurant;
use serde::{Deserialize, Serialize};

/// Map center used when there is neither a user position nor a located result.
pub const DEFAULT_CENTER: Coordinates = Coordinates::new(40.7128, -74.0060);
pub const DEFAULT_ZOOM: u8 = 13;
/// Closer zoom when the map is centred on the user.
pub const USER_ZOOM: u8 = 14;

/// One pin handed to the map renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Everything the map renderer needs: where to look and what to pin.
///
/// The renderer (and whatever credentials it needs) lives outside this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

impl MapView {
    /// Build the view for a result list.
    ///
    /// Centres on `user` when known, otherwise on the first located result,
    /// otherwise on [`DEFAULT_CENTER`]. The user's own pin comes first;
    /// results without coordinates get no pin.
    pub fn for_results(results: &[RankedRestaurant], user: Option<Coordinates>) -> Self {
        let mut markers = Vec::with_capacity(results.len() + 1);

        if let Some(u) = user {
            markers.push(MapMarker {
                latitude: u.latitude,
                longitude: u.longitude,
                title: "Your Location".to_string(),
                description: Some("You are here".to_string()),
            });
        }

        markers.extend(results.iter().filter_map(restaurant_marker));

        let (center, zoom) = match user {
            Some(u) => (u, USER_ZOOM),
            None => (
                results
                    .iter()
                    .find_map(|r| r.restaurant.coordinates)
                    .unwrap_or(DEFAULT_CENTER),
                DEFAULT_ZOOM,
            ),
        };

        Self {
            center,
            zoom,
            markers,
        }
    }
}

fn restaurant_marker(hit: &RankedRestaurant) -> Option<MapMarker> {
    let r = &hit.restaurant;
    let at = r.coordinates?;
    let detail = match hit.distance {
        Distance::Known(km) => format!("{km:.1}km away"),
        _ => format!("⭐ {}", r.rating),
    };
    Some(MapMarker {
        latitude: at.latitude,
        longitude: at.longitude,
        title: r.name.clone(),
        description: Some(format!("{} • {} • {}", r.cuisine, r.price_range, detail)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PriceRange, Restaurant};

    fn hit(name: &str, at: Option<Coordinates>, distance: Distance) -> RankedRestaurant {
        RankedRestaurant::new(
            Restaurant {
                id: name.into(),
                name: name.into(),
                image: None,
                rating: 4.5,
                review_count: 0,
                cuisine: "Cafe".into(),
                price_range: PriceRange::Budget,
                location: "Midtown".into(),
                occasions: Vec::new(),
                coordinates: at,
            },
            distance,
        )
    }

    #[test]
    fn falls_back_to_default_center() {
        let view = MapView::for_results(&[hit("Ghost", None, Distance::NotRequested)], None);
        assert_eq!(view.center, DEFAULT_CENTER);
        assert_eq!(view.zoom, DEFAULT_ZOOM);
        assert!(view.markers.is_empty());
    }

    #[test]
    fn centres_on_first_located_result() {
        let at = Coordinates::new(40.75, -73.99);
        let view = MapView::for_results(
            &[
                hit("Ghost", None, Distance::NotRequested),
                hit("Corner", Some(at), Distance::NotRequested),
            ],
            None,
        );
        assert_eq!(view.center, at);
        assert_eq!(view.markers.len(), 1);
        assert_eq!(
            view.markers[0].description.as_deref(),
            Some("Cafe • $ • ⭐ 4.5")
        );
    }

    #[test]
    fn user_pin_comes_first_and_distances_are_shown() {
        let user = Coordinates::new(40.0, -74.0);
        let view = MapView::for_results(
            &[hit("Corner", Some(Coordinates::new(40.01, -74.0)), Distance::Known(1.1119))],
            Some(user),
        );
        assert_eq!(view.zoom, USER_ZOOM);
        assert_eq!(view.center, user);
        assert_eq!(view.markers[0].title, "Your Location");
        assert_eq!(
            view.markers[1].description.as_deref(),
            Some("Cafe • $ • 1.1km away")
        );
    }
}
