// crates/dinedb-core/src/engine.rs
use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::geo::Coordinates;
use crate::location::{GeolocationError, LocationProvider};
use crate::model::{RankedRestaurant, Restaurant};
use crate::search::SearchQuery;
use crate::suggest::{suggest_from, Suggestion};
use crate::traits::RestaurantSearch;
use std::sync::Arc;
use tracing::{debug, warn};

/// A catalog plus the settings used to query it.
///
/// Cheap to clone; the catalog is shared behind an `Arc` and never mutated.
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Arc<Catalog>,
    config: EngineConfig,
}

impl Engine {
    pub fn new(catalog: impl Into<Arc<Catalog>>) -> Self {
        Self::with_config(catalog, EngineConfig::default())
    }

    pub fn with_config(catalog: impl Into<Arc<Catalog>>, config: EngineConfig) -> Self {
        Self {
            catalog: catalog.into(),
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// "Near me": ask `provider` for the device position and rank the whole
    /// catalog around it.
    ///
    /// With the `locate` feature the request is bounded by
    /// [`EngineConfig::locate_timeout`]. A failure is logged and handed back
    /// as-is; the caller decides whether to ask again.
    pub async fn near_me<P>(&self, provider: &P) -> Result<Vec<RankedRestaurant>, GeolocationError>
    where
        P: LocationProvider + ?Sized,
    {
        #[cfg(feature = "locate")]
        let position = crate::location::locate(provider, self.config.locate_timeout()).await;
        #[cfg(not(feature = "locate"))]
        let position = provider.current_position().await;

        match position {
            Ok(origin) => {
                debug!(
                    latitude = origin.latitude,
                    longitude = origin.longitude,
                    "device position acquired"
                );
                Ok(self.near(origin))
            }
            Err(e) => {
                warn!(error = %e, "device position unavailable");
                Err(e)
            }
        }
    }
}

impl RestaurantSearch for Engine {
    fn restaurants(&self) -> &[Restaurant] {
        self.catalog.restaurants()
    }

    fn get(&self, id: &str) -> Option<&Restaurant> {
        self.catalog.get(id)
    }

    fn search(&self, query: &SearchQuery) -> Vec<RankedRestaurant> {
        self.catalog.search(query)
    }

    fn suggest(&self, partial: &str) -> Vec<Suggestion> {
        suggest_from(&self.catalog, partial, self.config.suggestion_limit)
    }

    fn near(&self, origin: Coordinates) -> Vec<RankedRestaurant> {
        self.catalog.near(origin)
    }
}
