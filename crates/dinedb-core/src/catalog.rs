// crates/dinedb-core/src/catalog.rs
use crate::error::{DineError, Result};
use crate::model::{CatalogStats, Restaurant};
use crate::text::{fold_key, normalize_query};
use std::collections::HashSet;
use tracing::debug;

/// Lowercased copies of the searchable fields of one record.
///
/// Built once per catalog so a query only lowercases the user input.
#[derive(Debug, Clone)]
pub(crate) struct FoldedFields {
    pub name: String,
    pub cuisine: String,
    pub location: String,
    pub occasions: Vec<String>,
}

impl FoldedFields {
    fn from_record(r: &Restaurant) -> Self {
        Self {
            name: fold_key(&r.name),
            cuisine: fold_key(&r.cuisine),
            location: fold_key(&r.location),
            occasions: r.occasions.iter().map(|o| fold_key(o)).collect(),
        }
    }

    /// Text stage: the term hits any of name, cuisine, location or an occasion.
    #[inline]
    pub fn matches_term(&self, term: &str) -> bool {
        self.name.contains(term)
            || self.cuisine.contains(term)
            || self.location.contains(term)
            || self.occasions.iter().any(|o| o.contains(term))
    }

    /// Location stage: the filter hits the location field only.
    #[inline]
    pub fn matches_location(&self, location: &str) -> bool {
        self.location.contains(location)
    }
}

/// The read-only restaurant catalog.
///
/// Constructed once (from the bundled dataset, a file, or a `Vec` supplied by
/// the caller) and then only read. Alongside the records it keeps the distinct
/// location, cuisine and occasion vocabularies, each in order of first
/// appearance, which feed the suggestion engine.
#[derive(Debug, Clone)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
    pub(crate) folded: Vec<FoldedFields>,
    locations: Vec<String>,
    cuisines: Vec<String>,
    occasions: Vec<String>,
}

impl Catalog {
    /// Validate `restaurants` and build the catalog.
    ///
    /// Rejects duplicate ids, ratings outside `[0, 5]` and non-finite
    /// coordinates. Coordinates outside the geographic range are accepted.
    pub fn new(restaurants: Vec<Restaurant>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(restaurants.len());
        for r in &restaurants {
            if !seen.insert(r.id.as_str()) {
                return Err(DineError::InvalidData(format!(
                    "duplicate restaurant id: {}",
                    r.id
                )));
            }
            if !r.rating.is_finite() || !(0.0..=5.0).contains(&r.rating) {
                return Err(DineError::InvalidData(format!(
                    "rating {} out of range for restaurant {}",
                    r.rating, r.id
                )));
            }
            if r.coordinates.is_some_and(|c| !c.is_finite()) {
                return Err(DineError::InvalidData(format!(
                    "non-finite coordinates for restaurant {}",
                    r.id
                )));
            }
        }

        let folded = restaurants.iter().map(FoldedFields::from_record).collect();
        let locations = distinct(restaurants.iter().map(|r| r.location.as_str()));
        let cuisines = distinct(restaurants.iter().map(|r| r.cuisine.as_str()));
        let occasions = distinct(
            restaurants
                .iter()
                .flat_map(|r| r.occasions.iter().map(String::as_str)),
        );

        debug!(
            restaurants = restaurants.len(),
            locations = locations.len(),
            cuisines = cuisines.len(),
            occasions = occasions.len(),
            "catalog built"
        );

        Ok(Self {
            restaurants,
            folded,
            locations,
            cuisines,
            occasions,
        })
    }

    /// An empty catalog. Every query against it returns nothing.
    pub fn empty() -> Self {
        Self {
            restaurants: Vec::new(),
            folded: Vec::new(),
            locations: Vec::new(),
            cuisines: Vec::new(),
            occasions: Vec::new(),
        }
    }

    /// All records in catalog order.
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Find a record by id. Ids are matched exactly.
    pub fn get(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// Distinct locations, first appearance first.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Distinct cuisines, first appearance first.
    pub fn cuisines(&self) -> &[String] {
        &self.cuisines
    }

    /// Distinct occasion tags, first appearance first.
    pub fn occasions(&self) -> &[String] {
        &self.occasions
    }

    /// Restaurants suited to an occasion.
    ///
    /// `tag` is a case-insensitive fragment such as `"date"` or `"special"`;
    /// a record matches when any of its occasion tags contains it. A blank tag
    /// or `"all"` returns every record.
    pub fn by_occasion(&self, tag: &str) -> Vec<&Restaurant> {
        let tag = match normalize_query(tag) {
            Some(t) if t != "all" => t,
            _ => return self.restaurants.iter().collect(),
        };

        self.restaurants
            .iter()
            .zip(&self.folded)
            .filter(|(_, f)| f.occasions.iter().any(|o| o.contains(&tag)))
            .map(|(r, _)| r)
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            restaurants: self.restaurants.len(),
            with_coordinates: self
                .restaurants
                .iter()
                .filter(|r| r.coordinates.is_some())
                .count(),
            locations: self.locations.len(),
            cuisines: self.cuisines.len(),
            occasions: self.occasions.len(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

/// Distinct values in first-appearance order. Equality is exact.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for v in values {
        if seen.insert(v) {
            out.push(v.to_string());
        }
    }
    out
}
