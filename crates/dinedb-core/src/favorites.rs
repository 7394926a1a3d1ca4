// crates/dinedb-core/src/favorites.rs
use crate::catalog::Catalog;
use crate::error::DineError;
use crate::model::Restaurant;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Ordering for browse lists and the favorites page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Leave the input order untouched.
    #[default]
    Catalog,
    /// Highest rating first.
    Rating,
    /// Name, A to Z, ignoring case.
    Name,
    /// First occasion tag, A to Z, ignoring case.
    Occasion,
}

impl FromStr for SortOrder {
    type Err = DineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "catalog" | "" => Ok(SortOrder::Catalog),
            "rating" => Ok(SortOrder::Rating),
            "name" => Ok(SortOrder::Name),
            "occasion" => Ok(SortOrder::Occasion),
            other => Err(DineError::InvalidData(format!("unknown sort order: {other}"))),
        }
    }
}

/// Stable sort of `restaurants` by `order`.
pub fn sort_restaurants(restaurants: &mut [&Restaurant], order: SortOrder) {
    match order {
        SortOrder::Catalog => {}
        SortOrder::Rating => restaurants.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOrder::Name => restaurants.sort_by(|a, b| cmp_folded(&a.name, &b.name)),
        SortOrder::Occasion => {
            restaurants.sort_by(|a, b| cmp_folded(first_occasion(a), first_occasion(b)))
        }
    }
}

fn first_occasion(r: &Restaurant) -> &str {
    r.occasions.first().map(String::as_str).unwrap_or("")
}

fn cmp_folded(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Restaurants the user has starred during this session.
///
/// Holds ids only, in the order they were added. Nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id`. Returns `false` if it was already there.
    pub fn add(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove `id`. Returns `false` if it was not there.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|i| i != id);
        self.ids.len() != before
    }

    /// Flip membership; returns whether `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.add(id)
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Look the favorites up in `catalog` and sort them. Ids the catalog does
    /// not know are skipped.
    pub fn resolve<'a>(&self, catalog: &'a Catalog, order: SortOrder) -> Vec<&'a Restaurant> {
        let mut out: Vec<&Restaurant> = self.ids.iter().filter_map(|id| catalog.get(id)).collect();
        sort_restaurants(&mut out, order);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PriceRange;

    fn record(id: &str, name: &str, rating: f32, occasion: &str) -> Restaurant {
        Restaurant {
            id: id.into(),
            name: name.into(),
            image: None,
            rating,
            review_count: 0,
            cuisine: "Bistro".into(),
            price_range: PriceRange::Upscale,
            location: "Uptown".into(),
            occasions: vec![occasion.into()],
            coordinates: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            record("1", "zest", 4.2, "Family"),
            record("2", "Amber", 4.9, "Date Night"),
            record("3", "Maple", 4.5, "Business"),
        ])
        .unwrap()
    }

    #[test]
    fn add_is_idempotent_and_toggle_flips() {
        let mut fav = Favorites::new();
        assert!(fav.add("1"));
        assert!(!fav.add("1"));
        assert_eq!(fav.len(), 1);

        assert!(!fav.toggle("1"));
        assert!(fav.is_empty());
        assert!(fav.toggle("1"));
        assert!(fav.contains("1"));
    }

    #[test]
    fn resolve_skips_unknown_ids_and_sorts() {
        let catalog = catalog();
        let mut fav = Favorites::new();
        fav.add("1");
        fav.add("missing");
        fav.add("2");
        fav.add("3");

        let names = |order| -> Vec<String> {
            fav.resolve(&catalog, order)
                .iter()
                .map(|r| r.name.clone())
                .collect()
        };
        assert_eq!(names(SortOrder::Catalog), ["zest", "Amber", "Maple"]);
        assert_eq!(names(SortOrder::Rating), ["Amber", "Maple", "zest"]);
        assert_eq!(names(SortOrder::Name), ["Amber", "Maple", "zest"]);
        assert_eq!(names(SortOrder::Occasion), ["Maple", "Amber", "zest"]);
    }

    #[test]
    fn parses_sort_order_names() {
        assert_eq!("Rating".parse::<SortOrder>().unwrap(), SortOrder::Rating);
        assert!("price".parse::<SortOrder>().is_err());
    }
}
