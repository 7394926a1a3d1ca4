// crates/dinedb-core/src/suggest.rs
use crate::catalog::Catalog;
use crate::text::{contains_folded, fold_key};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Maximum number of completions returned for one keystroke.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Where a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Restaurant,
    Location,
    Cuisine,
    Occasion,
}

impl SuggestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionKind::Restaurant => "Restaurant",
            SuggestionKind::Location => "Location",
            SuggestionKind::Cuisine => "Cuisine",
            SuggestionKind::Occasion => "Occasion",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A typed completion.
///
/// `restaurant_id` is set only for [`SuggestionKind::Restaurant`] and points
/// at the record whose name matched; resolve it with
/// [`Catalog::get`](crate::Catalog::get).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub value: String,
    pub restaurant_id: Option<String>,
}

impl Suggestion {
    fn restaurant(name: &str, id: &str) -> Self {
        Self {
            kind: SuggestionKind::Restaurant,
            value: name.to_string(),
            restaurant_id: Some(id.to_string()),
        }
    }

    fn term(kind: SuggestionKind, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            restaurant_id: None,
        }
    }
}

/// Build up to `limit` suggestions for `partial`.
///
/// Sources are taken in a fixed order (restaurant names, locations, cuisines,
/// occasions), each in catalog order, filtered by case-insensitive substring
/// and then truncated. The same text may appear under two kinds.
///
/// A blank `partial` yields nothing. Otherwise it is matched as typed,
/// surrounding whitespace included, so every value contains it.
pub fn suggest_from(catalog: &Catalog, partial: &str, limit: usize) -> Vec<Suggestion> {
    if partial.trim().is_empty() {
        return Vec::new();
    }
    let q = fold_key(partial);

    let names = catalog
        .restaurants()
        .iter()
        .zip(&catalog.folded)
        .filter(|(_, f)| f.name.contains(&q))
        .map(|(r, _)| Suggestion::restaurant(&r.name, &r.id));

    let vocabulary = |kind: SuggestionKind, values: &[String]| {
        values
            .iter()
            .filter(|v| contains_folded(v, &q))
            .map(move |v| Suggestion::term(kind, v))
            .collect::<Vec<_>>()
    };

    let out: Vec<Suggestion> = names
        .chain(vocabulary(SuggestionKind::Location, catalog.locations()))
        .chain(vocabulary(SuggestionKind::Cuisine, catalog.cuisines()))
        .chain(vocabulary(SuggestionKind::Occasion, catalog.occasions()))
        .take(limit)
        .collect();

    debug!(partial = %partial, suggestions = out.len(), "suggest");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PriceRange, Restaurant};

    fn record(id: &str, name: &str, cuisine: &str, location: &str, occasions: &[&str]) -> Restaurant {
        Restaurant {
            id: id.into(),
            name: name.into(),
            image: None,
            rating: 4.0,
            review_count: 0,
            cuisine: cuisine.into(),
            price_range: PriceRange::Moderate,
            location: location.into(),
            occasions: occasions.iter().map(|s| s.to_string()).collect(),
            coordinates: None,
        }
    }

    #[test]
    fn same_text_can_appear_under_two_kinds() {
        let catalog = Catalog::new(vec![record("1", "Nook", "Brunch", "Pier", &["Brunch"])]).unwrap();
        let kinds: Vec<_> = suggest_from(&catalog, "brunch", 8)
            .into_iter()
            .map(|s| s.kind)
            .collect();
        assert_eq!(kinds, [SuggestionKind::Cuisine, SuggestionKind::Occasion]);
    }

    #[test]
    fn limit_truncates_after_concatenation() {
        let catalog = Catalog::new(vec![
            record("1", "Alpha", "Al Pastor", "Alameda", &["Alfresco"]),
            record("2", "Alto", "Albanian", "Alps", &["All Day"]),
        ])
        .unwrap();

        let out = suggest_from(&catalog, "al", 3);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].value, "Alpha");
        assert_eq!(out[1].value, "Alto");
        assert_eq!(out[2].kind, SuggestionKind::Location);
        assert_eq!(out[2].value, "Alameda");
    }

    #[test]
    fn restaurant_suggestions_carry_the_record_id() {
        let catalog = Catalog::new(vec![record("r-9", "Harbor Grill", "Seafood", "Pier", &[])]).unwrap();
        let out = suggest_from(&catalog, "GRILL", 8);
        assert_eq!(out[0].restaurant_id.as_deref(), Some("r-9"));
    }

    #[test]
    fn padded_input_is_matched_as_typed() {
        let catalog = Catalog::new(vec![record("1", "Tokyo Sushi Bar", "Japanese", "Little Tokyo", &[])]).unwrap();
        assert!(suggest_from(&catalog, "bar ", 8).is_empty());

        let out = suggest_from(&catalog, "sushi ", 8);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].value, "Tokyo Sushi Bar");
    }

    #[test]
    fn zero_limit_returns_nothing() {
        let catalog = Catalog::new(vec![record("1", "Alpha", "X", "Y", &[])]).unwrap();
        assert!(suggest_from(&catalog, "alpha", 0).is_empty());
    }
}
