//! Distinct values offered to filter pickers.

use std::collections::BTreeSet;

use serde::Serialize;
use utoipa::ToSchema;

/// Facet lists served by `GET /slowniki`.
///
/// Each list is deduplicated, free of null or empty entries and sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct Facets {
    pub marki: Vec<String>,
    pub klasy: Vec<String>,
    pub usterki: Vec<String>,
    pub klienci: Vec<String>,
    pub numery_seryjne: Vec<String>,
}

/// Raw column values, in any order and possibly repeated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSource {
    pub brands: Vec<Option<String>>,
    pub classes: Vec<Option<String>>,
    pub faults: Vec<Option<String>>,
    pub client_names: Vec<Option<String>>,
    pub serial_numbers: Vec<Option<String>>,
}

impl From<FacetSource> for Facets {
    fn from(source: FacetSource) -> Self {
        Self {
            marki: distinct_values(source.brands),
            klasy: distinct_values(source.classes),
            usterki: distinct_values(source.faults),
            klienci: distinct_values(source.client_names),
            numery_seryjne: distinct_values(source.serial_numbers),
        }
    }
}

/// Sorted distinct values with nulls and blank strings removed.
pub fn distinct_values<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    values
        .into_iter()
        .flatten()
        .filter(|value| !value.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
