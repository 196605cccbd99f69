//! Read-only reference data: crops, pets and mutations.

use std::{cmp::Ordering, collections::BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{Crop, Mutation, MutationId, Pet};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("embedded asset {0} is missing")]
    MissingAsset(&'static str),
    #[error("failed to decode catalog: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("catalog has no {0}")]
    Empty(&'static str),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub crops: Vec<Crop>,
    pub pets: Vec<Pet>,
    #[serde(default)]
    pub mutations: Vec<Mutation>,
}

/// Ordering for the mutation picker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MutationSort {
    #[default]
    Catalog,
    Alphabetical,
    Value,
}

impl MutationSort {
    pub const ALL: [MutationSort; 3] = [Self::Catalog, Self::Alphabetical, Self::Value];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Catalog => "Default",
            Self::Alphabetical => "A-Z",
            Self::Value => "Value",
        }
    }
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        if catalog.crops.is_empty() {
            return Err(CatalogError::Empty("crops"));
        }
        if catalog.pets.is_empty() {
            return Err(CatalogError::Empty("pets"));
        }
        Ok(catalog)
    }

    pub fn crop(&self, id: &str) -> Option<&Crop> {
        self.crops.iter().find(|c| c.id == id)
    }

    pub fn pet(&self, id: &str) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == id)
    }

    /// Every mutation a user can tick, in catalog order.
    pub fn selectable_mutations(&self) -> impl Iterator<Item = &Mutation> {
        self.mutations.iter().filter(|m| !m.is_none())
    }

    /// Resolves the selected ids, in catalog order. Unknown ids are dropped.
    pub fn active_mutations(&self, ids: &BTreeSet<MutationId>) -> Vec<&Mutation> {
        self.selectable_mutations()
            .filter(|m| ids.contains(&m.id))
            .collect()
    }

    /// Case-insensitive name filter over the selectable mutations.
    /// The query is matched as typed, surrounding spaces included.
    pub fn search_mutations(&self, query: &str, sort: MutationSort) -> Vec<&Mutation> {
        let needle = query.to_lowercase();
        let mut found: Vec<&Mutation> = self
            .selectable_mutations()
            .filter(|m| m.name.to_lowercase().contains(&needle))
            .collect();

        match sort {
            MutationSort::Catalog => {}
            MutationSort::Alphabetical => {
                found.sort_by_key(|m| m.name.to_lowercase());
            }
            MutationSort::Value => {
                found.sort_by(|a, b| {
                    b.multiplier
                        .partial_cmp(&a.multiplier)
                        .unwrap_or(Ordering::Equal)
                });
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "crops": [
            { "id": "carrot", "name": "Carrot", "icon": "🥕", "cost": 10, "sell": 18, "time": 2 },
            { "id": "bamboo", "name": "Bamboo", "cost": 3500, "sell": 4000 }
        ],
        "pets": [ { "id": "none", "name": "None", "multiplier": 1 } ],
        "mutations": [
            { "id": "none", "name": "None", "multiplier": 1 },
            { "id": "wet", "name": "Wet", "multiplier": 2 },
            { "id": "shocked", "name": "Shocked", "multiplier": 100 },
            { "id": "chilled", "name": "Chilled", "multiplier": 2 },
            { "id": "bloodlit", "name": "Bloodlit", "multiplier": 4 }
        ]
    }"#;

    fn sample() -> Catalog {
        Catalog::from_json(SAMPLE).unwrap()
    }

    fn ids(mutations: &[&Mutation]) -> Vec<String> {
        mutations.iter().map(|m| m.id.clone()).collect()
    }

    #[test]
    fn decodes_with_optional_fields() {
        let catalog = sample();
        let bamboo = catalog.crop("bamboo").unwrap();
        assert_eq!(bamboo.time, 0.0);
        assert!(bamboo.icon.is_empty());
        assert_eq!(catalog.crop("carrot").unwrap().icon, "🥕");
        assert!(catalog.pet("none").is_some());
        assert!(catalog.crop("beet").is_none());
    }

    #[test]
    fn rejects_empty_and_malformed_catalogs() {
        let err = Catalog::from_json(r#"{ "crops": [], "pets": [] }"#).unwrap_err();
        assert!(matches!(err, CatalogError::Empty("crops")));

        let err = Catalog::from_json(
            r#"{ "crops": [{ "id": "a", "name": "A", "cost": 1, "sell": 2 }], "pets": [] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Empty("pets")));

        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn none_mutation_is_never_selectable() {
        let catalog = sample();
        assert!(catalog.selectable_mutations().all(|m| m.id != "none"));

        let selected: BTreeSet<_> = ["none", "wet", "ghost"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(ids(&catalog.active_mutations(&selected)), vec!["wet"]);
    }

    #[test]
    fn active_mutations_follow_catalog_order() {
        let catalog = sample();
        let selected: BTreeSet<_> = ["chilled", "wet", "bloodlit"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            ids(&catalog.active_mutations(&selected)),
            vec!["wet", "chilled", "bloodlit"]
        );
    }

    #[test]
    fn search_filters_case_insensitively() {
        let catalog = sample();
        let found = catalog.search_mutations("CHI", MutationSort::Catalog);
        assert_eq!(ids(&found), vec!["chilled"]);
        assert_eq!(
            ids(&catalog.search_mutations("ed", MutationSort::Catalog)),
            vec!["shocked", "chilled"]
        );
        assert_eq!(catalog.search_mutations("", MutationSort::Catalog).len(), 4);
        assert!(catalog.search_mutations("zzz", MutationSort::Value).is_empty());
    }

    #[test]
    fn search_does_not_trim_the_query() {
        let catalog = sample();
        assert!(catalog.search_mutations(" chi", MutationSort::Catalog).is_empty());
        assert!(catalog.search_mutations("chi ", MutationSort::Catalog).is_empty());
        assert!(catalog.search_mutations(" ", MutationSort::Catalog).is_empty());
    }

    #[test]
    fn search_sorts_by_name_or_value() {
        let catalog = sample();
        assert_eq!(
            ids(&catalog.search_mutations("", MutationSort::Alphabetical)),
            vec!["bloodlit", "chilled", "shocked", "wet"]
        );
        // Equal multipliers keep catalog order.
        assert_eq!(
            ids(&catalog.search_mutations("", MutationSort::Value)),
            vec!["shocked", "bloodlit", "wet", "chilled"]
        );
    }
}
