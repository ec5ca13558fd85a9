//! Built-in dataset catalog for rated rounds.
//!
//! Datasets are process-wide static data; rounds sample from them at
//! creation time and keep no reference back.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::errors::domain::{DomainError, ValidationKind};

/// Number of items drawn into every rated-from-dataset round.
pub const ROUND_SIZE: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetItem {
    pub title: &'static str,
    pub rating: Decimal,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub prompt: &'static str,
    pub items: Vec<DatasetItem>,
}

fn item(title: &'static str, rating_tenths: i64) -> DatasetItem {
    DatasetItem {
        title,
        rating: Decimal::new(rating_tenths, 1),
    }
}

static DATASETS: Lazy<BTreeMap<&'static str, Dataset>> = Lazy::new(|| {
    let mut map = BTreeMap::new();
    map.insert(
        "movies",
        Dataset {
            prompt: "Find the lowest-rated movie.",
            items: vec![
                item("The Room (2003)", 37),
                item("Batman & Robin (1997)", 38),
                item("Cats (2019)", 28),
                item("Battlefield Earth (2000)", 25),
                item("Jack and Jill (2011)", 31),
                item("Movie 43 (2013)", 30),
                item("The Last Airbender (2010)", 40),
                item("Gigli (2003)", 26),
                item("Wild Wild West (1999)", 43),
                item("Twilight (2008)", 53),
                item("Morbius (2022)", 52),
            ],
        },
    );
    map
});

/// Sorted list of dataset keys.
pub fn list_categories() -> Vec<String> {
    DATASETS.keys().map(|k| k.to_string()).collect()
}

/// Normalized category key: matching is trimmed and case-insensitive.
pub fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}

/// Look up a dataset by category key.
pub fn dataset_for(category: &str) -> Result<&'static Dataset, DomainError> {
    let key = normalize_category(category);
    DATASETS.get(key.as_str()).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::UnknownCategory,
            format!("Unknown category: {key}"),
        )
    })
}
