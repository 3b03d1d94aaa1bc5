//! Normalized catalog.

use serde::{Deserialize, Serialize};

use super::{fold, CatalogRecord};
use crate::errors::{RecommendError, RecommendResult};

/// A catalog row after normalization: identifiers trimmed, every text
/// field case-folded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub item_id: String,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
}

/// The normalized catalog, in original record order.
///
/// Position in `items` is the catalog index used by the content-based
/// strategy to break duplicate-title ambiguity.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Normalize raw catalog records.
    ///
    /// Fails with `DataIntegrity` when a record has no identifier or no title.
    pub fn from_records(records: &[CatalogRecord]) -> RecommendResult<Self> {
        let mut items = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let item_id = record.item_id.trim();
            if item_id.is_empty() {
                return Err(missing_field(index, "item_id"));
            }
            let title = fold(&record.title);
            if title.is_empty() {
                return Err(missing_field(index, "title"));
            }
            items.push(CatalogItem {
                item_id: item_id.to_string(),
                title,
                author: fold(&record.author),
                genre: record.genre.as_deref().map(fold),
            });
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lowest catalog index whose title equals the (folded) `title`.
    pub fn position_of(&self, title: &str) -> Option<usize> {
        let title = fold(title);
        self.items.iter().position(|item| item.title == title)
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.position_of(title).is_some()
    }
}

fn missing_field(index: usize, field: &'static str) -> RecommendError {
    RecommendError::DataIntegrity {
        source_name: "catalog",
        index,
        field,
        message: "is missing or empty".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_text_fields_and_trims_ids() {
        let records = vec![CatalogRecord::new(" 0345339703 ", "The Fellowship Of The Ring", "J. R. R. Tolkien")
            .with_genre("Fantasy")];
        let catalog = Catalog::from_records(&records).unwrap();
        let item = &catalog.items()[0];
        assert_eq!(item.item_id, "0345339703");
        assert_eq!(item.title, "the fellowship of the ring");
        assert_eq!(item.author, "j. r. r. tolkien");
        assert_eq!(item.genre.as_deref(), Some("fantasy"));
    }

    #[test]
    fn empty_title_is_a_data_integrity_error() {
        let records = vec![
            CatalogRecord::new("a", "Book A", "x"),
            CatalogRecord::new("b", "   ", "y"),
        ];
        let err = Catalog::from_records(&records).unwrap_err();
        assert!(matches!(
            err,
            RecommendError::DataIntegrity { source_name: "catalog", index: 1, field: "title", .. }
        ));
    }

    #[test]
    fn position_of_returns_first_duplicate() {
        let records = vec![
            CatalogRecord::new("a", "Dune", "frank herbert"),
            CatalogRecord::new("b", "Dune", "someone else"),
        ];
        let catalog = Catalog::from_records(&records).unwrap();
        assert_eq!(catalog.position_of("DUNE"), Some(0));
        assert!(!catalog.contains_title("emma"));
    }
}
