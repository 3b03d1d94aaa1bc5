use serde::{Deserialize, Serialize};

/// One (user, item, rating) row as loaded from the ratings source.
///
/// A rating of 0 marks an implicit interaction and never takes part in
/// any computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub user_id: String,
    pub item_id: String,
    pub rating: u8,
}

impl RatingRecord {
    pub fn new(user_id: impl Into<String>, item_id: impl Into<String>, rating: u8) -> Self {
        Self {
            user_id: user_id.into(),
            item_id: item_id.into(),
            rating,
        }
    }
}

/// One catalog row as loaded from the books source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub item_id: String,
    pub title: String,
    pub author: String,
    /// Only the content-based strategy requires it.
    #[serde(default)]
    pub genre: Option<String>,
}

impl CatalogRecord {
    pub fn new(
        item_id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            title: title.into(),
            author: author.into(),
            genre: None,
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }
}
