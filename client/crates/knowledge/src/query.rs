//! Listing Query

use serde::Serialize;

/// Category value the service treats as "no filter"
pub const ALL_CATEGORIES: &str = "all";

/// Query for the article listing. The service requires a category;
/// `limit` must stay within `1..=100`.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleQuery {
    pub category: String,
    pub limit: u32,
    pub offset: u32,
}

impl ArticleQuery {
    /// Page size the portal uses for listings
    pub const DEFAULT_LIMIT: u32 = 10;

    /// List one category with default paging
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }

    /// List every category
    pub fn all() -> Self {
        Self::category(ALL_CATEGORIES)
    }
}
