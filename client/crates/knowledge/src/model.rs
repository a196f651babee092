//! Article Models
//!
//! Read models returned by the knowledge-base service. The full
//! article carries its blocks under `blocks_data`; the listing
//! returns bare headers without category or blocks.

use kernel::id::ArticleId;
use serde::{Deserialize, Serialize};

use crate::block::ArticleBlock;

/// Full article with content blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    #[serde(rename = "blocks_data")]
    pub blocks: Vec<ArticleBlock>,
}

impl Article {
    /// Blocks in display order; the service does not guarantee it
    pub fn ordered_blocks(&self) -> Vec<&ArticleBlock> {
        let mut blocks: Vec<&ArticleBlock> = self.blocks.iter().collect();
        blocks.sort_by_key(|block| block.position);
        blocks
    }
}

/// List entry returned by the category listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: String,
    pub description: Option<String>,
}

/// Article header echoed inside the create acknowledgement
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleInfo {
    pub id: ArticleId,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
}
