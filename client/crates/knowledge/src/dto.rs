//! Knowledge Payloads
//!
//! Mutation bodies and the acknowledgements the service answers with.
//! Deletes answer 204 and have no acknowledgement type.

use kernel::id::ArticleId;
use serde::{Deserialize, Serialize};

use crate::block::{ArticleBlock, NewBlock};
use crate::model::ArticleInfo;

/// Payload for creating an article with its initial blocks. Also
/// deserializable so the portal can load one from a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewArticle {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    pub blocks_data: Vec<NewBlock>,
}

/// Partial update of an article's header fields
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArticleInfoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Full replacement of an article's blocks
#[derive(Debug, Clone, Serialize)]
pub struct BlocksUpdate {
    pub blocks_data: Vec<NewBlock>,
}

impl BlocksUpdate {
    /// Renumber the blocks `0..n` in the order given, the way the
    /// portal editor saves them
    pub fn renumbered(mut blocks: Vec<NewBlock>) -> Self {
        for (index, block) in blocks.iter_mut().enumerate() {
            block.position = index as u32;
        }
        Self {
            blocks_data: blocks,
        }
    }
}

/// Acknowledgement for article creation
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleCreated {
    pub ok: bool,
    pub article: ArticleInfo,
}

/// Acknowledgement shared by the info and blocks updates
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleAck {
    pub ok: bool,
    pub article_id: ArticleId,
}

/// Acknowledgement for a single-block rewrite, echoing the stored
/// block
#[derive(Debug, Clone, Deserialize)]
pub struct BlockUpdated {
    pub ok: bool,
    pub block: ArticleBlock,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_article_wire_shape() {
        let article = NewArticle {
            title: "Release checklist".to_string(),
            description: None,
            category: "processes".to_string(),
            blocks_data: vec![NewBlock::text("Freeze the branch", 0)],
        };
        assert_eq!(
            serde_json::to_value(&article).unwrap(),
            json!({
                "title": "Release checklist",
                "category": "processes",
                "blocks_data": [
                    {"block_type": "text", "content": "Freeze the branch", "position": 0},
                ],
            })
        );
    }

    #[test]
    fn test_info_update_serializes_only_set_fields() {
        let update = ArticleInfoUpdate {
            title: Some("Release checklist v2".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"title": "Release checklist v2"})
        );
    }

    #[test]
    fn test_renumbered_assigns_dense_positions() {
        let update = BlocksUpdate::renumbered(vec![
            NewBlock::text("first", 7),
            NewBlock::text("second", 3),
            NewBlock::text("third", 3),
        ]);
        let positions: Vec<u32> = update
            .blocks_data
            .iter()
            .map(|block| block.position)
            .collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(update.blocks_data[0].content, "first");
    }
}
