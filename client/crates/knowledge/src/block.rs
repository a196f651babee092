//! Content Blocks
//!
//! Articles are sequences of typed blocks. Positions are dense
//! `0..n` indexes; the editor renumbers them on every save.

use kernel::id::ArticleBlockId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of content a block holds, `"text"`/`"image"`/`"video"` on the
/// wire. The service rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    #[default]
    Text,
    Image,
    Video,
}

impl BlockType {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use BlockType::*;
        match self {
            Text => "text",
            Image => "image",
            Video => "video",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        use BlockType::*;
        match code {
            "text" => Some(Text),
            "image" => Some(Image),
            "video" => Some(Video),
            _ => None,
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One stored block of an article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleBlock {
    pub id: ArticleBlockId,
    pub block_type: BlockType,
    pub content: String,
    pub position: u32,
}

/// Block payload for creation, full replacement, and single-block
/// rewrites; the same shape serves all three
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBlock {
    pub block_type: BlockType,
    pub content: String,
    pub position: u32,
}

impl NewBlock {
    pub fn new(block_type: BlockType, content: impl Into<String>, position: u32) -> Self {
        Self {
            block_type,
            content: content.into(),
            position,
        }
    }

    /// Text block, the most common kind
    pub fn text(content: impl Into<String>, position: u32) -> Self {
        Self::new(BlockType::Text, content, position)
    }
}
