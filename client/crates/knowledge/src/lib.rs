//! Knowledge Base
//!
//! Typed surface over the knowledge-base service: articles made of
//! ordered content blocks, the category listing, and the block-level
//! edit operations. Mutations require the admin or editor role; the
//! service enforces this and the client only reports the rejection.
//!
//! The service's path prefix is `/api/knowlege`; the spelling is
//! historical and shared with the gateway.

pub mod api;
pub mod block;
pub mod dto;
pub mod model;
pub mod query;

// Re-exports for convenience
pub use api::KnowledgeApi;
pub use block::{ArticleBlock, BlockType, NewBlock};
pub use dto::{ArticleInfoUpdate, BlocksUpdate, NewArticle};
pub use model::{Article, ArticleSummary};
pub use query::ArticleQuery;
