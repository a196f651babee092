//! Knowledge Operations
//!
//! One method per knowledge-base endpoint. Every mutation is
//! role-gated server-side; a viewer gets a 403 status error here, not
//! a local check.

use std::sync::Arc;

use kernel::id::{ArticleBlockId, ArticleId};
use platform::client::ApiClient;
use platform::error::ClientResult;
use platform::transport::Transport;

use crate::block::NewBlock;
use crate::dto::{
    ArticleAck, ArticleCreated, ArticleInfoUpdate, BlockUpdated, BlocksUpdate, NewArticle,
};
use crate::model::{Article, ArticleSummary};
use crate::query::ArticleQuery;

/// Typed access to the knowledge-base service
pub struct KnowledgeApi<T>
where
    T: Transport + Send + Sync + 'static,
{
    client: Arc<ApiClient<T>>,
}

impl<T> KnowledgeApi<T>
where
    T: Transport + Send + Sync + 'static,
{
    pub fn new(client: Arc<ApiClient<T>>) -> Self {
        Self { client }
    }

    /// Article headers for a category, paged
    pub async fn list(&self, query: &ArticleQuery) -> ClientResult<Vec<ArticleSummary>> {
        self.client.get_with("/api/knowlege", query).await
    }

    /// One article with its blocks
    pub async fn article(&self, id: ArticleId) -> ClientResult<Article> {
        self.client.get(&format!("/api/knowlege/{id}")).await
    }

    /// Create an article with its initial blocks
    pub async fn create(&self, article: &NewArticle) -> ClientResult<ArticleCreated> {
        self.client.post("/api/knowlege", article).await
    }

    /// Update an article's title, description, or category
    pub async fn update_info(
        &self,
        id: ArticleId,
        update: &ArticleInfoUpdate,
    ) -> ClientResult<ArticleAck> {
        self.client
            .patch(&format!("/api/knowlege/{id}/info"), update)
            .await
    }

    /// Replace every block of an article in one call
    pub async fn replace_blocks(
        &self,
        id: ArticleId,
        blocks: &BlocksUpdate,
    ) -> ClientResult<ArticleAck> {
        self.client
            .put(&format!("/api/knowlege/{id}/blocks"), blocks)
            .await
    }

    /// Rewrite one block in place
    pub async fn update_block(
        &self,
        id: ArticleBlockId,
        block: &NewBlock,
    ) -> ClientResult<BlockUpdated> {
        self.client
            .put(&format!("/api/knowlege/blocks/{id}"), block)
            .await
    }

    /// Delete an article and its blocks
    pub async fn remove(&self, id: ArticleId) -> ClientResult<()> {
        self.client.delete(&format!("/api/knowlege/{id}")).await
    }

    /// Delete one block
    pub async fn remove_block(&self, id: ArticleBlockId) -> ClientResult<()> {
        self.client
            .delete(&format!("/api/knowlege/blocks/{id}"))
            .await
    }
}
