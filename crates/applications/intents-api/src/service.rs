//! Service layer for managing intents

use async_trait::async_trait;
use intents_core::{
    EntityMapper, IntentDto, IntentMapper, IntentsResult, Page, PageRequest,
};
use intents_storage::IntentRepository;
use std::sync::Arc;
use tracing::{debug, Span};

/// Business operations on intents, expressed in transfer objects
#[async_trait]
pub trait IntentService: Send + Sync {
    /// Save an intent (insert without id, replace with id)
    async fn save(&self, dto: IntentDto) -> IntentsResult<IntentDto>;

    /// Get one page of intents
    async fn find_all(&self, request: &PageRequest) -> IntentsResult<Page<IntentDto>>;

    /// Get the "id" intent
    async fn find_one(&self, id: &str) -> IntentsResult<Option<IntentDto>>;

    /// Delete the "id" intent
    async fn delete(&self, id: &str) -> IntentsResult<()>;

    /// Get the first intent carrying `tag`
    async fn find_by_tag(&self, tag: &str) -> IntentsResult<Option<IntentDto>>;

    /// Delete every intent carrying `tag`
    async fn delete_by_tag(&self, tag: &str) -> IntentsResult<()>;
}

/// Pass-through service: maps, delegates to the repository, maps back.
///
/// No retries and no transactions; repository failures surface unchanged
/// apart from the conversion into [`intents_core::IntentsError`].
pub struct DefaultIntentService<R: IntentRepository + ?Sized> {
    repository: Arc<R>,
    mapper: IntentMapper,
    span: Span,
}

impl<R: IntentRepository + ?Sized> DefaultIntentService<R> {
    /// Create a service over `repository`, logging under `span`
    pub fn new(repository: Arc<R>, span: Span) -> Self {
        Self {
            repository,
            mapper: IntentMapper,
            span,
        }
    }
}

#[async_trait]
impl<R: IntentRepository + ?Sized> IntentService for DefaultIntentService<R> {
    async fn save(&self, dto: IntentDto) -> IntentsResult<IntentDto> {
        debug!(parent: &self.span, "Request to save Intent : {}", dto);
        let intent = self.mapper.to_entity(dto);
        let intent = self.repository.save(intent).await?;
        Ok(self.mapper.to_dto(intent))
    }

    async fn find_all(&self, request: &PageRequest) -> IntentsResult<Page<IntentDto>> {
        debug!(parent: &self.span, "Request to get all Intents");
        let page = self.repository.find_all(request).await?;
        Ok(page.map(|intent| self.mapper.to_dto(intent)))
    }

    async fn find_one(&self, id: &str) -> IntentsResult<Option<IntentDto>> {
        debug!(parent: &self.span, "Request to get Intent : {}", id);
        let intent = self.repository.find_by_id(id).await?;
        Ok(self.mapper.to_dto_opt(intent))
    }

    async fn delete(&self, id: &str) -> IntentsResult<()> {
        debug!(parent: &self.span, "Request to delete Intent : {}", id);
        self.repository.delete_by_id(id).await?;
        Ok(())
    }

    async fn find_by_tag(&self, tag: &str) -> IntentsResult<Option<IntentDto>> {
        debug!(parent: &self.span, "Request to get Intent by tag : {}", tag);
        let intent = self.repository.find_by_tag(tag).await?;
        Ok(self.mapper.to_dto_opt(intent))
    }

    async fn delete_by_tag(&self, tag: &str) -> IntentsResult<()> {
        debug!(parent: &self.span, "Request to delete Intents by tag : {}", tag);
        self.repository.delete_by_tag(tag).await?;
        Ok(())
    }
}
