//! Intent repository: a document collection over a key/value [`Storage`].
//!
//! Each intent is one JSON document stored under `intent:{id}`.

use crate::{
    error::{Result, StorageError},
    factory::SharedStorage,
};
use async_trait::async_trait;
use intents_core::{Direction, Intent, Page, PageRequest, Validatable};
use std::cmp::Ordering;
use tracing::{debug, Span};
use uuid::Uuid;

/// Name of the collection holding intent documents
pub const COLLECTION: &str = "intent";

/// Data access contract for intents
#[async_trait]
pub trait IntentRepository: Send + Sync {
    /// Insert when `id` is absent (a fresh id is assigned), otherwise replace
    /// the stored document. Replacing an id that is not stored fails with
    /// [`StorageError::NotFound`]; the existence check and the write are one
    /// backend operation, so a concurrent delete wins over a later replace.
    async fn save(&self, intent: Intent) -> Result<Intent>;

    /// Point lookup
    async fn find_by_id(&self, id: &str) -> Result<Option<Intent>>;

    /// One sorted page plus the total count
    async fn find_all(&self, request: &PageRequest) -> Result<Page<Intent>>;

    /// Every document, ordered by id
    async fn find_all_unpaged(&self) -> Result<Vec<Intent>>;

    /// First document carrying `tag`, in id order
    async fn find_by_tag(&self, tag: &str) -> Result<Option<Intent>>;

    /// Remove one document; missing ids are ignored
    async fn delete_by_id(&self, id: &str) -> Result<()>;

    /// Remove every document carrying `tag`
    async fn delete_by_tag(&self, tag: &str) -> Result<()>;

    /// Remove every document
    async fn delete_all(&self) -> Result<()>;

    /// Number of stored documents
    async fn count(&self) -> Result<u64>;
}

/// [`IntentRepository`] backed by any [`crate::Storage`] backend
#[derive(Clone)]
pub struct DocumentRepository {
    storage: SharedStorage,
    span: Span,
}

impl DocumentRepository {
    /// Create a repository over `storage`, logging under `span`
    pub fn new(storage: SharedStorage, span: Span) -> Self {
        Self { storage, span }
    }

    fn key(id: &str) -> Vec<u8> {
        format!("{COLLECTION}:{id}").into_bytes()
    }

    fn prefix() -> Vec<u8> {
        format!("{COLLECTION}:").into_bytes()
    }

    fn decode(key: &[u8], bytes: &[u8]) -> Result<Intent> {
        serde_json::from_slice(bytes).map_err(|e| {
            StorageError::Deserialization(format!(
                "document {}: {e}",
                String::from_utf8_lossy(key)
            ))
        })
    }

    fn encode(intent: &Intent) -> Result<Vec<u8>> {
        serde_json::to_vec(intent).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    async fn write(&self, intent: &Intent, id: &str) -> Result<()> {
        self.storage.put(&Self::key(id), &Self::encode(intent)?).await
    }

    async fn load_all(&self) -> Result<Vec<Intent>> {
        let keys = self.storage.list(&Self::prefix()).await?;
        let mut intents = Vec::with_capacity(keys.len());
        for key in keys {
            // A concurrent delete may remove a listed key
            if let Some(bytes) = self.storage.get(&key).await? {
                intents.push(Self::decode(&key, &bytes)?);
            }
        }
        intents.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(intents)
    }
}

/// Stable multi-key sort; unknown properties are rejected before sorting
fn sort_intents(intents: &mut [Intent], request: &PageRequest) -> Result<()> {
    if let Some(order) = request
        .sort
        .iter()
        .find(|order| !Intent::SORTABLE_PROPERTIES.contains(&order.property.as_str()))
    {
        return Err(StorageError::InvalidKey(format!(
            "Unsupported sort property: {}",
            order.property
        )));
    }

    intents.sort_by(|a, b| {
        request
            .sort
            .iter()
            .map(|order| {
                let ordering = a.compare_by(b, &order.property).unwrap_or(Ordering::Equal);
                match order.direction {
                    Direction::Asc => ordering,
                    Direction::Desc => ordering.reverse(),
                }
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });
    Ok(())
}

#[async_trait]
impl IntentRepository for DocumentRepository {
    async fn save(&self, mut intent: Intent) -> Result<Intent> {
        intent
            .validate()
            .map_err(|e| StorageError::InvalidValue(e.to_string()))?;

        match intent.id.clone() {
            None => {
                let id = Uuid::new_v4().simple().to_string();
                intent.id = Some(id.clone());
                debug!(parent: &self.span, %id, "Inserting intent document");
                self.write(&intent, &id).await?;
            }
            Some(id) => {
                let document = Self::encode(&intent)?;
                if !self.storage.replace(&Self::key(&id), &document).await? {
                    return Err(StorageError::NotFound(format!("{COLLECTION} {id}")));
                }
                debug!(parent: &self.span, %id, "Replaced intent document");
            }
        }
        Ok(intent)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Intent>> {
        let key = Self::key(id);
        match self.storage.get(&key).await? {
            Some(bytes) => Ok(Some(Self::decode(&key, &bytes)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<Intent>> {
        let mut intents = self.load_all().await?;
        sort_intents(&mut intents, request)?;

        let total = intents.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content: Vec<Intent> = intents
            .into_iter()
            .skip(offset)
            .take(request.size as usize)
            .collect();

        debug!(
            parent: &self.span,
            page = request.page,
            size = request.size,
            returned = content.len(),
            total,
            "Loaded intent page"
        );
        Ok(Page::new(content, request, total))
    }

    async fn find_all_unpaged(&self) -> Result<Vec<Intent>> {
        self.load_all().await
    }

    async fn find_by_tag(&self, tag: &str) -> Result<Option<Intent>> {
        let intents = self.load_all().await?;
        Ok(intents
            .into_iter()
            .find(|intent| intent.tag.as_deref() == Some(tag)))
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        debug!(parent: &self.span, %id, "Deleting intent document");
        self.storage.delete(&Self::key(id)).await
    }

    async fn delete_by_tag(&self, tag: &str) -> Result<()> {
        let intents = self.load_all().await?;
        let mut removed = 0usize;
        for intent in intents
            .iter()
            .filter(|intent| intent.tag.as_deref() == Some(tag))
        {
            if let Some(id) = intent.id.as_deref() {
                self.storage.delete(&Self::key(id)).await?;
                removed += 1;
            }
        }
        debug!(parent: &self.span, %tag, removed, "Deleted intent documents by tag");
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        for key in self.storage.list(&Self::prefix()).await? {
            self.storage.delete(&key).await?;
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.storage.list(&Self::prefix()).await?.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::MemoryStorage;
    use intents_core::SortOrder;
    use std::sync::Arc;

    fn repository() -> DocumentRepository {
        DocumentRepository::new(Arc::new(MemoryStorage::default()), Span::none())
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let repo = repository();
        let saved = repo.save(Intent::new().tag("greeting")).await.unwrap();

        let id = saved.id.clone().unwrap();
        assert_eq!(id.len(), 32);
        assert_eq!(repo.count().await.unwrap(), 1);

        let found = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.tag.as_deref(), Some("greeting"));
    }

    #[tokio::test]
    async fn test_missing_tag_is_rejected() {
        let repo = repository();
        let err = repo.save(Intent::new()).await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidValue(_)));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_replace_unknown_id_is_not_found() {
        let repo = repository();
        let err = repo.save(Intent::new().id("ghost").tag("T")).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_sort_rejects_unknown_property() {
        let repo = repository();
        repo.save(Intent::new().tag("T")).await.unwrap();

        let request = PageRequest::default().with_sort(vec![SortOrder::asc("patterns")]);
        let err = repo.find_all(&request).await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
    }

    #[test]
    fn test_sort_tie_breaks_on_next_order() {
        let mut intents = vec![
            Intent::new().id("1").tag("b"),
            Intent::new().id("2").tag("a"),
            Intent::new().id("3").tag("b"),
        ];
        let request = PageRequest::default()
            .with_sort(vec![SortOrder::asc("tag"), SortOrder::desc("id")]);
        sort_intents(&mut intents, &request).unwrap();

        let ids: Vec<_> = intents.iter().filter_map(|i| i.id.as_deref()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }
}
