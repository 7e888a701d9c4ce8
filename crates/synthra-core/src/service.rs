//! Post service - the single entry point for reading and mutating posts.
//!
//! Every access to the store happens while holding one async mutex: mutations
//! run load -> mutate -> save under it, and reads never observe a collection
//! that is halfway through being rewritten. Storage failures are logged and
//! degraded here instead of reaching the caller.

use std::sync::Arc;

use chrono::Local;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::domain::collection::{contains_id, find_by_id, insert_front, remove_by_id};
use crate::domain::{IngestPayload, Post, PostDefaults, PostFields, generate_post_id};
use crate::error::DomainError;
use crate::ports::{PostMirror, PostStore};

pub struct PostService {
    store: Arc<dyn PostStore>,
    mirror: Option<Arc<dyn PostMirror>>,
    defaults: PostDefaults,
    gate: Mutex<()>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>, defaults: PostDefaults) -> Self {
        Self {
            store,
            mirror: None,
            defaults,
            gate: Mutex::new(()),
        }
    }

    /// Attach a backup mirror that receives a copy of each created post.
    pub fn with_mirror(mut self, mirror: Arc<dyn PostMirror>) -> Self {
        self.mirror = Some(mirror);
        self
    }

    /// All posts, most recent first.
    pub async fn list(&self) -> Vec<Post> {
        let _gate = self.gate.lock().await;
        self.load_or_empty().await
    }

    pub async fn get(&self, id: &str) -> Result<Post, DomainError> {
        let posts = {
            let _gate = self.gate.lock().await;
            self.load_or_empty().await
        };
        find_by_id(&posts, id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound { id: id.to_string() })
    }

    /// Direct creation: `title`, `content` and `excerpt` must be supplied.
    pub async fn create(&self, raw: &Value) -> Result<Post, DomainError> {
        let fields = PostFields::require_direct(raw)?;
        Ok(self.insert(fields).await)
    }

    /// Webhook ingestion: accepts any JSON and always stores a post.
    pub async fn ingest(&self, raw: &Value) -> Post {
        let payload = IngestPayload::detect(raw);
        if matches!(payload, IngestPayload::Completion { .. }) {
            tracing::debug!("Webhook payload is a wrapped completion response");
        }
        self.insert(payload.into_fields()).await
    }

    /// Remove a post by id. Returns whether a post was removed; an unknown id
    /// is not an error.
    pub async fn delete(&self, id: &str) -> bool {
        let _gate = self.gate.lock().await;

        let posts = self.load_or_empty().await;
        let before = posts.len();
        let posts = remove_by_id(posts, id);
        let removed = posts.len() != before;

        if removed {
            self.persist(&posts).await;
            tracing::info!(post_id = %id, remaining = posts.len(), "Post deleted");
        } else {
            tracing::debug!(post_id = %id, "Delete requested for unknown post");
        }

        if let Some(mirror) = &self.mirror {
            if let Err(e) = mirror.remove(id).await {
                tracing::warn!(post_id = %id, error = %e, "Failed to remove post backup");
            }
        }

        removed
    }

    async fn insert(&self, fields: PostFields) -> Post {
        let _gate = self.gate.lock().await;

        let posts = match self.store.load_all().await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "Could not load posts before insert; saving will replace the stored collection"
                );
                Vec::new()
            }
        };
        let id = unique_id(&posts, generate_post_id);
        let post = Post::assemble(id, fields, &self.defaults, Local::now());

        let posts = insert_front(posts, post.clone());
        self.persist(&posts).await;

        if let Some(mirror) = &self.mirror {
            if let Err(e) = mirror.store(&post).await {
                tracing::warn!(post_id = %post.id, error = %e, "Failed to write post backup");
            }
        }

        tracing::info!(post_id = %post.id, title = %post.title, total = posts.len(), "Post created");
        post
    }

    async fn load_or_empty(&self) -> Vec<Post> {
        match self.store.load_all().await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!(error = %e, "Could not load posts, continuing with an empty collection");
                Vec::new()
            }
        }
    }

    async fn persist(&self, posts: &[Post]) {
        if let Err(e) = self.store.save_all(posts).await {
            tracing::error!(error = %e, count = posts.len(), "Failed to save posts");
        }
    }
}

/// Draw ids from `generate` until one is not used by `posts`.
fn unique_id(posts: &[Post], mut generate: impl FnMut() -> String) -> String {
    loop {
        let id = generate();
        if !contains_id(posts, &id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct TestStore {
        posts: StdMutex<Vec<Post>>,
        fail_load: bool,
        fail_save: bool,
        saves: StdMutex<usize>,
    }

    impl TestStore {
        fn failing_load() -> Self {
            Self {
                fail_load: true,
                ..Default::default()
            }
        }

        fn failing_save() -> Self {
            Self {
                fail_save: true,
                ..Default::default()
            }
        }

        fn snapshot(&self) -> Vec<Post> {
            self.posts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PostStore for TestStore {
        async fn load_all(&self) -> Result<Vec<Post>, StoreError> {
            // Give concurrent writers a chance to interleave.
            tokio::task::yield_now().await;
            if self.fail_load {
                return Err(StoreError::Io(std::io::Error::other("disk unavailable")));
            }
            Ok(self.snapshot())
        }

        async fn save_all(&self, posts: &[Post]) -> Result<(), StoreError> {
            tokio::task::yield_now().await;
            if self.fail_save {
                return Err(StoreError::Io(std::io::Error::other("read-only")));
            }
            *self.posts.lock().unwrap() = posts.to_vec();
            *self.saves.lock().unwrap() += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct TestMirror {
        stored: StdMutex<Vec<String>>,
        removed: StdMutex<Vec<String>>,
    }

    #[async_trait]
    impl PostMirror for TestMirror {
        async fn store(&self, post: &Post) -> Result<(), StoreError> {
            self.stored.lock().unwrap().push(post.id.clone());
            Ok(())
        }

        async fn remove(&self, id: &str) -> Result<(), StoreError> {
            self.removed.lock().unwrap().push(id.to_string());
            Ok(())
        }
    }

    fn service(store: Arc<TestStore>) -> PostService {
        PostService::new(store, PostDefaults::default())
    }

    #[tokio::test]
    async fn test_create_fills_every_field() {
        let store = Arc::new(TestStore::default());
        let service = service(store.clone());

        let post = service
            .create(&json!({"title": "A", "content": "B", "excerpt": "C"}))
            .await
            .unwrap();

        assert_eq!(post.title, "A");
        assert_eq!(post.content, "B");
        assert_eq!(post.excerpt, "C");
        assert_eq!(post.author, "Camila Goulart");
        assert_eq!(post.category, "IA");
        assert_eq!(post.tags, vec!["IA", "Automação", "Synthra"]);
        assert_eq!(post.telegram_summary, "C");
        assert!(!post.date.is_empty());
        assert!(!post.created_at.is_empty());
        assert_eq!(store.snapshot(), vec![post]);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_field() {
        let store = Arc::new(TestStore::default());
        let service = service(store.clone());

        let err = service
            .create(&json!({"title": "A", "excerpt": "C"}))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::MissingField("content")));
        assert!(store.snapshot().is_empty());
        assert_eq!(*store.saves.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_newest_post_comes_first() {
        let service = service(Arc::new(TestStore::default()));

        let p1 = service
            .create(&json!({"title": "P1", "content": "b", "excerpt": "e"}))
            .await
            .unwrap();
        let p2 = service
            .create(&json!({"title": "P2", "content": "b", "excerpt": "e"}))
            .await
            .unwrap();

        assert_ne!(p1.id, p2.id);
        assert_eq!(service.list().await, vec![p2, p1]);
    }

    #[tokio::test]
    async fn test_list_is_stable_without_writes() {
        let service = service(Arc::new(TestStore::default()));
        service.ingest(&json!({"title": "T"})).await;

        assert_eq!(service.list().await, service.list().await);
    }

    #[tokio::test]
    async fn test_ingest_never_fails() {
        let store = Arc::new(TestStore::default());
        let service = service(store.clone());

        let payloads = [
            json!({}),
            json!({"choices": []}),
            json!({"choices": [{"message": {"content": "not json"}}]}),
            json!({"title": "Flat", "excerpt": "E", "content": "Body"}),
            json!([1, 2, 3]),
            json!(null),
        ];
        for payload in &payloads {
            service.ingest(payload).await;
        }

        assert_eq!(store.snapshot().len(), payloads.len());
    }

    #[tokio::test]
    async fn test_ingest_completion_json_content() {
        let service = service(Arc::new(TestStore::default()));

        let post = service
            .ingest(&json!({
                "choices": [{"message": {"content": "{\"title\":\"X\",\"excerpt\":\"Y\"}"}}]
            }))
            .await;

        assert_eq!(post.title, "X");
        assert_eq!(post.excerpt, "Y");
        assert_eq!(post.content, "");
        assert_eq!(post.telegram_summary, "Y");
    }

    #[tokio::test]
    async fn test_ingest_completion_plain_text() {
        let service = service(Arc::new(TestStore::default()));

        let post = service
            .ingest(&json!({"choices": [{"message": {"content": "plain text"}}]}))
            .await;

        assert_eq!(post.title, "Novo Artigo de IA");
        assert_eq!(post.content, "plain text");
        assert_eq!(post.category, "IA");
    }

    #[tokio::test]
    async fn test_ingest_empty_object_uses_placeholders() {
        let service = service(Arc::new(TestStore::default()));

        let post = service.ingest(&json!({})).await;

        assert_eq!(post.title, "Novo Artigo");
        assert_eq!(post.excerpt, "Artigo gerado automaticamente.");
        assert_eq!(post.content, "");
    }

    #[tokio::test]
    async fn test_get_and_not_found() {
        let service = service(Arc::new(TestStore::default()));
        let post = service.ingest(&json!({"title": "T"})).await;

        assert_eq!(service.get(&post.id).await.unwrap(), post);
        assert!(matches!(
            service.get("missing").await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_leaves_collection_unchanged() {
        let store = Arc::new(TestStore::default());
        let service = service(store.clone());
        service.ingest(&json!({"title": "one"})).await;
        service.ingest(&json!({"title": "two"})).await;
        let before = service.list().await;

        assert!(!service.delete("does-not-exist").await);
        assert_eq!(service.list().await, before);
    }

    #[tokio::test]
    async fn test_delete_removes_post() {
        let service = service(Arc::new(TestStore::default()));
        let keep = service.ingest(&json!({"title": "keep"})).await;
        let gone = service.ingest(&json!({"title": "drop"})).await;

        assert!(service.delete(&gone.id).await);
        assert_eq!(service.list().await, vec![keep]);
    }

    #[tokio::test]
    async fn test_load_failure_degrades_to_empty() {
        let store = Arc::new(TestStore::failing_load());
        *store.posts.lock().unwrap() = vec![Post::assemble(
            "old00000".to_string(),
            PostFields::default(),
            &PostDefaults::default(),
            Local::now(),
        )];
        let service = service(store.clone());

        assert!(service.list().await.is_empty());
        let post = service.ingest(&json!({"title": "still works"})).await;
        assert_eq!(post.title, "still works");
        assert_eq!(store.snapshot(), vec![post]);
    }

    #[tokio::test]
    async fn test_save_failure_still_returns_post() {
        let store = Arc::new(TestStore::failing_save());
        let service = service(store.clone());

        let post = service
            .create(&json!({"title": "A", "content": "B", "excerpt": "C"}))
            .await
            .unwrap();

        assert_eq!(post.title, "A");
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_serialized() {
        let store = Arc::new(TestStore::default());
        let service = Arc::new(service(store.clone()));

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move { service.ingest(&json!({"title": format!("post {i}")})).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.snapshot().len(), 20);
    }

    #[tokio::test]
    async fn test_reads_wait_for_pending_write() {
        let store = Arc::new(TestStore::default());
        let service = Arc::new(service(store.clone()));
        service.ingest(&json!({"title": "seed"})).await;

        let gate = service.gate.lock().await;
        let reader = {
            let service = service.clone();
            tokio::spawn(async move { service.list().await })
        };
        tokio::task::yield_now().await;
        assert!(!reader.is_finished());

        drop(gate);
        assert_eq!(reader.await.unwrap().len(), 1);
    }

    #[test]
    fn test_unique_id_skips_ids_already_stored() {
        let taken = Post::assemble(
            "aaaa1111".to_string(),
            PostFields::default(),
            &PostDefaults::default(),
            Local::now(),
        );
        let mut candidates = vec!["bbbb2222", "aaaa1111", "aaaa1111"];

        let id = unique_id(&[taken], || candidates.pop().unwrap().to_string());

        assert_eq!(id, "bbbb2222");
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_mirror_follows_create_and_delete() {
        let mirror = Arc::new(TestMirror::default());
        let service = service(Arc::new(TestStore::default())).with_mirror(mirror.clone());

        let post = service.ingest(&json!({"title": "mirrored"})).await;
        service.delete(&post.id).await;

        assert_eq!(*mirror.stored.lock().unwrap(), vec![post.id.clone()]);
        assert_eq!(*mirror.removed.lock().unwrap(), vec![post.id]);
    }
}
