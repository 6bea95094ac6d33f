//! Task store
//!
//! Sole authority for reading and mutating the persisted task collection.
//! Every query parses the whole collection; every mutation rewrites it.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::storage::KeyValueStore;
use crate::{Error, Result};

use super::model::{NewTask, Task, TaskPatch};
use super::seed::seed_tasks;

/// Slot the task collection is stored under
pub const TASKS_KEY: &str = "tasks";

/// Persisted task collection with read-modify-write semantics
#[derive(Clone)]
pub struct TaskStore {
    kv: Arc<dyn KeyValueStore>,
}

impl TaskStore {
    /// Create a store handle over the given storage
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Create a store handle, writing the built-in seed collection first if
    /// the storage has no `tasks` slot yet
    ///
    /// A slot that is present but unreadable is left alone: it reads as the
    /// empty collection and the next mutation replaces it.
    pub async fn with_seed(kv: Arc<dyn KeyValueStore>) -> Result<Self> {
        let store = Self::new(kv);
        if store.kv.get(TASKS_KEY).await?.is_none() {
            debug!("No task collection found, seeding example boards");
            store.write_tasks(&seed_tasks()).await?;
        }
        Ok(store)
    }

    /// Read the whole task collection
    ///
    /// An absent or unreadable slot reads as the empty collection, never as
    /// an error.
    pub async fn tasks(&self) -> Result<Vec<Task>> {
        let Some(raw) = self.kv.get(TASKS_KEY).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(tasks) => Ok(tasks),
            Err(e) => {
                warn!("Task collection is unreadable ({}), treating as empty", e);
                Ok(Vec::new())
            }
        }
    }

    /// Look up a single task by id
    pub async fn get(&self, id: u64) -> Result<Option<Task>> {
        Ok(self.tasks().await?.into_iter().find(|t| t.id == id))
    }

    /// Create a task, assigning the next free id
    ///
    /// The title must be non-empty after trimming; nothing is written
    /// otherwise.
    pub async fn create(&self, input: NewTask) -> Result<Task> {
        if input.title.trim().is_empty() {
            return Err(Error::InvalidInput("Title cannot be empty".to_string()));
        }

        let mut tasks = self.tasks().await?;
        let id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let task = Task {
            id,
            title: input.title,
            description: input.description,
            status: input.status,
            board: input.board,
        };
        tasks.push(task.clone());
        self.write_tasks(&tasks).await?;
        Ok(task)
    }

    /// Apply a merge patch to the task with the given id
    ///
    /// Only the provided fields are overwritten. A provided title must be
    /// non-empty after trimming.
    pub async fn update(&self, id: u64, patch: TaskPatch) -> Result<Task> {
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(Error::InvalidInput("Title cannot be empty".to_string()));
            }
        }

        let mut tasks = self.tasks().await?;
        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            return Err(Error::TaskNotFound(id));
        };

        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(board) = patch.board {
            task.board = board;
        }
        let updated = task.clone();

        self.write_tasks(&tasks).await?;
        Ok(updated)
    }

    /// Delete the task with the given id
    ///
    /// Returns whether a removal occurred; deleting an unknown id leaves the
    /// collection untouched.
    pub async fn delete(&self, id: u64) -> Result<bool> {
        let mut tasks = self.tasks().await?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Ok(false);
        }
        self.write_tasks(&tasks).await?;
        Ok(true)
    }

    async fn write_tasks(&self, tasks: &[Task]) -> Result<()> {
        let raw = serde_json::to_string(tasks)?;
        self.kv.set(TASKS_KEY, &raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_names;
    use crate::storage::FileStore;
    use crate::task::TaskStatus;
    use tempfile::{tempdir, TempDir};

    async fn open_kv(temp_dir: &TempDir) -> Arc<dyn KeyValueStore> {
        let path = temp_dir.path().join("store.json");
        Arc::new(FileStore::new(&path).await.unwrap())
    }

    async fn create_empty_store() -> (TaskStore, TempDir) {
        let temp_dir = tempdir().unwrap();
        let kv = open_kv(&temp_dir).await;
        (TaskStore::new(kv), temp_dir)
    }

    #[tokio::test]
    async fn test_tasks_on_empty_storage() {
        let (store, _temp) = create_empty_store().await;
        assert!(store.tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_with_seed_populates_missing_collection() {
        let temp_dir = tempdir().unwrap();
        let kv = open_kv(&temp_dir).await;

        let store = TaskStore::with_seed(kv).await.unwrap();
        let tasks = store.tasks().await.unwrap();

        assert_eq!(tasks.len(), 12);
        assert_eq!(board_names(&tasks), ["Launch Career", "Roadmap"]);
    }

    #[tokio::test]
    async fn test_with_seed_leaves_existing_collection_alone() {
        let temp_dir = tempdir().unwrap();
        let kv = open_kv(&temp_dir).await;

        let store = TaskStore::new(Arc::clone(&kv));
        store
            .create(NewTask::new("Only task", "Inbox"))
            .await
            .unwrap();

        let store = TaskStore::with_seed(kv).await.unwrap();
        let tasks = store.tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Only task");
    }

    #[tokio::test]
    async fn test_with_seed_does_not_replace_corrupt_collection() {
        let temp_dir = tempdir().unwrap();
        let kv = open_kv(&temp_dir).await;
        kv.set(TASKS_KEY, "not json at all").await.unwrap();

        let store = TaskStore::with_seed(Arc::clone(&kv)).await.unwrap();

        // Corrupt is not absent: no reseed, reads as empty
        assert!(store.tasks().await.unwrap().is_empty());
        assert_eq!(
            kv.get(TASKS_KEY).await.unwrap(),
            Some("not json at all".to_string())
        );
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let (store, _temp) = create_empty_store().await;

        let first = store.create(NewTask::new("One", "Inbox")).await.unwrap();
        let second = store.create(NewTask::new("Two", "Inbox")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_uses_max_id_plus_one() {
        let (store, _temp) = create_empty_store().await;

        store.create(NewTask::new("One", "Inbox")).await.unwrap();
        store.create(NewTask::new("Two", "Inbox")).await.unwrap();
        store.create(NewTask::new("Three", "Inbox")).await.unwrap();
        assert!(store.delete(2).await.unwrap());

        // Gaps are not reused; the next id follows the maximum
        let next = store.create(NewTask::new("Four", "Inbox")).await.unwrap();
        assert_eq!(next.id, 4);
    }

    #[tokio::test]
    async fn test_create_returns_matching_record() {
        let (store, _temp) = create_empty_store().await;

        let created = store
            .create(
                NewTask::new("Write tests", "Roadmap")
                    .with_description("Cover the store")
                    .with_status(TaskStatus::Doing),
            )
            .await
            .unwrap();

        assert_eq!(created.title, "Write tests");
        assert_eq!(created.description, "Cover the store");
        assert_eq!(created.status, TaskStatus::Doing);
        assert_eq!(created.board, "Roadmap");

        let tasks = store.tasks().await.unwrap();
        assert_eq!(tasks, vec![created]);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() {
        let (store, _temp) = create_empty_store().await;

        let result = store.create(NewTask::new("   ", "Inbox")).await;
        match result {
            Err(Error::InvalidInput(msg)) => assert!(msg.contains("Title")),
            other => panic!("Expected InvalidInput error, got: {:?}", other),
        }

        // Nothing was written
        assert!(store.tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_merges_only_provided_fields() {
        let (store, _temp) = create_empty_store().await;

        let created = store
            .create(
                NewTask::new("Ship it", "Launch Career").with_description("Final review"),
            )
            .await
            .unwrap();

        let updated = store
            .update(
                created.id,
                TaskPatch {
                    status: Some(TaskStatus::Done),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, TaskStatus::Done);
        assert_eq!(updated.title, "Ship it");
        assert_eq!(updated.description, "Final review");
        assert_eq!(updated.board, "Launch Career");
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let (store, _temp) = create_empty_store().await;

        let result = store.update(42, TaskPatch::default()).await;
        match result {
            Err(Error::TaskNotFound(42)) => {}
            other => panic!("Expected TaskNotFound error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_rejects_blank_title() {
        let (store, _temp) = create_empty_store().await;

        let created = store.create(NewTask::new("Keep me", "Inbox")).await.unwrap();
        let result = store
            .update(
                created.id,
                TaskPatch {
                    title: Some("  ".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert_eq!(store.get(created.id).await.unwrap().unwrap().title, "Keep me");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (store, _temp) = create_empty_store().await;

        let created = store.create(NewTask::new("Remove me", "Inbox")).await.unwrap();
        store.create(NewTask::new("Keep me", "Inbox")).await.unwrap();

        assert!(store.delete(created.id).await.unwrap());
        assert_eq!(store.tasks().await.unwrap().len(), 1);

        // Second delete reports no removal and changes nothing
        assert!(!store.delete(created.id).await.unwrap());
        assert_eq!(store.tasks().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let (store, _temp) = create_empty_store().await;

        let created = store.create(NewTask::new("Find me", "Inbox")).await.unwrap();
        assert_eq!(store.get(created.id).await.unwrap(), Some(created));
        assert_eq!(store.get(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_collection_reads_as_empty() {
        let temp_dir = tempdir().unwrap();
        let kv = open_kv(&temp_dir).await;
        kv.set(TASKS_KEY, "{\"oops\": true}").await.unwrap();

        let store = TaskStore::new(kv);
        assert!(store.tasks().await.unwrap().is_empty());

        // The next mutation replaces the corrupt value
        store.create(NewTask::new("Fresh start", "Inbox")).await.unwrap();
        assert_eq!(store.tasks().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_persistence_across_instances() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("store.json");

        let id = {
            let kv: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&path).await.unwrap());
            let store = TaskStore::new(kv);
            store
                .create(NewTask::new("Survive reload", "Inbox"))
                .await
                .unwrap()
                .id
        };

        let kv: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&path).await.unwrap());
        let store = TaskStore::new(kv);
        let task = store.get(id).await.unwrap().unwrap();
        assert_eq!(task.title, "Survive reload");
    }

    #[tokio::test]
    async fn test_seeded_store_end_to_end() {
        let temp_dir = tempdir().unwrap();
        let kv = open_kv(&temp_dir).await;
        let store = TaskStore::with_seed(kv).await.unwrap();

        let created = store
            .create(
                NewTask::new("X", "Roadmap")
                    .with_description("Y")
                    .with_status(TaskStatus::Todo),
            )
            .await
            .unwrap();

        // Seed ids run 1-12, so the new task gets 13
        assert_eq!(created.id, 13);

        let tasks = store.tasks().await.unwrap();
        assert!(tasks.contains(&created));
        assert_eq!(board_names(&tasks), ["Launch Career", "Roadmap"]);
    }
}
