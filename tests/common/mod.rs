use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use notes_api::models::Note;
use notes_api::repository::{NoteStore, StoreError};
use notes_api::service::NoteService;

/// In-memory note store backing the tests, so the service and handlers
/// can be exercised without a live database.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    notes: Vec<Note>,
    next_id: i64,
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn insert(&self, body: String) -> Result<Note, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let note = Note {
            id: inner.next_id,
            body,
            date_created: Utc::now(),
        };
        inner.notes.push(note.clone());
        Ok(note)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Note>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.notes.iter().find(|note| note.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Note>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.notes.clone())
    }

    async fn update(&self, id: i64, body: String) -> Result<Option<Note>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.notes.iter_mut().find(|note| note.id == id) {
            Some(note) => {
                note.body = body;
                Ok(Some(note.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let count_before = inner.notes.len();
        inner.notes.retain(|note| note.id != id);
        Ok(inner.notes.len() != count_before)
    }
}

pub fn test_service() -> NoteService {
    NoteService::new(Arc::new(MemoryStore::default()))
}

#[allow(dead_code)]
pub fn test_app() -> axum::Router {
    notes_api::router(Arc::new(test_service()))
}
