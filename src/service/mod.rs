use crate::{
    dto::NoteResponse,
    repository::{NoteStore, StoreError},
};

use std::sync::Arc;

/// Stateless translation layer between request handlers and the note store.
#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    #[must_use]
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    pub async fn create_note(&self, body: String) -> Result<NoteResponse, StoreError> {
        self.store.insert(body).await.map(NoteResponse::from)
    }

    pub async fn update_note(
        &self,
        id: i64,
        body: String,
    ) -> Result<Option<NoteResponse>, StoreError> {
        self.store
            .update(id, body)
            .await
            .map(|note| note.map(NoteResponse::from))
    }

    pub async fn delete_note(&self, id: i64) -> Result<bool, StoreError> {
        self.store.delete(id).await
    }

    pub async fn get_one_note(&self, id: i64) -> Result<Option<NoteResponse>, StoreError> {
        self.store
            .find_by_id(id)
            .await
            .map(|note| note.map(NoteResponse::from))
    }

    pub async fn get_all_notes(&self) -> Result<Vec<NoteResponse>, StoreError> {
        self.store
            .find_all()
            .await
            .map(|notes| notes.into_iter().map(NoteResponse::from).collect())
    }
}
