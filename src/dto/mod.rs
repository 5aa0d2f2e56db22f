use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Note;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NoteResponse {
    /// Note ID
    pub id: i64,
    /// Note text
    pub body: String,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            body: note.body,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    /// Note text, required
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    /// Note text, required
    pub body: Option<String>,
}

/// One entry of the route catalog returned at the API root.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RouteDescriptor {
    pub endpoint: String,
    pub method: String,
    /// Shape of the expected request body, if the route takes one
    pub body: Option<serde_json::Value>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Field-level validation errors, keyed by field name.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrorResponse {
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self {
            errors: HashMap::from([(
                field.to_string(),
                vec!["This field is required.".to_string()],
            )]),
        }
    }
}
