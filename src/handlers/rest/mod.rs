use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use serde_json::json;
use utoipa::OpenApi;

use std::sync::Arc;

use crate::{
    dto::{
        CreateNoteRequest, ErrorResponse, NoteResponse, RouteDescriptor, UpdateNoteRequest,
        ValidationErrorResponse,
    },
    service::NoteService,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        get_routes,
        get_all_notes,
        get_one_note,
        create_note,
        update_note,
        delete_note
    ),
    components(schemas(
        NoteResponse,
        CreateNoteRequest,
        UpdateNoteRequest,
        RouteDescriptor,
        ErrorResponse,
        ValidationErrorResponse
    )),
    tags(
        (name = "notes", description = "Notes management API")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Catalog of supported routes", body = Vec<RouteDescriptor>)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_routes() -> Response {
    let routes = vec![
        RouteDescriptor {
            endpoint: "/notes/".to_string(),
            method: "GET".to_string(),
            body: None,
            description: "Returns an array of notes".to_string(),
        },
        RouteDescriptor {
            endpoint: "/notes/{id}/".to_string(),
            method: "GET".to_string(),
            body: None,
            description: "Returns a single note object".to_string(),
        },
        RouteDescriptor {
            endpoint: "/notes/create/".to_string(),
            method: "POST".to_string(),
            body: Some(json!({"body": ""})),
            description: "Creates a new note with data sent in the request body".to_string(),
        },
        RouteDescriptor {
            endpoint: "/notes/{id}/update/".to_string(),
            method: "PUT".to_string(),
            body: Some(json!({"body": ""})),
            description: "Updates an existing note with data sent in the request body".to_string(),
        },
        RouteDescriptor {
            endpoint: "/notes/{id}/delete/".to_string(),
            method: "DELETE".to_string(),
            body: None,
            description: "Deletes an existing note".to_string(),
        },
    ];

    (StatusCode::OK, Json(routes)).into_response()
}

#[utoipa::path(
    get,
    path = "/notes/",
    responses(
        (status = 200, description = "List of all notes", body = Vec<NoteResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_all_notes(State(service): State<Arc<NoteService>>) -> Response {
    match service.get_all_notes().await {
        Ok(notes) => (StatusCode::OK, Json(notes)).into_response(),
        Err(e) => {
            tracing::error!("failed to get note entries: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to get all notes".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/notes/{id}/",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note found", body = NoteResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_one_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
) -> Response {
    match service.get_one_note(id).await {
        Ok(Some(note)) => (StatusCode::OK, Json(note)).into_response(),
        Ok(None) => not_found(),
        Err(e) => {
            tracing::error!("failed to get note entry: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to get note".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/notes/create/",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created successfully", body = NoteResponse),
        (status = 400, description = "Validation error", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(
    State(service): State<Arc<NoteService>>,
    Json(payload): Json<CreateNoteRequest>,
) -> Response {
    let Some(body) = payload.body else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorResponse::missing_field("body")),
        )
            .into_response();
    };

    match service.create_note(body).await {
        Ok(note) => (StatusCode::CREATED, Json(note)).into_response(),
        Err(e) => {
            tracing::error!("failed to create note entry: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create note".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    put,
    path = "/notes/{id}/update/",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated successfully", body = NoteResponse),
        (status = 400, description = "Validation error", body = ValidationErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn update_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateNoteRequest>,
) -> Response {
    // Validation failures must not touch the store
    let Some(body) = payload.body else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorResponse::missing_field("body")),
        )
            .into_response();
    };

    match service.update_note(id, body).await {
        Ok(Some(note)) => (StatusCode::OK, Json(note)).into_response(),
        Ok(None) => not_found(),
        Err(e) => {
            tracing::error!("failed to update note entry: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update note".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/notes/{id}/delete/",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note deleted successfully", body = String),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn delete_note(State(service): State<Arc<NoteService>>, Path(id): Path<i64>) -> Response {
    match service.delete_note(id).await {
        Ok(true) => (StatusCode::OK, Json("Note was deleted!")).into_response(),
        Ok(false) => not_found(),
        Err(e) => {
            tracing::error!("failed to delete note entry: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to delete note".to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Note not found".to_string(),
        }),
    )
        .into_response()
}
