//! Minimal note-taking backend: JSON CRUD over a single `notes` table,
//! plus a self-describing route catalog at the API root.

pub mod dto;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use std::sync::Arc;

use handlers::rest;
use service::NoteService;

/// Builds the API router with every note route wired to `service`.
pub fn router(service: Arc<NoteService>) -> Router {
    Router::new()
        .route("/", get(rest::get_routes))
        .route("/notes/", get(rest::get_all_notes))
        .route("/notes/create/", post(rest::create_note))
        .route("/notes/{id}/", get(rest::get_one_note))
        .route("/notes/{id}/update/", put(rest::update_note))
        .route("/notes/{id}/delete/", delete(rest::delete_note))
        .with_state(service)
}
