mod embedded;

use embedded::migrations;

use async_trait::async_trait;
use thiserror::Error;
use tokio_postgres::{Client, NoTls};

use crate::models::Note;

/// Error surfaced by a note store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("note store unavailable: {0}")]
    Unavailable(#[from] tokio_postgres::Error),
}

/// Narrow persistence seam for note records. Lookups by id return `None`
/// for a missing record instead of failing.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn insert(&self, body: String) -> Result<Note, StoreError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Note>, StoreError>;
    async fn find_all(&self) -> Result<Vec<Note>, StoreError>;
    async fn update(&self, id: i64, body: String) -> Result<Option<Note>, StoreError>;
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}

pub struct Repository {
    client: Client,
}

impl Repository {
    pub async fn new(database_dsn: String) -> Result<Self, StoreError> {
        let (client, con) = tokio_postgres::connect(&database_dsn, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> Result<(), refinery::Error> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }
}

#[async_trait]
impl NoteStore for Repository {
    async fn insert(&self, body: String) -> Result<Note, StoreError> {
        let row = self
            .client
            .query_one(
                "INSERT INTO notes (body) VALUES ($1) RETURNING id, body, date_created",
                &[&body],
            )
            .await?;

        Ok(Note {
            id: row.get("id"),
            body: row.get("body"),
            date_created: row.get("date_created"),
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Note>, StoreError> {
        let row = self
            .client
            .query_opt(
                "SELECT id, body, date_created FROM notes WHERE id = $1",
                &[&id],
            )
            .await?;

        Ok(row.map(|row| Note {
            id: row.get("id"),
            body: row.get("body"),
            date_created: row.get("date_created"),
        }))
    }

    async fn find_all(&self) -> Result<Vec<Note>, StoreError> {
        let rows = self
            .client
            .query("SELECT id, body, date_created FROM notes ORDER BY id", &[])
            .await?;

        let mut vec: Vec<Note> = Vec::new();

        for row in rows {
            vec.push(Note {
                id: row.get("id"),
                body: row.get("body"),
                date_created: row.get("date_created"),
            });
        }

        Ok(vec)
    }

    async fn update(&self, id: i64, body: String) -> Result<Option<Note>, StoreError> {
        let row = self
            .client
            .query_opt(
                "UPDATE notes SET body = $1 WHERE id = $2 RETURNING id, body, date_created",
                &[&body, &id],
            )
            .await?;

        Ok(row.map(|row| Note {
            id: row.get("id"),
            body: row.get("body"),
            date_created: row.get("date_created"),
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let rows = self
            .client
            .execute("DELETE FROM notes WHERE id = $1", &[&id])
            .await?;

        Ok(rows == 1)
    }
}
