use chrono::{DateTime, Utc};

/// Storage representation of a single note row.
#[derive(Debug, Clone)]
pub struct Note {
    pub id: i64,
    pub body: String,
    pub date_created: DateTime<Utc>,
}
