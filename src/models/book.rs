//! Book record model and related types

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::AppError;

/// A stored book: every field except `id`, absent optionals left out.
pub type Record = Map<String, Value>;

/// The whole catalog, keyed by book id, in file order.
pub type Collection = IndexMap<String, Record>;

/// Book as submitted to `POST /add`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Book {
    /// Book identifier, used as the storage key
    #[serde(skip_serializing)]
    #[schema(example = "B001")]
    pub id: String,
    pub author: String,
    /// Author's home city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "pages must be greater than 0"))]
    pub pages: Option<i64>,
    pub genre: String,
    /// Rating in [0, 5)
    #[validate(range(min = 0.0, exclusive_max = 5.0, message = "rating must be >= 0 and < 5"))]
    pub rating: f64,
    /// ID of borrower if borrowed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borrowed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borrowed_date: Option<DateTime<Utc>>,
    /// When the book should be returned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl Book {
    pub fn status(&self) -> BookStatus {
        match self.borrowed_by.as_deref() {
            Some(borrower) if !borrower.is_empty() => BookStatus::Borrowed,
            _ => BookStatus::Available,
        }
    }

    /// Split into the storage key and the stored record. `id` is never
    /// serialized, so it only survives as the key.
    pub fn into_record(self) -> Result<(String, Record), serde_json::Error> {
        match serde_json::to_value(&self)? {
            Value::Object(record) => Ok((self.id, record)),
            other => Err(serde::ser::Error::custom(format!(
                "book serialized to {} instead of an object",
                other
            ))),
        }
    }
}

/// Lending status, derived from `borrowed_by` and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl BookStatus {
    pub fn of_record(record: &Record) -> Self {
        match record.get("borrowed_by") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => BookStatus::Available,
            Some(Value::String(s)) if s.is_empty() => BookStatus::Available,
            Some(_) => BookStatus::Borrowed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::Borrowed => "Borrowed",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Copy of a stored record with its `status` filled in.
pub fn with_status(mut record: Record) -> Record {
    let status = BookStatus::of_record(&record);
    record.insert("status".to_string(), Value::String(status.as_str().to_string()));
    record
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Fields accepted by `GET /sort`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Author,
    Genre,
    Rating,
    Status,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Title,
        SortField::Author,
        SortField::Genre,
        SortField::Rating,
        SortField::Status,
    ];

    /// Record key looked up when comparing
    pub fn key(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Author => "author",
            SortField::Genre => "genre",
            SortField::Rating => "rating",
            SortField::Status => "status",
        }
    }
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| {
                let valid: Vec<String> = SortField::ALL
                    .iter()
                    .map(|field| format!("'{}'", field.key()))
                    .collect();
                AppError::BadRequest(format!("invalid field select from [{}]", valid.join(", ")))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(AppError::BadRequest(
                "invalid order selecte between asc or desc".to_string(),
            )),
        }
    }
}

/// Sort query parameters, kept as raw strings so bad values get the
/// service's own 400 message rather than a deserialization error.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SortQuery {
    /// sort by title, author, genre, rating, status
    pub sort_by: String,
    /// asc or desc (default: asc)
    #[serde(default = "default_order")]
    pub order: String,
}

fn default_order() -> String {
    "asc".to_string()
}
