//! Book catalog endpoints

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    models::book::{Book, Collection, Record, SortField, SortOrder, SortQuery},
    services::catalog::CreateOutcome,
};

use super::ValidatedJson;

/// Body of `POST /add`, for both a new book and an id already taken
#[derive(Debug, Serialize, ToSchema)]
pub struct AddBookResponse {
    pub message: String,
    /// Record already stored under the submitted id
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub book_detail: Option<Record>,
}

/// List the whole catalog, keyed by book id
#[utoipa::path(
    get,
    path = "/view",
    tag = "books",
    responses(
        (status = 200, description = "Every stored book, keyed by id, in file order"),
        (status = 500, description = "Catalog file missing or unreadable", body = ErrorResponse)
    )
)]
pub async fn view_books(State(state): State<crate::AppState>) -> AppResult<Json<Collection>> {
    let collection = state.services.catalog.list().await?;
    Ok(Json(collection))
}

/// Get one book by id
#[utoipa::path(
    get,
    path = "/book/{book_id}",
    tag = "books",
    params(
        ("book_id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Stored book with its derived status"),
        (status = 400, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<Record>> {
    let record = state.services.catalog.get(&book_id).await?;
    Ok(Json(record))
}

/// List books ordered by one field
#[utoipa::path(
    get,
    path = "/sort",
    tag = "books",
    params(SortQuery),
    responses(
        (status = 200, description = "Stored books in order, without their ids"),
        (status = 400, description = "Invalid sort field or order", body = ErrorResponse),
        (status = 422, description = "Missing sort_by", body = ErrorResponse)
    )
)]
pub async fn sort_books(
    State(state): State<crate::AppState>,
    query: Result<Query<SortQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Record>>> {
    let Query(query) = query.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let field: SortField = query.sort_by.parse()?;
    let order: SortOrder = query.order.parse()?;

    let records = state.services.catalog.sort(field, order).await?;
    Ok(Json(records))
}

/// Add a book
///
/// A book whose id is already stored is not overwritten; the response still
/// carries 201 and echoes the stored record.
#[utoipa::path(
    post,
    path = "/add",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created, or already in the catalog", body = AddBookResponse),
        (status = 422, description = "Invalid book", body = ErrorResponse),
        (status = 500, description = "Catalog file could not be read or written", body = ErrorResponse)
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    ValidatedJson(book): ValidatedJson<Book>,
) -> AppResult<(StatusCode, Json<AddBookResponse>)> {
    let body = match state.services.catalog.create(book).await? {
        CreateOutcome::Created => AddBookResponse {
            message: "book created sucessfully".to_string(),
            book_detail: None,
        },
        CreateOutcome::AlreadyExists(existing) => AddBookResponse {
            message: "book is in database".to_string(),
            book_detail: Some(existing),
        },
    };
    Ok((StatusCode::CREATED, Json(body)))
}
