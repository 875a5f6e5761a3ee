//! Booking upload route.
//!
//! The handler owns protocol concerns only: multipart extraction, UTF-8
//! decoding, and mapping core failures to status codes. Sequencing itself
//! lives in [`crate::boarding`].

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Json;

use crate::boarding::{self, BoardingEntry, BoardingError};
use crate::state::AppState;

/// Multipart field name the booking file is uploaded under.
const UPLOAD_FIELD: &str = "file";

const DEFAULT_UPLOAD_LIMIT_BYTES: usize = 1024 * 1024;

/// Upload body cap in bytes, from `UPLOAD_LIMIT_BYTES` when set.
#[must_use]
pub fn upload_limit_bytes() -> usize {
    std::env::var("UPLOAD_LIMIT_BYTES")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_UPLOAD_LIMIT_BYTES)
}

/// `POST /api/sequence` — upload a booking file, respond with the boarding
/// order as a JSON array of `{seq, bookingId}` entries.
pub async fn sequence_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Vec<BoardingEntry>>, StatusCode> {
    let text = read_upload_text(multipart).await?;

    let entries = boarding::sequence_text(&text, &state.priority).map_err(boarding_error_to_status)?;

    tracing::info!(entries = entries.len(), "sequenced booking upload");
    Ok(Json(entries))
}

/// Pull the UTF-8 payload of the booking file field out of a multipart body.
async fn read_upload_text(mut multipart: Multipart) -> Result<String, StatusCode> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!(error = %e, "malformed multipart upload");
        StatusCode::BAD_REQUEST
    })? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        return field.text().await.map_err(|e| {
            tracing::warn!(error = %e, "upload field was not valid UTF-8 text");
            StatusCode::BAD_REQUEST
        });
    }

    tracing::warn!(field = UPLOAD_FIELD, "upload missing booking file field");
    Err(StatusCode::BAD_REQUEST)
}

pub(crate) fn boarding_error_to_status(err: BoardingError) -> StatusCode {
    match err {
        BoardingError::NoValidBookings => StatusCode::BAD_REQUEST,
    }
}

#[cfg(test)]
#[path = "boarding_test.rs"]
mod tests;
