//! Vacation photo contest.
//!
//! The upload is read to the end before any reply is sent. Nothing is stored;
//! the entry is only logged.

use crate::error::AppError;
use crate::extractors::Page;
use crate::state::AppState;
use crate::views::View;
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, Path, State,
    },
    response::{Html, Redirect},
};
use chrono::Datelike;

/// Text fields and file metadata from one contest entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContestEntry {
    /// Plain form fields as `(name, value)`.
    pub fields: Vec<(String, String)>,
    /// Uploaded files.
    pub files: Vec<ReceivedFile>,
}

/// Metadata for one uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedFile {
    /// Form field the file came in.
    pub field: String,
    /// Client-supplied file name.
    pub file_name: String,
    /// Declared content type.
    pub content_type: Option<String>,
    /// Size in bytes.
    pub size: usize,
}

/// Why an upload could not be read.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// Not a multipart request at all.
    #[error("not a multipart request: {0}")]
    Rejected(#[from] MultipartRejection),
    /// Malformed, truncated, or over the size limit.
    #[error("malformed multipart body: {0}")]
    Malformed(#[from] MultipartError),
}

/// `GET /contest/vacation-photo`: the entry form for the current month.
pub async fn form(State(state): State<AppState>, page: Page) -> Result<Html<String>, AppError> {
    let now = state.clock.now();
    let view = View::VacationPhoto {
        year: now.year(),
        month: now.month(),
    };
    page.render(&state, view).await
}

/// `POST /contest/vacation-photo/:year/:month`
///
/// 303 to `/thank-you` once the whole body has been read, 303 to `/error` if
/// it could not be.
pub async fn submit(
    Path((year, month)): Path<(String, String)>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Redirect {
    match receive(multipart).await {
        Ok(entry) => {
            metrics::counter!("meadowlark.contest.submissions").increment(1);
            tracing::info!(
                %year,
                %month,
                fields = ?entry.fields,
                files = ?entry.files,
                "Received contest entry"
            );
            Redirect::to("/thank-you")
        }
        Err(error) => {
            tracing::warn!(%year, %month, %error, "Could not read contest entry");
            Redirect::to("/error")
        }
    }
}

async fn receive(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<ContestEntry, UploadError> {
    let mut multipart = multipart?;
    let mut entry = ContestEntry::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name().map(ToString::to_string) {
            Some(file_name) => {
                let content_type = field.content_type().map(ToString::to_string);
                let size = field.bytes().await?.len();
                entry.files.push(ReceivedFile {
                    field: name,
                    file_name,
                    content_type,
                    size,
                });
            }
            None => {
                let value = field.text().await?;
                entry.fields.push((name, value));
            }
        }
    }

    Ok(entry)
}
