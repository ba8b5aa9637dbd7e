//! Parsing of the daily log form.

use axum::body::Bytes;
use axum::extract::Multipart;

use crate::error::AppResult;

/// Maps an HTML checkbox to a bool.
///
/// Browsers only send a checked checkbox, so a present field means `true`
/// whatever its value, and an absent one means `false`.
pub fn checkbox_flag(value: Option<&str>) -> bool {
    value.is_some()
}

/// A file part from the form. Only built when the browser sent a filename.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub filename: String,
    pub bytes: Bytes,
}

/// Normalized contents of a `POST /log` submission.
#[derive(Debug, Clone, Default)]
pub struct LogSubmission {
    pub am_done: bool,
    pub pm_done: bool,
    pub notes: String,
    pub photo: Option<PhotoUpload>,
}

impl LogSubmission {
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut am_done = None;
        let mut pm_done = None;
        let mut notes = None;
        let mut photo = None;

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_owned();
            match name.as_str() {
                "am_done" => am_done = Some(field.text().await?),
                "pm_done" => pm_done = Some(field.text().await?),
                "notes" => notes = Some(field.text().await?),
                "photo" => {
                    let filename = field.file_name().map(str::to_owned);
                    let bytes = field.bytes().await?;
                    // An empty file input still posts a part with filename="".
                    if let Some(filename) = filename.filter(|f| !f.is_empty()) {
                        photo = Some(PhotoUpload { filename, bytes });
                    }
                }
                other => tracing::debug!(field = other, "Ignoring unknown form field"),
            }
        }

        Ok(Self {
            am_done: checkbox_flag(am_done.as_deref()),
            pm_done: checkbox_flag(pm_done.as_deref()),
            notes: notes.unwrap_or_default(),
            photo,
        })
    }
}
