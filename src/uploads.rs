//! Photo file store.
//!
//! Photos live flat in one directory, named `<date>_<sanitized original>`.
//! Only `png`, `jpg` and `jpeg` uploads are accepted; anything else is
//! dropped by the caller without an error.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use unicode_normalization::UnicodeNormalization;

/// Extensions accepted for photo uploads, compared case-insensitively.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Returns whether the text after the last `.` is an allowed extension.
pub fn is_allowed(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// Reduces a client-supplied filename to a safe single path component.
///
/// The name is NFKD-decomposed so accented and full-width letters keep their
/// ASCII base, then remaining non-ASCII characters are dropped. Path
/// separators become spaces, runs of whitespace become a single `_`, and
/// anything outside `[A-Za-z0-9_.-]` is removed. Leading and trailing `.` and `_` are trimmed, so the result can
/// never be `..` or start with a dot. May return an empty string.
pub fn secure_filename(filename: &str) -> String {
    let ascii: String = filename
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");

    joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect::<String>()
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}

/// Storage name for a photo uploaded on `date`, or `None` if the original
/// name is not an allowed image or sanitizes to nothing.
pub fn stored_name(date: NaiveDate, original: &str) -> Option<String> {
    if !is_allowed(original) {
        return None;
    }
    let safe = secure_filename(original);
    if safe.is_empty() {
        return None;
    }
    Some(format!("{}_{}", date.format("%Y-%m-%d"), safe))
}

#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Writes `bytes` under `name`, replacing any file already there.
    pub async fn save(&self, name: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
        let path = self.dir.join(name);
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }
}
