//! Reading and writing sign index files.
//!
//! Two formats are supported:
//! - JSON, the combined index published alongside the translator
//!   (`{ "signs": {...}, "index": {...}, "generatedAt", "totalSigns", "totalWords" }`)
//! - `MessagePack`, the same document in compact binary form
//!
//! File functions pick the format from the extension: `.json` is JSON,
//! anything else is `MessagePack`.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use nzsl_foundation::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::index::SignIndex;
use crate::record::{SignId, SignRecord};

/// On-disk shape of a combined sign index.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexFile {
    /// Records keyed by id.
    #[serde(default)]
    pub signs: BTreeMap<SignId, SignRecord>,
    /// Word to sign ids.
    #[serde(default)]
    pub index: BTreeMap<String, Vec<SignId>>,
    /// When the index was generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    /// Number of signs, as recorded by the generator.
    #[serde(default)]
    pub total_signs: usize,
    /// Number of words, as recorded by the generator.
    #[serde(default)]
    pub total_words: usize,
}

impl From<&SignIndex> for IndexFile {
    fn from(index: &SignIndex) -> Self {
        Self {
            signs: index.signs().clone(),
            index: index.words().clone(),
            generated_at: index.generated_at().map(str::to_string),
            total_signs: index.sign_count(),
            total_words: index.word_count(),
        }
    }
}

impl From<IndexFile> for SignIndex {
    fn from(file: IndexFile) -> Self {
        SignIndex::from_parts(file.signs, file.index, file.generated_at)
    }
}

/// Parses a JSON index document.
///
/// `source` names the document in error messages.
///
/// # Errors
///
/// Returns a serialization error with line and column if the JSON is invalid.
pub fn from_json_str(source: &str, json: &str) -> Result<SignIndex> {
    let file: IndexFile = serde_json::from_str(json).map_err(|e| json_error(source, &e))?;
    Ok(file.into())
}

/// Renders an index as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(index: &SignIndex) -> Result<String> {
    serde_json::to_string_pretty(&IndexFile::from(index))
        .map_err(|e| Error::serialization(e.to_string()))
}

/// Parses a JSON array of sign records, as exported by Signbank, and indexes it.
///
/// # Errors
///
/// Returns a serialization error with line and column if the JSON is invalid.
pub fn records_from_json(source: &str, json: &str) -> Result<SignIndex> {
    let records: Vec<SignRecord> =
        serde_json::from_str(json).map_err(|e| json_error(source, &e))?;
    Ok(SignIndex::from_records(records))
}

/// Serializes an index to `MessagePack`.
///
/// Uses named serialization so field names survive.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(index: &SignIndex) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(&IndexFile::from(index))
        .map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes an index from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<SignIndex> {
    let file: IndexFile =
        rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))?;
    Ok(file.into())
}

/// Saves an index, as JSON for `.json` paths and `MessagePack` otherwise.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_to_file<P: AsRef<Path>>(index: &SignIndex, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = if is_json(path) {
        to_json(index)?.into_bytes()
    } else {
        to_bytes(index)?
    };

    let file = File::create(path).map_err(|e| {
        Error::io(format!("failed to create file '{}': {e}", path.display()))
    })?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(|e| {
        Error::io(format!("failed to write to file '{}': {e}", path.display()))
    })?;
    writer.flush().map_err(|e| {
        Error::io(format!("failed to flush file '{}': {e}", path.display()))
    })?;

    Ok(())
}

/// Loads an index, as JSON for `.json` paths and `MessagePack` otherwise.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SignIndex> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::io(format!("failed to open file '{}': {e}", path.display())))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())))?;

    let index = if is_json(path) {
        let text = String::from_utf8(bytes).map_err(|e| {
            Error::serialization(format!("'{}' is not UTF-8: {e}", path.display()))
        })?;
        from_json_str(&path.display().to_string(), &text)?
    } else {
        from_bytes(&bytes)?
    };

    info!(
        path = %path.display(),
        signs = index.sign_count(),
        words = index.word_count(),
        "loaded sign index"
    );
    Ok(index)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn json_error(source: &str, e: &serde_json::Error) -> Error {
    Error::serialization(e.to_string()).with_context(
        ErrorContext::new()
            .with_source(source)
            .with_position(e.line(), e.column()),
    )
}
