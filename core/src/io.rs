#![deny(missing_docs)]

//! # Document I/O
//!
//! YAML/JSON loading and rendering of [`Document`]s (and of any other serde
//! type, such as filter configuration).

use crate::error::{AppError, AppResult};
use crate::model::Document;
use derive_more::Display;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serialization format of a document on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DocumentFormat {
    /// JSON.
    #[display("json")]
    Json,
    /// YAML.
    #[display("yaml")]
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from a file extension: `.yaml`/`.yml` is YAML,
    /// anything else JSON.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("json");
        match ext.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Parses `content` in the given format.
pub fn parse_str<T: DeserializeOwned>(content: &str, format: DocumentFormat) -> AppResult<T> {
    match format {
        DocumentFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| AppError::Parse(format!("Failed to parse YAML: {}", e))),
        DocumentFormat::Json => serde_json::from_str(content)
            .map_err(|e| AppError::Parse(format!("Failed to parse JSON: {}", e))),
    }
}

/// Renders `value` in the given format. JSON output is pretty-printed.
pub fn render<T: Serialize>(value: &T, format: DocumentFormat) -> AppResult<String> {
    match format {
        DocumentFormat::Yaml => serde_yaml::to_string(value)
            .map_err(|e| AppError::Parse(format!("YAML serialization failed: {}", e))),
        DocumentFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| AppError::Parse(format!("JSON serialization failed: {}", e))),
    }
}

/// Reads and parses a file, choosing the format from its extension.
pub fn load<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let content = fs::read_to_string(path)?;
    parse_str(&content, DocumentFormat::from_path(path))
}

impl Document {
    /// Parses a YAML document.
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        parse_str(content, DocumentFormat::Yaml)
    }

    /// Parses a JSON document.
    pub fn from_json_str(content: &str) -> AppResult<Self> {
        parse_str(content, DocumentFormat::Json)
    }

    /// Renders the document as YAML.
    pub fn to_yaml_string(&self) -> AppResult<String> {
        render(self, DocumentFormat::Yaml)
    }

    /// Renders the document as pretty-printed JSON.
    pub fn to_json_string(&self) -> AppResult<String> {
        render(self, DocumentFormat::Json)
    }
}
