//! Core types for schema file resolution.

use serde::{Deserialize, Deserializer, Serialize};

/// Separator used when joining identifier parts into a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathSeparator {
    /// Join with `.` (the historical naming convention).
    #[default]
    #[serde(rename = ".")]
    Dot,
    /// Join with `/`, producing candidates in subdirectories.
    #[serde(rename = "/")]
    Slash,
    /// Concatenate without any separator.
    None,
}

impl PathSeparator {
    /// The literal string inserted between joined parts.
    pub fn as_str(&self) -> &'static str {
        match self {
            PathSeparator::Dot => ".",
            PathSeparator::Slash => "/",
            PathSeparator::None => "",
        }
    }

    /// Parse a configuration string.
    ///
    /// Accepts `"."`, `"/"` and `"none"` (case-insensitive). Anything else
    /// falls back to `Dot`, matching the tolerant behavior documentation
    /// builds expect from their configuration layer.
    pub fn parse(s: &str) -> Self {
        match s {
            "." => PathSeparator::Dot,
            "/" => PathSeparator::Slash,
            _ if s.eq_ignore_ascii_case("none") => PathSeparator::None,
            _ => PathSeparator::Dot,
        }
    }

    /// Join parts with this separator, skipping empty parts.
    pub fn join<I, S>(&self, parts: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::new();
        for part in parts {
            let part = part.as_ref();
            if part.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push_str(self.as_str());
            }
            out.push_str(part);
        }
        out
    }
}

impl<'de> Deserialize<'de> for PathSeparator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(PathSeparator::parse(&s))
    }
}

/// Kind of a candidate file, by suffix.
///
/// Determines how the caller treats the file contents: schema-typed files
/// are JSON Schemas eligible for synthetic example generation downstream,
/// plain-data files are rendered as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// `.schema.json` - contents are a JSON Schema.
    Schema,
    /// `.json` - contents are plain JSON data.
    Data,
}

impl FileKind {
    /// File-name suffix for this kind.
    pub fn suffix(&self) -> &'static str {
        match self {
            FileKind::Schema => ".schema.json",
            FileKind::Data => ".json",
        }
    }
}

/// Per-resolution options: requested variant and file-kind restriction.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Opaque discriminator inserted before the extension, selecting one of
    /// several named schemas for the same object
    /// (`stem.<variant>.schema.json`). Not validated.
    pub variant: Option<String>,
    /// File kinds to try, in order. Defaults to schema-typed before
    /// plain-data for every candidate stem.
    pub kinds: Vec<FileKind>,
}

impl SearchOptions {
    /// Default options: no variant, schema-typed suffix tried before
    /// plain-data.
    pub fn new() -> Self {
        Self {
            variant: None,
            kinds: vec![FileKind::Schema, FileKind::Data],
        }
    }

    /// Request a named variant of the schema.
    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Restrict (or reorder) the file kinds to probe.
    pub fn kinds(mut self, kinds: Vec<FileKind>) -> Self {
        self.kinds = kinds;
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::new()
    }
}
