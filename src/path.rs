//! Structural model of a dotted object identifier.
//!
//! A dotted identifier such as `perekrestok_api.endpoints.catalog.ProductService.similar`
//! carries four kinds of parts: a leading package, intermediate namespace
//! segments, an optional class, and the member name. The flat string alone
//! cannot say where one kind ends and the next begins, so the split is an
//! explicit input: [`ObjectPath::new`] takes the parts directly, while
//! [`ObjectPath::function`] and [`ObjectPath::method`] cover the two shapes
//! a documentation build can actually distinguish (it knows whether the
//! documented object is a module-level function or a method).

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// Parsed dotted identifier of a documented code object.
///
/// Immutable and cheap to clone; safe to share across concurrently running
/// resolutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectPath {
    package: Option<String>,
    path_segments: Vec<String>,
    class_name: Option<String>,
    member_name: String,
}

impl ObjectPath {
    /// Construct from explicit structural parts.
    ///
    /// This is the primary constructor: the caller knows which token is the
    /// package root and which is the class, and supplying that split here
    /// avoids re-deriving it from the flat string with naming heuristics.
    pub fn new(
        package: Option<String>,
        path_segments: Vec<String>,
        class_name: Option<String>,
        member_name: impl Into<String>,
    ) -> Self {
        Self {
            package,
            path_segments,
            class_name,
            member_name: member_name.into(),
        }
    }

    /// Parse the identifier of a module-level function.
    ///
    /// The last segment is the member name, the first is the package (when
    /// at least two segments are present), everything between is the module
    /// path. No class.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::MalformedIdentifier` if `identifier` is empty.
    /// Any other dotted string is accepted; a bare member name is valid.
    pub fn function(identifier: &str) -> Result<Self, ResolveError> {
        let mut parts = split_identifier(identifier)?;
        let member_name = parts.pop().unwrap_or_default();
        let package = if parts.is_empty() {
            None
        } else {
            Some(parts.remove(0))
        };
        Ok(Self {
            package,
            path_segments: parts,
            class_name: None,
            member_name,
        })
    }

    /// Parse the identifier of a method.
    ///
    /// Like [`ObjectPath::function`], but the second-to-last segment is the
    /// class name. `Class.method` alone is accepted (no package).
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::MalformedIdentifier` if `identifier` is empty.
    pub fn method(identifier: &str) -> Result<Self, ResolveError> {
        let mut parts = split_identifier(identifier)?;
        let member_name = parts.pop().unwrap_or_default();
        let class_name = parts.pop();
        let package = if parts.is_empty() {
            None
        } else {
            Some(parts.remove(0))
        };
        Ok(Self {
            package,
            path_segments: parts,
            class_name,
            member_name,
        })
    }

    /// Leading package segment, absent for top-level modules.
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    /// Intermediate namespace segments between package and class/member.
    pub fn path_segments(&self) -> &[String] {
        &self.path_segments
    }

    /// Class name, present only for methods.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Function or method name.
    pub fn member_name(&self) -> &str {
        &self.member_name
    }

    /// The full dotted identifier, reconstructed from the parts.
    ///
    /// Joining `package`, `path_segments`, `class_name` and `member_name`
    /// with `.` reproduces the string the path was parsed from exactly.
    pub fn qualified_name(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(package) = &self.package {
            parts.push(package);
        }
        for segment in &self.path_segments {
            parts.push(segment);
        }
        if let Some(class) = &self.class_name {
            parts.push(class);
        }
        parts.push(&self.member_name);
        parts.join(".")
    }

    /// Package and path segments joined with `.` (the `{package_name}`
    /// placeholder of custom patterns). Empty when neither is present.
    pub fn package_path(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(package) = &self.package {
            parts.push(package);
        }
        for segment in &self.path_segments {
            parts.push(segment);
        }
        parts.join(".")
    }
}

impl std::fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.qualified_name())
    }
}

/// Split a dotted identifier, rejecting only the empty string.
fn split_identifier(identifier: &str) -> Result<Vec<String>, ResolveError> {
    if identifier.is_empty() {
        return Err(ResolveError::MalformedIdentifier);
    }
    Ok(identifier.split('.').map(String::from).collect())
}
