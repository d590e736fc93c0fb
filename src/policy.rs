//! Declarative naming policy for schema file search.
//!
//! The policy is populated once from the documentation build's configuration
//! and then shared, read-only, across every resolution in the build.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::PathSeparator;

/// Configuration describing which identifier parts participate in candidate
/// file names and which separators join them.
///
/// Immutable once constructed; the pattern generator treats it as read-only
/// context and it is safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPolicy {
    /// Promote the fully-qualified candidate ahead of the member-only
    /// fallback. Default `false`.
    pub include_package_name: bool,
    /// Generate candidates with progressively longer module-path context.
    /// Default `true`.
    pub include_path_to_file: bool,
    /// Separator joining path segments to the class/member portion.
    pub path_to_file_separator: PathSeparator,
    /// Separator between class and member.
    pub path_to_class_separator: PathSeparator,
    /// Template stems tried before all standard candidates, in order.
    ///
    /// Placeholders: `{object_name}` (full dotted identifier),
    /// `{class_name}` (class or empty), `{method_name}` (member),
    /// `{package_name}` (package and path segments, dot-joined).
    pub custom_patterns: Vec<String>,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            include_package_name: false,
            include_path_to_file: true,
            path_to_file_separator: PathSeparator::Dot,
            path_to_class_separator: PathSeparator::Dot,
            custom_patterns: Vec::new(),
        }
    }
}

impl SearchPolicy {
    /// Build a policy from a JSON configuration object.
    ///
    /// Reads `include_package_name`, `include_path_to_file`,
    /// `path_to_file_separator`, `path_to_class_separator` and
    /// `custom_patterns`. Missing keys, wrong-typed values and unknown
    /// separator strings fall back to the defaults rather than erroring:
    /// documentation builds treat the policy as an optional tuning knob and
    /// a typo should not take the build down.
    pub fn from_config_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let defaults = Self::default();

        let include_package_name = obj
            .get("include_package_name")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.include_package_name);

        let include_path_to_file = obj
            .get("include_path_to_file")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.include_path_to_file);

        let path_to_file_separator = obj
            .get("path_to_file_separator")
            .and_then(Value::as_str)
            .map(PathSeparator::parse)
            .unwrap_or(defaults.path_to_file_separator);

        let path_to_class_separator = obj
            .get("path_to_class_separator")
            .and_then(Value::as_str)
            .map(PathSeparator::parse)
            .unwrap_or(defaults.path_to_class_separator);

        let custom_patterns = obj
            .get("custom_patterns")
            .and_then(Value::as_array)
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            include_package_name,
            include_path_to_file,
            path_to_file_separator,
            path_to_class_separator,
            custom_patterns,
        }
    }
}
