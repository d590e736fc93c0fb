//! Candidate file-name generation - the naming convention lives here.
//!
//! Pure function from (object path, policy, options) to an ordered,
//! deduplicated list of relative file names, most specific first. The
//! resolver probes them in exactly this order, so the sequence produced
//! here *is* the priority contract other tooling relies on.

use std::collections::HashSet;

use crate::path::ObjectPath;
use crate::policy::SearchPolicy;
use crate::types::{FileKind, SearchOptions};

/// One generated file name, in priority order, considered during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// File name relative to the schema directory.
    pub file_name: String,
    /// Suffix-implied kind, reported back to the caller on a match.
    pub kind: FileKind,
}

/// Generate the ordered candidate list for an object under a policy.
///
/// Candidate stems are produced in priority order:
///
/// 1. Custom patterns, in the order configured.
/// 2. The base name (`Class.member` or bare `member`) - most specific
///    standard candidate, no path context.
/// 3. Progressive path context: windows over the trailing path segments,
///    smallest window first. Nearer namespace context disambiguates
///    same-named classes in different modules while keeping file names
///    short for the common case.
/// 4. The bare member name, when a class is present - supports schema files
///    shared across overloads with the same leaf name.
/// 5. The fully-qualified identifier, always dot-joined regardless of
///    policy separators. Guaranteed present: the escape hatch for naming
///    conventions that predate policy configuration. With
///    `include_package_name` it is promoted to sit between steps 3 and 4;
///    otherwise it comes strictly last.
///
/// Each stem then expands to file names honoring `options.kinds` order,
/// variant forms before plain forms. The final list is deduplicated by
/// string equality, keeping the first (highest-priority) occurrence.
pub fn generate_candidates(
    path: &ObjectPath,
    policy: &SearchPolicy,
    options: &SearchOptions,
) -> Vec<Candidate> {
    let mut stems: Vec<String> = Vec::new();

    // 1. Custom patterns
    for template in &policy.custom_patterns {
        stems.push(render_template(template, path));
    }

    // 2. Base name
    let base = match path.class_name() {
        Some(class) => policy
            .path_to_class_separator
            .join([class, path.member_name()]),
        None => path.member_name().to_string(),
    };
    stems.push(base.clone());

    // 3. Progressive path-context expansion
    let segments = path.path_segments();
    if policy.include_path_to_file && !segments.is_empty() {
        for window in 1..=segments.len() {
            let context = &segments[segments.len() - window..];
            let parts = context.iter().map(String::as_str).chain([base.as_str()]);
            stems.push(policy.path_to_file_separator.join(parts));
        }
    }

    // 5/6. Fully-qualified fallback, promoted or appended last
    let qualified = path.qualified_name();
    if policy.include_package_name {
        stems.push(qualified);
        // 4. Member-only fallback
        if path.class_name().is_some() {
            stems.push(path.member_name().to_string());
        }
    } else {
        if path.class_name().is_some() {
            stems.push(path.member_name().to_string());
        }
        stems.push(qualified);
    }

    expand_stems(&stems, options)
}

/// Substitute placeholders in a custom pattern template.
fn render_template(template: &str, path: &ObjectPath) -> String {
    template
        .replace("{object_name}", &path.qualified_name())
        .replace("{class_name}", path.class_name().unwrap_or(""))
        .replace("{method_name}", path.member_name())
        .replace("{package_name}", &path.package_path())
}

/// Expand stems into suffixed file names, deduplicated with first-seen
/// order preserved.
fn expand_stems(stems: &[String], options: &SearchOptions) -> Vec<Candidate> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();

    let mut push = |file_name: String, kind: FileKind| {
        if seen.insert(file_name.clone()) {
            candidates.push(Candidate { file_name, kind });
        }
    };

    for stem in stems {
        if let Some(variant) = &options.variant {
            for kind in &options.kinds {
                push(format!("{stem}.{variant}{}", kind.suffix()), *kind);
            }
        }
        for kind in &options.kinds {
            push(format!("{stem}{}", kind.suffix()), *kind);
        }
    }

    candidates
}
