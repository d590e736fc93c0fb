//! Schema Locator
//!
//! Priority-ordered resolution of schema files for documented code objects.
//!
//! Documentation builds name their schema files after the objects they
//! document (`User.create.schema.json`, `catalog.ProductService.similar.json`).
//! This library turns a dotted object identifier and a declarative
//! [`SearchPolicy`] into an ordered list of candidate file names, probes a
//! schema directory and returns the first match - or a structured
//! [`Resolution::NotFound`] carrying everything that was tried.
//!
//! # Example
//!
//! ```
//! use schema_locator::{generate_candidates, ObjectPath, SearchOptions, SearchPolicy};
//!
//! let object = ObjectPath::method("mypackage.module.MyClass.method").unwrap();
//! let candidates = generate_candidates(&object, &SearchPolicy::default(), &SearchOptions::new());
//!
//! let names: Vec<&str> = candidates.iter().map(|c| c.file_name.as_str()).collect();
//! assert_eq!(
//!     names,
//!     [
//!         "MyClass.method.schema.json",
//!         "MyClass.method.json",
//!         "module.MyClass.method.schema.json",
//!         "module.MyClass.method.json",
//!         "method.schema.json",
//!         "method.json",
//!         "mypackage.module.MyClass.method.schema.json",
//!         "mypackage.module.MyClass.method.json",
//!     ]
//! );
//! ```
//!
//! # Candidate priority
//!
//! | Priority | Candidate stem | Source |
//! |----------|----------------|--------|
//! | 1 | custom patterns, configured order | `SearchPolicy::custom_patterns` |
//! | 2 | `Class.member` (or bare `member`) | base name |
//! | 3 | trailing path windows, shortest first | path-context expansion |
//! | 4 | bare `member` (methods only) | shared-overload fallback |
//! | 5 | full dotted identifier, always dot-joined | backward-compatible escape hatch |
//!
//! Each stem expands to `.schema.json` before `.json`, with an optional
//! requested variant (`stem.<variant>.schema.json`) ahead of both.
//!
//! Resolution itself is [`find_schema`]; reading a matched file is
//! [`load_schema`]. All inputs are immutable and safe to share across
//! parallel resolutions.

mod error;
mod loader;
mod path;
mod patterns;
mod policy;
mod resolver;
mod types;

pub use error::ResolveError;
pub use loader::{load_schema, load_schema_str};
pub use path::ObjectPath;
pub use patterns::{generate_candidates, Candidate};
pub use policy::SearchPolicy;
pub use resolver::{find_schema, Resolution, ResolvedSchema};
pub use types::{FileKind, PathSeparator, SearchOptions};
