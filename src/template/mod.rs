//! Template system: fetch, substitution, and list composition.
//!
//! This module provides:
//! - A source seam for resolving template names to text
//! - A store applying the degrade-to-empty fetch policy
//! - The placeholder substitution engine ({{path}} markers) and the
//!   list composition rule
//!
//! # Example
//!
//! ```ignore
//! let source = MemoryTemplateSource::new();
//! source.insert("skills", "<ul>{{skillItems}}</ul>");
//! source.insert("skill_item", "<li>{{skill}}</li>");
//!
//! let store = TemplateStore::new(Arc::new(source));
//!
//! let parent = store.fetch("skills").await;
//! let item = store.fetch("skill_item").await;
//!
//! let html = compose_list(&item, &parent, &[json!("Go"), json!("Rust")], "skill");
//! assert_eq!(html, "<ul><li>Go</li><li>Rust</li></ul>");
//! ```

mod builtin;
mod compose;
mod directory_source;
mod memory_source;
mod source;
mod store;
mod substitution;

pub use builtin::builtin_source;
pub use compose::compose_list;
pub use directory_source::DirectoryTemplateSource;
pub use memory_source::MemoryTemplateSource;
pub use source::{SourceError, TemplateSource};
pub use store::TemplateStore;
pub use substitution::substitute;
