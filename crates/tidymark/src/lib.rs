//! # tidymark
//!
//! Clean up pasted HTML and restructure product-specification lists into
//! tables.
//!
//! Input is typically a fragment copied out of a word processor, CMS, or
//! email client: inline styles everywhere, presentation attributes on every
//! table, and product specifications flattened into bullet lists. The
//! pipeline strips the presentation noise, detects specification lists
//! heuristically, rewrites them as two-column tables, and can apply a fixed
//! visual-class vocabulary for preview rendering.
//!
//! ## Example
//!
//! ```rust
//! use tidymark::TidyService;
//!
//! let service = TidyService::new();
//!
//! let cleaned = service
//!     .sanitize_and_restructure(r#"<p style="color: blue">Hello</p>"#)
//!     .unwrap();
//! assert_eq!(cleaned, "<p>Hello</p>");
//! ```
//!
//! Specification lists under a matching heading become tables:
//!
//! ```rust
//! use tidymark::TidyService;
//!
//! let service = TidyService::new();
//! let cleaned = service
//!     .sanitize_and_restructure("<h2>Tech Specs</h2><ul><li>Weight: 1.5 lbs</li></ul>")
//!     .unwrap();
//! assert!(cleaned.contains("<table>"));
//! assert!(cleaned.contains(r#"<td data-label="Specification">Weight</td>"#));
//! ```

mod classify;
pub mod html;
mod sanitize;
mod service;
mod style;
mod table;
mod tags;

pub use html::parse;
pub use service::{TidyOptions, TidyService};
pub use tidymark_core::{dump, serialize, serialize_node, Document, Element, Node};

/// Error type for tidymark operations.
#[derive(Debug, thiserror::Error)]
pub enum TidyError {
    /// The input was empty or whitespace-only; nothing was parsed.
    #[error("input is empty")]
    EmptyInput,

    /// The adapter could not produce any tree from the input.
    #[error("markup could not be parsed: {0}")]
    Parse(String),

    /// A transformation produced structurally empty output from non-empty
    /// input. Signals a pipeline defect rather than a user error.
    #[error("transformation produced empty output")]
    EmptyResult,
}

pub type Result<T> = std::result::Result<T, TidyError>;
