//! # tidymark-core
//!
//! Element tree and HTML serialization for the tidymark cleanup pipeline.
//!
//! This crate defines the owned tree the pipeline stages mutate, plus the
//! serializer that turns a tree back into markup and a read-only diagnostic
//! dump. It deliberately carries no parser dependency: any parser that can
//! produce [`Document`]s can drive the pipeline.
//!
//! # Architecture
//!
//! ```text
//! HTML String ──parse (tidymark)──▶ ┌──────────────┐
//!                                   │ Element tree │ ──▶ HTML String
//! Pipeline stages ───mutate────────▶│              │
//!                                   └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use tidymark_core::{serialize, Document, Element, Node};
//!
//! let mut paragraph = Element::new("p");
//! paragraph.push_child(Node::text("Hello World"));
//!
//! let mut document = Document::new();
//! document.push_child(Node::Element(paragraph));
//!
//! assert_eq!(serialize(&document), "<p>Hello World</p>");
//! ```

mod dump;
mod node;
mod serialize;

pub use dump::dump;
pub use node::{Document, Element, Node};
pub use serialize::{serialize, serialize_node};
