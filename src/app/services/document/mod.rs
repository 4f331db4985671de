//! Invoice document output
//!
//! The document renderer proper (PDF page layout) is an external
//! collaborator; this module feeds it. It writes the structured invoice
//! batch as a plain text document and as a JSON export that downstream
//! renderers consume.

pub mod writer;

pub use writer::{DocumentFormat, InvoiceWriter};
