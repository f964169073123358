//! Document input and result output.
//!
//! - [`extract`] turns a `.txt` or zip-packaged markup document into one text blob
//! - [`output`] writes a ranked discovery report as JSON

pub mod extract;
pub mod output;

pub use extract::{DocumentKind, ExtractError, extract_text};
pub use output::{OutputError, render_report, write_report};
