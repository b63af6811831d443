//! Output formatters for duplicate scan results.
//!
//! - [`text`] for the terminal: clusters and a summary line
//! - [`json`] for automation and scripting
//!
//! # Example
//!
//! ```no_run
//! use dupes::duplicates::{DuplicateFinder, LogObserver};
//! use dupes::output::TextOutput;
//! use std::path::PathBuf;
//!
//! let report = DuplicateFinder::with_defaults()
//!     .find_duplicates(&[PathBuf::from(".")], &mut LogObserver);
//! TextOutput::new(&report).write_to(&mut std::io::stdout()).unwrap();
//! ```

pub mod json;
pub mod text;

pub use json::{JsonOutput, JsonOutputError};
pub use text::{CollisionPrinter, TextOutput};
