//! Video catalog loading
//!
//! Parses the plain-text catalog file that seeds the video library at
//! startup. The library is read-only once this module is done with it.

mod parser;

pub use parser::{load_catalog, parse_line};
