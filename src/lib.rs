pub mod cli;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod query;

pub use error::ManifestError;
pub use manifest::{ManifestReader, ManifestRecord};
pub use query::Query;
