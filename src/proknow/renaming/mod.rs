pub mod client;
pub mod error;
pub mod extract;
pub mod io;
pub mod model;
pub mod prompt;
pub mod reconcile;
pub mod report;
pub mod sync;

pub use error::{Result, SyncError};
