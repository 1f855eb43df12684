//! Prelude for common imports used throughout all speedlens crates

pub use crate::error::{Error, Result};
pub use tracing::{debug, error, info, trace, warn};
