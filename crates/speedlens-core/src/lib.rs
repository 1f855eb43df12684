//! # speedlens-core - Core Domain Types
//!
//! Foundation crate for speedlens. Provides the captured-request model, timeline
//! event codes, capture-file loading, time formatting, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Network Requests (`network`)
//! - [`NetworkResource`] - A captured request/response with timings and headers
//! - [`HeaderMap`] - Ordered header name/value pairs
//! - [`HintRecord`], [`HintSeverity`] - Advisory findings attached to a request
//!
//! ### Timeline Events (`event_record`)
//! - [`EventRecordType`] - Integer type codes for timeline event records
//! - [`EventRecord`] - A single captured timeline event
//! - [`summarize_by_type()`] - Per-type counts and total durations
//!
//! ### Captures (`capture`)
//! - [`Capture`] - Everything read from one capture file
//! - [`load_capture()`] - Read and validate a capture file
//!
//! ### Formatting (`format`)
//! - [`format_milliseconds()`], [`format_time_span()`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use speedlens_core::prelude::*;
//! ```

pub mod capture;
pub mod error;
pub mod event_record;
pub mod format;
pub mod logging;
pub mod network;
pub mod prelude;

// Re-export commonly used types at crate root for convenience
pub use capture::{load_capture, Capture};
pub use error::{Error, Result};
pub use event_record::{summarize_by_type, EventRecord, EventRecordType, TypeSummary};
pub use format::{format_milliseconds, format_milliseconds_with_precision, format_time_span};
pub use network::{HeaderMap, HintRecord, HintSeverity, NetworkResource};
