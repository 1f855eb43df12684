//! Capture file loading
//!
//! A capture is a JSON document holding the requests and timeline events
//! recorded during one profiling session:
//!
//! ```json
//! {
//!   "captured_at": "2026-10-17T09:30:00Z",
//!   "resources": [ { "id": "1", "url": "https://example.com/", "start_time": 0.0, "end_time": 12.0 } ],
//!   "events": [ { "type": 1, "time": 3.0, "duration": 1.5 } ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event_record::EventRecord;
use crate::network::NetworkResource;
use crate::prelude::*;

/// Everything read from one capture file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Capture {
    #[serde(default)]
    pub captured_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resources: Vec<NetworkResource>,
    #[serde(default)]
    pub events: Vec<EventRecord>,
}

impl Capture {
    /// Parse a capture document. Does not validate resource ids.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Id of the first resource that appears more than once, if any.
    pub fn duplicate_resource_id(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.resources
            .iter()
            .map(|r| r.id.as_str())
            .find(|id| !seen.insert(*id))
    }
}

/// Read, parse and validate a capture file.
///
/// Resource ids must be unique because reloads match requests by id.
pub fn load_capture(path: &Path) -> Result<Capture> {
    if !path.exists() {
        return Err(Error::capture_not_found(path));
    }

    let content = std::fs::read_to_string(path)?;
    let capture = Capture::from_json(&content)
        .map_err(|e| Error::capture_invalid(path, e.to_string()))?;

    if let Some(id) = capture.duplicate_resource_id() {
        return Err(Error::capture_invalid(
            path,
            format!("duplicate resource id '{}'", id),
        ));
    }

    debug!(
        "Loaded capture {:?}: {} resources, {} events",
        path,
        capture.resources.len(),
        capture.events.len()
    );
    Ok(capture)
}
