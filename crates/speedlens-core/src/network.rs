//! # Network Request Domain Types
//!
//! The captured request model rendered by the request-details panel.
//!
//! These types are the shared vocabulary between:
//! - `speedlens-core::capture` (parsing capture files)
//! - `speedlens-app` (details panel state and reload matching)
//! - `speedlens-tui` (pillbox and details rendering)
//!
//! ## Capture Assumptions
//!
//! - **Timestamps are `f64` milliseconds** relative to the capture start.
//! - **Content length is signed**: any negative value means "unknown".
//! - **Headers keep document order**: [`HeaderMap`] is a list of pairs, not a
//!   hash map, so the panel shows headers exactly as they were captured.

use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ── NetworkResource ───────────────────────────────────────────────────────────

/// A single captured network request and its response.
///
/// Read-only from the UI's point of view: a new capture replaces the whole
/// value rather than mutating fields in place.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NetworkResource {
    /// Identifier unique within one capture. Used to match requests on reload.
    pub id: String,
    /// Full request URL.
    pub url: String,
    /// HTTP method: GET, POST, PUT, ...
    #[serde(default = "default_method")]
    pub method: String,
    /// HTTP status code. 0 when the request never got a response.
    #[serde(default)]
    pub status_code: i32,
    /// Response mime type.
    #[serde(default)]
    pub mime_type: String,
    /// Whether the response was served from cache.
    #[serde(default)]
    pub cached: bool,
    /// Response body length in bytes. Negative when unknown.
    #[serde(default = "unknown_content_length")]
    pub content_length: i64,
    /// Request start (ms).
    pub start_time: f64,
    /// First response byte (ms). Meaningless when `did_fail` is set.
    #[serde(default)]
    pub response_received_time: f64,
    /// Request end (ms).
    pub end_time: f64,
    /// Whether the request failed before a response arrived.
    #[serde(default)]
    pub did_fail: bool,
    #[serde(default)]
    pub request_headers: Option<HeaderMap>,
    #[serde(default)]
    pub response_headers: Option<HeaderMap>,
    /// Advisory findings for this request. `None` until analysis produced any.
    #[serde(default)]
    pub hint_records: Option<Vec<HintRecord>>,
}

fn default_method() -> String {
    "GET".to_string()
}

fn unknown_content_length() -> i64 {
    -1
}

impl NetworkResource {
    /// Total request duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Content length for display: empty when unknown, `"<n> bytes"` otherwise.
    pub fn content_length_display(&self) -> String {
        if self.content_length < 0 {
            String::new()
        } else {
            format!("{} bytes", self.content_length)
        }
    }

    /// Hint records, if analysis attached any.
    pub fn hints(&self) -> Option<&[HintRecord]> {
        self.hint_records.as_deref()
    }

    /// Whether `other` describes the same request, ignoring hint records.
    ///
    /// Hint analysis runs after the request completes, so a reload often
    /// differs only in its hints.
    pub fn same_except_hints(&self, other: &NetworkResource) -> bool {
        self.id == other.id
            && self.url == other.url
            && self.method == other.method
            && self.status_code == other.status_code
            && self.mime_type == other.mime_type
            && self.cached == other.cached
            && self.content_length == other.content_length
            && self.start_time == other.start_time
            && self.response_received_time == other.response_received_time
            && self.end_time == other.end_time
            && self.did_fail == other.did_fail
            && self.request_headers == other.request_headers
            && self.response_headers == other.response_headers
    }
}

// ── HeaderMap ─────────────────────────────────────────────────────────────────

/// Ordered collection of header name/value pairs.
///
/// Deserializes from a JSON object (keeping document order) or from an array
/// of `[name, value]` pairs. Duplicate names are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(String, String)>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header, keeping insertion order.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Invoke `f` once per header, in order.
    pub fn for_each(&self, mut f: impl FnMut(&str, &str)) {
        for (name, value) in self.iter() {
            f(name, value);
        }
    }

    /// First value for `name`, compared case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HeaderMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Serialize for HeaderMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HeaderMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(HeaderMapVisitor)
    }
}

struct HeaderMapVisitor;

impl<'de> Visitor<'de> for HeaderMapVisitor {
    type Value = HeaderMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a header object or an array of [name, value] pairs")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut headers = HeaderMap::new();
        while let Some((name, value)) = access.next_entry::<String, String>()? {
            headers.insert(name, value);
        }
        Ok(headers)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut headers = HeaderMap::new();
        while let Some((name, value)) = access.next_element::<(String, String)>()? {
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

// ── Hint records ──────────────────────────────────────────────────────────────

/// How urgent a hint is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HintSeverity {
    Critical,
    Warning,
    #[default]
    Info,
}

impl HintSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            HintSeverity::Critical => "Critical",
            HintSeverity::Warning => "Warning",
            HintSeverity::Info => "Info",
        }
    }
}

/// An advisory finding (e.g. a performance suggestion) attached to a request.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HintRecord {
    /// Name of the rule that produced this hint.
    pub rule: String,
    #[serde(default)]
    pub severity: HintSeverity,
    #[serde(default)]
    pub description: String,
    /// When the rule fired (ms).
    #[serde(default)]
    pub timestamp: f64,
}

impl HintRecord {
    /// Key identifying this hint across refreshes.
    pub fn key(&self) -> String {
        format!("{}@{}", self.rule, self.timestamp)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
