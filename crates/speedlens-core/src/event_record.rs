//! Timeline event records and their integer type codes.
//!
//! Type codes are the wire representation in capture files; the TUI maps them
//! to chart colors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Known timeline event kinds with their stable integer codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum EventRecordType {
    DomEvent = 0,
    Layout = 1,
    RecalcStyle = 2,
    Paint = 3,
    ParseHtml = 4,
    TimerInstalled = 5,
    TimerCleared = 6,
    TimerFired = 7,
    XhrReadyStateChange = 8,
    XhrLoad = 9,
    EvalScript = 10,
    LogMessage = 11,
    ResourceStart = 12,
    ResourceResponse = 13,
    ResourceFinish = 14,
    JavaScriptExecution = 15,
    ResourceDataReceived = 16,
    GarbageCollect = 17,
    JavaScriptCompile = 18,
    DomEventDispatch = 19,
    DomBinding = 20,
    MouseHoverStyle = 21,
}

impl EventRecordType {
    pub const ALL: [EventRecordType; 22] = [
        EventRecordType::DomEvent,
        EventRecordType::Layout,
        EventRecordType::RecalcStyle,
        EventRecordType::Paint,
        EventRecordType::ParseHtml,
        EventRecordType::TimerInstalled,
        EventRecordType::TimerCleared,
        EventRecordType::TimerFired,
        EventRecordType::XhrReadyStateChange,
        EventRecordType::XhrLoad,
        EventRecordType::EvalScript,
        EventRecordType::LogMessage,
        EventRecordType::ResourceStart,
        EventRecordType::ResourceResponse,
        EventRecordType::ResourceFinish,
        EventRecordType::JavaScriptExecution,
        EventRecordType::ResourceDataReceived,
        EventRecordType::GarbageCollect,
        EventRecordType::JavaScriptCompile,
        EventRecordType::DomEventDispatch,
        EventRecordType::DomBinding,
        EventRecordType::MouseHoverStyle,
    ];

    /// Look up a type by its wire code.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.code() == code)
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Human-readable name shown in the legend.
    pub fn label(self) -> &'static str {
        match self {
            EventRecordType::DomEvent => "DOM Event",
            EventRecordType::Layout => "Layout",
            EventRecordType::RecalcStyle => "Style Recalculation",
            EventRecordType::Paint => "Paint",
            EventRecordType::ParseHtml => "Parse HTML",
            EventRecordType::TimerInstalled => "Timer Installed",
            EventRecordType::TimerCleared => "Timer Cleared",
            EventRecordType::TimerFired => "Timer Fire",
            EventRecordType::XhrReadyStateChange => "XHR Ready State Change",
            EventRecordType::XhrLoad => "XHR Load",
            EventRecordType::EvalScript => "Script Evaluation",
            EventRecordType::LogMessage => "Log Message",
            EventRecordType::ResourceStart => "Resource Start",
            EventRecordType::ResourceResponse => "Resource Response",
            EventRecordType::ResourceFinish => "Resource Finish",
            EventRecordType::JavaScriptExecution => "JavaScript Callback",
            EventRecordType::ResourceDataReceived => "Resource Data Received",
            EventRecordType::GarbageCollect => "Garbage Collection",
            EventRecordType::JavaScriptCompile => "JavaScript Compile",
            EventRecordType::DomEventDispatch => "DOM Event Dispatch",
            EventRecordType::DomBinding => "DOM Binding",
            EventRecordType::MouseHoverStyle => "Mouse Hover Style",
        }
    }
}

/// Label for an arbitrary code, including unknown ones.
pub fn label_for_code(code: i32) -> String {
    match EventRecordType::from_code(code) {
        Some(t) => t.label().to_string(),
        None => format!("Other ({})", code),
    }
}

/// A single captured timeline event.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EventRecord {
    /// Wire type code; may be a code this build does not know.
    #[serde(rename = "type")]
    pub type_code: i32,
    /// Event start (ms).
    pub time: f64,
    /// Event duration (ms).
    #[serde(default)]
    pub duration: f64,
}

/// Aggregate of all events sharing one type code.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSummary {
    pub type_code: i32,
    pub count: usize,
    pub total_duration: f64,
}

/// Count and total duration per type code, longest total first.
///
/// Ties are broken by ascending type code so the legend order is stable.
pub fn summarize_by_type(events: &[EventRecord]) -> Vec<TypeSummary> {
    let mut by_code: BTreeMap<i32, TypeSummary> = BTreeMap::new();
    for event in events {
        let entry = by_code.entry(event.type_code).or_insert(TypeSummary {
            type_code: event.type_code,
            count: 0,
            total_duration: 0.0,
        });
        entry.count += 1;
        entry.total_duration += event.duration.max(0.0);
    }

    let mut summaries: Vec<TypeSummary> = by_code.into_values().collect();
    summaries.sort_by(|a, b| {
        b.total_duration
            .total_cmp(&a.total_duration)
            .then(a.type_code.cmp(&b.type_code))
    });
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(type_code: i32, duration: f64) -> EventRecord {
        EventRecord {
            type_code,
            time: 0.0,
            duration,
        }
    }

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for t in EventRecordType::ALL {
            assert_eq!(EventRecordType::from_code(t.code()), Some(t));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(EventRecordType::from_code(-1), None);
        assert_eq!(EventRecordType::from_code(9999), None);
        assert_eq!(label_for_code(9999), "Other (9999)");
        assert_eq!(label_for_code(3), "Paint");
    }

    #[test]
    fn test_event_record_uses_type_key() {
        let record: EventRecord =
            serde_json::from_str(r#"{"type": 1, "time": 4.0, "duration": 2.5}"#).unwrap();
        assert_eq!(record.type_code, EventRecordType::Layout.code());
    }

    #[test]
    fn test_summarize_by_type_orders_by_total_duration() {
        let events = vec![
            event(3, 1.0),
            event(1, 4.0),
            event(3, 2.0),
            event(42, 0.5),
        ];
        let summary = summarize_by_type(&events);
        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0].type_code, 1);
        assert_eq!(summary[1].type_code, 3);
        assert_eq!(summary[1].count, 2);
        assert!((summary[1].total_duration - 3.0).abs() < f64::EPSILON);
        assert_eq!(summary[2].type_code, 42);
    }

    #[test]
    fn test_summarize_ties_break_on_code() {
        let summary = summarize_by_type(&[event(7, 1.0), event(2, 1.0)]);
        assert_eq!(summary[0].type_code, 2);
        assert_eq!(summary[1].type_code, 7);
    }

    #[test]
    fn test_summarize_empty() {
        assert!(summarize_by_type(&[]).is_empty());
    }
}
