//! Rendered content of a details panel: the summary and header tables.
//!
//! Content is a plain model; the TUI turns it into styled lines. Each table
//! stripes its own rows, starting with an odd row.

use speedlens_core::{format_time_span, HeaderMap, NetworkResource};

use super::hint_tree::TreeLine;

pub const SUMMARY_TITLE: &str = "Summary";
pub const REQUEST_HEADERS_TITLE: &str = "Request Headers";
pub const RESPONSE_HEADERS_TITLE: &str = "Response Headers";

/// Response timing shown for failed requests.
pub const NO_RESPONSE: &str = "No response";

/// One name/value row of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub value: String,
    /// Rendered with the even-row stripe.
    pub even: bool,
}

/// Alternates odd/even per row. The first call returns `false` (odd).
#[derive(Debug)]
struct OddEvenIterator {
    even: bool,
}

impl Default for OddEvenIterator {
    fn default() -> Self {
        Self { even: true }
    }
}

impl OddEvenIterator {
    fn next(&mut self) -> bool {
        self.even = !self.even;
        self.even
    }
}

/// Two-column name/value table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameValueTable {
    rows: Vec<TableRow>,
}

impl NameValueTable {
    fn add_row_pair(&mut self, even: bool, name: impl Into<String>, value: impl Into<String>) {
        self.rows.push(TableRow {
            name: name.into(),
            value: value.into(),
            even,
        });
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.name == name)
            .map(|row| row.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A titled table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub table: NameValueTable,
}

/// Request, response and total timing strings of the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTimings {
    pub request: String,
    pub response: String,
    pub total: String,
}

impl RequestTimings {
    pub fn for_resource(info: &NetworkResource) -> Self {
        if info.did_fail {
            let span = format_time_span(info.start_time, info.end_time);
            Self {
                request: span.clone(),
                response: NO_RESPONSE.to_string(),
                total: format!("{} with an error", span),
            }
        } else {
            Self {
                request: format_time_span(info.start_time, info.response_received_time),
                response: format_time_span(info.response_received_time, info.end_time),
                total: format_time_span(info.start_time, info.end_time),
            }
        }
    }
}

/// Summary rows for a request.
pub fn summary_table(info: &NetworkResource) -> NameValueTable {
    let mut table = NameValueTable::default();
    let mut iter = OddEvenIterator::default();

    table.add_row_pair(iter.next(), "URL", info.url.as_str());
    table.add_row_pair(iter.next(), "From Cache", info.cached.to_string());
    table.add_row_pair(iter.next(), "Method", info.method.as_str());
    table.add_row_pair(iter.next(), "Http Status", info.status_code.to_string());
    table.add_row_pair(iter.next(), "Mime-type", info.mime_type.as_str());

    let timings = RequestTimings::for_resource(info);
    table.add_row_pair(iter.next(), "Total Bytes", info.content_length_display());
    table.add_row_pair(iter.next(), "Request Timing", timings.request);
    table.add_row_pair(iter.next(), "Response Timing", timings.response);
    table.add_row_pair(iter.next(), "Total Timing", timings.total);
    table
}

/// Header rows, in capture order. A missing collection yields an empty table.
pub fn header_table(headers: Option<&HeaderMap>) -> NameValueTable {
    let mut table = NameValueTable::default();
    if let Some(headers) = headers {
        let mut iter = OddEvenIterator::default();
        headers.for_each(|name, value| table.add_row_pair(iter.next(), name, value));
    }
    table
}

/// The panel's content container.
#[derive(Debug, Default)]
pub struct DetailContent {
    sections: Vec<Section>,
    hint_wrapper: bool,
}

impl DetailContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove everything previously rendered.
    pub fn clear(&mut self) {
        self.sections.clear();
        self.hint_wrapper = false;
    }

    /// Reserve the region the hint tree renders into.
    pub(super) fn add_hint_wrapper(&mut self) {
        self.hint_wrapper = true;
    }

    pub fn has_hint_wrapper(&self) -> bool {
        self.hint_wrapper
    }

    pub(super) fn add_section(&mut self, title: &'static str, table: NameValueTable) {
        self.sections.push(Section { title, table });
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Rows taken by the sections: one header line plus one line per row.
    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|s| 1 + s.table.len()).sum()
    }
}

/// One line of a panel, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentLine<'a> {
    Hint(TreeLine),
    SectionHeader(&'static str),
    Row(&'a TableRow),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_resource() -> NetworkResource {
        NetworkResource {
            id: "1".to_string(),
            url: "https://example.com/app.js".to_string(),
            method: "POST".to_string(),
            status_code: 201,
            mime_type: "application/json".to_string(),
            cached: true,
            content_length: 512,
            start_time: 0.0,
            response_received_time: 20.0,
            end_time: 50.0,
            did_fail: false,
            request_headers: None,
            response_headers: None,
            hint_records: None,
        }
    }

    #[test]
    fn test_timings_successful_request() {
        let timings = RequestTimings::for_resource(&make_resource());
        assert_eq!(timings.request, "@0ms for 20ms");
        assert_eq!(timings.response, "@20ms for 30ms");
        assert_eq!(timings.total, "@0ms for 50ms");
    }

    #[test]
    fn test_timings_failed_request() {
        let mut info = make_resource();
        info.did_fail = true;
        info.start_time = 10.0;
        info.end_time = 50.0;

        let timings = RequestTimings::for_resource(&info);
        assert_eq!(timings.request, "@10ms for 40ms");
        assert_eq!(timings.response, "No response");
        assert_eq!(timings.total, "@10ms for 40ms with an error");
    }

    #[test]
    fn test_summary_rows_in_order() {
        let table = summary_table(&make_resource());
        let names: Vec<&str> = table.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "URL",
                "From Cache",
                "Method",
                "Http Status",
                "Mime-type",
                "Total Bytes",
                "Request Timing",
                "Response Timing",
                "Total Timing",
            ]
        );
        assert_eq!(table.value("From Cache"), Some("true"));
        assert_eq!(table.value("Http Status"), Some("201"));
        assert_eq!(table.value("Total Bytes"), Some("512 bytes"));
    }

    #[test]
    fn test_summary_unknown_length_is_blank() {
        let mut info = make_resource();
        info.content_length = -1;
        assert_eq!(summary_table(&info).value("Total Bytes"), Some(""));
    }

    #[test]
    fn test_rows_stripe_starting_odd() {
        let table = summary_table(&make_resource());
        let stripes: Vec<bool> = table.rows().iter().take(4).map(|r| r.even).collect();
        assert_eq!(stripes, vec![false, true, false, true]);
    }

    #[test]
    fn test_header_tables_stripe_independently() {
        let headers: HeaderMap = [("Host", "example.com"), ("Accept", "*/*")]
            .into_iter()
            .collect();
        let table = header_table(Some(&headers));
        assert!(!table.rows()[0].even);
        assert!(table.rows()[1].even);
        assert_eq!(table.rows()[0].name, "Host");
    }

    #[test]
    fn test_header_table_missing_headers_is_empty() {
        assert!(header_table(None).is_empty());
    }

    #[test]
    fn test_content_line_count() {
        let mut content = DetailContent::new();
        content.add_section(SUMMARY_TITLE, summary_table(&make_resource()));
        content.add_section(REQUEST_HEADERS_TITLE, header_table(None));
        assert_eq!(content.line_count(), 1 + 9 + 1);

        content.clear();
        assert_eq!(content.line_count(), 0);
        assert!(!content.has_hint_wrapper());
    }
}
