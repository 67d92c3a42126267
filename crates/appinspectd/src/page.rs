//! HTML report page

use crate::routes::Snapshot;
use appinspect_common::display::{html_escape, report_table};

const STYLE: &str = "body{font-family:monospace;margin:2em}\
table.report{border-collapse:collapse}\
table.report tbody{border-top:1px solid #999}\
th{text-align:left;padding:2px 1.5em 2px 0;vertical-align:top}\
td{padding:2px 0}\
.comment{color:#b58900}\
.error{color:#fff;background:#dc322f;padding:0 3px}\
.success{color:#fff;background:#2aa198;padding:4px 8px;display:inline-block}";

/// Render a report snapshot as a standalone page
pub fn render(snapshot: &Snapshot) -> String {
    let mut s = String::new();
    s.push_str("<!doctype html>\n<html><head><meta charset=\"utf-8\">");
    s.push_str("<title>Application Report</title>");
    s.push_str(&format!("<style>{}</style>", STYLE));
    s.push_str("</head><body>\n");
    s.push_str("<h1>Application Report</h1>\n");
    s.push_str(&format!(
        "<p class=\"success\">[OK] Application available at: {}</p>\n",
        html_escape(&snapshot.base_dir)
    ));
    s.push_str(&report_table(&snapshot.report, snapshot.now).render_html());
    s.push_str("</body></html>\n");
    s
}
