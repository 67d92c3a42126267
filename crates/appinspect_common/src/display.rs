//! Display library - report tables for the console and the web page
//!
//! A report is laid out once as a `Table` of labelled rows and section
//! separators. The console renders it with padded columns and optional ANSI
//! styles; the web page renders the same table as escaped HTML.

use crate::reporter::Report;
use chrono::{DateTime, FixedOffset};
use console::{measure_text_width, pad_str, Alignment};
use owo_colors::OwoColorize;

/// W3C timestamp format, e.g. `2024-06-15T12:00:00+00:00`
pub const W3C_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Style of a text fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// Secondary information (sizes, counts, timestamps)
    Comment,
    /// Problems the reader must notice
    Error,
}

impl Tone {
    fn paint(self, text: &str, use_color: bool) -> String {
        if !use_color {
            return text.to_string();
        }
        match self {
            Tone::Plain => text.to_string(),
            Tone::Comment => text.yellow().to_string(),
            Tone::Error => text.white().on_red().to_string(),
        }
    }

    fn css_class(self) -> Option<&'static str> {
        match self {
            Tone::Plain => None,
            Tone::Comment => Some("comment"),
            Tone::Error => Some("error"),
        }
    }
}

/// A styled fragment of a cell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

/// One line of a cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::default().push(text, Tone::Plain)
    }

    pub fn push(mut self, text: impl Into<String>, tone: Tone) -> Self {
        self.spans.push(Span {
            text: text.into(),
            tone,
        });
        self
    }

    /// Text without styling
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    fn render(&self, use_color: bool) -> String {
        self.spans
            .iter()
            .map(|s| s.tone.paint(&s.text, use_color))
            .collect()
    }

    fn render_html(&self) -> String {
        self.spans
            .iter()
            .map(|s| match s.tone.css_class() {
                Some(class) => format!("<span class=\"{}\">{}</span>", class, html_escape(&s.text)),
                None => html_escape(&s.text),
            })
            .collect()
    }
}

/// Table entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableLine {
    Row { label: Line, value: Vec<Line> },
    Separator,
}

/// Two-column table with section separators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    lines: Vec<TableLine>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row with a single-line value
    pub fn add_row(&mut self, label: impl Into<String>, value: Line) {
        self.lines.push(TableLine::Row {
            label: Line::plain(label),
            value: vec![value],
        });
    }

    /// Add a row whose value spans several lines
    pub fn add_multiline_row(&mut self, label: Line, value: Vec<Line>) {
        self.lines.push(TableLine::Row { label, value });
    }

    pub fn add_separator(&mut self) {
        self.lines.push(TableLine::Separator);
    }

    pub fn lines(&self) -> &[TableLine] {
        &self.lines
    }

    /// Render for a terminal
    pub fn render(&self, use_color: bool) -> String {
        let mut label_width = 0;
        let mut value_width = 0;
        for line in &self.lines {
            if let TableLine::Row { label, value } = line {
                label_width = label_width.max(measure_text_width(&label.text()));
                for v in value {
                    value_width = value_width.max(measure_text_width(&v.text()));
                }
            }
        }

        let border = format!(
            " {} {}",
            "-".repeat(label_width + 2),
            "-".repeat(value_width + 2)
        );

        let mut output = String::new();
        output.push_str(&border);
        output.push('\n');

        for line in &self.lines {
            match line {
                TableLine::Separator => {
                    output.push_str(&border);
                    output.push('\n');
                }
                TableLine::Row { label, value } => {
                    let blank = Line::default();
                    let first = value.first().unwrap_or(&blank);
                    push_row(&mut output, &label.render(use_color), label_width, &first.render(use_color));
                    for extra in value.iter().skip(1) {
                        push_row(&mut output, "", label_width, &extra.render(use_color));
                    }
                }
            }
        }

        output.push_str(&border);
        output.push('\n');
        output
    }

    /// Render as an HTML table; section separators start a new `<tbody>`
    pub fn render_html(&self) -> String {
        let mut output = String::from("<table class=\"report\">\n<tbody>\n");

        for line in &self.lines {
            match line {
                TableLine::Separator => output.push_str("</tbody>\n<tbody>\n"),
                TableLine::Row { label, value } => {
                    let cell = value
                        .iter()
                        .map(Line::render_html)
                        .collect::<Vec<_>>()
                        .join("<br>");
                    output.push_str(&format!(
                        "<tr><th>{}</th><td>{}</td></tr>\n",
                        label.render_html(),
                        cell
                    ));
                }
            }
        }

        output.push_str("</tbody>\n</table>\n");
        output
    }
}

fn push_row(output: &mut String, label: &str, label_width: usize, value: &str) {
    let row = format!(
        "  {}   {}",
        pad_str(label, label_width, Alignment::Left, None),
        value
    );
    output.push_str(row.trim_end());
    output.push('\n');
}

/// Lay out a report the way both the console and the web page show it
pub fn report_table(report: &Report, now: DateTime<FixedOffset>) -> Table {
    let mut table = Table::new();

    table.add_row("Kernel", Line::plain(&report.class));
    table.add_row("Name", Line::plain(&report.name));
    table.add_row("Version", Line::plain(&report.version));
    table.add_row("End of maintenance", lifecycle_line(&report.eom, report.eom_expired));
    table.add_row("End of life", lifecycle_line(&report.eol, report.eol_expired));
    table.add_separator();

    table.add_row("Environment", Line::plain(&report.env));
    table.add_row("Debug", Line::plain(if report.debug { "true" } else { "false" }));
    table.add_row("Charset", Line::plain(&report.charset));
    table.add_row(
        "Timezone",
        Line::plain(format!("{} (", report.timezone))
            .push(now.format(W3C_FORMAT).to_string(), Tone::Comment)
            .push(")", Tone::Plain),
    );
    table.add_separator();

    table.add_row("Root directory", Line::plain(&report.root_dir));
    table.add_row("Cache directory", sized_line(&report.cache_dir, &report.cache_dir_size));
    table.add_row("Log directory", sized_line(&report.log_dir, &report.log_dir_size));
    table.add_separator();

    let label = Line::plain("Bundles (")
        .push(report.bundles.len().to_string(), Tone::Comment)
        .push(")", Tone::Plain);
    let bundles = report
        .bundles
        .iter()
        .map(|b| {
            Line::plain(format!("{} (", b.name))
                .push(&b.path, Tone::Comment)
                .push(")", Tone::Plain)
        })
        .collect();
    table.add_multiline_row(label, bundles);

    table
}

fn lifecycle_line(date: &str, expired: bool) -> Line {
    let line = Line::plain(date);
    if expired {
        line.push(" ", Tone::Plain).push("Expired", Tone::Error)
    } else {
        line
    }
}

fn sized_line(path: &str, size: &str) -> Line {
    Line::plain(format!("{} (", path))
        .push(size, Tone::Comment)
        .push(")", Tone::Plain)
}

/// Section title, underlined
pub fn title(text: &str, use_color: bool) -> String {
    let underline = "=".repeat(measure_text_width(text));
    if use_color {
        format!("{}\n{}\n", text.bold(), underline.bold())
    } else {
        format!("{}\n{}\n", text, underline)
    }
}

/// Success banner
pub fn success(text: &str, use_color: bool) -> String {
    let banner = format!(" [OK] {} ", text);
    if use_color {
        format!("{}\n", banner.black().on_green())
    } else {
        format!("{}\n", banner.trim_end())
    }
}

/// Escape text for inclusion in HTML
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
