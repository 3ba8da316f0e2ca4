//! HTML markup for a [`CalendarLayout`].

use std::fmt::Write;

use crate::routes::calendar::{CalendarLayout, PlacedBlock};
use crate::services::layout::RESERVED_COLUMNS;

/// Document-level settings that do not come from the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    pub title: String,
    /// `href` of the stylesheet link.
    pub stylesheet_href: String,
    /// Source checksum, emitted as a `<meta>` tag when present.
    pub checksum: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: "Weekly Schedule".to_string(),
            stylesheet_href: "style.css".to_string(),
            checksum: None,
        }
    }
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_html(layout: &CalendarLayout, options: &HtmlOptions) -> String {
    let mut html = String::new();
    // Writing into a String cannot fail.
    let _ = write_document(&mut html, layout, options);
    html
}

fn write_document(
    out: &mut String,
    layout: &CalendarLayout,
    options: &HtmlOptions,
) -> std::fmt::Result {
    writeln!(out, "<!doctype html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "  <meta charset=\"utf-8\">")?;
    writeln!(out, "  <meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\">")?;
    writeln!(out, "  <title>{}</title>", escape(&options.title))?;
    writeln!(
        out,
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
    )?;
    if let Some(checksum) = &options.checksum {
        writeln!(
            out,
            "  <meta name=\"schedule-checksum\" content=\"{}\">",
            escape(checksum)
        )?;
    }
    writeln!(
        out,
        "  <link rel=\"stylesheet\" href=\"{}\">",
        escape(&options.stylesheet_href)
    )?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<div class=\"container\">")?;

    writeln!(out, "  <div class=\"days\">")?;
    writeln!(out, "    <div class=\"filler\"></div>")?;
    writeln!(out, "    <div class=\"filler\"></div>")?;
    for day in &layout.weekdays {
        writeln!(out, "    <div class=\"day\">{}</div>", escape(day))?;
    }
    writeln!(out, "  </div>")?;

    writeln!(out, "  <div class=\"calendar\">")?;
    for (i, label) in layout.time_axis.iter().enumerate() {
        writeln!(
            out,
            "    <div class=\"time\" style=\"grid-row:{}\">{}</div>",
            i + 1,
            escape(label)
        )?;
    }
    writeln!(out, "    <div class=\"filler-col\"></div>")?;
    for i in 0..layout.weekdays.len() {
        writeln!(
            out,
            "    <div class=\"col\" style=\"grid-column:{}\"></div>",
            i + RESERVED_COLUMNS + 1
        )?;
    }
    for i in 0..layout.time_axis.len() {
        writeln!(out, "    <div class=\"row\" style=\"grid-row:{}\"></div>", i + 1)?;
    }
    for block in &layout.blocks {
        write_event(out, block)?;
    }
    writeln!(out, "  </div>")?;

    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_event(out: &mut String, block: &PlacedBlock) -> std::fmt::Result {
    writeln!(
        out,
        "    <div class=\"event {}\" title=\"{}\">",
        block.event_id.class_name(),
        escape(&block.course_name)
    )?;
    writeln!(
        out,
        "      <div class=\"event-time\">{}</div>",
        escape(&block.time_range())
    )?;
    writeln!(
        out,
        "      <div class=\"event-title\">{}</div>",
        escape(&block.course_code)
    )?;
    writeln!(
        out,
        "      <div class=\"event-location\">{}</div>",
        escape(&block.location)
    )?;
    writeln!(out, "    </div>")
}
