//! Stylesheet text: the base stylesheet plus generated grid rules.

use std::fmt::Write;

use crate::routes::calendar::CalendarLayout;

/// Stylesheet used when no base stylesheet file is configured.
pub const DEFAULT_BASE_STYLESHEET: &str = include_str!("../../assets/base_style.css");

/// Append the grid variables and one rule per event to `base`.
///
/// `--num-rows` is the axis length, matching the number of `.time` and
/// `.row` elements in the markup.
pub fn render_stylesheet(base: &str, layout: &CalendarLayout) -> String {
    let mut css = String::with_capacity(base.len() + 96 * (layout.blocks.len() + 1));
    css.push_str(base);
    if !css.is_empty() && !css.ends_with('\n') {
        css.push('\n');
    }
    // Writing into a String cannot fail.
    let _ = write_stylesheet(&mut css, layout);
    css
}

fn write_stylesheet(out: &mut String, layout: &CalendarLayout) -> std::fmt::Result {
    writeln!(
        out,
        "* {{\n\t--num-rows: {};\n\t--num-days: {};\n}}",
        layout.time_axis.len(),
        layout.weekdays.len()
    )?;
    for block in &layout.blocks {
        writeln!(
            out,
            ".{} {{\n\tgrid-column: {};\n\tgrid-row: {}/span {};\n\tbackground-color: {};\n}}",
            block.event_id.class_name(),
            block.grid_column,
            block.grid_row,
            block.row_span,
            block.color
        )?;
    }
    Ok(())
}
