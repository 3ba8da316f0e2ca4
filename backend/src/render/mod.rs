//! Rendering of a computed layout into markup and stylesheet text.
//!
//! Renderers only read a [`CalendarLayout`](crate::routes::calendar::CalendarLayout);
//! they never write files.

pub mod css;
pub mod html;

pub use css::{render_stylesheet, DEFAULT_BASE_STYLESHEET};
pub use html::{render_html, HtmlOptions};
