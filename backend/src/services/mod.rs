//! Service layer: layout computation and page generation.
//!
//! These modules sit between the loaded course models and the renderers and
//! hold the calendar logic itself.

pub mod colors;

pub mod layout;

pub mod schedule_maker;

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;

pub use colors::{ColorGen, BASE_COLORS};
pub use layout::{LayoutConfig, LayoutEngine, MeetingBlock, TimeAxis};
pub use schedule_maker::{generate_term, ScheduleMaker, Season, Term, TermPaths};
