pub mod course;
pub mod event_id;
pub mod schedule;
pub mod time;
pub mod weekday;


pub use course::*;
pub use event_id::EventId;
pub use schedule::*;
pub use time::*;
pub use weekday::*;
