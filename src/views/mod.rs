pub mod avatar;
pub mod calendar;
pub mod match_view;
pub mod perspective;

pub use calendar::{events_for_viewer, is_mine, CalendarEvent};
pub use match_view::{with_names, MatchView};
pub use perspective::{from_perspective, involving, orient, unscheduled};
