pub mod ical;
pub mod timezone;
pub mod token;

pub use ical::{feed_events, render_calendar, FeedEvent};
pub use timezone::local_to_utc;
pub use token::{feed_token, resolve_token};
