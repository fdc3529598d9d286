use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Pin a league-local wall-clock time to a UTC instant.
///
/// Ambiguous times (clocks going back) take the earlier instant.
/// Times inside a DST gap are moved forward by an hour.
pub fn local_to_utc(local: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => resolve_gap(local, tz),
    }
}

fn resolve_gap(local: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    let shifted = local + Duration::hours(1);
    match tz.from_local_datetime(&shifted).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        None => {
            log::warn!("Could not place {} in {}, treating it as UTC", local, tz);
            Utc.from_utc_datetime(&local)
        }
    }
}
