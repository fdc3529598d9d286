use chrono::{DateTime, Duration, Utc};

use crate::config::LeagueSettings;
use crate::views::MatchView;

use super::timezone::local_to_utc;

const PRODID: &str = "-//league_scheduler//match feed//EN";
const MAX_LINE_OCTETS: usize = 75;

/// Scheduled match pinned to UTC, ready for the iCal writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEvent {
    pub uid: String,
    pub summary: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Turn matches into feed events. Unscheduled matches are skipped; a
/// missing end time defaults to one slot after the start.
pub fn feed_events(views: &[MatchView], league: &LeagueSettings) -> Vec<FeedEvent> {
    views
        .iter()
        .filter_map(|view| build_event(view, league))
        .collect()
}

fn build_event(view: &MatchView, league: &LeagueSettings) -> Option<FeedEvent> {
    let start = view.game.start?;
    let end = view
        .game
        .end
        .unwrap_or_else(|| start + Duration::minutes(league.slot_minutes));
    let title = view.title();

    Some(FeedEvent {
        uid: view.game.id.clone(),
        description: format!("Match {title}"),
        summary: title,
        start: local_to_utc(start, league.timezone),
        end: local_to_utc(end, league.timezone),
    })
}

/// Render a VCALENDAR document (RFC 5545, CRLF line endings).
pub fn render_calendar(events: &[FeedEvent], calendar_name: &str) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        "CALSCALE:GREGORIAN".to_string(),
        format!("X-WR-CALNAME:{}", escape_text(calendar_name)),
    ];

    for event in events {
        lines.extend(event_lines(event));
    }
    lines.push("END:VCALENDAR".to_string());

    lines
        .iter()
        .map(|line| fold_line(line) + "\r\n")
        .collect()
}

fn event_lines(event: &FeedEvent) -> Vec<String> {
    vec![
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", escape_text(&event.uid)),
        format!("SUMMARY:{}", escape_text(&event.summary)),
        format!("DTSTART:{}", format_utc(&event.start)),
        format!("DTEND:{}", format_utc(&event.end)),
        format!("DESCRIPTION:{}", escape_text(&event.description)),
        "END:VEVENT".to_string(),
    ]
}

pub fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

/// Split lines longer than 75 octets; continuations start with a space.
fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut current_len = 0;
    for ch in line.chars() {
        let width = ch.len_utf8();
        if current_len + width > MAX_LINE_OCTETS {
            folded.push_str("\r\n ");
            current_len = 1;
        }
        folded.push(ch);
        current_len += width;
    }
    folded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Match, Player, PlayerDirectory};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, 1)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn view(id: &str, start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> MatchView {
        let directory = PlayerDirectory::new(vec![
            Player { id: "a".into(), display_name: "Alice".into() },
            Player { id: "b".into(), display_name: "Bob".into() },
        ]);
        let game = Match {
            id: id.into(),
            player1_id: "a".into(),
            player2_id: "b".into(),
            player1_score: None,
            player2_score: None,
            start,
            end,
            status: None,
        };
        MatchView::new(game, &directory)
    }

    fn warsaw() -> LeagueSettings {
        LeagueSettings {
            timezone: chrono_tz::Europe::Warsaw,
            ..LeagueSettings::default()
        }
    }

    #[test]
    fn test_feed_events_convert_to_utc() {
        let events = feed_events(&[view("m1", Some(at(18, 0)), Some(at(18, 30)))], &warsaw());

        assert_eq!(events.len(), 1);
        assert_eq!(format_utc(&events[0].start), "20250901T160000Z");
        assert_eq!(format_utc(&events[0].end), "20250901T163000Z");
        assert_eq!(events[0].summary, "Alice vs Bob");
        assert_eq!(events[0].description, "Match Alice vs Bob");
    }

    #[test]
    fn test_unscheduled_matches_are_skipped() {
        let events = feed_events(&[view("m1", None, None)], &warsaw());
        assert!(events.is_empty());
    }

    #[test]
    fn test_missing_end_defaults_to_one_slot() {
        let events = feed_events(&[view("m1", Some(at(9, 0)), None)], &LeagueSettings::default());
        assert_eq!(format_utc(&events[0].end), "20250901T093000Z");
    }

    #[test]
    fn test_render_calendar() {
        let events = feed_events(&[view("m1", Some(at(18, 0)), Some(at(18, 30)))], &warsaw());
        let ics = render_calendar(&events, "League");

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert!(ics.contains("CALSCALE:GREGORIAN\r\n"));
        assert!(ics.contains("BEGIN:VEVENT\r\nUID:m1\r\nSUMMARY:Alice vs Bob\r\n"));
        assert!(ics.contains("DTSTART:20250901T160000Z\r\nDTEND:20250901T163000Z\r\n"));
        assert!(ics.contains("DESCRIPTION:Match Alice vs Bob\r\nEND:VEVENT\r\n"));
    }

    #[test]
    fn test_empty_calendar_is_still_valid() {
        let ics = render_calendar(&[], "League");
        assert!(!ics.contains("VEVENT"));
        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(ics.contains("END:VCALENDAR"));
    }

    #[test]
    fn test_text_escaping() {
        assert_eq!(escape_text("a,b;c\\d\ne"), "a\\,b\\;c\\\\d\\ne");
    }

    #[test]
    fn test_long_lines_are_folded() {
        let line = format!("SUMMARY:{}", "x".repeat(100));
        let folded = fold_line(&line);

        let parts: Vec<_> = folded.split("\r\n").collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].len(), 75);
        assert!(parts[1].starts_with(' '));
        assert_eq!(parts.concat().replace(' ', ""), line);
    }
}
