use chrono::NaiveDateTime;
use serde::Serialize;

use crate::config::DisplaySettings;
use crate::domain::{Match, MatchId, PlayerDirectory};

use super::match_view::MatchView;

/// Event record for the schedule calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: MatchId,
    pub title: String,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub editable: bool,
    pub background_color: String,
    pub extended_props: EventProps,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventProps {
    pub source: MatchView,
}

/// One event per match in the league, styled for `viewer`.
///
/// The viewer's own matches are titled with both names and may be dragged
/// around; everyone else's show up as anonymous busy slots.
pub fn events_for_viewer(
    matches: Vec<Match>,
    directory: &PlayerDirectory,
    viewer: &str,
    display: &DisplaySettings,
) -> Vec<CalendarEvent> {
    matches
        .into_iter()
        .map(|m| {
            let view = MatchView::new(m, directory)
                .with_avatars(display.avatar_url_template.as_deref());
            build_event(view, viewer, display)
        })
        .collect()
}

fn build_event(view: MatchView, viewer: &str, display: &DisplaySettings) -> CalendarEvent {
    let mine = view.game.involves(viewer);
    let title = if mine {
        view.title()
    } else {
        display.other_title.clone()
    };
    let background_color = if mine {
        display.mine_color.clone()
    } else {
        display.other_color.clone()
    };

    CalendarEvent {
        id: view.game.id.clone(),
        title,
        start: view.game.start,
        end: view.game.end,
        editable: mine,
        background_color,
        extended_props: EventProps { source: view },
    }
}

pub fn is_mine(event: &CalendarEvent, viewer: &str) -> bool {
    event.extended_props.source.game.involves(viewer)
}
