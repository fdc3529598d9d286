use anyhow::Result;
use chrono::NaiveDate;
use log::debug;

use crate::config::AppConfig;
use crate::database::{MatchStore, PlayerSource};
use crate::domain::{MatchFilter, Player};
use crate::feed;
use crate::ranking::{self, LeaderboardEntry};
use crate::views::{self, CalendarEvent, MatchView};

/// Read side of the league: standings, personal tables, calendar and feed
///
/// Everything is recomputed from the store on each call; the player
/// directory is rebuilt per call as well.
pub struct LeagueService<'a, S> {
    store: &'a S,
    config: &'a AppConfig,
}

impl<'a, S: MatchStore + PlayerSource> LeagueService<'a, S> {
    pub fn new(store: &'a S, config: &'a AppConfig) -> Self {
        Self { store, config }
    }

    pub fn players(&self) -> Result<Vec<Player>> {
        self.store.fetch_players()
    }

    pub fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        let matches = self.store.fetch_matches(&MatchFilter::all())?;
        let directory = self.store.directory()?;

        let standings = ranking::compute_standings(&matches);
        debug!(
            "Ranked {} of {} players from {} matches",
            standings.len(),
            directory.len(),
            matches.len()
        );
        Ok(ranking::build_leaderboard(&standings, &directory))
    }

    /// The viewer's matches with the viewer always in the first slot.
    pub fn my_matches(&self, viewer: &str) -> Result<Vec<MatchView>> {
        let matches = self.store.fetch_matches(&MatchFilter::for_player(viewer))?;
        let directory = self.store.directory()?;

        let mine = views::from_perspective(&matches, viewer);
        Ok(views::with_names(mine, &directory, self.avatar_template()))
    }

    /// Opponents the viewer still has to book a time with.
    pub fn unscheduled_matches(&self, viewer: &str) -> Result<Vec<MatchView>> {
        let matches = self.store.fetch_matches(&MatchFilter::for_player(viewer))?;
        let directory = self.store.directory()?;

        let open = views::unscheduled(&views::from_perspective(&matches, viewer));
        Ok(views::with_names(open, &directory, self.avatar_template()))
    }

    pub fn calendar_events(&self, viewer: &str) -> Result<Vec<CalendarEvent>> {
        let matches = self.store.fetch_matches(&MatchFilter::all())?;
        let directory = self.store.directory()?;

        let events = views::events_for_viewer(matches, &directory, viewer, &self.config.display);
        debug!(
            "{} of {} calendar events belong to {}",
            events.iter().filter(|e| views::is_mine(e, viewer)).count(),
            events.len(),
            viewer
        );
        Ok(events)
    }

    /// iCal document with the player's scheduled matches.
    pub fn ical_for_player(&self, player_id: &str) -> Result<String> {
        let matches = self.my_matches(player_id)?;
        let events = feed::feed_events(&matches, &self.config.league);
        debug!("Exporting {} events for {}", events.len(), player_id);
        Ok(feed::render_calendar(&events, &self.config.feed.calendar_name))
    }

    /// iCal document for a feed link token, `None` for unknown tokens.
    pub fn ical_for_token(&self, token: &str) -> Result<Option<String>> {
        let directory = self.store.directory()?;
        match feed::resolve_token(&directory, token, &self.config.feed) {
            Some(player) => self.ical_for_player(&player.id).map(Some),
            None => Ok(None),
        }
    }

    pub fn feed_token(&self, player_id: &str) -> String {
        feed::feed_token(player_id, &self.config.feed)
    }

    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.config.league.season_end - today).num_days()
    }

    fn avatar_template(&self) -> Option<&str> {
        self.config.display.avatar_url_template.as_deref()
    }
}
