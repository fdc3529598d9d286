use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;

#[derive(Debug, Clone)]
pub struct LeagueSettings {
    /// Zone the stored wall-clock times are in.
    pub timezone: Tz,
    pub season_end: NaiveDate,
    pub day_start: NaiveTime,
    pub day_end: NaiveTime,
    pub slot_minutes: i64,
    /// Highest score a player can record for one match (best of five).
    pub max_games: i32,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            season_end: NaiveDate::from_ymd_opt(2025, 10, 3).unwrap_or_default(),
            day_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            day_end: NaiveTime::from_hms_opt(21, 0, 0).unwrap_or_default(),
            slot_minutes: 30,
            max_games: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub salt: String,
    pub iterations: u32,
    pub calendar_name: String,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            salt: "JrOz5Irlgf5Lh6CIHLsUQO4CJk14yuQJXRmGd7Wc3LE=".to_string(),
            iterations: 100,
            calendar_name: "League Matches".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplaySettings {
    pub mine_color: String,
    pub other_color: String,
    pub other_title: String,
    /// `{id}` is replaced by the player id.
    pub avatar_url_template: Option<String>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            mine_color: "#ff0000".to_string(),
            other_color: "#0000ff".to_string(),
            other_title: "Other Game".to_string(),
            avatar_url_template: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub database_path: String,
    /// Cookie carrying the logged-in player's id.
    pub player_cookie: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            database_path: "league.db".to_string(),
            player_cookie: "player".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub league: LeagueSettings,
    pub feed: FeedSettings,
    pub display: DisplaySettings,
    pub server: ServerSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by whatever is set in the environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| {
            std::env::var(name).ok().filter(|v| !v.trim().is_empty())
        })
    }

    /// Defaults overridden by `lookup`, keyed by environment variable name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(path) = lookup("DATABASE_PATH") {
            config.server.database_path = path;
        }
        if let Some(cookie) = lookup("PLAYER_COOKIE") {
            config.server.player_cookie = cookie;
        }
        if let Some(tz) = lookup("LEAGUE_TIMEZONE") {
            config.league.timezone = tz
                .parse::<Tz>()
                .map_err(|e| anyhow::anyhow!("Invalid LEAGUE_TIMEZONE {tz}: {e}"))?;
        }
        if let Some(date) = lookup("SEASON_END") {
            config.league.season_end = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .with_context(|| format!("Invalid SEASON_END: {date}"))?;
        }
        if let Some(time) = lookup("DAY_START") {
            config.league.day_start = parse_time("DAY_START", &time)?;
        }
        if let Some(time) = lookup("DAY_END") {
            config.league.day_end = parse_time("DAY_END", &time)?;
        }
        if let Some(minutes) = lookup("SLOT_MINUTES") {
            config.league.slot_minutes = parse_positive("SLOT_MINUTES", &minutes)?;
        }
        if let Some(max) = lookup("MAX_GAMES") {
            config.league.max_games = parse_positive("MAX_GAMES", &max)?;
        }
        if let Some(salt) = lookup("FEED_SALT") {
            config.feed.salt = salt;
        }
        if let Some(iterations) = lookup("FEED_ITERATIONS") {
            config.feed.iterations = parse_positive("FEED_ITERATIONS", &iterations)?;
        }
        if let Some(template) = lookup("AVATAR_URL_TEMPLATE") {
            config.display.avatar_url_template = Some(template);
        }

        if config.league.day_start > config.league.day_end {
            bail!(
                "DAY_START {} is after DAY_END {}",
                config.league.day_start,
                config.league.day_end
            );
        }

        Ok(config)
    }
}

fn parse_time(name: &str, value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .with_context(|| format!("Invalid {name}: {value}, expected HH:MM"))
}

fn parse_positive<T>(name: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr + PartialOrd + Default,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let parsed: T = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid {name}: {value}"))?;
    if parsed <= T::default() {
        bail!("{name} must be positive, got {value}");
    }
    Ok(parsed)
}
