use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::{Player, PlayerId};
use crate::ranking::{LeaderboardEntry, Rank};
use crate::views::avatar::avatar_url_opt;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueInfo {
    pub season_end: NaiveDate,
    pub days_left: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerItem {
    pub id: PlayerId,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

impl PlayerItem {
    pub fn new(player: Player, avatar_template: Option<&str>) -> Self {
        let avatar_url = avatar_url_opt(avatar_template, &player.id);
        Self {
            id: player.id,
            display_name: player.display_name,
            avatar_url,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardItem {
    pub rank: Rank,
    pub player_id: PlayerId,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub point_diff: i64,
}

impl LeaderboardItem {
    pub fn new(entry: LeaderboardEntry, avatar_template: Option<&str>) -> Self {
        let avatar_url = avatar_url_opt(avatar_template, &entry.player_id);
        Self {
            rank: entry.rank,
            player_id: entry.player_id,
            display_name: entry.display_name,
            avatar_url,
            wins: entry.wins,
            losses: entry.losses,
            point_diff: entry.point_diff,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub start: NaiveDateTime,
}

/// Scores as seen by the caller: `player1` is the caller.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoresRequest {
    pub player1_score: Option<i32>,
    pub player2_score: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedLink {
    pub token: String,
    pub path: String,
}

#[derive(Deserialize)]
pub struct FeedParams {
    pub hash: String,
}
