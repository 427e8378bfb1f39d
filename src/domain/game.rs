use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Canonical metadata keys every freshly created game starts with.
static DEFAULT_METADATA: Lazy<BTreeMap<String, String>> = Lazy::new(|| {
    [
        "rating",
        "release_date",
        "last_played",
        "developer",
        "header_img",
        "cover",
        "description",
        "genre",
        "publisher",
    ]
    .into_iter()
    .map(|key| (key.to_string(), String::new()))
    .collect()
});

pub fn default_metadata() -> BTreeMap<String, String> {
    DEFAULT_METADATA.clone()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mac,
    Steam,
    Gog,
    Epic,
    Pc,
    Ps,
    Nin,
    Sega,
    Xbox,
    None,
}

impl Platform {
    pub const ALL: [Platform; 10] = [
        Platform::Mac,
        Platform::Steam,
        Platform::Gog,
        Platform::Epic,
        Platform::Pc,
        Platform::Ps,
        Platform::Nin,
        Platform::Sega,
        Platform::Xbox,
        Platform::None,
    ];

    /// Case-insensitive match against the raw enum values; anything
    /// unrecognized lands on `None`.
    pub fn from_raw(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "mac" => Platform::Mac,
            "steam" => Platform::Steam,
            "gog" => Platform::Gog,
            "epic" => Platform::Epic,
            "pc" => Platform::Pc,
            "ps" => Platform::Ps,
            "nin" => Platform::Nin,
            "sega" => Platform::Sega,
            "xbox" => Platform::Xbox,
            _ => Platform::None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Mac => "Mac",
            Platform::Steam => "Steam",
            Platform::Gog => "GOG",
            Platform::Epic => "Epic",
            Platform::Pc => "PC",
            Platform::Ps => "Playstation",
            Platform::Nin => "Nintendo",
            Platform::Sega => "Sega",
            Platform::Xbox => "Xbox",
            Platform::None => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Playing,
    Shelved,
    Occasional,
    Backlog,
    Beaten,
    Completed,
    Abandoned,
    None,
}

impl Status {
    pub fn from_raw(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "playing" => Status::Playing,
            "shelved" => Status::Shelved,
            "occasional" => Status::Occasional,
            "backlog" => Status::Backlog,
            "beaten" => Status::Beaten,
            "completed" => Status::Completed,
            "abandoned" => Status::Abandoned,
            _ => Status::None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Status::Playing => "Playing",
            Status::Shelved => "Shelved",
            Status::Occasional => "Occasional",
            Status::Backlog => "Backlog",
            Status::Beaten => "Beaten",
            Status::Completed => "Completed",
            Status::Abandoned => "Abandoned",
            Status::None => "Other",
        }
    }
}

/// How recently a game was last played, bucketed from the free-text
/// `last_played` metadata value at import time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recency {
    Day,
    Week,
    Month,
    ThreeMonths,
    SixMonths,
    Year,
    Never,
}

const DAY_IN_SECS: i64 = 24 * 60 * 60;

/// Dates arrive the way launcher exports print them, e.g. "Jan 05, 2023".
const LAST_PLAYED_FORMAT: &str = "%b %d, %Y";

impl Recency {
    /// Derive a bucket from a raw `last_played` value.
    ///
    /// Empty or literal "Never" means the game was never played. A value
    /// that fails to parse counts as zero elapsed time, and the bucket
    /// checks run in ascending order with inclusive upper bounds; both
    /// behaviors are long-standing contracts that stored libraries rely
    /// on, so they stay as-is.
    pub fn from_last_played(last_played: &str, now: DateTime<Utc>) -> Self {
        if last_played.is_empty() || last_played == "Never" {
            return Recency::Never;
        }

        let elapsed_secs = NaiveDate::parse_from_str(last_played, LAST_PLAYED_FORMAT)
            .map(|date| {
                let midnight = date.and_time(NaiveTime::MIN).and_utc();
                (now - midnight).num_seconds().abs()
            })
            .unwrap_or(0);

        match elapsed_secs {
            s if s <= DAY_IN_SECS => Recency::Day,
            s if s <= 7 * DAY_IN_SECS => Recency::Week,
            s if s <= 30 * DAY_IN_SECS => Recency::Month,
            s if s <= 90 * DAY_IN_SECS => Recency::ThreeMonths,
            s if s <= 180 * DAY_IN_SECS => Recency::SixMonths,
            s if s <= 365 * DAY_IN_SECS => Recency::Year,
            _ => Recency::Never,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Recency::Day => "Today",
            Recency::Week => "This Week",
            Recency::Month => "This Month",
            Recency::ThreeMonths => "Last 3 Months",
            Recency::SixMonths => "Last 6 Months",
            Recency::Year => "This Year",
            Recency::Never => "Never",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    pub id: Uuid,
    #[serde(rename = "steamID")]
    pub steam_id: String,
    #[serde(rename = "igdbID")]
    pub igdb_id: String,
    pub launcher: String,
    pub metadata: BTreeMap<String, String>,
    pub icon: String,
    pub name: String,
    pub platform: Platform,
    pub status: Status,
    pub recency: Recency,
    #[serde(rename = "isHidden")]
    pub is_hidden: bool,
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            steam_id: String::new(),
            igdb_id: String::new(),
            launcher: String::new(),
            metadata: default_metadata(),
            icon: String::new(),
            name: String::new(),
            platform: Platform::None,
            status: Status::None,
            recency: Recency::Never,
            is_hidden: false,
            is_favorite: false,
        }
    }
}

impl Game {
    /// Re-derive recency from the current `last_played` metadata. Decode is
    /// the only other place recency is ever written; plain edits leave it
    /// frozen until this is called.
    pub fn recompute_recency(&mut self, now: DateTime<Utc>) {
        let last_played = self
            .metadata
            .get("last_played")
            .map(String::as_str)
            .unwrap_or("");
        self.recency = Recency::from_last_played(last_played, now);
    }
}

// Games order by name alone; equal names compare `Equal` without being
// `==`, so stable sorts keep their original relative order.
impl Ord for Game {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl PartialOrd for Game {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The persisted top-level unit: an ordered list of games.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GamesList {
    pub games: Vec<Game>,
}

impl GamesList {
    pub fn sort_by_name(&mut self) {
        self.games.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

/// Whether any game in the slice is on the given platform.
pub fn contains_platform(games: &[Game], platform: Platform) -> bool {
    games.iter().any(|game| game.platform == platform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn game_named(name: &str, platform: Platform) -> Game {
        Game {
            name: name.to_string(),
            platform,
            ..Game::default()
        }
    }

    #[test]
    fn raw_platform_matching_is_case_insensitive() {
        assert_eq!(Platform::from_raw("STEAM"), Platform::Steam);
        assert_eq!(Platform::from_raw("Steam"), Platform::Steam);
        assert_eq!(Platform::from_raw("steam"), Platform::Steam);
        assert_eq!(Platform::from_raw("dreamcast"), Platform::None);
        assert_eq!(Status::from_raw("Backlog"), Status::Backlog);
        assert_eq!(Status::from_raw("paused"), Status::None);
    }

    #[test]
    fn display_names_match_the_ui_labels() {
        assert_eq!(Platform::Gog.display_name(), "GOG");
        assert_eq!(Platform::None.display_name(), "Other");
        assert_eq!(Status::Beaten.display_name(), "Beaten");
        assert_eq!(Recency::ThreeMonths.display_name(), "Last 3 Months");
    }

    #[test]
    fn recency_treats_empty_and_never_as_never() {
        let now = Utc::now();
        assert_eq!(Recency::from_last_played("", now), Recency::Never);
        assert_eq!(Recency::from_last_played("Never", now), Recency::Never);
    }

    #[test]
    fn recency_buckets_by_elapsed_days() {
        let now = Utc::now();
        let at = |days: i64| (now - Duration::days(days)).format("%b %d, %Y").to_string();

        assert_eq!(Recency::from_last_played(&at(0), now), Recency::Day);
        assert_eq!(Recency::from_last_played(&at(3), now), Recency::Week);
        assert_eq!(Recency::from_last_played(&at(10), now), Recency::Month);
        assert_eq!(
            Recency::from_last_played(&at(45), now),
            Recency::ThreeMonths
        );
        assert_eq!(
            Recency::from_last_played(&at(120), now),
            Recency::SixMonths
        );
        assert_eq!(Recency::from_last_played(&at(200), now), Recency::Year);
        assert_eq!(Recency::from_last_played(&at(400), now), Recency::Never);
    }

    #[test]
    fn recency_bucket_boundaries_are_inclusive() {
        // Pin `now` to a midnight so elapsed time is an exact day multiple.
        let now = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_time(NaiveTime::MIN)
            .and_utc();
        let at = |days: i64| (now - Duration::days(days)).format("%b %d, %Y").to_string();

        assert_eq!(Recency::from_last_played(&at(1), now), Recency::Day);
        assert_eq!(Recency::from_last_played(&at(7), now), Recency::Week);
        assert_eq!(Recency::from_last_played(&at(30), now), Recency::Month);
        assert_eq!(Recency::from_last_played(&at(365), now), Recency::Year);
        assert_eq!(Recency::from_last_played(&at(366), now), Recency::Never);
    }

    #[test]
    fn recency_treats_future_dates_like_past_ones() {
        let now = Utc::now();
        let ahead = (now + Duration::days(10)).format("%b %d, %Y").to_string();
        assert_eq!(Recency::from_last_played(&ahead, now), Recency::Month);
    }

    #[test]
    fn unparseable_last_played_counts_as_zero_elapsed() {
        let now = Utc::now();
        assert_eq!(Recency::from_last_played("not a date", now), Recency::Day);
        assert_eq!(Recency::from_last_played("2023-01-05", now), Recency::Day);
    }

    #[test]
    fn default_game_carries_the_canonical_metadata_keys() {
        let game = Game::default();
        for key in [
            "rating",
            "release_date",
            "last_played",
            "developer",
            "header_img",
            "cover",
            "description",
            "genre",
            "publisher",
        ] {
            assert_eq!(game.metadata.get(key).map(String::as_str), Some(""));
        }
        assert_eq!(game.platform, Platform::None);
        assert_eq!(game.status, Status::None);
        assert_eq!(game.recency, Recency::Never);
        assert!(!game.is_hidden);
        assert!(!game.is_favorite);
    }

    #[test]
    fn games_order_by_name_case_sensitively() {
        let mut games = vec![
            game_named("celeste", Platform::Pc),
            game_named("Hades", Platform::Steam),
            game_named("Celeste", Platform::Steam),
        ];
        games.sort();
        let names: Vec<&str> = games.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Celeste", "Hades", "celeste"]);
    }

    #[test]
    fn sorting_equal_names_is_stable() {
        let first = game_named("Doom", Platform::Steam);
        let second = game_named("Doom", Platform::Gog);
        let mut list = GamesList {
            games: vec![second.clone(), first.clone()],
        };
        list.sort_by_name();
        assert_eq!(list.games[0].platform, Platform::Gog);
        assert_eq!(list.games[1].platform, Platform::Steam);
    }

    #[test]
    fn contains_platform_short_circuits_on_membership() {
        assert!(!contains_platform(&[], Platform::Steam));
        let games = [game_named("Outer Wilds", Platform::Epic)];
        assert!(contains_platform(&games, Platform::Epic));
        assert!(!contains_platform(&games, Platform::Xbox));
    }

    #[test]
    fn recompute_recency_follows_metadata_edits() {
        let mut game = Game::default();
        let now = Utc::now();
        game.metadata.insert(
            "last_played".to_string(),
            now.format("%b %d, %Y").to_string(),
        );
        assert_eq!(game.recency, Recency::Never);

        game.recompute_recency(now);
        assert_eq!(game.recency, Recency::Day);
    }
}
