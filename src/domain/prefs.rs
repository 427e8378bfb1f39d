use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which field the library listing orders by. Name ordering is the `Game`
/// comparator; the rest stable-sort on the enum value, so equally-ranked
/// games keep their stored order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Name,
    #[default]
    Platform,
    Status,
    Recency,
}

impl SortBy {
    pub fn from_raw(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "name" => SortBy::Name,
            "status" => SortBy::Status,
            "recency" => SortBy::Recency,
            _ => SortBy::Platform,
        }
    }
}

/// App-level settings persisted alongside the library. Unknown or missing
/// keys fall back to defaults so older prefs files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppPrefs {
    pub selected_game: Uuid,
    pub sort_by: SortBy,
    pub show_star_rating: bool,
    pub list_icons_hidden: bool,
    pub list_icon_size: f64,
    pub show_sort_by_number: bool,
}

impl Default for AppPrefs {
    fn default() -> Self {
        Self {
            selected_game: Uuid::nil(),
            sort_by: SortBy::default(),
            show_star_rating: true,
            list_icons_hidden: false,
            list_icon_size: 24.0,
            show_sort_by_number: true,
        }
    }
}
