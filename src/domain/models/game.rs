#[cfg(test)]
#[path = "game_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 10;
pub const DEFAULT_RATING: u8 = 5;

/// Platform availability as reported by the game details endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platforms {
    pub windows: bool,
    pub mac: bool,
    pub linux: bool,
    pub ps4: bool,
    pub ps5: bool,
    pub xbox: bool,
}

impl Platforms {
    /// Badge labels for every available platform, in a stable order.
    pub fn labels(&self) -> Vec<&'static str> {
        return [
            (self.windows, "Windows"),
            (self.mac, "Mac"),
            (self.linux, "Linux"),
            (self.ps4, "PS4"),
            (self.ps5, "PS5"),
            (self.xbox, "Xbox"),
        ]
        .into_iter()
        .filter_map(|(available, label)| {
            if available {
                return Some(label);
            }
            return None;
        })
        .collect();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedGame {
    pub name: String,
    rating: u8,
    pub platforms: Option<Platforms>,
}

impl SelectedGame {
    pub fn new(name: &str) -> SelectedGame {
        return SelectedGame {
            name: name.to_string(),
            rating: DEFAULT_RATING,
            platforms: None,
        };
    }

    pub fn rating(&self) -> u8 {
        return self.rating;
    }

    /// Ratings outside of 1..=10 are clamped.
    pub fn set_rating(&mut self, rating: u8) {
        self.rating = rating.clamp(MIN_RATING, MAX_RATING);
    }

    pub fn increase_rating(&mut self) {
        self.set_rating(self.rating.saturating_add(1));
    }

    pub fn decrease_rating(&mut self) {
        self.set_rating(self.rating.saturating_sub(1));
    }
}
