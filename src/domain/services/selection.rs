#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;

use crate::domain::models::Platforms;
use crate::domain::models::RecommendRequest;
use crate::domain::models::SelectedGame;

/// Ordered list of games picked for recommendations, keyed by name.
pub struct Selection {
    capacity: usize,
    games: Vec<SelectedGame>,
}

impl Selection {
    pub fn new(capacity: usize) -> Selection {
        return Selection {
            capacity,
            games: vec![],
        };
    }

    pub fn games(&self) -> &[SelectedGame] {
        return &self.games;
    }

    pub fn capacity(&self) -> usize {
        return self.capacity;
    }

    pub fn len(&self) -> usize {
        return self.games.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.games.is_empty();
    }

    pub fn is_full(&self) -> bool {
        return self.games.len() >= self.capacity;
    }

    pub fn contains(&self, name: &str) -> bool {
        return self.games.iter().any(|game| return game.name == name);
    }

    /// Adds a game with the default rating. Returns false without changes when
    /// the selection is full or already has a game with that name.
    pub fn add(&mut self, name: &str) -> bool {
        if self.is_full() || self.contains(name) {
            return false;
        }

        self.games.push(SelectedGame::new(name));
        return true;
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let len = self.games.len();
        self.games.retain(|game| return game.name != name);
        return self.games.len() != len;
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut SelectedGame> {
        return self.games.iter_mut().find(|game| return game.name == name);
    }

    pub fn increase_rating(&mut self, name: &str) -> bool {
        if let Some(game) = self.get_mut(name) {
            game.increase_rating();
            return true;
        }

        return false;
    }

    pub fn decrease_rating(&mut self, name: &str) -> bool {
        if let Some(game) = self.get_mut(name) {
            game.decrease_rating();
            return true;
        }

        return false;
    }

    /// Attaches platform availability to the game with that name. A game that
    /// was removed before its details arrived stays removed.
    pub fn merge_platforms(&mut self, name: &str, platforms: Platforms) -> bool {
        if let Some(game) = self.get_mut(name) {
            game.platforms = Some(platforms);
            return true;
        }

        tracing::debug!(name, "dropping details for a game no longer selected");
        return false;
    }

    pub fn to_request(&self) -> RecommendRequest {
        return RecommendRequest {
            game_titles: self
                .games
                .iter()
                .map(|game| return game.name.to_string())
                .collect(),
            ratings: self.games.iter().map(|game| return game.rating()).collect(),
        };
    }
}
