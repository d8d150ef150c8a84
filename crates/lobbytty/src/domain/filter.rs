//! Pure, total narrowing functions over immutable session snapshots.
//!
//! Filtering never mutates the catalog and never fails: empty inputs and
//! empty queries are ordinary values, not errors.

use crate::domain::fixture::GameCard;
use crate::domain::session::Session;

/// Sentinel tag that disables weapon-tag filtering on the ranked page.
pub const ALL_TAG: &str = "all";

/// Narrows `sessions` to those whose name contains `query`, ignoring case.
///
/// An empty query is the identity filter.
pub fn by_text<'a>(sessions: &'a [Session], query: &str) -> Vec<&'a Session> {
    if query.is_empty() {
        return sessions.iter().collect();
    }

    let query = query.to_lowercase();

    sessions
        .iter()
        .filter(|session| session.name.to_lowercase().contains(&query))
        .collect()
}

/// Narrows ranked `cards` to those whose weapon tag equals `tag`, ignoring
/// case. The [`ALL_TAG`] sentinel is the identity filter.
pub fn by_weapon_tag<'a>(cards: &'a [GameCard], tag: &str) -> Vec<&'a GameCard> {
    if tag.eq_ignore_ascii_case(ALL_TAG) {
        return cards.iter().collect();
    }

    cards
        .iter()
        .filter(|card| card.weapon_tag.eq_ignore_ascii_case(tag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::{Category, Session, SessionDraft, MapName, Weapon};

    fn session(id: u32, name: &str) -> Session {
        Session::from_draft(
            id,
            SessionDraft {
                name: name.to_string(),
                map: MapName::Plaza,
                weapon: Weapon::Pistol,
                max_players_total: 4,
                team_names: Category::Matchmaking.default_team_names(),
                password: None,
            },
        )
    }

    fn card(id: u32, tag: &str) -> GameCard {
        GameCard {
            id,
            weapon_tag: tag.to_string(),
            mode: "ARENA".to_string(),
            location: "CITY HALL".to_string(),
            players: 10,
            time: "07:00".to_string(),
            game_type: None,
        }
    }

    #[test]
    fn test_by_text_empty_query_is_identity() {
        // Arrange
        let sessions = vec![session(1, "Foo"), session(2, "Bar")];

        // Act
        let filtered = by_text(&sessions, "");

        // Assert
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_by_text_matches_case_insensitively() {
        // Arrange
        let sessions = vec![session(1, "Foo"), session(2, "Bar")];

        // Act
        let filtered = by_text(&sessions, "foo");

        // Assert
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_by_text_matches_substrings() {
        // Arrange
        let sessions = vec![session(1, "night-owls only"), session(2, "warmup round")];

        // Act
        let filtered = by_text(&sessions, "OWLS");

        // Assert
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_by_text_on_empty_input_returns_empty() {
        // Act
        let filtered = by_text(&[], "anything");

        // Assert
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_by_weapon_tag_all_sentinel_is_identity() {
        // Arrange
        let cards = vec![card(1, "Rifles"), card(2, "Pistols")];

        // Act
        let filtered = by_weapon_tag(&cards, "All");

        // Assert
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_by_weapon_tag_matches_exactly_ignoring_case() {
        // Arrange
        let cards = vec![card(1, "Rifles"), card(2, "Pistols"), card(3, "Mixed")];

        // Act
        let filtered = by_weapon_tag(&cards, "rifles");

        // Assert
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_by_weapon_tag_does_not_match_substrings() {
        // Arrange
        let cards = vec![card(1, "Rifles")];

        // Act
        let filtered = by_weapon_tag(&cards, "Rifle");

        // Assert
        assert!(filtered.is_empty());
    }
}
