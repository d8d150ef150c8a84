//! Mock data source for all four screens.
//!
//! The seeded lobbies, ranked cards, and practice modes live in a JSON
//! document (embedded by default, overridable with `--fixtures`) so the mock
//! data stays external to the code. Raw records are deserialized with serde
//! and then converted into domain types, enforcing the session invariants at
//! the boundary.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::domain::session::{ALLOWED_TOTALS, Category, Session, Status, TeamCounts, TeamNames};

const DEFAULT_FIXTURES: &str = include_str!("../../fixtures/default.json");

/// Error raised while loading or validating a fixture document. Fatal at
/// startup, reported before the terminal enters raw mode.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse fixture file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("session {id} ({category}): {reason}")]
    InvalidSession {
        category: Category,
        id: u32,
        reason: String,
    },
    #[error("duplicate session id {id} in {category} fixtures")]
    DuplicateId { category: Category, id: u32 },
}

/// One mode card on the ranked page.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GameCard {
    pub id: u32,
    pub weapon_tag: String,
    pub mode: String,
    pub location: String,
    pub players: u16,
    pub time: String,
    pub game_type: Option<String>,
}

/// One drill card on the practice page with per-difficulty availability.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PracticeMode {
    pub id: u32,
    pub mode: String,
    pub location: String,
    pub players: u16,
    pub time: String,
    pub easy: bool,
    pub medium: bool,
    pub hard: bool,
}

/// Drill difficulty tier on the practice page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl PracticeMode {
    /// Returns whether the drill can be started at `difficulty`.
    pub fn supports(&self, difficulty: Difficulty) -> bool {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawLobby {
    id: u32,
    name: String,
    status: String,
    map: String,
    weapon: String,
    password: Option<String>,
    defender_team_name: String,
    attacker_team_name: String,
    defenders: u8,
    attackers: u8,
    max_per_team: u8,
    score: (u8, u8),
}

#[derive(Debug, Deserialize)]
struct RawFixtures {
    matchmaking: Vec<RawLobby>,
    training: Vec<RawLobby>,
    ranked: Vec<GameCard>,
    practice: Vec<PracticeMode>,
}

/// Fully validated seed data for the app.
#[derive(Debug)]
pub struct Fixtures {
    pub matchmaking: Vec<Session>,
    pub training: Vec<Session>,
    pub ranked: Vec<GameCard>,
    pub practice: Vec<PracticeMode>,
}

impl Fixtures {
    /// Loads the fixture document embedded in the binary.
    ///
    /// # Errors
    /// Returns an error if the embedded document violates a session
    /// invariant. The document is shipped with the binary, so in practice
    /// this only fires when editing the fixtures.
    pub fn embedded() -> Result<Self, FixtureError> {
        Self::parse(DEFAULT_FIXTURES)
    }

    /// Loads and validates a fixture document from `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// violates a session invariant.
    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        let raw = std::fs::read_to_string(path)?;

        Self::parse(&raw)
    }

    fn parse(raw: &str) -> Result<Self, FixtureError> {
        let raw: RawFixtures = serde_json::from_str(raw)?;

        Ok(Self {
            matchmaking: convert_lobbies(raw.matchmaking, Category::Matchmaking)?,
            training: convert_lobbies(raw.training, Category::Training)?,
            ranked: raw.ranked,
            practice: raw.practice,
        })
    }
}

fn convert_lobbies(
    raw_lobbies: Vec<RawLobby>,
    category: Category,
) -> Result<Vec<Session>, FixtureError> {
    let mut sessions: Vec<Session> = Vec::with_capacity(raw_lobbies.len());

    for raw in raw_lobbies {
        let session = convert_lobby(raw, category)?;

        if sessions.iter().any(|existing| existing.id == session.id) {
            return Err(FixtureError::DuplicateId {
                category,
                id: session.id,
            });
        }

        sessions.push(session);
    }

    Ok(sessions)
}

fn convert_lobby(raw: RawLobby, category: Category) -> Result<Session, FixtureError> {
    let invalid = |reason: String| FixtureError::InvalidSession {
        category,
        id: raw.id,
        reason,
    };

    let status = Status::from_str(&raw.status).map_err(&invalid)?;
    let map = crate::domain::session::MapName::from_str(&raw.map).map_err(&invalid)?;
    let weapon = crate::domain::session::Weapon::from_str(&raw.weapon).map_err(&invalid)?;

    if map.category() != category {
        return Err(invalid(format!(
            "map {} belongs to the {} set",
            map.label(),
            map.category()
        )));
    }

    if raw.name.is_empty() || raw.name.chars().count() > 20 {
        return Err(invalid("name must be 1-20 characters".to_string()));
    }

    if let Some(password) = &raw.password
        && password.is_empty()
    {
        return Err(invalid("locked session needs a non-empty password".to_string()));
    }

    for (label, team_name) in [
        ("defender", &raw.defender_team_name),
        ("attacker", &raw.attacker_team_name),
    ] {
        if team_name.is_empty() || team_name.chars().count() > 15 {
            return Err(invalid(format!("{label} team name must be 1-15 characters")));
        }
    }

    // Capacities outside the creatable range would also overflow the u8
    // total-player arithmetic downstream.
    if !ALLOWED_TOTALS
        .iter()
        .any(|total| total / 2 == raw.max_per_team)
    {
        return Err(invalid(format!(
            "per-team capacity {} is not half of an allowed player total",
            raw.max_per_team
        )));
    }

    if raw.defenders > raw.max_per_team || raw.attackers > raw.max_per_team {
        return Err(invalid(format!(
            "team counts {}/{} exceed per-team capacity {}",
            raw.defenders, raw.attackers, raw.max_per_team
        )));
    }

    if raw.score != (0, 0) && status == Status::Waiting {
        return Err(invalid("waiting sessions start at 0-0".to_string()));
    }

    Ok(Session {
        id: raw.id,
        name: raw.name,
        status,
        map,
        weapon,
        password: raw.password,
        team_names: TeamNames {
            defenders: raw.defender_team_name,
            attackers: raw.attacker_team_name,
        },
        team_counts: TeamCounts {
            defenders: raw.defenders,
            attackers: raw.attackers,
        },
        max_per_team: raw.max_per_team,
        score: raw.score,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::session::Team;

    #[test]
    fn test_embedded_fixtures_parse_and_uphold_invariants() {
        // Act
        let fixtures = Fixtures::embedded().expect("embedded fixtures must be valid");

        // Assert
        assert!(!fixtures.matchmaking.is_empty());
        assert!(!fixtures.training.is_empty());
        assert!(!fixtures.ranked.is_empty());
        assert!(!fixtures.practice.is_empty());
        for session in fixtures.matchmaking.iter().chain(&fixtures.training) {
            assert!(session.team_counts.get(Team::Defenders) <= session.max_per_team);
            assert!(session.team_counts.get(Team::Attackers) <= session.max_per_team);
            if let Some(password) = &session.password {
                assert!(!password.is_empty());
            }
        }
    }

    #[test]
    fn test_embedded_fixtures_include_a_locked_lobby() {
        // Act
        let fixtures = Fixtures::embedded().expect("embedded fixtures must be valid");

        // Assert
        assert!(fixtures.matchmaking.iter().any(Session::is_locked));
    }

    #[test]
    fn test_from_path_reads_a_fixture_file() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
        file.write_all(DEFAULT_FIXTURES.as_bytes())
            .expect("failed to write fixtures");

        // Act
        let fixtures = Fixtures::from_path(file.path()).expect("failed to load fixtures");

        // Assert
        assert_eq!(
            fixtures.matchmaking.len(),
            Fixtures::embedded().expect("embedded fixtures must be valid").matchmaking.len()
        );
    }

    #[test]
    fn test_parse_rejects_map_from_the_wrong_category() {
        // Arrange
        let raw = DEFAULT_FIXTURES.replace("\"map\": \"BootCamp\"", "\"map\": \"Plaza\"");

        // Act
        let result = Fixtures::parse(&raw);

        // Assert
        assert!(matches!(
            result,
            Err(FixtureError::InvalidSession {
                category: Category::Training,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_rejects_empty_password_on_locked_lobby() {
        // Arrange
        let raw = DEFAULT_FIXTURES.replace("\"password\": \"1234\"", "\"password\": \"\"");

        // Act
        let result = Fixtures::parse(&raw);

        // Assert
        assert!(matches!(result, Err(FixtureError::InvalidSession { id: 1, .. })));
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        // Arrange
        let raw = DEFAULT_FIXTURES.replace("\"id\": 4,", "\"id\": 3,");

        // Act
        let result = Fixtures::parse(&raw);

        // Assert
        assert!(matches!(result, Err(FixtureError::DuplicateId { id: 3, .. })));
    }

    #[test]
    fn test_parse_rejects_out_of_range_capacity() {
        // Arrange: a capacity this large would overflow max_players_total
        let raw = DEFAULT_FIXTURES.replace("\"max_per_team\": 2,", "\"max_per_team\": 128,");

        // Act
        let result = Fixtures::parse(&raw);

        // Assert
        assert!(matches!(
            result,
            Err(FixtureError::InvalidSession {
                category: Category::Matchmaking,
                id: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_rejects_counts_over_capacity() {
        // Arrange
        let raw = DEFAULT_FIXTURES.replace("\"defenders\": 5", "\"defenders\": 6");

        // Act
        let result = Fixtures::parse(&raw);

        // Assert
        assert!(matches!(result, Err(FixtureError::InvalidSession { id: 2, .. })));
    }
}
