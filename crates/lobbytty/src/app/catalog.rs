//! Ordered, append-only collection of sessions for one lobby category.

use crate::domain::session::{Category, Session, SessionDraft, Team};

/// Error raised by the only mutation path besides creation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no session with id {id}")]
    NotFound { id: u32 },
    #[error("the {team} team is already full")]
    TeamFull { team: Team },
}

/// Owns the mutable ordered collection of sessions for one category.
///
/// Ordering is most-recent-first and observable: `create` prepends. Ids are
/// catalog-scoped, monotonic, and never reused (there is no removal path).
pub struct SessionCatalog {
    category: Category,
    sessions: Vec<Session>,
}

impl SessionCatalog {
    /// Creates a catalog seeded with fixture sessions.
    pub fn new(category: Category, seed: Vec<Session>) -> Self {
        Self {
            category,
            sessions: seed,
        }
    }

    /// Returns the category this catalog serves.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the sessions in insertion order, most recent first.
    ///
    /// Read-only snapshot semantics: callers filter and display, never
    /// mutate in place.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Looks up one session by id.
    pub fn get(&self, id: u32) -> Option<&Session> {
        self.sessions.iter().find(|session| session.id == id)
    }

    /// Builds a session from a validated draft and prepends it.
    ///
    /// The id is `max(existing ids, 0) + 1`, so ids stay unique even though
    /// newer sessions sit at the front of the list.
    pub fn create(&mut self, draft: SessionDraft) -> &Session {
        let id = self
            .sessions
            .iter()
            .map(|session| session.id)
            .max()
            .unwrap_or(0)
            + 1;
        let session = Session::from_draft(id, draft);

        tracing::info!(
            category = %self.category,
            id,
            name = %session.name,
            locked = session.is_locked(),
            "created session"
        );
        self.sessions.insert(0, session);

        &self.sessions[0]
    }

    /// Records one more player on `team` of session `id`.
    ///
    /// # Errors
    /// `NotFound` if no session has `id`; `TeamFull` if the team is at
    /// `max_per_team`. The capacity check and the increment happen under the
    /// same borrow, so the counter can never exceed the cap.
    pub fn increment_team(&mut self, id: u32, team: Team) -> Result<&Session, CatalogError> {
        let session = self
            .sessions
            .iter_mut()
            .find(|session| session.id == id)
            .ok_or(CatalogError::NotFound { id })?;

        if !session.has_room(team) {
            return Err(CatalogError::TeamFull { team });
        }

        session.add_player(team);
        tracing::info!(
            category = %self.category,
            id,
            %team,
            defenders = session.team_counts.defenders,
            attackers = session.team_counts.attackers,
            "player joined team"
        );

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::{MapName, TeamCounts, Weapon};

    fn draft(name: &str) -> SessionDraft {
        SessionDraft {
            name: name.to_string(),
            map: MapName::Rooftop,
            weapon: Weapon::Sniper,
            max_players_total: 4,
            team_names: Category::Matchmaking.default_team_names(),
            password: None,
        }
    }

    fn catalog_with(sessions: Vec<Session>) -> SessionCatalog {
        SessionCatalog::new(Category::Matchmaking, sessions)
    }

    #[test]
    fn test_create_assigns_monotonic_ids_and_prepends() {
        // Arrange
        let mut catalog = catalog_with(Vec::new());

        // Act
        let first_id = catalog.create(draft("first")).id;
        let second_id = catalog.create(draft("second")).id;

        // Assert
        assert_eq!(first_id, 1);
        assert_eq!(second_id, 2);
        assert_eq!(catalog.sessions()[0].name, "second");
        assert_eq!(catalog.sessions()[1].name, "first");
    }

    #[test]
    fn test_create_ids_survive_prepend_ordering() {
        // Arrange
        let mut catalog = catalog_with(Vec::new());
        catalog.create(draft("a"));
        catalog.create(draft("b"));

        // Act
        let third = catalog.create(draft("c")).id;

        // Assert: max-based assignment, not position-based
        assert_eq!(third, 3);
    }

    #[test]
    fn test_create_yields_empty_teams_and_half_capacity() {
        // Arrange
        let mut catalog = catalog_with(Vec::new());
        let mut input = draft("capacity");
        input.max_players_total = 10;

        // Act
        let session = catalog.create(input);

        // Assert
        assert_eq!(session.max_per_team, 5);
        assert_eq!(session.team_counts, TeamCounts::default());
    }

    #[test]
    fn test_increment_team_counts_up_to_capacity() {
        // Arrange
        let mut catalog = catalog_with(Vec::new());
        let id = catalog.create(draft("room for two")).id;

        // Act
        catalog
            .increment_team(id, Team::Defenders)
            .expect("first join should fit");
        let session = catalog
            .increment_team(id, Team::Defenders)
            .expect("second join should fit");

        // Assert
        assert_eq!(session.team_counts.get(Team::Defenders), 2);
    }

    #[test]
    fn test_increment_team_rejects_full_team() {
        // Arrange
        let mut catalog = catalog_with(Vec::new());
        let id = catalog.create(draft("tiny")).id;
        catalog
            .increment_team(id, Team::Attackers)
            .expect("first join should fit");
        catalog
            .increment_team(id, Team::Attackers)
            .expect("second join should fit");

        // Act
        let result = catalog.increment_team(id, Team::Attackers);

        // Assert: capacity invariant holds no matter how often we try
        assert_eq!(
            result,
            Err(CatalogError::TeamFull {
                team: Team::Attackers
            })
        );
        assert_eq!(
            catalog.get(id).map(|session| session.team_counts.attackers),
            Some(2)
        );
    }

    #[test]
    fn test_increment_team_unknown_id_is_not_found() {
        // Arrange
        let mut catalog = catalog_with(Vec::new());

        // Act
        let result = catalog.increment_team(42, Team::Defenders);

        // Assert
        assert_eq!(result, Err(CatalogError::NotFound { id: 42 }));
    }
}
