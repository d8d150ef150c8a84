//! Join flow controller: the dialog sequence from selecting a session to
//! committing a seat (or aborting).
//!
//! The flow is an explicit state machine rather than a set of dialog flags,
//! so impossible combinations (password prompt and team picker open at once)
//! cannot be represented. One flow instance serves one join interaction.

use crate::app::catalog::{CatalogError, SessionCatalog};
use crate::domain::session::{Session, Team};

/// Current position in the join sequence. `Committed` and `Aborted` are
/// terminal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum JoinState {
    Idle,
    PasswordChallenge { session_id: u32 },
    TeamSelection { session_id: u32 },
    Committed { session_id: u32 },
    Aborted,
}

impl JoinState {
    fn label(self) -> &'static str {
        match self {
            JoinState::Idle => "idle",
            JoinState::PasswordChallenge { .. } => "password challenge",
            JoinState::TeamSelection { .. } => "team selection",
            JoinState::Committed { .. } => "committed",
            JoinState::Aborted => "aborted",
        }
    }
}

/// Error surfaced by a rejected join-flow event.
///
/// `IncorrectPassword` and `TeamFull` are recoverable: the flow stays where
/// it is and the user retries or cancels. `NotFound` aborts the flow.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum JoinError {
    #[error("incorrect password, try again")]
    IncorrectPassword,
    #[error("the {team} team is full")]
    TeamFull { team: Team },
    #[error("no session with id {id}")]
    NotFound { id: u32 },
    #[error("spectators can only join training sessions")]
    UnsupportedOperation,
    #[error("event not accepted in the {state} state")]
    InvalidTransition { state: &'static str },
}

/// Drives one join interaction against a [`SessionCatalog`].
pub struct JoinFlow {
    state: JoinState,
}

impl Default for JoinFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl JoinFlow {
    /// Creates a flow in the `Idle` state.
    pub fn new() -> Self {
        Self {
            state: JoinState::Idle,
        }
    }

    /// Returns the current flow state.
    pub fn state(&self) -> JoinState {
        self.state
    }

    /// Returns the id of the session this flow targets, if any.
    pub fn session_id(&self) -> Option<u32> {
        match self.state {
            JoinState::PasswordChallenge { session_id }
            | JoinState::TeamSelection { session_id }
            | JoinState::Committed { session_id } => Some(session_id),
            JoinState::Idle | JoinState::Aborted => None,
        }
    }

    /// Starts the flow for `session`.
    ///
    /// Locked sessions go to the password challenge, open ones straight to
    /// team selection. Sessions that are already in progress are rejected
    /// without entering any challenge state.
    ///
    /// # Errors
    /// `InvalidTransition` if the flow already started or the session is not
    /// joinable; the state is unchanged either way.
    pub fn select_session(&mut self, session: &Session) -> Result<(), JoinError> {
        if self.state != JoinState::Idle {
            return Err(self.rejected("select_session"));
        }

        if !session.status.is_joinable() {
            tracing::warn!(id = session.id, "rejected join attempt on running session");

            return Err(self.rejected("select_session"));
        }

        self.state = if session.is_locked() {
            JoinState::PasswordChallenge {
                session_id: session.id,
            }
        } else {
            JoinState::TeamSelection {
                session_id: session.id,
            }
        };

        Ok(())
    }

    /// Checks `candidate` against the selected session's password.
    ///
    /// # Errors
    /// `IncorrectPassword` keeps the flow in the challenge so the user can
    /// retry indefinitely; there is no lockout. `NotFound` aborts the flow.
    pub fn submit_password(
        &mut self,
        catalog: &SessionCatalog,
        candidate: &str,
    ) -> Result<(), JoinError> {
        let JoinState::PasswordChallenge { session_id } = self.state else {
            return Err(self.rejected("submit_password"));
        };

        let Some(session) = catalog.get(session_id) else {
            self.state = JoinState::Aborted;

            return Err(JoinError::NotFound { id: session_id });
        };

        if session.password.as_deref() != Some(candidate) {
            return Err(JoinError::IncorrectPassword);
        }

        self.state = JoinState::TeamSelection { session_id };

        Ok(())
    }

    /// Takes a seat on `team`, delegating the increment to the catalog.
    ///
    /// Calling this again after the flow committed is treated as a duplicate
    /// event: the flow stays committed and the catalog is not touched.
    ///
    /// # Errors
    /// `TeamFull` keeps the flow in team selection; the user may pick the
    /// other team or cancel. `NotFound` aborts the flow.
    pub fn choose_team(
        &mut self,
        catalog: &mut SessionCatalog,
        team: Team,
    ) -> Result<(), JoinError> {
        if let JoinState::Committed { .. } = self.state {
            return Ok(());
        }

        let JoinState::TeamSelection { session_id } = self.state else {
            return Err(self.rejected("choose_team"));
        };

        match catalog.increment_team(session_id, team) {
            Ok(_) => {
                self.state = JoinState::Committed { session_id };

                Ok(())
            }
            Err(CatalogError::TeamFull { team }) => Err(JoinError::TeamFull { team }),
            Err(CatalogError::NotFound { id }) => {
                self.state = JoinState::Aborted;

                Err(JoinError::NotFound { id })
            }
        }
    }

    /// Joins as a spectator: commits without mutating any team counter.
    ///
    /// Only training catalogs support spectators; on any other category this
    /// is an integration error and is rejected at the boundary instead of
    /// being silently ignored.
    ///
    /// # Errors
    /// `UnsupportedOperation` outside training; `InvalidTransition` outside
    /// team selection.
    pub fn choose_spectator(&mut self, catalog: &SessionCatalog) -> Result<(), JoinError> {
        if let JoinState::Committed { .. } = self.state {
            return Ok(());
        }

        let JoinState::TeamSelection { session_id } = self.state else {
            return Err(self.rejected("choose_spectator"));
        };

        if !catalog.category().allows_spectators() {
            return Err(JoinError::UnsupportedOperation);
        }

        tracing::info!(id = session_id, "joined as spectator");
        self.state = JoinState::Committed { session_id };

        Ok(())
    }

    /// Abandons the flow from any non-terminal state.
    ///
    /// A committed flow stays committed; cancel after commit is a duplicate
    /// event, not an undo.
    pub fn cancel(&mut self) {
        match self.state {
            JoinState::Committed { .. } | JoinState::Aborted => {}
            JoinState::Idle
            | JoinState::PasswordChallenge { .. }
            | JoinState::TeamSelection { .. } => {
                tracing::info!(state = self.state.label(), "join flow aborted");
                self.state = JoinState::Aborted;
            }
        }
    }

    fn rejected(&self, event: &'static str) -> JoinError {
        tracing::warn!(event, state = self.state.label(), "rejected join-flow event");

        JoinError::InvalidTransition {
            state: self.state.label(),
        }
    }
}
