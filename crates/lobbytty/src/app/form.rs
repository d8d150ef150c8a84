//! Session creation form: collects raw input field by field and turns it
//! into a [`SessionDraft`] on submit, reporting every invalid field at once.

use crate::domain::input::InputState;
use crate::domain::session::{
    ALLOWED_TOTALS, Category, MapName, SessionDraft, TeamNames, Weapon,
};

const NAME_MAX_CHARS: usize = 20;
const TEAM_NAME_MAX_CHARS: usize = 15;

/// Focusable fields, in traversal order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormField {
    Name,
    Map,
    Weapon,
    MaxPlayers,
    DefenderName,
    AttackerName,
    Locked,
    Password,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Map => "Map",
            FormField::Weapon => "Weapon",
            FormField::MaxPlayers => "Max players",
            FormField::DefenderName => "Defender team",
            FormField::AttackerName => "Attacker team",
            FormField::Locked => "Locked",
            FormField::Password => "Password",
        }
    }
}

/// Why a single field failed validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("name is required")]
    NameRequired,
    #[error("name must be at most {NAME_MAX_CHARS} characters")]
    NameTooLong,
    #[error("pick a map")]
    MapRequired,
    #[error("pick a weapon")]
    WeaponRequired,
    #[error("pick a player limit")]
    MaxPlayersRequired,
    #[error("team name must be 1 to {TEAM_NAME_MAX_CHARS} characters")]
    TeamNameLength,
    #[error("a locked session needs a password")]
    PasswordRequired,
}

/// Every failed field from one submit attempt.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<FieldError>,
    pub map: Option<FieldError>,
    pub weapon: Option<FieldError>,
    pub max_players: Option<FieldError>,
    pub defender_name: Option<FieldError>,
    pub attacker_name: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.map.is_none()
            && self.weapon.is_none()
            && self.max_players.is_none()
            && self.defender_name.is_none()
            && self.attacker_name.is_none()
            && self.password.is_none()
    }

    /// Returns the error attached to `field`, if any. `Locked` is a toggle
    /// and never fails.
    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        match field {
            FormField::Name => self.name.as_ref(),
            FormField::Map => self.map.as_ref(),
            FormField::Weapon => self.weapon.as_ref(),
            FormField::MaxPlayers => self.max_players.as_ref(),
            FormField::DefenderName => self.defender_name.as_ref(),
            FormField::AttackerName => self.attacker_name.as_ref(),
            FormField::Password => self.password.as_ref(),
            FormField::Locked => None,
        }
    }
}

/// In-progress create-session dialog state for one catalog category.
pub struct SessionForm {
    category: Category,
    pub name: InputState,
    pub defender_name: InputState,
    pub attacker_name: InputState,
    pub password: InputState,
    map: Option<usize>,
    weapon: Option<usize>,
    max_players: Option<usize>,
    pub locked: bool,
    pub focused: FormField,
    pub errors: FormErrors,
}

impl SessionForm {
    /// Creates an empty form with the category's default team names filled
    /// in.
    pub fn new(category: Category) -> Self {
        let defaults = category.default_team_names();

        Self {
            category,
            name: InputState::new(),
            defender_name: InputState::with_text(defaults.defenders),
            attacker_name: InputState::with_text(defaults.attackers),
            password: InputState::new(),
            map: None,
            weapon: None,
            max_players: None,
            locked: false,
            focused: FormField::Name,
            errors: FormErrors::default(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Currently selected map, if one has been picked.
    pub fn map(&self) -> Option<MapName> {
        self.map.map(|index| self.category.maps()[index])
    }

    pub fn weapon(&self) -> Option<Weapon> {
        self.weapon.map(|index| Weapon::ALL[index])
    }

    pub fn max_players_total(&self) -> Option<u8> {
        self.max_players.map(|index| ALLOWED_TOTALS[index])
    }

    /// Moves focus to the next field, wrapping at the end. The password
    /// field only joins the cycle while the locked toggle is on.
    pub fn focus_next(&mut self) {
        self.focused = match self.focused {
            FormField::Name => FormField::Map,
            FormField::Map => FormField::Weapon,
            FormField::Weapon => FormField::MaxPlayers,
            FormField::MaxPlayers => FormField::DefenderName,
            FormField::DefenderName => FormField::AttackerName,
            FormField::AttackerName => FormField::Locked,
            FormField::Locked if self.locked => FormField::Password,
            FormField::Locked | FormField::Password => FormField::Name,
        };
    }

    pub fn focus_previous(&mut self) {
        self.focused = match self.focused {
            FormField::Name if self.locked => FormField::Password,
            FormField::Name => FormField::Locked,
            FormField::Map => FormField::Name,
            FormField::Weapon => FormField::Map,
            FormField::MaxPlayers => FormField::Weapon,
            FormField::DefenderName => FormField::MaxPlayers,
            FormField::AttackerName => FormField::DefenderName,
            FormField::Locked => FormField::AttackerName,
            FormField::Password => FormField::Locked,
        };
    }

    /// Cycles the focused selection field forward, or toggles the lock.
    /// Text fields ignore this.
    pub fn cycle_next(&mut self) {
        match self.focused {
            FormField::Map => {
                self.map = Some(cycle_forward(self.map, self.category.maps().len()));
            }
            FormField::Weapon => {
                self.weapon = Some(cycle_forward(self.weapon, Weapon::ALL.len()));
            }
            FormField::MaxPlayers => {
                self.max_players =
                    Some(cycle_forward(self.max_players, ALLOWED_TOTALS.len()));
            }
            FormField::Locked => self.toggle_locked(),
            _ => {}
        }
    }

    pub fn cycle_previous(&mut self) {
        match self.focused {
            FormField::Map => {
                self.map = Some(cycle_backward(self.map, self.category.maps().len()));
            }
            FormField::Weapon => {
                self.weapon = Some(cycle_backward(self.weapon, Weapon::ALL.len()));
            }
            FormField::MaxPlayers => {
                self.max_players =
                    Some(cycle_backward(self.max_players, ALLOWED_TOTALS.len()));
            }
            FormField::Locked => self.toggle_locked(),
            _ => {}
        }
    }

    pub fn toggle_locked(&mut self) {
        self.locked = !self.locked;
        if !self.locked {
            self.password.clear();
            if self.focused == FormField::Password {
                self.focused = FormField::Locked;
            }
        }
    }

    /// Types into the focused text field. Name and team name inputs are
    /// capped at their maximum lengths so validation can only fail on them
    /// when the text arrived some other way.
    pub fn insert_char(&mut self, c: char) {
        match self.focused {
            FormField::Name => {
                if self.name.char_count() < NAME_MAX_CHARS {
                    self.name.insert_char(c);
                }
            }
            FormField::DefenderName => {
                if self.defender_name.char_count() < TEAM_NAME_MAX_CHARS {
                    self.defender_name.insert_char(c);
                }
            }
            FormField::AttackerName => {
                if self.attacker_name.char_count() < TEAM_NAME_MAX_CHARS {
                    self.attacker_name.insert_char(c);
                }
            }
            FormField::Password => self.password.insert_char(c),
            _ => {}
        }
    }

    pub fn delete_backward(&mut self) {
        match self.focused {
            FormField::Name => self.name.delete_backward(),
            FormField::DefenderName => self.defender_name.delete_backward(),
            FormField::AttackerName => self.attacker_name.delete_backward(),
            FormField::Password => self.password.delete_backward(),
            _ => {}
        }
    }

    /// Checks every field and produces a draft only when all of them pass.
    /// The error value carries one entry per failed field so the dialog can
    /// mark them all in a single render.
    pub fn validate(&mut self) -> Result<SessionDraft, &FormErrors> {
        let mut errors = FormErrors::default();

        if self.name.is_empty() {
            errors.name = Some(FieldError::NameRequired);
        } else if self.name.char_count() > NAME_MAX_CHARS {
            errors.name = Some(FieldError::NameTooLong);
        }
        if self.map.is_none() {
            errors.map = Some(FieldError::MapRequired);
        }
        if self.weapon.is_none() {
            errors.weapon = Some(FieldError::WeaponRequired);
        }
        if self.max_players.is_none() {
            errors.max_players = Some(FieldError::MaxPlayersRequired);
        }
        if !team_name_ok(&self.defender_name) {
            errors.defender_name = Some(FieldError::TeamNameLength);
        }
        if !team_name_ok(&self.attacker_name) {
            errors.attacker_name = Some(FieldError::TeamNameLength);
        }
        if self.locked && self.password.is_empty() {
            errors.password = Some(FieldError::PasswordRequired);
        }

        if let (Some(map), Some(weapon), Some(max_players_total)) =
            (self.map(), self.weapon(), self.max_players_total())
            && errors.is_empty()
        {
            self.errors = FormErrors::default();

            Ok(SessionDraft {
                name: self.name.text().to_string(),
                map,
                weapon,
                max_players_total,
                team_names: TeamNames {
                    defenders: self.defender_name.text().to_string(),
                    attackers: self.attacker_name.text().to_string(),
                },
                password: self
                    .locked
                    .then(|| self.password.text().to_string()),
            })
        } else {
            self.errors = errors;

            Err(&self.errors)
        }
    }
}

fn team_name_ok(input: &InputState) -> bool {
    (1..=TEAM_NAME_MAX_CHARS).contains(&input.char_count())
}

fn cycle_forward(current: Option<usize>, len: usize) -> usize {
    match current {
        Some(index) => (index + 1) % len,
        None => 0,
    }
}

fn cycle_backward(current: Option<usize>, len: usize) -> usize {
    match current {
        Some(index) => (index + len - 1) % len,
        None => len - 1,
    }
}
