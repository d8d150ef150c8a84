use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;

/// Lobby category. Determines the valid map set and default team names.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Category {
    Matchmaking,
    Training,
}

impl Category {
    /// Returns the maps that sessions of this category may use.
    ///
    /// The two sets are disjoint; a matchmaking session can never be scheduled
    /// on a training map and vice versa.
    pub fn maps(self) -> &'static [MapName] {
        match self {
            Category::Matchmaking => &[MapName::Rooftop, MapName::Plaza, MapName::FastFood],
            Category::Training => &[MapName::BootCamp, MapName::TacticalSim, MapName::FiringRange],
        }
    }

    /// Returns the default defender/attacker labels used by the create form.
    pub fn default_team_names(self) -> TeamNames {
        match self {
            Category::Matchmaking => TeamNames {
                defenders: "Defenders".to_string(),
                attackers: "Attackers".to_string(),
            },
            Category::Training => TeamNames {
                defenders: "Recruits".to_string(),
                attackers: "Bots".to_string(),
            },
        }
    }

    /// Returns whether spectators may join sessions of this category.
    pub fn allows_spectators(self) -> bool {
        self == Category::Training
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Matchmaking => write!(f, "matchmaking"),
            Category::Training => write!(f, "training"),
        }
    }
}

/// Playable map. Each map belongs to exactly one [`Category`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MapName {
    Rooftop,
    Plaza,
    FastFood,
    BootCamp,
    TacticalSim,
    FiringRange,
}

impl MapName {
    /// Returns the category whose map set contains this map.
    pub fn category(self) -> Category {
        match self {
            MapName::Rooftop | MapName::Plaza | MapName::FastFood => Category::Matchmaking,
            MapName::BootCamp | MapName::TacticalSim | MapName::FiringRange => Category::Training,
        }
    }

    /// Display label shown in lobby rows and the create form.
    pub fn label(self) -> &'static str {
        match self {
            MapName::Rooftop => "Rooftop",
            MapName::Plaza => "Plaza",
            MapName::FastFood => "Fast Food",
            MapName::BootCamp => "Boot Camp",
            MapName::TacticalSim => "Tactical Sim",
            MapName::FiringRange => "Firing Range",
        }
    }
}

impl FromStr for MapName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rooftop" => Ok(MapName::Rooftop),
            "Plaza" => Ok(MapName::Plaza),
            "FastFood" => Ok(MapName::FastFood),
            "BootCamp" => Ok(MapName::BootCamp),
            "TacticalSim" => Ok(MapName::TacticalSim),
            "FiringRange" => Ok(MapName::FiringRange),
            _ => Err(format!("Unknown map: {s}")),
        }
    }
}

/// Weapon loadout restriction for one session.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Weapon {
    Pistol,
    Rifle,
    Sniper,
}

impl Weapon {
    /// All selectable weapons, in form order.
    pub const ALL: [Weapon; 3] = [Weapon::Pistol, Weapon::Rifle, Weapon::Sniper];

    /// Display label shown in lobby rows and the create form.
    pub fn label(self) -> &'static str {
        match self {
            Weapon::Pistol => "Pistol",
            Weapon::Rifle => "Rifle",
            Weapon::Sniper => "Sniper",
        }
    }
}

impl FromStr for Weapon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pistol" => Ok(Weapon::Pistol),
            "Rifle" => Ok(Weapon::Rifle),
            "Sniper" => Ok(Weapon::Sniper),
            _ => Err(format!("Unknown weapon: {s}")),
        }
    }
}

/// High-level lifecycle state for one session.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    Waiting,
    InProgress,
}

impl Status {
    /// Returns the UI color associated with this status.
    pub fn color(self) -> Color {
        match self {
            Status::Waiting => Color::Green,
            Status::InProgress => Color::Red,
        }
    }

    /// Returns whether a session in this status accepts new joins.
    pub fn is_joinable(self) -> bool {
        self == Status::Waiting
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Waiting => write!(f, "Waiting"),
            Status::InProgress => write!(f, "In progress"),
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Waiting" => Ok(Status::Waiting),
            "InProgress" => Ok(Status::InProgress),
            _ => Err(format!("Unknown status: {s}")),
        }
    }
}

/// One of the two playable sides of a session.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Team {
    Defenders,
    Attackers,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Defenders => write!(f, "defenders"),
            Team::Attackers => write!(f, "attackers"),
        }
    }
}

/// Display labels for the two sides of a session.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TeamNames {
    pub defenders: String,
    pub attackers: String,
}

impl TeamNames {
    /// Returns the label for one team.
    pub fn get(&self, team: Team) -> &str {
        match team {
            Team::Defenders => &self.defenders,
            Team::Attackers => &self.attackers,
        }
    }
}

/// Per-team occupancy counters, each bounded by `max_per_team`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct TeamCounts {
    pub defenders: u8,
    pub attackers: u8,
}

impl TeamCounts {
    /// Returns the counter for one team.
    pub fn get(self, team: Team) -> u8 {
        match team {
            Team::Defenders => self.defenders,
            Team::Attackers => self.attackers,
        }
    }

    /// Total players across both teams.
    pub fn total(self) -> u8 {
        self.defenders + self.attackers
    }

    fn get_mut(&mut self, team: Team) -> &mut u8 {
        match team {
            Team::Defenders => &mut self.defenders,
            Team::Attackers => &mut self.attackers,
        }
    }
}

/// One joinable game round: two teams, a capacity, and a lock state.
///
/// `password` carries the lock invariant in the type: a session is locked iff
/// `password` is `Some` non-empty string, and the create path never produces
/// `Some("")`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Session {
    pub id: u32,
    pub name: String,
    pub status: Status,
    pub map: MapName,
    pub weapon: Weapon,
    pub password: Option<String>,
    pub team_names: TeamNames,
    pub team_counts: TeamCounts,
    pub max_per_team: u8,
    pub score: (u8, u8),
}

impl Session {
    /// Builds a fresh `Waiting` session from a validated draft.
    pub fn from_draft(id: u32, draft: SessionDraft) -> Self {
        Self {
            id,
            name: draft.name,
            status: Status::Waiting,
            map: draft.map,
            weapon: draft.weapon,
            password: draft.password,
            team_names: draft.team_names,
            team_counts: TeamCounts::default(),
            max_per_team: draft.max_players_total / 2,
            score: (0, 0),
        }
    }

    /// Returns whether joining requires a password.
    pub fn is_locked(&self) -> bool {
        self.password.is_some()
    }

    /// Returns whether `team` has room for one more player.
    pub fn has_room(&self, team: Team) -> bool {
        self.team_counts.get(team) < self.max_per_team
    }

    /// Records one more player on `team`. Caller must have checked capacity.
    pub(crate) fn add_player(&mut self, team: Team) {
        *self.team_counts.get_mut(team) += 1;
    }

    /// Total capacity across both teams.
    pub fn max_players_total(&self) -> u8 {
        self.max_per_team * 2
    }
}

/// Total player counts a session may be created with.
pub const ALLOWED_TOTALS: [u8; 4] = [4, 6, 8, 10];

/// Validated input for [`Session::from_draft`].
///
/// Only the create form produces drafts, after all field rules in
/// `app::form` have passed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SessionDraft {
    pub name: String,
    pub map: MapName,
    pub weapon: Weapon,
    pub max_players_total: u8,
    pub team_names: TeamNames,
    pub password: Option<String>,
}
