use ratatui::widgets::TableState;

use crate::domain::filter;
use crate::domain::fixture::{Fixtures, GameCard, PracticeMode};
use crate::domain::input::InputState;
use crate::domain::session::{Category, Session};
use crate::ui::state::app_mode::AppMode;

pub mod catalog;
pub mod form;
pub mod join;

use catalog::SessionCatalog;
use join::JoinFlow;

/// Top-level screen selector.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tab {
    Ranked,
    Practice,
    Matchmaking,
    Training,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Ranked, Tab::Practice, Tab::Matchmaking, Tab::Training];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Ranked => "Ranked",
            Tab::Practice => "Practice",
            Tab::Matchmaking => "Matchmaking",
            Tab::Training => "Training",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Tab::Ranked => Tab::Practice,
            Tab::Practice => Tab::Matchmaking,
            Tab::Matchmaking => Tab::Training,
            Tab::Training => Tab::Ranked,
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Tab::Ranked => Tab::Training,
            Tab::Practice => Tab::Ranked,
            Tab::Matchmaking => Tab::Practice,
            Tab::Training => Tab::Matchmaking,
        }
    }

    /// Returns the catalog category behind a lobby tab, or `None` for the
    /// card-based tabs.
    pub fn lobby_category(self) -> Option<Category> {
        match self {
            Tab::Ranked | Tab::Practice => None,
            Tab::Matchmaking => Some(Category::Matchmaking),
            Tab::Training => Some(Category::Training),
        }
    }
}

/// Weapon-tag narrowing on the ranked page, cycled with a single key.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RankedFilter {
    All,
    Rifles,
    Pistols,
    Mixed,
}

impl RankedFilter {
    /// Tag matched against [`GameCard::weapon_tag`].
    pub fn tag(self) -> &'static str {
        match self {
            RankedFilter::All => filter::ALL_TAG,
            RankedFilter::Rifles => "Rifles",
            RankedFilter::Pistols => "Pistols",
            RankedFilter::Mixed => "Mixed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RankedFilter::All => "All",
            RankedFilter::Rifles => "Rifles",
            RankedFilter::Pistols => "Pistols",
            RankedFilter::Mixed => "Mixed",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            RankedFilter::All => RankedFilter::Rifles,
            RankedFilter::Rifles => RankedFilter::Pistols,
            RankedFilter::Pistols => RankedFilter::Mixed,
            RankedFilter::Mixed => RankedFilter::All,
        }
    }
}

/// Whole-app state: one catalog per lobby category, the card data for the
/// ranked and practice pages, and the per-tab view state.
pub struct App {
    pub mode: AppMode,
    pub current_tab: Tab,
    pub matchmaking: SessionCatalog,
    pub training: SessionCatalog,
    pub ranked_cards: Vec<GameCard>,
    pub practice_modes: Vec<PracticeMode>,
    pub ranked_filter: RankedFilter,
    pub matchmaking_search: InputState,
    pub training_search: InputState,
    pub matchmaking_table: TableState,
    pub training_table: TableState,
    pub practice_table: TableState,
    pub join: JoinFlow,
}

impl App {
    pub fn new(fixtures: Fixtures) -> Self {
        let matchmaking = SessionCatalog::new(Category::Matchmaking, fixtures.matchmaking);
        let training = SessionCatalog::new(Category::Training, fixtures.training);

        let mut app = Self {
            mode: AppMode::Browse,
            current_tab: Tab::Ranked,
            matchmaking,
            training,
            ranked_cards: fixtures.ranked,
            practice_modes: fixtures.practice,
            ranked_filter: RankedFilter::All,
            matchmaking_search: InputState::new(),
            training_search: InputState::new(),
            matchmaking_table: TableState::default(),
            training_table: TableState::default(),
            practice_table: TableState::default(),
            join: JoinFlow::new(),
        };

        select_first(&mut app.matchmaking_table, app.matchmaking.sessions().len());
        select_first(&mut app.training_table, app.training.sessions().len());
        select_first(&mut app.practice_table, app.practice_modes.len());

        app
    }

    pub fn next_tab(&mut self) {
        self.current_tab = self.current_tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.current_tab = self.current_tab.previous();
    }

    /// Catalog behind the current tab, if it is a lobby tab.
    pub fn current_catalog(&self) -> Option<&SessionCatalog> {
        match self.current_tab {
            Tab::Ranked | Tab::Practice => None,
            Tab::Matchmaking => Some(&self.matchmaking),
            Tab::Training => Some(&self.training),
        }
    }

    /// Search box for the current lobby tab.
    pub fn current_search(&self) -> Option<&InputState> {
        match self.current_tab {
            Tab::Ranked | Tab::Practice => None,
            Tab::Matchmaking => Some(&self.matchmaking_search),
            Tab::Training => Some(&self.training_search),
        }
    }

    pub fn current_search_mut(&mut self) -> Option<&mut InputState> {
        match self.current_tab {
            Tab::Ranked | Tab::Practice => None,
            Tab::Matchmaking => Some(&mut self.matchmaking_search),
            Tab::Training => Some(&mut self.training_search),
        }
    }

    pub fn current_table_mut(&mut self) -> Option<&mut TableState> {
        match self.current_tab {
            Tab::Ranked => None,
            Tab::Practice => Some(&mut self.practice_table),
            Tab::Matchmaking => Some(&mut self.matchmaking_table),
            Tab::Training => Some(&mut self.training_table),
        }
    }

    /// Sessions of the current lobby tab after applying its search filter,
    /// cloned into a render/selection snapshot. Selection indices always
    /// refer to this filtered list, never to the raw catalog order.
    pub fn visible_sessions(&self) -> Vec<Session> {
        let Some(catalog) = self.current_catalog() else {
            return Vec::new();
        };
        let query = self.current_search().map_or("", InputState::text);

        filter::by_text(catalog.sessions(), query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Ranked cards after applying the weapon-tag filter.
    pub fn visible_ranked_cards(&self) -> Vec<GameCard> {
        filter::by_weapon_tag(&self.ranked_cards, self.ranked_filter.tag())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Number of selectable rows on the current tab.
    fn current_row_count(&self) -> usize {
        match self.current_tab {
            Tab::Ranked => 0,
            Tab::Practice => self.practice_modes.len(),
            Tab::Matchmaking | Tab::Training => self.visible_sessions().len(),
        }
    }

    /// Moves the current tab's selection down, wrapping at the end.
    pub fn next(&mut self) {
        let row_count = self.current_row_count();
        if row_count == 0 {
            return;
        }
        let Some(table_state) = self.current_table_mut() else {
            return;
        };
        let i = match table_state.selected() {
            Some(i) if i >= row_count - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        table_state.select(Some(i));
    }

    /// Moves the current tab's selection up, wrapping at the start.
    pub fn previous(&mut self) {
        let row_count = self.current_row_count();
        if row_count == 0 {
            return;
        }
        let Some(table_state) = self.current_table_mut() else {
            return;
        };
        let i = match table_state.selected() {
            Some(0) | None => row_count - 1,
            Some(i) => i - 1,
        };
        table_state.select(Some(i));
    }

    /// Re-clamps the lobby selection after the filtered list changed size.
    pub fn clamp_selection(&mut self) {
        let row_count = self.current_row_count();
        let Some(table_state) = self.current_table_mut() else {
            return;
        };
        if row_count == 0 {
            table_state.select(None);
        } else {
            let clamped = table_state.selected().map_or(0, |i| i.min(row_count - 1));
            table_state.select(Some(clamped));
        }
    }

    /// Session under the cursor on the current lobby tab.
    pub fn selected_session(&self) -> Option<Session> {
        let index = match self.current_tab {
            Tab::Ranked | Tab::Practice => return None,
            Tab::Matchmaking => self.matchmaking_table.selected()?,
            Tab::Training => self.training_table.selected()?,
        };

        self.visible_sessions().get(index).cloned()
    }

    /// Practice drill under the cursor.
    pub fn selected_practice_mode(&self) -> Option<&PracticeMode> {
        let index = self.practice_table.selected()?;

        self.practice_modes.get(index)
    }

    pub fn cycle_ranked_filter(&mut self) {
        self.ranked_filter = self.ranked_filter.next();
    }
}

fn select_first(table_state: &mut TableState, row_count: usize) {
    if row_count == 0 {
        table_state.select(None);
    } else {
        table_state.select(Some(0));
    }
}
