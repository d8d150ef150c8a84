use std::io;
use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::app::{App, Tab};
use crate::ui;

mod event;
mod key_handler;
pub mod mode;
mod terminal;

pub(crate) type TuiTerminal = Terminal<CrosstermBackend<io::Stdout>>;

pub(crate) enum EventResult {
    Continue,
    Quit,
}

/// Runs the TUI event/render loop until the user exits.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails.
pub async fn run(app: &mut App) -> io::Result<()> {
    let _terminal_guard = terminal::TerminalGuard;
    let mut terminal = terminal::setup_terminal()?;

    // Crossterm event reading blocks, so it lives on a dedicated thread and
    // feeds the async loop through a channel.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    event::spawn_event_reader(event_tx);

    let mut tick = tokio::time::interval(Duration::from_millis(50));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    run_main_loop(app, &mut terminal, &mut event_rx, &mut tick).await?;

    terminal.show_cursor()?;

    Ok(())
}

async fn run_main_loop(
    app: &mut App,
    terminal: &mut TuiTerminal,
    event_rx: &mut mpsc::UnboundedReceiver<crossterm::event::Event>,
    tick: &mut tokio::time::Interval,
) -> io::Result<()> {
    loop {
        render_frame(app, terminal)?;

        if matches!(
            event::process_events(app, event_rx, tick).await,
            EventResult::Quit
        ) {
            break;
        }
    }

    Ok(())
}

fn render_frame<B: ratatui::backend::Backend>(
    app: &mut App,
    terminal: &mut Terminal<B>,
) -> Result<(), B::Error> {
    let current_tab = app.current_tab;
    let sessions = app.visible_sessions();
    let ranked_cards = app.visible_ranked_cards();
    let ranked_filter = app.ranked_filter;
    let search_query = app
        .current_search()
        .map_or_else(String::new, |input| input.text().to_string());
    // Snapshot of the join target so overlays show live team counts.
    let join_target = app.join.session_id().and_then(|id| {
        app.current_catalog()
            .and_then(|catalog| catalog.get(id))
            .cloned()
    });

    terminal.draw(|frame| {
        // Card tabs never read the lobby table state.
        let mut unused_table_state = ratatui::widgets::TableState::default();
        let table_state = match current_tab {
            Tab::Matchmaking => &mut app.matchmaking_table,
            Tab::Training => &mut app.training_table,
            Tab::Ranked | Tab::Practice => &mut unused_table_state,
        };

        ui::render(
            frame,
            ui::RenderContext {
                current_tab,
                join_target: join_target.as_ref(),
                mode: &app.mode,
                practice_modes: &app.practice_modes,
                practice_table_state: &mut app.practice_table,
                ranked_cards: &ranked_cards,
                ranked_filter,
                search_query: &search_query,
                sessions: &sessions,
                table_state,
            },
        );
    })?;

    Ok(())
}
