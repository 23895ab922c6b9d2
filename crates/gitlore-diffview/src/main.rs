use anyhow::Result;
use gitlore_config::ViewerConfig;
use gitlore_diff::Presenter;
use gitlore_diff_viewer::{ChangesetWidget, DefaultTheme, SyntectHighlighter, ViewerState};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;

mod input;
mod keys;
mod logger;

use keys::Command;

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting gitlore-diffview, logging to {}", log_file.display());

    let source = input::source_from_args(std::env::args().skip(1))?;
    let text = input::read_source(&source)?;
    let changeset = input::load_changeset(&text)?;

    let config = ViewerConfig::load();
    let presenter = Presenter::new(config.language_table());
    let mut state = ViewerState::new(changeset, presenter)
        .with_all_collapsed(config.collapse_files_by_default);
    let mut highlighter = SyntectHighlighter::with_theme_name(&config.theme)
        .with_max_cache(config.highlight_cache_size);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut state, &mut highlighter);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Viewer stopped: {}", err);
    }

    log::info!("Exiting gitlore-diffview");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut ViewerState,
    highlighter: &mut SyntectHighlighter,
) -> Result<()> {
    let theme = DefaultTheme;

    loop {
        terminal.draw(|frame| {
            let widget = ChangesetWidget::new(&mut *highlighter, &theme);
            frame.render_stateful_widget(widget, frame.area(), state);
        })?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match keys::command_for(key) {
                    Some(Command::Quit) => break,
                    Some(Command::Viewer(action)) => state.handle_action(action),
                    None => log::trace!("Unbound key {:?}", key.code),
                }
            }
        }
    }

    Ok(())
}
