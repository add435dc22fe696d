use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use slipscroll_core::{FrameClock, ScrollSettings};
use slipscroll_tui::{
    app::App,
    document::demo_text,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    ui,
};

pub fn run(settings: &ScrollSettings) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("slipscroll"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let viewport_rows = terminal.size()?.height;
    let mut app = App::new(settings, &demo_text(40), viewport_rows)?;

    let clock = FrameClock::new(settings.fps);
    let events = EventHandler::new(clock.interval());

    let result = event_loop(&mut terminal, &mut app, &events);

    // Restore terminal
    app.shutdown();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        match events.next()? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app.pending_key);
                app.handle_action(action);
            }
            Some(AppEvent::Resize(_, rows)) => app.handle_resize(rows),
            Some(AppEvent::Tick) => {}
            None => continue,
        }

        if app.should_quit {
            return Ok(());
        }

        // one frame: interpolate, paint, notify
        app.tick();
        terminal.draw(|frame| ui::draw(frame, app))?;
    }
}
