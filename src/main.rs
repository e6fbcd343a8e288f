use etalage::app::{App, AppMessage, TICK_MS};
use etalage::capability::Capabilities;
use etalage::config::Config;
use etalage::logging;
use etalage::ui;

use color_eyre::Result;
use crossterm::cursor::Show;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("etalage {VERSION}");
        return Ok(());
    }

    color_eyre::install()?;

    let config = Config::load();
    logging::init(&config)?;
    for warning in &config.load_warnings {
        tracing::warn!(%warning, "config problem");
    }

    install_panic_hook();
    let (mut terminal, mouse_captured) = setup_terminal(config.mouse)?;

    // Capabilities are sampled exactly once, before any activation decision.
    let size = terminal.size()?;
    let caps = Capabilities::detect(size.width, mouse_captured);
    tracing::info!(?caps, width = size.width, height = size.height, "starting etalage");

    let (message_tx, message_rx) = mpsc::unbounded_channel();
    let mut app = App::new(&config, caps, size.width, size.height, message_tx);

    let result = run_app(&mut terminal, &mut app, message_rx).await;

    restore_terminal(&mut terminal)?;
    result
}

/// Raw mode, alternate screen, and optionally mouse capture.
///
/// Returns whether mouse capture actually engaged. A terminal that refuses
/// the capture sequence leaves the page in keyboard-only mode, and the
/// hover-dependent extras never load.
fn setup_terminal(want_mouse: bool) -> Result<(Terminal<CrosstermBackend<Stdout>>, bool)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mouse_captured = want_mouse && execute!(stdout, EnableMouseCapture).is_ok();

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok((terminal, mouse_captured))
}

/// Chain a panic hook that puts the terminal back before the report prints.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show);
        original_hook(panic_info);
    }));
}

/// Twin of [`setup_terminal`], run on both clean exit and error paths.
fn restore_terminal<B>(terminal: &mut Terminal<B>) -> Result<()>
where
    B: ratatui::backend::Backend + io::Write,
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Drive the page: redraw when dirty, then wait for whichever comes first,
/// an animation tick, a terminal event, or a finished submission.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut message_rx: mpsc::UnboundedReceiver<AppMessage>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut events = EventStream::new();

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::render(frame, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            // Bubble bobbing, pulse rings, the chart entrance, and the delayed
            // activation of deferred features all advance on this tick.
            _ = tokio::time::sleep(Duration::from_millis(TICK_MS)) => {
                app.tick();
            }

            event = events.next() => {
                if let Some(Ok(event)) = event {
                    match event {
                        Event::Resize(width, height) => app.on_resize(width, height),
                        Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                        Event::Mouse(mouse) => app.handle_mouse(mouse),
                        _ => {}
                    }
                }
            }

            message = message_rx.recv() => {
                if let Some(message) = message {
                    app.handle_message(message);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
