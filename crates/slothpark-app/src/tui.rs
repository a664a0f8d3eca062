//! Terminal UI event loop.
//!
//! Key events are read on a blocking thread and forwarded over a channel;
//! reveal ticks arrive on a second channel. The loop applies one event at a
//! time and redraws after each.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use slothpark_chat::{ChatPanel, RevealId, TokioTicks};
use slothpark_core::{ChatConfig, Result, SlothParkError};
use slothpark_site::SiteContent;

use crate::app::App;
use crate::keys::map_key;

const INPUT_POLL: Duration = Duration::from_millis(100);

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Run the terminal UI until the visitor quits. The terminal is restored
/// even when the loop fails.
pub async fn run_tui(site: SiteContent, config: ChatConfig) -> Result<()> {
    let (ticks, tick_rx) = TokioTicks::new();
    let mut app = App::new(site, ChatPanel::new(config, ticks));

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app, tick_rx).await;
    restore_terminal(&mut terminal)?;

    tracing::info!(messages = app.panel().messages().len(), "Terminal UI closed");
    result
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen).map_err(terminal_error)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(terminal_error)
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode().map_err(terminal_error)?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)?;
    Ok(())
}

fn terminal_error(e: io::Error) -> SlothParkError {
    SlothParkError::Terminal(e.to_string())
}

/// One thing for the loop to handle.
#[derive(Debug, PartialEq, Eq)]
enum LoopEvent {
    Input(Event),
    Tick(RevealId),
}

/// Wait for the next input event or reveal tick.
///
/// The tick channel stays open as long as the panel lives, so a closed
/// input channel is an error: nothing else could end the loop.
async fn next_event(
    input_rx: &mut UnboundedReceiver<Event>,
    tick_rx: &mut UnboundedReceiver<RevealId>,
) -> Result<LoopEvent> {
    tokio::select! {
        event = input_rx.recv() => event
            .map(LoopEvent::Input)
            .ok_or_else(|| SlothParkError::Terminal("input reader stopped".to_string())),
        Some(id) = tick_rx.recv() => Ok(LoopEvent::Tick(id)),
    }
}

async fn event_loop(
    terminal: &mut Term,
    app: &mut App,
    mut tick_rx: UnboundedReceiver<RevealId>,
) -> Result<()> {
    let (input_tx, mut input_rx) = mpsc::unbounded_channel();
    let reader = tokio::task::spawn_blocking(move || read_input(input_tx));

    terminal.draw(|f| app.draw(f)).map_err(terminal_error)?;

    let result = loop {
        let event = match next_event(&mut input_rx, &mut tick_rx).await {
            Ok(event) => event,
            Err(e) => break Err(e),
        };
        match event {
            LoopEvent::Input(Event::Key(key)) => {
                if let Some(action) = map_key(key, app.panel().is_open()) {
                    app.apply(action);
                }
            }
            LoopEvent::Input(Event::Resize(..)) => {}
            LoopEvent::Input(_) => continue,
            LoopEvent::Tick(id) => {
                app.on_tick(id);
            }
        }

        if app.should_quit() {
            break Ok(());
        }
        if let Err(e) = terminal.draw(|f| app.draw(f)) {
            break Err(terminal_error(e));
        }
    };

    // The reader notices the closed channel on its next poll.
    drop(input_rx);
    if let Err(e) = reader.await {
        tracing::warn!(error = %e, "Input reader task failed");
    }
    result
}

fn read_input(tx: UnboundedSender<Event>) {
    while !tx.is_closed() {
        match event::poll(INPUT_POLL) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(e) => {
                tracing::error!(error = %e, "Terminal input poll failed");
                break;
            }
        }
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Terminal input read failed");
                break;
            }
        }
    }
}
