// ABOUTME: App orchestrator — wires the responder task to the TUI and runs the event loop.
// ABOUTME: Owns terminal setup/teardown and the crossterm EventStream + channel select.

use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::responder::{CannedResponder, run_responder};
use crate::tui::input::{self, InputResult};
use crate::tui::state::{UserEvent, WidgetState};
use crate::tui::ui;

/// Top-level application.
pub struct App {
    config: Config,
}

impl App {
    /// Create a new app with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the application: spawn the responder, drive the TUI until quit.
    pub async fn run(self) -> Result<()> {
        let (user_tx, user_rx) = mpsc::channel::<UserEvent>(16);
        let (agent_tx, mut agent_rx) = mpsc::channel(64);

        let responder = Arc::new(CannedResponder::new(
            self.config.responder.reply_text.clone(),
            self.config.responder.delay(),
        ));
        let responder_handle = tokio::spawn(run_responder(responder, user_rx, agent_tx));

        let mut terminal = setup_terminal()?;
        let mut state = WidgetState::new(self.config.widget.title.clone());
        let mut events = EventStream::new();

        let loop_result = async {
            loop {
                terminal.draw(|frame| ui::render(frame, &mut state))?;

                tokio::select! {
                    maybe_event = events.next() => match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            match input::handle_key(&mut state, key) {
                                InputResult::Send(text) => {
                                    // Responder backpressure is bounded; a full
                                    // channel would only delay the canned reply.
                                    let _ = user_tx.send(UserEvent::Message(text)).await;
                                }
                                InputResult::Quit => break,
                                InputResult::Toggled | InputResult::None => {}
                            }
                        }
                        Some(Ok(Event::Mouse(mouse))) => {
                            input::handle_mouse(&mut state, mouse);
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => return Err(anyhow::anyhow!("terminal event error: {e}")),
                        None => break,
                    },
                    Some(event) = agent_rx.recv() => {
                        state.apply_agent_event(event);
                    }
                }
            }
            Ok(())
        }
        .await;

        restore_terminal(&mut terminal)?;

        // Signal the responder to quit; this aborts replies still on their delay.
        let _ = user_tx.send(UserEvent::Quit).await;
        drop(user_tx);
        let _ = responder_handle.await;

        loop_result
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
