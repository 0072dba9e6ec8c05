use crate::identity::IdentityBackend;
use crate::saga::CoordinatorHandle;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Run the sign-up TUI until the user quits.
///
/// Blocks the calling thread; `runtime` hosts the task that forwards
/// coordinator actions into the event loop.
pub fn run(
    coordinator: CoordinatorHandle,
    identity: Arc<dyn IdentityBackend>,
    runtime: tokio::runtime::Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let shutdown = ShutdownHandle::new();
    let events = EventHandler::new(tick_rate, shutdown.clone());
    let mut app = App::new();

    let mut actions = coordinator.subscribe();
    let action_tx = events.sender();
    let forward_shutdown = shutdown.clone();
    runtime.spawn(async move {
        loop {
            tokio::select! {
                _ = forward_shutdown.wait() => break,
                next = actions.recv() => match next {
                    Some(action) => {
                        if action_tx.send(AppEvent::Action(action)).is_err() {
                            break;
                        }
                    }
                    None => {
                        let _ = action_tx.send(AppEvent::Disconnected);
                        break;
                    }
                },
            }
        }
    });

    let result = event_loop(&mut terminal, &events, &mut app, &coordinator, identity.as_ref(), tick_rate);

    shutdown.signal();
    drop(guard);
    result
}

fn event_loop(
    terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
    events: &EventHandler,
    app: &mut App,
    coordinator: &CoordinatorHandle,
    identity: &dyn IdentityBackend,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, &*app))?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let Some(intent) = handle_key(app, key) {
                    if let Err(err) = coordinator.dispatch(intent) {
                        tracing::warn!(error = %err, "Dispatch from view failed");
                    }
                    app.set_pending(coordinator.pending());
                }
            }
            Ok(AppEvent::Action(action)) => {
                app.on_action(action, identity.current_session().is_some());
                app.set_pending(coordinator.pending());
            }
            Ok(AppEvent::Tick) => app.set_pending(coordinator.pending()),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Disconnected) => {
                tracing::warn!("Coordinator observer channel closed");
                return Ok(());
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}
