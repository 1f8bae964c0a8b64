use crate::cart::CartStore;
use crate::config::Config;
use crate::shutdown::ShutdownCoordinator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::{draw, Drawn};
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Instant;

/// Run the storefront until the user quits or a signal arrives.
pub fn run(config: &Config, store: CartStore, shutdown: &ShutdownCoordinator) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(config.ui.mouse_capture)?;
    let tick_rate = config.ui.tick_rate();
    let mut app = App::new(store, config);
    let events = EventHandler::new(tick_rate, shutdown.handle());
    tracing::info!(
        tick_rate_ms = config.ui.tick_rate_ms,
        mouse_capture = config.ui.mouse_capture,
        "storefront started"
    );

    loop {
        let mut drawn = Drawn::default();
        terminal.draw(|frame| drawn = draw(frame, &app))?;
        app.set_drawn(drawn);
        if app.should_quit() {
            break;
        }

        let now = Instant::now();
        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, now),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse, now),
            Ok(AppEvent::Tick) => app.on_tick(now),
            // The next draw picks up the new size.
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
            }
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => app.on_tick(now),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(
        items = app.store().item_count(),
        "storefront stopped"
    );
    drop(guard);
    Ok(())
}
