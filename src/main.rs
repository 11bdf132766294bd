//! Standalone host for the lock overlay.
//!
//! Stands in for the embedding screen locker: connects to the display,
//! creates the cover and runs one loop that feeds window events and fade
//! ticks through the same queue.

#[cfg(unix)]
fn main() {
    let log = slock_cover::logging::init();
    let config = slock_cover::storage::load_config();
    if let Some(log) = &log {
        log.set_debug(config.debug);
    }

    if let Err(e) = host::run(&config) {
        tracing::error!("slock-cover: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(not(unix))]
fn main() {
    eprintln!("slock-cover needs an X11 display");
    std::process::exit(1);
}

#[cfg(unix)]
mod host {
    use std::sync::Arc;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use tracing::info;
    use x11rb::connection::Connection;
    use x11rb::rust_connection::RustConnection;

    use slock_cover::platform::LockCover;
    use slock_cover::{CoverConfig, CoverEvent, EventBus, EventPublisher};

    pub fn run(config: &CoverConfig) -> Result<()> {
        let (conn, screen_num) = x11rb::connect(None).context("cannot open display")?;
        let conn = Arc::new(conn);

        let mut cover = LockCover::new(conn.clone(), screen_num, config)
            .context("cannot create lock cover")?;

        let bus = EventBus::new();
        let publisher = bus.publisher();

        loop {
            pump(&conn, &cover, &publisher)?;

            if cover.tick_due(Instant::now()) {
                publisher.publish(CoverEvent::Tick);
            }

            if cover.dispatch_events(bus.drain())? {
                info!("close requested, exiting");
                return Ok(());
            }
        }
    }

    /// Move pending X events onto the bus.
    ///
    /// While idle this blocks for the next event. While fading it waits at
    /// most until the next tick is due.
    fn pump(conn: &RustConnection, cover: &LockCover, publisher: &EventPublisher) -> Result<()> {
        let first = if cover.is_fading() {
            match conn.poll_for_event()? {
                Some(event) => Some(event),
                None => {
                    std::thread::sleep(cover.time_until_tick(Instant::now()));
                    conn.poll_for_event()?
                }
            }
        } else {
            Some(conn.wait_for_event()?)
        };

        if let Some(event) = first {
            publisher.publish(cover.translate(&event));
            while let Some(event) = conn.poll_for_event()? {
                publisher.publish(cover.translate(&event));
            }
        }
        Ok(())
    }
}
