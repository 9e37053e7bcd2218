//! Event pump: one reader thread polls the terminal and forwards events
//! over a channel; the main loop drains them one at a time. Mutations
//! therefore apply in invocation order with no interleaving.

use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
    Tick,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || reader_loop(tx, tick_rate));
        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

fn reader_loop(tx: Sender<AppEvent>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        match event::poll(timeout) {
            Ok(true) => {
                let forwarded = match event::read() {
                    Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                    Ok(Event::Paste(text)) => tx.send(AppEvent::Paste(text)),
                    Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                    Ok(_) => Ok(()),
                    Err(err) => {
                        tracing::warn!(error = %err, "terminal event read failed");
                        break;
                    }
                };
                if forwarded.is_err() {
                    // Receiver dropped: the app is shutting down.
                    break;
                }
            }
            Ok(false) => {}
            Err(err) => {
                tracing::warn!(error = %err, "terminal event poll failed");
                break;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
}
