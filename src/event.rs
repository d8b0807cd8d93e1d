use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};

#[derive(Clone, Debug)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    Resize,
    /// The process was asked to stop from outside (SIGTERM, SIGINT, ...).
    Terminate,
    /// Terminal input broke or ended; the dashboard cannot continue.
    InputFailed(String),
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl EventHandler {
    /// Spawns the task that merges terminal input, the refresh timer and
    /// termination signals into one stream.
    ///
    /// The first tick arrives one full period after start; the caller is
    /// expected to have drawn an initial frame already.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Event>();

        let task = tokio::spawn(async move {
            let mut reader = event::EventStream::new();
            let mut tick_interval = tokio::time::interval_at(Instant::now() + tick_rate, tick_rate);
            tick_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut shutdown = std::pin::pin!(shutdown_signal());

            loop {
                tokio::select! {
                    maybe_event = reader.next() => {
                        match maybe_event {
                            Some(Ok(evt)) => {
                                let mapped = match evt {
                                    CrosstermEvent::Key(key) => Some(Event::Key(key)),
                                    CrosstermEvent::Resize(_, _) => Some(Event::Resize),
                                    _ => None,
                                };
                                if let Some(e) = mapped
                                    && tx.send(e).is_err()
                                {
                                    break;
                                }
                            }
                            Some(Err(err)) => {
                                tracing::error!(error = %err, "terminal input failed");
                                let _ = tx.send(Event::InputFailed(err.to_string()));
                                break;
                            }
                            None => {
                                let _ = tx.send(Event::InputFailed("input stream ended".to_string()));
                                break;
                            }
                        }
                    }
                    _ = tick_interval.tick() => {
                        if tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                    _ = &mut shutdown => {
                        let _ = tx.send(Event::Terminate);
                        break;
                    }
                }
            }
        });

        Self {
            rx,
            task: Some(task),
        }
    }

    /// Builds a handler fed by an existing channel instead of the terminal.
    pub fn from_receiver(rx: mpsc::UnboundedReceiver<Event>) -> Self {
        Self { rx, task: None }
    }

    /// Next event, or `None` once every producer is gone.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}

#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    let (Ok(mut terminate), Ok(mut hangup)) =
        (signal(SignalKind::terminate()), signal(SignalKind::hangup()))
    else {
        tracing::warn!("could not install termination signal handlers");
        return std::future::pending().await;
    };

    tokio::select! {
        _ = terminate.recv() => {}
        _ = hangup.recv() => {}
        _ = tokio::signal::ctrl_c() => {}
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("could not install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}
