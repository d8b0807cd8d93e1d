use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;
use crate::event::{Event, EventHandler};
use crate::system::MetricsSource;
use crate::system::collector::Collector;
use crate::system::snapshot::MetricsSnapshot;
use crate::ui::theme::Theme;

pub const QUIT_KEY: char = 'q';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Starting,
    Running,
    Stopped,
}

pub struct App<S = Collector> {
    pub phase: Phase,
    /// Latest sample; replaced wholesale every tick.
    pub snapshot: Option<MetricsSnapshot>,
    pub theme: Theme,
    source: S,
}

impl<S: MetricsSource> App<S> {
    pub fn new(source: S, theme: Theme) -> Self {
        App {
            phase: Phase::Starting,
            snapshot: None,
            theme,
            source,
        }
    }

    /// Takes the first sample so there is something to draw before the
    /// first timer tick.
    pub fn start(&mut self) {
        if self.phase != Phase::Starting {
            return;
        }
        self.refresh_data();
        self.phase = Phase::Running;
        tracing::info!("dashboard running");
    }

    pub fn refresh_data(&mut self) {
        self.snapshot = Some(self.source.sample());
    }

    pub fn stop(&mut self) {
        if self.phase != Phase::Stopped {
            self.phase = Phase::Stopped;
            tracing::info!("dashboard stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Raw mode swallows SIGINT, so Ctrl+C is handled as a key.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        if key.code == KeyCode::Char(QUIT_KEY) {
            return Action::Quit;
        }
        Action::None
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.stop(),
            Action::None => {}
        }
    }
}

impl<S> App<S> {
    /// (key, description) pairs shown in the footer.
    pub fn key_hints(&self) -> Vec<(String, &'static str)> {
        vec![(QUIT_KEY.to_string(), "Quit")]
    }
}

/// Drives the dashboard until quit or termination.
///
/// `draw` is called once after the initial sample and again after every
/// tick or resize. Losing terminal input, or the event source closing
/// without a stop request, is an error.
pub async fn run<S, F>(app: &mut App<S>, events: &mut EventHandler, mut draw: F) -> Result<()>
where
    S: MetricsSource,
    F: FnMut(&App<S>) -> Result<()>,
{
    app.start();
    draw(app)?;

    while app.is_running() {
        let Some(event) = events.next().await else {
            app.stop();
            return Err(eyre!("event source closed before quit"));
        };

        let should_draw = match event {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Press {
                    let action = app.map_key(key);
                    app.dispatch(action);
                }
                false
            }
            Event::Tick => {
                app.refresh_data();
                true
            }
            Event::Resize => true,
            Event::Terminate => {
                app.stop();
                false
            }
            Event::InputFailed(reason) => {
                app.stop();
                return Err(eyre!("terminal input failed: {reason}"));
            }
        };

        if should_draw && app.is_running() {
            draw(app)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use tokio::sync::mpsc;

    struct FakeSource {
        samples: usize,
    }

    impl MetricsSource for FakeSource {
        fn sample(&mut self) -> MetricsSnapshot {
            self.samples += 1;
            MetricsSnapshot {
                cpu_percent: self.samples as f32,
                memory_used: 1,
                memory_total: 2,
                disk_used: 1,
                disk_total: 4,
                top_processes: Vec::new(),
            }
        }
    }

    fn make_app() -> App<FakeSource> {
        App::new(FakeSource { samples: 0 }, Theme::default())
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn start_samples_immediately() {
        let mut app = make_app();
        assert_eq!(app.phase, Phase::Starting);
        assert!(app.snapshot.is_none());

        app.start();
        assert_eq!(app.phase, Phase::Running);
        assert_eq!(app.source.samples, 1);

        // A second start is a no-op.
        app.start();
        assert_eq!(app.source.samples, 1);
    }

    #[test]
    fn only_quit_keys_are_bound() {
        let app = make_app();
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::Quit);

        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.map_key(key), Action::Quit);

        for code in [KeyCode::Char('x'), KeyCode::Char('c'), KeyCode::Esc, KeyCode::Enter] {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(app.map_key(key), Action::None);
        }
    }

    #[test]
    fn key_hints_show_quit_key() {
        let app = make_app();
        assert_eq!(app.key_hints(), vec![("q".to_string(), "Quit")]);
    }

    #[tokio::test]
    async fn quit_key_stops_within_one_tick() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut events = EventHandler::from_receiver(rx);
        let mut app = make_app();
        let mut draws = 0;

        tx.send(Event::Tick).unwrap();
        tx.send(press(KeyCode::Char('q'))).unwrap();
        tx.send(Event::Tick).unwrap();

        run(&mut app, &mut events, |_| {
            draws += 1;
            Ok(())
        })
        .await
        .unwrap();

        assert_eq!(app.phase, Phase::Stopped);
        assert_eq!(app.source.samples, 2);
        assert_eq!(draws, 2);
    }

    #[tokio::test]
    async fn key_release_is_ignored() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut events = EventHandler::from_receiver(rx);
        let mut app = make_app();

        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        tx.send(Event::Key(release)).unwrap();
        tx.send(Event::Tick).unwrap();
        tx.send(Event::Terminate).unwrap();

        run(&mut app, &mut events, |_| Ok(())).await.unwrap();

        assert_eq!(app.source.samples, 2);
        assert_eq!(app.phase, Phase::Stopped);
    }

    #[tokio::test]
    async fn resize_redraws_without_sampling() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut events = EventHandler::from_receiver(rx);
        let mut app = make_app();
        let mut draws = 0;

        tx.send(Event::Resize).unwrap();
        tx.send(Event::Terminate).unwrap();

        run(&mut app, &mut events, |_| {
            draws += 1;
            Ok(())
        })
        .await
        .unwrap();

        assert_eq!(draws, 2);
        assert_eq!(app.source.samples, 1);
        assert_eq!(app.phase, Phase::Stopped);
    }

    #[tokio::test]
    async fn broken_input_is_an_error() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut events = EventHandler::from_receiver(rx);
        let mut app = make_app();

        tx.send(Event::Tick).unwrap();
        tx.send(Event::InputFailed("not a tty".to_string())).unwrap();

        let result = run(&mut app, &mut events, |_| Ok(())).await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("not a tty"));
        assert_eq!(app.phase, Phase::Stopped);
    }

    #[tokio::test]
    async fn closed_event_source_is_an_error() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut events = EventHandler::from_receiver(rx);
        let mut app = make_app();
        drop(tx);

        let result = run(&mut app, &mut events, |_| Ok(())).await;

        assert!(result.is_err());
        assert_eq!(app.phase, Phase::Stopped);
    }

    #[tokio::test]
    async fn draw_failure_propagates() {
        let (_tx, rx) = mpsc::unbounded_channel();
        let mut events = EventHandler::from_receiver(rx);
        let mut app = make_app();

        let result = run(&mut app, &mut events, |_| {
            Err(color_eyre::eyre::eyre!("terminal gone"))
        })
        .await;

        assert!(result.is_err());
    }
}
