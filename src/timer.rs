use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Source of wall-clock time for session start/end stamps.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Moves a fixed clock forward. No effect on the system clock.
    pub fn advance(&mut self, delta: chrono::Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick,
}

/// A repeating background tick. Cancelling (or dropping) stops future ticks
/// and disconnects the channel so no queued tick is observed afterwards.
#[derive(Debug)]
pub struct Ticker {
    cancel: Arc<AtomicBool>,
    rx: Option<mpsc::Receiver<TimerEvent>>,
}

impl Ticker {
    pub fn spawn(interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);

        thread::spawn(move || loop {
            thread::sleep(interval);
            if flag.load(Ordering::SeqCst) {
                break;
            }
            if tx.send(TimerEvent::Tick).is_err() {
                break;
            }
        });

        Self {
            cancel,
            rx: Some(rx),
        }
    }

    pub fn cancel(&mut self) {
        self.cancel.store(true, Ordering::SeqCst);
        self.rx = None;
    }

    pub fn is_cancelled(&self) -> bool {
        self.rx.is_none()
    }

    /// Number of ticks delivered since the last drain.
    pub fn drain(&self) -> u64 {
        let Some(rx) = &self.rx else {
            return 0;
        };
        let mut ticks = 0;
        while let Ok(TimerEvent::Tick) = rx.try_recv() {
            ticks += 1;
        }
        ticks
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Rounds a span to whole seconds, half away from zero.
pub fn round_seconds(start: DateTime<Utc>, end: DateTime<Utc>) -> u64 {
    let millis = end.signed_duration_since(start).num_milliseconds().max(0);
    ((millis + 500) / 1000) as u64
}

pub fn format_elapsed(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
