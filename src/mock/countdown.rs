// src/mock/countdown.rs - Scheduler-agnostic countdown timer
//
// Nothing here sleeps. Whoever owns the clock (a tokio interval in the CLI,
// a plain loop in tests) calls `tick()` once per second.

use std::fmt;

/// Result of one `tick()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Running(u32),
    Expired,
}

type ExpireCallback = Box<dyn FnMut() + Send>;

pub struct Countdown {
    remaining: u32,
    expired: bool,
    on_expire: Option<ExpireCallback>,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            expired: false,
            on_expire: None,
        }
    }

    /// Run `cb` exactly once, when the countdown first expires.
    pub fn with_on_expire(mut self, cb: impl FnMut() + Send + 'static) -> Self {
        self.on_expire = Some(Box::new(cb));
        self
    }

    /// Advance one second. A countdown created at zero expires on its first tick.
    pub fn tick(&mut self) -> Tick {
        if self.expired {
            return Tick::Expired;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.expire();
            Tick::Expired
        } else {
            Tick::Running(self.remaining)
        }
    }

    fn expire(&mut self) {
        self.expired = true;
        if let Some(cb) = self.on_expire.as_mut() {
            cb();
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }
}

impl fmt::Debug for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Countdown")
            .field("remaining", &self.remaining)
            .field("expired", &self.expired)
            .field("on_expire", &self.on_expire.is_some())
            .finish()
    }
}

/// `m:ss`, minutes unpadded.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_counts_down_to_expiry() {
        let mut c = Countdown::new(3);
        assert_eq!(c.remaining(), 3);
        assert_eq!(c.tick(), Tick::Running(2));
        assert_eq!(c.tick(), Tick::Running(1));
        assert!(!c.is_expired());
        assert_eq!(c.tick(), Tick::Expired);
        assert!(c.is_expired());
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn test_callback_fires_once() {
        let fired = Arc::new(AtomicU32::new(0));
        let f = fired.clone();
        let mut c = Countdown::new(2).with_on_expire(move || {
            f.fetch_add(1, Ordering::SeqCst);
        });

        c.tick();
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        c.tick();
        c.tick();
        c.tick();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_zero_expires_on_first_tick() {
        let mut c = Countdown::new(0);
        assert!(!c.is_expired());
        assert_eq!(c.tick(), Tick::Expired);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(600), "10:00");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(0), "0:00");
    }
}
