use std::time::{Duration, Instant};

/// Schedules the repeating ticks that advance the game.
///
/// There is at most one schedule at a time: starting the clock while it is
/// already running replaces the old schedule, forgiving whatever part of the
/// old interval had already elapsed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum GameClock {
    #[default]
    Stopped,
    Running {
        interval: Duration,
        next_tick: Instant,
    },
}

impl GameClock {
    /// (Re)start the clock so that it ticks every `interval`, starting one
    /// interval after `now`
    pub(crate) fn start(&mut self, interval: Duration, now: Instant) {
        *self = GameClock::Running {
            interval,
            next_tick: now + interval,
        };
    }

    pub(crate) fn stop(&mut self) {
        *self = GameClock::Stopped;
    }

    /// Return the time of the next tick, if the clock is running
    pub(crate) fn deadline(&self) -> Option<Instant> {
        match *self {
            GameClock::Running { next_tick, .. } => Some(next_tick),
            GameClock::Stopped => None,
        }
    }

    /// Returns `true` if a tick is due at `now`, in which case the following
    /// tick is scheduled one interval after `now`
    pub(crate) fn poll(&mut self, now: Instant) -> bool {
        match self {
            GameClock::Running {
                interval,
                next_tick,
            } if *next_tick <= now => {
                *next_tick = now + *interval;
                true
            }
            _ => false,
        }
    }
}
