use chrono::{DateTime, Duration, Local, Utc};

use crate::menu::Highlight;

/// Whether a timestamp sits before or after `now`. Displayed durations are
/// always a magnitude plus this flag; a signed duration must never reach the
/// menu (an earlier revision rendered negative countdowns).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Future,
    Past,
}

impl Direction {
    pub fn highlight(self) -> Highlight {
        match self {
            Self::Future => Highlight::Info,
            Self::Past => Highlight::Urgent,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Normalized {
    /// The instant converted to the local timezone for display.
    pub local: DateTime<Local>,
    /// Non-negative distance from `now`.
    pub magnitude: Duration,
    pub direction: Direction,
}

pub fn normalize(ts: DateTime<Utc>, now: DateTime<Utc>) -> Normalized {
    let diff = ts.signed_duration_since(now);
    let (magnitude, direction) = if diff >= Duration::zero() {
        (diff, Direction::Future)
    } else {
        (-diff, Direction::Past)
    };
    Normalized {
        local: ts.with_timezone(&Local),
        magnitude,
        direction,
    }
}

/// Magnitude-only duration string: `3d 04:05` past one day, `04:05:06`
/// below it.
pub fn human_duration(d: Duration) -> String {
    let total = d.num_seconds().max(0);
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    if days > 0 {
        format!("{days}d {hours:02}:{minutes:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}
