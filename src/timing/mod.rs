//! One-second granularity timers driving the launch program: the descending
//! [`Countdown`] and the ascending [`MissionTimer`].

mod countdown;
mod mission_timer;

pub(crate) use countdown::{Countdown, CountdownError, CountdownEvent};
pub(crate) use mission_timer::MissionTimer;

/// Interval between two timer steps.
pub(crate) const TICK: std::time::Duration = std::time::Duration::from_secs(1);
