//! Behavior state machine
//!
//! A user's tier is a function of the current tier and two streak counters.
//! Only one of the counters can be non-zero at a time: an on-time return
//! resets the late streak and vice versa.

use serde::{Deserialize, Serialize};

use crate::domain::entities::User;
use crate::domain::value_objects::Behavior;

/// On-time returns in a row that promote a user to Dutiful
pub const DUTIFUL_STREAK: u32 = 5;
/// Late returns in a row that demote a user to Overdue
pub const OVERDUE_STREAK: u32 = 3;
/// On-time returns in a row that lift an Overdue user back to Normal
pub const RECOVERY_STREAK: u32 = 3;

/// Consecutive on-time / late return counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredStreak")]
pub struct ReturnStreak {
    on_time: u32,
    late: u32,
}

/// Unchecked counters as they appear in a snapshot
#[derive(Deserialize)]
struct StoredStreak {
    #[serde(default)]
    on_time: u32,
    #[serde(default)]
    late: u32,
}

impl TryFrom<StoredStreak> for ReturnStreak {
    type Error = String;

    fn try_from(stored: StoredStreak) -> Result<Self, Self::Error> {
        Self::new(stored.on_time, stored.late).ok_or_else(|| {
            format!(
                "return streak cannot be both on time ({}) and late ({})",
                stored.on_time, stored.late
            )
        })
    }
}

impl ReturnStreak {
    /// Build a streak from raw counters. At most one of them may be non-zero.
    pub fn new(on_time: u32, late: u32) -> Option<Self> {
        if on_time > 0 && late > 0 {
            return None;
        }
        Some(Self { on_time, late })
    }

    pub fn on_time(&self) -> u32 {
        self.on_time
    }

    pub fn late(&self) -> u32 {
        self.late
    }

    /// Extend one streak and reset the other
    pub fn record(&mut self, was_on_time: bool) {
        if was_on_time {
            self.on_time += 1;
            self.late = 0;
        } else {
            self.late += 1;
            self.on_time = 0;
        }
    }
}

/// Tier that follows `current` given the counters in `streak`
pub fn next_behavior(current: Behavior, streak: ReturnStreak) -> Behavior {
    if streak.on_time >= DUTIFUL_STREAK {
        Behavior::Dutiful
    } else if streak.late >= OVERDUE_STREAK {
        Behavior::Overdue
    } else if current == Behavior::Overdue && streak.on_time >= RECOVERY_STREAK {
        Behavior::Normal
    } else if current == Behavior::Dutiful && streak.on_time == 0 {
        Behavior::Normal
    } else if streak.on_time == 0 && streak.late == 0 {
        Behavior::Normal
    } else {
        current
    }
}

/// Feed one return into the user's streak and recompute their tier
pub fn record_return(user: &mut User, was_on_time: bool) -> Behavior {
    user.streak_mut().record(was_on_time);
    let next = next_behavior(user.behavior(), user.streak());
    user.set_behavior(next);
    next
}
