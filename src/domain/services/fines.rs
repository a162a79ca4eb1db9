//! Fine calculation for late returns

use crate::domain::value_objects::Day;

/// Flat per-day late penalty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FineCalculator {
    daily_rate: u32,
}

impl FineCalculator {
    /// Euros charged for every day past the limit
    pub const DAILY_RATE: u32 = 5;

    pub const fn new(daily_rate: u32) -> Self {
        Self { daily_rate }
    }

    pub fn daily_rate(&self) -> u32 {
        self.daily_rate
    }

    /// Days between the limit and `today`, zero when not late
    pub fn days_late(request_limit: Day, today: Day) -> u32 {
        today.saturating_sub(request_limit)
    }

    /// Fine owed when a loan due on `request_limit` comes back on `today`
    pub fn compute(&self, request_limit: Day, today: Day) -> u32 {
        Self::days_late(request_limit, today).saturating_mul(self.daily_rate)
    }
}

impl Default for FineCalculator {
    fn default() -> Self {
        Self::new(Self::DAILY_RATE)
    }
}
