//! Content Pipeline Scheduling
//!
//! Pure gate evaluation for the blog content pipeline, separated from the
//! handler so it can be tested with fixed timestamps. Three gates run in
//! order: allowed weekday, UTC hour window, minimum interval since the last
//! completed run.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::Serialize;

// ============================================================================
// GATES
// ============================================================================

/// Gate configuration, lifted from `Config` at startup
#[derive(Debug, Clone)]
pub struct ScheduleGates {
    pub allowed_days: Vec<Weekday>,
    /// Window start hour (UTC, inclusive)
    pub window_start_hour: u32,
    /// Window end hour (UTC, exclusive)
    pub window_end_hour: u32,
    pub min_interval_hours: i64,
}

/// Why a run was allowed or skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "gate", rename_all = "snake_case")]
pub enum GateDecision {
    Allowed,
    WrongDay { today: String },
    OutsideWindow { hour: u32 },
    TooSoon { hours_since_last: i64 },
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateDecision::Allowed)
    }
}

/// Evaluate the gates for a proposed run at `now`.
pub fn evaluate(
    gates: &ScheduleGates,
    now: DateTime<Utc>,
    last_completed: Option<DateTime<Utc>>,
) -> GateDecision {
    let today = now.weekday();
    if !gates.allowed_days.contains(&today) {
        return GateDecision::WrongDay {
            today: today.to_string(),
        };
    }

    let hour = now.hour();
    if hour < gates.window_start_hour || hour >= gates.window_end_hour {
        return GateDecision::OutsideWindow { hour };
    }

    if let Some(last) = last_completed {
        let hours_since_last = (now - last).num_hours();
        if hours_since_last < gates.min_interval_hours {
            return GateDecision::TooSoon { hours_since_last };
        }
    }

    GateDecision::Allowed
}

// ============================================================================
// RUN GUARD
// ============================================================================

/// Holds the in-process `is_executing` flag for the duration of one run.
///
/// Plain atomic, not a distributed lock: a second replica could still run
/// concurrently, which the pipeline tolerates.
pub struct RunGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> RunGuard<'a> {
    /// Try to claim the flag; `None` means a run is already in flight.
    pub fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn gates() -> ScheduleGates {
        ScheduleGates {
            allowed_days: vec![Weekday::Mon, Weekday::Thu],
            window_start_hour: 6,
            window_end_hour: 10,
            min_interval_hours: 72,
        }
    }

    fn utc(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 30, 0).unwrap()
    }

    #[test]
    fn test_allowed_inside_all_gates() {
        // 2026-08-17 is a Monday
        let decision = evaluate(&gates(), utc(2026, 8, 17, 7), None);
        assert_eq!(decision, GateDecision::Allowed);
    }

    #[test]
    fn test_wrong_day_blocks() {
        // 2026-08-18 is a Tuesday
        let decision = evaluate(&gates(), utc(2026, 8, 18, 7), None);
        assert!(matches!(decision, GateDecision::WrongDay { .. }));
    }

    #[test]
    fn test_window_bounds() {
        // Start hour is inclusive, end hour exclusive
        assert!(evaluate(&gates(), utc(2026, 8, 17, 6), None).is_allowed());
        assert!(matches!(
            evaluate(&gates(), utc(2026, 8, 17, 5), None),
            GateDecision::OutsideWindow { hour: 5 }
        ));
        assert!(matches!(
            evaluate(&gates(), utc(2026, 8, 17, 10), None),
            GateDecision::OutsideWindow { hour: 10 }
        ));
    }

    #[test]
    fn test_min_interval_blocks_recent_run() {
        // Last completed Thursday morning, proposed Monday morning: 95h > 72h
        let last = utc(2026, 8, 13, 8);
        assert!(evaluate(&gates(), utc(2026, 8, 17, 7), Some(last)).is_allowed());

        // Same-day rerun is far under the interval
        let decision = evaluate(&gates(), utc(2026, 8, 17, 9), Some(utc(2026, 8, 17, 6)));
        assert!(matches!(decision, GateDecision::TooSoon { hours_since_last: 3 }));
    }

    #[test]
    fn test_no_previous_run_passes_interval_gate() {
        assert!(evaluate(&gates(), utc(2026, 8, 17, 7), None).is_allowed());
    }

    #[test]
    fn test_run_guard_is_exclusive_and_resets() {
        let flag = AtomicBool::new(false);

        let guard = RunGuard::acquire(&flag).expect("first acquire succeeds");
        assert!(RunGuard::acquire(&flag).is_none(), "second acquire blocked");
        drop(guard);

        assert!(RunGuard::acquire(&flag).is_some(), "flag reset on drop");
    }
}
