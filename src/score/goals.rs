//! Goal progress computation

use crate::profile::Goal;
use serde::Serialize;

/// Goal completion status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GoalStatus {
    OnTrack,
    Achieved,
}

impl GoalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GoalStatus::OnTrack => "On Track",
            GoalStatus::Achieved => "Achieved",
        }
    }
}

/// Progress toward a single goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    /// Percent complete in [0,100], 2-decimal precision
    pub percent: f64,
    pub status: GoalStatus,
}

/// Progress for a goal, or `None` when the goal has no positive target
/// amount and therefore nothing to measure against.
pub fn goal_progress(goal: &Goal) -> Option<GoalProgress> {
    if goal.target_amount <= 0.0 {
        return None;
    }

    let raw = (goal.amount_saved / goal.target_amount * 100.0).min(100.0);
    let percent = (raw * 100.0).round() / 100.0;
    let status = if percent >= 100.0 {
        GoalStatus::Achieved
    } else {
        GoalStatus::OnTrack
    };

    Some(GoalProgress { percent, status })
}
