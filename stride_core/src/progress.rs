//! State transitions over the aggregate state.
//!
//! Every operation here consumes the current [`AppData`] by reference and
//! returns a new value; nothing performs I/O. The caller owns "current
//! state": it persists each returned value before treating it as current,
//! and it runs the goal-achievement check after any transition that can
//! change total calories or the goal.

use crate::{AppData, HistoryEntry, User, WorkoutType};
use chrono::{DateTime, Utc};

/// Calorie deficit corresponding to one kilogram of body weight.
pub const CALORIES_PER_KG: u32 = 7700;

impl AppData {
    /// Record one workout: accumulate per-activity progress, append a
    /// history entry, then apply the weight-update step.
    ///
    /// `minutes`, `calories`, `distance_km` and `steps` usually come from
    /// [`crate::estimate`], but the transition takes them as plain data so
    /// the estimator stays a separate leaf.
    pub fn record_workout(
        &self,
        kind: WorkoutType,
        minutes: u32,
        calories: u32,
        distance_km: f64,
        steps: u32,
        recorded_at: DateTime<Utc>,
    ) -> AppData {
        let updated = self
            .per_activity
            .get(kind)
            .accumulate(minutes, calories, distance_km, steps);

        let entry = HistoryEntry {
            recorded_at,
            workout: kind,
            minutes,
            calories,
            distance_km,
            steps,
        };

        let mut history = self.history.clone();
        history.push(entry);

        AppData {
            per_activity: self.per_activity.clone().with_entry(kind, updated),
            history,
            calories_burned_since_last_weight_update: self
                .calories_burned_since_last_weight_update
                + calories,
            ..self.clone()
        }
        .with_weight_update()
    }

    /// Apply the weight-update step: every full 7700 kcal accumulated since
    /// the last update costs one kilogram of tracked body weight.
    ///
    /// The accumulator is normalized into [0, 7700) afterwards. No minimum
    /// weight is enforced; weight tracking follows the calorie ledger
    /// wherever it leads.
    fn with_weight_update(self) -> AppData {
        let accumulated = self.calories_burned_since_last_weight_update;
        if accumulated < CALORIES_PER_KG {
            return self;
        }

        let kg_to_lose = (accumulated / CALORIES_PER_KG) as i32;
        let remaining = accumulated % CALORIES_PER_KG;

        tracing::info!(
            "Weight update: -{} kg ({} kcal accumulated)",
            kg_to_lose,
            accumulated
        );

        AppData {
            user: User {
                weight_kg: self.user.weight_kg - kg_to_lose,
                ..self.user.clone()
            },
            calories_burned_since_last_weight_update: remaining,
            ..self
        }
    }

    /// Zero all per-activity progress and re-arm the goal notification.
    ///
    /// History, profile, goal and the weight accumulator are untouched.
    pub fn reset_progress(&self) -> AppData {
        AppData {
            goal_acknowledged: false,
            per_activity: Default::default(),
            ..self.clone()
        }
    }

    /// Replace the daily calorie goal and re-arm the goal notification, so
    /// a raised or lowered goal can trigger the achievement message again.
    ///
    /// Sanity clamping of `goal` (the CLI enforces a configurable minimum)
    /// happens before this transition is called.
    pub fn with_daily_goal(&self, goal: u32) -> AppData {
        AppData {
            daily_goal_calories: goal,
            goal_acknowledged: false,
            ..self.clone()
        }
    }

    /// Replace the user profile wholesale. Progress is untouched.
    pub fn with_user(&self, user: User) -> AppData {
        AppData {
            user,
            ..self.clone()
        }
    }

    /// Mark the current goal crossing as notified.
    pub fn acknowledge_goal(&self) -> AppData {
        AppData {
            goal_acknowledged: true,
            ..self.clone()
        }
    }

    /// True exactly when the goal has been reached but not yet acknowledged.
    ///
    /// The boundary layer evaluates this after `record_workout` and
    /// `with_daily_goal`; on true it applies [`AppData::acknowledge_goal`]
    /// and surfaces the one-time notification. Edge-triggered: it stays
    /// false until a reset or goal edit re-arms it.
    pub fn goal_just_reached(&self) -> bool {
        !self.goal_acknowledged && self.total_calories() >= self.daily_goal_calories
    }
}
