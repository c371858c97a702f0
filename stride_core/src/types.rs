//! Core domain types for the Stride fitness tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Workout types and their per-activity accumulators
//! - The user biometric profile
//! - History entries for logged workouts
//! - The persisted aggregate state (`AppData`)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Default daily calorie-burn goal for a fresh profile.
pub const DEFAULT_DAILY_GOAL_CALORIES: u32 = 500;

// ============================================================================
// Workout Types
// ============================================================================

/// Type of tracked workout
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    Running,
    Walking,
    Swimming,
    Cycling,
    Skating,
}

impl WorkoutType {
    /// All workout types in declaration order.
    ///
    /// This order is the canonical iteration order for charts, defaults and
    /// the per-activity serialization map.
    pub const ALL: [WorkoutType; 5] = [
        WorkoutType::Running,
        WorkoutType::Walking,
        WorkoutType::Swimming,
        WorkoutType::Cycling,
        WorkoutType::Skating,
    ];

    /// Stable string name, matching the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Walking => "walking",
            WorkoutType::Swimming => "swimming",
            WorkoutType::Cycling => "cycling",
            WorkoutType::Skating => "skating",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorkoutType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "running" | "run" => Ok(WorkoutType::Running),
            "walking" | "walk" => Ok(WorkoutType::Walking),
            "swimming" | "swim" => Ok(WorkoutType::Swimming),
            "cycling" | "cycle" | "bike" => Ok(WorkoutType::Cycling),
            "skating" | "skate" => Ok(WorkoutType::Skating),
            other => Err(crate::Error::InvalidInput(format!(
                "unknown workout type: {}",
                other
            ))),
        }
    }
}

// ============================================================================
// User Profile
// ============================================================================

/// User biometric profile
///
/// `weight_kg` is the only field the core mutates on its own, through the
/// weight-update step applied after each recorded workout. Every other field
/// changes only through a profile edit.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct User {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub height_cm: u32,
    pub weight_kg: i32,
    pub stride_length_m: f64,
}

impl Default for User {
    fn default() -> Self {
        Self {
            name: "You".into(),
            age: 30,
            gender: "Unspecified".into(),
            height_cm: 170,
            weight_kg: 70,
            stride_length_m: 0.75,
        }
    }
}

// ============================================================================
// Per-Activity Progress
// ============================================================================

/// Accumulated progress for a single workout type
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ActivityProgress {
    pub minutes: u32,
    pub calories: u32,
    pub distance_km: f64,
    pub steps: u32,
}

impl ActivityProgress {
    /// Component-wise sum with one workout's figures
    pub fn accumulate(&self, minutes: u32, calories: u32, distance_km: f64, steps: u32) -> Self {
        Self {
            minutes: self.minutes + minutes,
            calories: self.calories + calories,
            distance_km: self.distance_km + distance_km,
            steps: self.steps + steps,
        }
    }
}

/// Progress for every workout type, always fully populated.
///
/// Stored as a fixed-size array indexed by the workout type's ordinal, so
/// "exactly one entry per type" holds statically. Serialized as a map keyed
/// by the type's stable name; entries missing from persisted data decode as
/// zero defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<WorkoutType, ActivityProgress>",
    into = "BTreeMap<WorkoutType, ActivityProgress>"
)]
pub struct ActivityTotals([ActivityProgress; WorkoutType::ALL.len()]);

impl ActivityTotals {
    pub fn get(&self, kind: WorkoutType) -> &ActivityProgress {
        &self.0[kind as usize]
    }

    /// New totals with the entry for `kind` replaced
    pub fn with_entry(mut self, kind: WorkoutType, progress: ActivityProgress) -> Self {
        self.0[kind as usize] = progress;
        self
    }

    /// Iterate entries in canonical workout-type order
    pub fn iter(&self) -> impl Iterator<Item = (WorkoutType, &ActivityProgress)> {
        WorkoutType::ALL.iter().map(move |&kind| (kind, self.get(kind)))
    }
}

impl From<BTreeMap<WorkoutType, ActivityProgress>> for ActivityTotals {
    fn from(map: BTreeMap<WorkoutType, ActivityProgress>) -> Self {
        let mut totals = Self::default();
        for (kind, progress) in map {
            totals.0[kind as usize] = progress;
        }
        totals
    }
}

impl From<ActivityTotals> for BTreeMap<WorkoutType, ActivityProgress> {
    fn from(totals: ActivityTotals) -> Self {
        WorkoutType::ALL
            .iter()
            .map(|&kind| (kind, totals.get(kind).clone()))
            .collect()
    }
}

// ============================================================================
// History
// ============================================================================

/// Immutable record of one logged workout
///
/// Created only when a workout is recorded; never edited or removed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub recorded_at: DateTime<Utc>,
    pub workout: WorkoutType,
    pub minutes: u32,
    pub calories: u32,
    pub distance_km: f64,
    pub steps: u32,
}

// ============================================================================
// Aggregate State
// ============================================================================

/// The persisted aggregate state: profile, goal, progress and history.
///
/// A value type. Transitions (see the `progress` module) consume a state and
/// return a brand-new one; the caller persists the result before treating it
/// as current.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppData {
    pub user: User,
    pub daily_goal_calories: u32,
    pub goal_acknowledged: bool,
    pub per_activity: ActivityTotals,
    pub history: Vec<HistoryEntry>,
    pub calories_burned_since_last_weight_update: u32,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            user: User::default(),
            daily_goal_calories: DEFAULT_DAILY_GOAL_CALORIES,
            goal_acknowledged: false,
            per_activity: ActivityTotals::default(),
            history: Vec::new(),
            calories_burned_since_last_weight_update: 0,
        }
    }
}

impl AppData {
    pub fn total_calories(&self) -> u32 {
        self.per_activity.iter().map(|(_, p)| p.calories).sum()
    }

    pub fn total_minutes(&self) -> u32 {
        self.per_activity.iter().map(|(_, p)| p.minutes).sum()
    }

    pub fn total_distance_km(&self) -> f64 {
        self.per_activity.iter().map(|(_, p)| p.distance_km).sum()
    }

    pub fn total_steps(&self) -> u32 {
        self.per_activity.iter().map(|(_, p)| p.steps).sum()
    }
}
