//! Workout outcome estimation.
//!
//! Maps (workout type, duration, user biometrics) to estimated calories,
//! distance and steps. Deliberately simple MET-based arithmetic, not a
//! validated exercise-science model.

use crate::{User, WorkoutType};

/// Approximate MET (metabolic equivalent) for each workout type
fn met(kind: WorkoutType) -> f64 {
    match kind {
        WorkoutType::Running => 11.0,
        WorkoutType::Walking => 4.5,
        WorkoutType::Swimming => 8.0,
        WorkoutType::Cycling => 10.0,
        WorkoutType::Skating => 12.0,
    }
}

/// Assumed average speed in km/h for each workout type
fn avg_speed_kmh(kind: WorkoutType) -> f64 {
    match kind {
        WorkoutType::Running => 11.0,
        WorkoutType::Walking => 6.0,
        WorkoutType::Swimming => 2.5,
        WorkoutType::Cycling => 20.0,
        WorkoutType::Skating => 24.0,
    }
}

/// Estimated outcome of a workout
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    pub calories: u32,
    pub distance_km: f64,
    pub steps: u32,
}

/// Estimate calories, distance and steps for a workout.
///
/// Pure and deterministic, safe to call repeatedly for previews. Calories
/// are `round(MET * weight_kg * hours)`; distance keeps full precision.
/// Only walking and running produce steps, derived from distance and the
/// user's stride length. `user.stride_length_m` must be positive; the
/// profile boundary enforces this before a user ever reaches here.
pub fn estimate(kind: WorkoutType, minutes: u32, user: &User) -> Estimate {
    let hours = f64::from(minutes) / 60.0;
    let calories = (met(kind) * user.weight_kg as f64 * hours).round() as u32;
    let distance_km = avg_speed_kmh(kind) * hours;

    let steps = match kind {
        WorkoutType::Walking | WorkoutType::Running => {
            (distance_km * 1000.0 / user.stride_length_m).round() as u32
        }
        _ => 0,
    };

    Estimate {
        calories,
        distance_km,
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_hour_reference_figures() {
        let user = User::default(); // 70 kg, 0.75 m stride

        let result = estimate(WorkoutType::Running, 60, &user);

        assert_eq!(result.calories, 770); // 11.0 * 70 * 1.0
        assert!((result.distance_km - 11.0).abs() < 1e-9);
        assert_eq!(result.steps, 14667); // round(11000 / 0.75)
    }

    #[test]
    fn test_walking_produces_steps() {
        let user = User::default();

        let result = estimate(WorkoutType::Walking, 30, &user);

        assert!((result.distance_km - 3.0).abs() < 1e-9);
        assert_eq!(result.steps, 4000); // 3000 / 0.75
        assert_eq!(result.calories, 158); // round(4.5 * 70 * 0.5)
    }

    #[test]
    fn test_non_stepping_types_have_zero_steps() {
        let user = User::default();

        for kind in [WorkoutType::Swimming, WorkoutType::Cycling, WorkoutType::Skating] {
            assert_eq!(estimate(kind, 30, &user).steps, 0);
        }
    }

    #[test]
    fn test_zero_minutes_is_all_zero() {
        let user = User::default();

        let result = estimate(WorkoutType::Cycling, 0, &user);

        assert_eq!(result.calories, 0);
        assert_eq!(result.distance_km, 0.0);
        assert_eq!(result.steps, 0);
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let user = User {
            weight_kg: 82,
            stride_length_m: 0.8,
            ..User::default()
        };

        let first = estimate(WorkoutType::Running, 45, &user);
        let second = estimate(WorkoutType::Running, 45, &user);

        assert_eq!(first, second);
    }

    #[test]
    fn test_calories_scale_with_weight() {
        let light = User {
            weight_kg: 50,
            ..User::default()
        };
        let heavy = User {
            weight_kg: 100,
            ..User::default()
        };

        let a = estimate(WorkoutType::Swimming, 60, &light);
        let b = estimate(WorkoutType::Swimming, 60, &heavy);

        assert_eq!(a.calories, 400); // 8.0 * 50
        assert_eq!(b.calories, 800); // 8.0 * 100
    }
}
