use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use stride_core::*;

#[derive(Parser)]
#[command(name = "stride")]
#[command(about = "Personal fitness tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a workout and update progress
    Log {
        /// Workout type (running, walking, swimming, cycling, skating)
        workout: String,

        /// Duration in minutes
        minutes: u32,
    },

    /// Preview the estimate for a workout without logging it
    Estimate {
        /// Workout type (running, walking, swimming, cycling, skating)
        workout: String,

        /// Duration in minutes
        minutes: u32,
    },

    /// Show progress toward the daily goal (default)
    Status,

    /// List logged workouts, newest last
    History {
        /// Show only the most recent N entries
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Zero all progress; history and profile are kept
    Reset,

    /// Set the daily calorie-burn goal
    Goal {
        /// Goal in kcal per day
        calories: u32,
    },

    /// Show or edit the user profile
    Profile {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        age: Option<u32>,

        #[arg(long)]
        gender: Option<String>,

        #[arg(long)]
        height_cm: Option<u32>,

        #[arg(long)]
        weight_kg: Option<i32>,

        /// Stride length in meters, must be positive
        #[arg(long)]
        stride_m: Option<f64>,
    },

    /// Export workout history to a CSV file
    Export {
        /// Output CSV path
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    stride_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let state_path = data_dir.join("state.json");

    match cli.command {
        Some(Commands::Log { workout, minutes }) => cmd_log(&state_path, &workout, minutes),
        Some(Commands::Estimate { workout, minutes }) => cmd_estimate(&state_path, &workout, minutes),
        Some(Commands::Status) | None => cmd_status(&state_path),
        Some(Commands::History { limit }) => cmd_history(&state_path, limit),
        Some(Commands::Reset) => cmd_reset(&state_path),
        Some(Commands::Goal { calories }) => cmd_goal(&state_path, calories, &config),
        Some(Commands::Profile {
            name,
            age,
            gender,
            height_cm,
            weight_kg,
            stride_m,
        }) => cmd_profile(&state_path, name, age, gender, height_cm, weight_kg, stride_m),
        Some(Commands::Export { output }) => cmd_export(&state_path, &output),
    }
}

fn cmd_log(state_path: &Path, workout: &str, minutes: u32) -> Result<()> {
    let kind: WorkoutType = workout.parse()?;
    if minutes == 0 {
        return Err(Error::InvalidInput("duration must be at least 1 minute".into()));
    }

    let state = AppData::load(state_path)?;
    let est = estimate(kind, minutes, &state.user);

    let next = state.record_workout(
        kind,
        minutes,
        est.calories,
        est.distance_km,
        est.steps,
        chrono::Utc::now(),
    );

    println!(
        "✓ Logged {} min {}: {} kcal, {:.1} km, {} steps",
        minutes, kind, est.calories, est.distance_km, est.steps
    );

    if next.user.weight_kg < state.user.weight_kg {
        println!(
            "  Weight update: {} kg → {} kg",
            state.user.weight_kg, next.user.weight_kg
        );
    }

    let next = check_goal(next);
    next.save(state_path)
}

fn cmd_estimate(state_path: &Path, workout: &str, minutes: u32) -> Result<()> {
    let kind: WorkoutType = workout.parse()?;

    // Preview only; the profile is read for biometrics but nothing is saved
    let state = AppData::load(state_path)?;
    let est = estimate(kind, minutes, &state.user);

    println!(
        "{} for {} min → est. {} kcal, {:.1} km, {} steps",
        kind, minutes, est.calories, est.distance_km, est.steps
    );
    Ok(())
}

fn cmd_status(state_path: &Path) -> Result<()> {
    let state = AppData::load(state_path)?;

    let total = state.total_calories();
    let goal = state.daily_goal_calories.max(1);
    let percent = (u64::from(total) * 100 / u64::from(goal)).min(100);

    println!("Daily goal: {} / {} kcal ({}%)", total, state.daily_goal_calories, percent);
    println!();

    for (kind, progress) in state.per_activity.iter() {
        println!(
            "  {:<10} {:>4} min  {:>5} kcal  {:>6.1} km  {:>6} steps",
            kind.name(),
            progress.minutes,
            progress.calories,
            progress.distance_km,
            progress.steps
        );
    }

    println!();
    println!(
        "Totals: {} min • {:.1} km • {} steps",
        state.total_minutes(),
        state.total_distance_km(),
        state.total_steps()
    );
    Ok(())
}

fn cmd_history(state_path: &Path, limit: Option<usize>) -> Result<()> {
    let state = AppData::load(state_path)?;

    if state.history.is_empty() {
        println!("No workouts logged yet.");
        return Ok(());
    }

    let skip = limit
        .map(|n| state.history.len().saturating_sub(n))
        .unwrap_or(0);

    for entry in &state.history[skip..] {
        println!(
            "{}  {:<10} {:>4} min  {:>5} kcal  {:>6.1} km  {:>6} steps",
            entry.recorded_at.format("%Y-%m-%d %H:%M"),
            entry.workout.name(),
            entry.minutes,
            entry.calories,
            entry.distance_km,
            entry.steps
        );
    }
    Ok(())
}

fn cmd_reset(state_path: &Path) -> Result<()> {
    AppData::update(state_path, |state| state.reset_progress())?;
    println!("✓ Progress reset. History and profile kept.");
    Ok(())
}

fn cmd_goal(state_path: &Path, calories: u32, config: &Config) -> Result<()> {
    let goal = calories.max(config.goal.min_daily_calories);
    if goal != calories {
        tracing::info!("Requested goal {} clamped to minimum {}", calories, goal);
    }

    let state = AppData::load(state_path)?;
    let next = check_goal(state.with_daily_goal(goal));
    next.save(state_path)?;

    println!("✓ Daily goal set to {} kcal", goal);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_profile(
    state_path: &Path,
    name: Option<String>,
    age: Option<u32>,
    gender: Option<String>,
    height_cm: Option<u32>,
    weight_kg: Option<i32>,
    stride_m: Option<f64>,
) -> Result<()> {
    let state = AppData::load(state_path)?;

    let editing = name.is_some()
        || age.is_some()
        || gender.is_some()
        || height_cm.is_some()
        || weight_kg.is_some()
        || stride_m.is_some();

    if !editing {
        print_profile(&state.user);
        return Ok(());
    }

    if let Some(stride) = stride_m {
        if !(stride > 0.0) {
            return Err(Error::InvalidInput(
                "stride length must be greater than 0".into(),
            ));
        }
    }

    let user = User {
        name: name.unwrap_or(state.user.name.clone()),
        age: age.unwrap_or(state.user.age),
        gender: gender.unwrap_or(state.user.gender.clone()),
        height_cm: height_cm.unwrap_or(state.user.height_cm),
        weight_kg: weight_kg.unwrap_or(state.user.weight_kg),
        stride_length_m: stride_m.unwrap_or(state.user.stride_length_m),
    };

    let next = state.with_user(user);
    next.save(state_path)?;

    println!("✓ Profile updated");
    print_profile(&next.user);
    Ok(())
}

fn cmd_export(state_path: &Path, output: &Path) -> Result<()> {
    let state = AppData::load(state_path)?;
    let count = export_history(&state.history, output)?;

    println!("✓ Exported {} workouts to {}", count, output.display());
    Ok(())
}

/// Goal-achievement check, run after every transition that can change total
/// calories or the goal. Fires the one-time notification and acknowledges
/// the crossing so it cannot re-fire until a reset or goal edit.
fn check_goal(state: AppData) -> AppData {
    if state.goal_just_reached() {
        println!("★ Daily goal achieved! Great job.");
        state.acknowledge_goal()
    } else {
        state
    }
}

fn print_profile(user: &User) {
    println!("Name:   {}", user.name);
    println!("Age:    {}", user.age);
    println!("Gender: {}", user.gender);
    println!("Height: {} cm", user.height_cm);
    println!("Weight: {} kg", user.weight_kg);
    println!("Stride: {:.2} m", user.stride_length_m);
}
