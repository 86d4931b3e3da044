//! Status tool
//!
//! Runtime status of the calculator service and usage instructions.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildStamp;
use crate::config::{Config, WeekAnchor};

/// Calculator usage instructions for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# Diet Calculator Instructions

All tools are pure calculations. Nothing is stored between calls: pass every
product, recipe and meal plan entry you want included.

## Nutrition Profiles

Profiles hold calories, protein, fat and carbohydrates per reference quantity.

| Source  | Reference quantity            |
|---------|-------------------------------|
| Product | 100 g of product              |
| Recipe  | 100 g of cooked recipe yield  |

Pass `reference_quantity` only when the values refer to something other than
100 g. A reference quantity of zero or less is rejected.

## Scaling (`scale_nutrition`)

`scaled = base * quantity / reference_quantity`

- Quantity 0 gives all zeros.
- `nutrition` keeps full precision: use it for further sums.
- `display` is rounded to one decimal place: use it only for showing values.

## Recipes (`recipe_profile`)

List ingredients with grams used and per-100 g values. The yield is the sum of
ingredient grams. The optional `portion_weight` defaults to 100 g.

## Days and Weeks (`summarize_day`, `weekly_report`)

Entries need: `id`, `date` (YYYY-MM-DD), `meal_time` (breakfast, lunch, dinner,
snack or 1-4), `quantity` in grams, `source_type` (product/recipe), `source_id`
and `profile`.

- Every meal time is reported, empty ones as zero.
- A week always has 7 days. Entries outside the window are ignored.
- `weekly_report` with `previous_week: true` covers the week before the date.
- `share_of_day` is each meal time's share of the day's calories.
- Percentage of goal is 0 when no goal is given.

## Goals (`estimate_calorie_goal`, `split_meal_budget`)

Daily calories use Mifflin-St Jeor with activity levels:

| Level | Factor | Description |
|-------|--------|-------------|
| 1 | 1.2   | Sedentary |
| 2 | 1.375 | Light activity |
| 3 | 1.55  | Moderate activity |
| 4 | 1.725 | High activity |
| 5 | 1.9   | Extreme activity |

Goal categories: `weight_loss`, `mass_gain`, `maintenance`. Prefer the
category code. A goal display name is matched by keyword; unknown names use the
server's fallback category (see `dietcalc_status`).

Meal budget splits (breakfast/lunch/dinner/snack), rounded to 10 kcal:

| Category    | Split          |
|-------------|----------------|
| weight_loss | 30/40/15/15 %  |
| mass_gain   | 25/30/35/10 %  |
| maintenance | 30/35/25/10 %  |
"#;

/// Runtime status of the calculator service
#[derive(Debug, Clone, Serialize)]
pub struct DietCalcStatus {
    pub build: BuildStamp,

    /// Active configuration
    pub fallback_goal: &'static str,
    pub week_anchor: &'static str,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    config: Config,
}

impl StatusTracker {
    pub fn new(config: Config) -> Self {
        Self {
            start_time: Instant::now(),
            config,
        }
    }

    pub fn get_status(&self) -> DietCalcStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        DietCalcStatus {
            build: BuildStamp::current(),
            fallback_goal: self.config.fallback_goal.code(),
            week_anchor: match self.config.week_anchor {
                WeekAnchor::Monday => "monday",
                WeekAnchor::AsGiven => "as_given",
            },
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
