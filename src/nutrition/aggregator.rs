//! Meal, day and week aggregation
//!
//! Sums scaled entry nutrition per meal time, per day and across a 7-day
//! window, and derives the percentage-of-goal figures shown in reports.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

use super::error::{NutritionError, NutritionResult};
use super::scaler::scale;
use crate::models::{MealPlanEntry, MealTime, Nutrition};

/// Days in a weekly report
pub const DAYS_PER_WEEK: usize = 7;

/// Above this share of the limit a meal time is flagged as nearly full
const NEAR_LIMIT_PERCENT: f64 = 90.0;

// ============================================================================
// Result Types
// ============================================================================

/// Totals per meal time; every meal time is present
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealTimeTotals {
    pub by_meal_time: BTreeMap<MealTime, Nutrition>,
    pub total: Nutrition,
}

impl MealTimeTotals {
    fn empty() -> Self {
        Self {
            by_meal_time: MealTime::ALL.into_iter().map(|m| (m, Nutrition::zero())).collect(),
            total: Nutrition::zero(),
        }
    }

    pub fn get(&self, meal_time: MealTime) -> Nutrition {
        self.by_meal_time.get(&meal_time).copied().unwrap_or_default()
    }
}

/// Everything logged for one date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub entry_count: usize,
    pub meal_times: MealTimeTotals,
}

impl DailyAggregate {
    pub fn total(&self) -> Nutrition {
        self.meal_times.total
    }
}

/// One day of a weekly report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub weekday: &'static str,
    pub nutrition: Nutrition,
}

/// Seven consecutive days starting at `start_date`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: Vec<DayBucket>,
    pub total: Nutrition,
}

impl WeeklyReport {
    /// Calories per day, in day order
    pub fn calorie_series(&self) -> Vec<f64> {
        self.days.iter().map(|d| d.nutrition.calories).collect()
    }

    /// `[protein, fat, carbohydrates]` per day, in day order
    pub fn macro_series(&self) -> Vec<[f64; 3]> {
        self.days
            .iter()
            .map(|d| [d.nutrition.protein, d.nutrition.fat, d.nutrition.carbohydrates])
            .collect()
    }

    /// Calorie goal for the whole week
    pub fn weekly_goal(daily_goal: f64) -> f64 {
        daily_goal * DAYS_PER_WEEK as f64
    }
}

/// Share of each macro in the summed macro grams, in percent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroDistribution {
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
}

/// How a consumed amount relates to its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Normal,
    NearLimit,
    OverLimit,
}

impl GoalStatus {
    /// Classify against a limit; no limit means `Normal`
    pub fn classify(consumed: f64, limit: Option<f64>) -> Self {
        let percent = percentage_of_goal(consumed, limit);
        if percent > 100.0 {
            GoalStatus::OverLimit
        } else if percent > NEAR_LIMIT_PERCENT {
            GoalStatus::NearLimit
        } else {
            GoalStatus::Normal
        }
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Scaled nutrition of a single entry
pub fn entry_nutrition(entry: &MealPlanEntry) -> NutritionResult<Nutrition> {
    scale(&entry.profile, entry.quantity)
}

/// Group entries by meal time and sum each group and the overall total
pub fn aggregate_by_meal_time<'a, I>(entries: I) -> NutritionResult<MealTimeTotals>
where
    I: IntoIterator<Item = &'a MealPlanEntry>,
{
    let mut totals = MealTimeTotals::empty();

    for entry in entries {
        let nutrition = entry_nutrition(entry)?;
        *totals.by_meal_time.entry(entry.meal_time).or_default() += nutrition;
        totals.total += nutrition;
    }

    Ok(totals)
}

/// Aggregate the entries logged on `date`
pub fn aggregate_day(entries: &[MealPlanEntry], date: NaiveDate) -> NutritionResult<DailyAggregate> {
    let for_day: Vec<&MealPlanEntry> = entries.iter().filter(|e| e.date == date).collect();

    Ok(DailyAggregate {
        date,
        entry_count: for_day.len(),
        meal_times: aggregate_by_meal_time(for_day)?,
    })
}

/// Aggregate a 7-day window starting at `start_date`.
///
/// Days without entries are zero; entries outside the window are ignored.
pub fn aggregate_week(entries: &[MealPlanEntry], start_date: NaiveDate) -> NutritionResult<WeeklyReport> {
    let mut days = (0..DAYS_PER_WEEK as i64)
        .map(|offset| {
            let date = shift_days(start_date, offset)?;
            Ok(DayBucket {
                date,
                weekday: weekday_abbrev(date.weekday()),
                nutrition: Nutrition::zero(),
            })
        })
        .collect::<NutritionResult<Vec<DayBucket>>>()?;
    let end_date = days[DAYS_PER_WEEK - 1].date;

    let mut total = Nutrition::zero();

    for entry in entries {
        let offset = (entry.date - start_date).num_days();
        if !(0..DAYS_PER_WEEK as i64).contains(&offset) {
            continue;
        }
        let nutrition = entry_nutrition(entry)?;
        days[offset as usize].nutrition += nutrition;
        total += nutrition;
    }

    Ok(WeeklyReport {
        start_date,
        end_date,
        days,
        total,
    })
}

/// `date` moved by `days`, failing at the edges of the calendar range
pub fn shift_days(date: NaiveDate, days: i64) -> NutritionResult<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
        .ok_or(NutritionError::DateOutOfRange(date))
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NutritionResult<NaiveDate> {
    shift_days(date, -i64::from(date.weekday().num_days_from_monday()))
}

/// Monday of the week before the one containing `date`
pub fn previous_week_start(date: NaiveDate) -> NutritionResult<NaiveDate> {
    shift_days(week_start(date)?, -(DAYS_PER_WEEK as i64))
}

fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

// ============================================================================
// Goal Percentages
// ============================================================================

/// `consumed / goal * 100`, or 0 when the goal is missing, zero or not positive
pub fn percentage_of_goal(consumed: f64, goal: Option<f64>) -> f64 {
    match goal {
        Some(goal) if goal.is_finite() && goal > 0.0 && consumed.is_finite() => consumed / goal * 100.0,
        _ => 0.0,
    }
}

/// Percentage still left to reach the goal (negative once exceeded)
pub fn remaining_percentage(consumed: f64, goal: Option<f64>) -> f64 {
    100.0 - percentage_of_goal(consumed, goal)
}

/// Macro shares of the summed protein, fat and carbohydrate grams
pub fn macro_distribution(nutrition: &Nutrition) -> MacroDistribution {
    let total = nutrition.macro_grams();
    if !total.is_finite() || total <= 0.0 {
        return MacroDistribution::default();
    }

    MacroDistribution {
        protein: nutrition.protein / total * 100.0,
        fat: nutrition.fat / total * 100.0,
        carbohydrates: nutrition.carbohydrates / total * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntrySource, NutritionalProfile};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(id: i64, day: &str, meal_time: MealTime, quantity: f64) -> MealPlanEntry {
        MealPlanEntry {
            id,
            date: date(day),
            meal_time,
            quantity,
            source: EntrySource::Product(id),
            profile: NutritionalProfile::per_100g(Nutrition::new(200.0, 10.0, 5.0, 30.0)).unwrap(),
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_entries_give_zero_for_every_meal_time() {
        let entries: Vec<MealPlanEntry> = Vec::new();
        let totals = aggregate_by_meal_time(&entries).unwrap();
        assert_eq!(totals.by_meal_time.len(), 4);
        for meal_time in MealTime::ALL {
            assert_eq!(totals.get(meal_time), Nutrition::zero());
        }
        assert_eq!(totals.total, Nutrition::zero());
    }

    #[test]
    fn test_group_by_meal_time() {
        let entries = vec![
            entry(1, "2026-03-02", MealTime::Breakfast, 150.0),
            entry(2, "2026-03-02", MealTime::Breakfast, 50.0),
            entry(3, "2026-03-02", MealTime::Dinner, 100.0),
            entry(4, "2026-03-02", MealTime::Snack, 0.0),
        ];
        let totals = aggregate_by_meal_time(&entries).unwrap();

        assert!(close(totals.get(MealTime::Breakfast).calories, 400.0));
        assert_eq!(totals.get(MealTime::Lunch), Nutrition::zero());
        assert!(close(totals.get(MealTime::Dinner).calories, 200.0));
        assert_eq!(totals.get(MealTime::Snack), Nutrition::zero());

        // Total equals the sum of the groups
        let group_sum: Nutrition = totals.by_meal_time.values().copied().sum();
        assert!(close(totals.total.calories, group_sum.calories));
        assert!(close(totals.total.protein, 30.0));
    }

    #[test]
    fn test_aggregate_day_filters_by_date() {
        let entries = vec![
            entry(1, "2026-03-02", MealTime::Lunch, 100.0),
            entry(2, "2026-03-03", MealTime::Lunch, 100.0),
            entry(3, "2026-03-02", MealTime::Snack, 0.0),
        ];
        let day = aggregate_day(&entries, date("2026-03-02")).unwrap();
        assert_eq!(day.entry_count, 2);
        assert!(close(day.total().calories, 200.0));
    }

    #[test]
    fn test_week_always_has_seven_days() {
        let report = aggregate_week(&[], date("2026-03-02")).unwrap();
        assert_eq!(report.days.len(), 7);
        assert!(report.days.iter().all(|d| d.nutrition == Nutrition::zero()));
        assert_eq!(report.end_date, date("2026-03-08"));
        assert_eq!(report.calorie_series(), vec![0.0; 7]);
    }

    #[test]
    fn test_week_buckets_by_date_and_ignores_outside_entries() {
        let entries = vec![
            entry(1, "2026-03-02", MealTime::Breakfast, 100.0),
            entry(2, "2026-03-02", MealTime::Dinner, 50.0),
            entry(3, "2026-03-05", MealTime::Lunch, 200.0),
            entry(4, "2026-03-08", MealTime::Snack, 100.0),
            entry(5, "2026-03-01", MealTime::Lunch, 100.0),
            entry(6, "2026-03-09", MealTime::Lunch, 100.0),
        ];
        let report = aggregate_week(&entries, date("2026-03-02")).unwrap();

        let calories = report.calorie_series();
        assert_eq!(calories.len(), 7);
        assert!(close(calories[0], 300.0));
        assert!(close(calories[1], 0.0));
        assert!(close(calories[3], 400.0));
        assert!(close(calories[6], 200.0));
        assert!(close(report.total.calories, 900.0));

        assert_eq!(report.days[0].weekday, "Mon");
        assert_eq!(report.days[6].weekday, "Sun");
        assert_eq!(report.macro_series()[3], [20.0, 10.0, 60.0]);
    }

    #[test]
    fn test_week_start_helpers() {
        // 2026-03-05 is a Thursday
        assert_eq!(week_start(date("2026-03-05")).unwrap(), date("2026-03-02"));
        assert_eq!(week_start(date("2026-03-02")).unwrap(), date("2026-03-02"));
        assert_eq!(week_start(date("2026-03-08")).unwrap(), date("2026-03-02"));
        assert_eq!(previous_week_start(date("2026-03-05")).unwrap(), date("2026-02-23"));
    }

    #[test]
    fn test_calendar_edges_are_errors() {
        assert_eq!(
            aggregate_week(&[], NaiveDate::MAX).unwrap_err(),
            NutritionError::DateOutOfRange(NaiveDate::MAX)
        );
        let near_max = NaiveDate::MAX - Duration::days(3);
        assert!(aggregate_week(&[], near_max).is_err());

        // NaiveDate::MIN is not a Monday, so snapping back leaves the range
        assert_ne!(NaiveDate::MIN.weekday(), Weekday::Mon);
        assert!(week_start(NaiveDate::MIN).is_err());
        assert!(previous_week_start(NaiveDate::MIN).is_err());

        let last_full_week = NaiveDate::MAX - Duration::days(6);
        let report = aggregate_week(&[], last_full_week).unwrap();
        assert_eq!(report.end_date, NaiveDate::MAX);
    }

    #[test]
    fn test_percentage_of_goal() {
        assert!(close(percentage_of_goal(500.0, Some(2000.0)), 25.0));
        assert_eq!(percentage_of_goal(500.0, Some(0.0)), 0.0);
        assert_eq!(percentage_of_goal(500.0, None), 0.0);
        assert_eq!(percentage_of_goal(500.0, Some(-10.0)), 0.0);
        assert_eq!(percentage_of_goal(500.0, Some(f64::NAN)), 0.0);
        assert!(close(remaining_percentage(500.0, Some(2000.0)), 75.0));
        assert_eq!(remaining_percentage(500.0, None), 100.0);
    }

    #[test]
    fn test_weekly_goal() {
        assert!(close(WeeklyReport::weekly_goal(2000.0), 14000.0));
    }

    #[test]
    fn test_goal_status() {
        assert_eq!(GoalStatus::classify(500.0, None), GoalStatus::Normal);
        assert_eq!(GoalStatus::classify(500.0, Some(600.0)), GoalStatus::Normal);
        assert_eq!(GoalStatus::classify(580.0, Some(600.0)), GoalStatus::NearLimit);
        assert_eq!(GoalStatus::classify(600.0, Some(600.0)), GoalStatus::NearLimit);
        assert_eq!(GoalStatus::classify(601.0, Some(600.0)), GoalStatus::OverLimit);
    }

    #[test]
    fn test_macro_distribution() {
        let d = macro_distribution(&Nutrition::new(400.0, 25.0, 25.0, 50.0));
        assert!(close(d.protein, 25.0));
        assert!(close(d.fat, 25.0));
        assert!(close(d.carbohydrates, 50.0));

        assert_eq!(macro_distribution(&Nutrition::zero()), MacroDistribution::default());
    }
}
