//! Diet Calculator MCP Server Implementation
//!
//! Routes MCP tool calls to the calculator tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::tools::calculator::{self, EntryInput, IngredientInput, ProfileInput};
use crate::tools::status::StatusTracker;

/// Diet Calculator MCP Service
#[derive(Clone)]
pub struct DietCalcService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Arc<Config>,
    tool_router: ToolRouter<DietCalcService>,
}

impl DietCalcService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config.clone()))),
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleNutritionParams {
    /// Base values and their reference quantity
    pub profile: ProfileInput,
    /// Grams to scale to
    pub quantity: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecipeProfileParams {
    pub name: String,
    pub ingredients: Vec<IngredientInput>,
    /// Portion in grams (default 100)
    pub portion_weight: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SummarizeDayParams {
    /// ISO date: "2026-03-02"
    pub date: String,
    #[serde(default)]
    pub entries: Vec<EntryInput>,
    /// Daily calorie goal, enables meal-time budgets
    pub daily_calorie_goal: Option<f64>,
    /// weight_loss, mass_gain or maintenance
    pub goal_category: Option<String>,
    /// Goal display name, used when no category code is given
    pub goal_name: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WeeklyReportParams {
    /// Any date in the week, or the first day when the server uses as_given anchoring
    pub start_date: String,
    #[serde(default)]
    pub entries: Vec<EntryInput>,
    pub daily_calorie_goal: Option<f64>,
    /// Report the week before the one containing start_date
    #[serde(default)]
    pub previous_week: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EstimateCalorieGoalParams {
    /// "male" or "female"
    pub gender: String,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: f64,
    /// 1 (sedentary) to 5 (extreme)
    pub activity_level: i64,
    pub goal_category: Option<String>,
    pub goal_name: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SplitMealBudgetParams {
    pub daily_calories: f64,
    pub goal_category: Option<String>,
    pub goal_name: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GoalProgressParams {
    pub consumed: f64,
    pub goal: Option<f64>,
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl DietCalcService {
    // --- Status ---

    #[tool(description = "Get the current status of the diet calculator including build info, active configuration and process information")]
    async fn dietcalc_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for the calculator tools: profile conventions, scaling, aggregation and goal categories. Call this when unsure how to shape inputs.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Scaling ---

    #[tool(description = "Scale nutrition values defined per reference quantity (default 100 g) to a quantity in grams")]
    fn scale_nutrition(&self, Parameters(p): Parameters<ScaleNutritionParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::scale_nutrition(p.profile, p.quantity)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Derive a recipe's per-100 g nutrition from its ingredients and compute one portion")]
    fn recipe_profile(&self, Parameters(p): Parameters<RecipeProfileParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::recipe_profile(&p.name, &p.ingredients, p.portion_weight)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    // --- Aggregation ---

    #[tool(description = "Sum meal plan entries for a date per meal time, with meal-time calorie budgets and percentage of the daily goal")]
    fn summarize_day(&self, Parameters(p): Parameters<SummarizeDayParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::summarize_day(
            &p.date,
            &p.entries,
            p.daily_calorie_goal,
            p.goal_category.as_deref(),
            p.goal_name.as_deref(),
            &self.config,
        )
        .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Build a 7-day report of calories and macros per day, for the current or previous week. Days without entries are zero.")]
    fn weekly_report(&self, Parameters(p): Parameters<WeeklyReportParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::weekly_report(
            &p.start_date,
            &p.entries,
            p.daily_calorie_goal,
            p.previous_week,
            &self.config,
        )
        .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Percentage of a goal reached, the remaining percentage and a normal/near_limit/over_limit status")]
    fn goal_progress(&self, Parameters(p): Parameters<GoalProgressParams>) -> Result<CallToolResult, McpError> {
        to_json(&calculator::goal_progress(p.consumed, p.goal))
    }

    // --- Goals ---

    #[tool(description = "Estimate the daily calorie goal (Mifflin-St Jeor with activity level 1-5), macro targets and meal-time split")]
    fn estimate_calorie_goal(&self, Parameters(p): Parameters<EstimateCalorieGoalParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::estimate_calorie_goal(
            &p.gender,
            p.weight_kg,
            p.height_cm,
            p.age_years,
            p.activity_level,
            p.goal_category.as_deref(),
            p.goal_name.as_deref(),
            &self.config,
        )
        .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Split a daily calorie target into breakfast, lunch, dinner and snack budgets, rounded to 10 kcal")]
    fn split_meal_budget(&self, Parameters(p): Parameters<SplitMealBudgetParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::meal_budget(
            p.daily_calories,
            p.goal_category.as_deref(),
            p.goal_name.as_deref(),
            &self.config,
        )
        .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for DietCalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "dietcalc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Diet Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Diet Calculator - nutrition scaling, meal plan aggregation and calorie goals. \
                 Call calculator_instructions first. \
                 Scaling: scale_nutrition, recipe_profile. \
                 Reports: summarize_day, weekly_report, goal_progress. \
                 Goals: estimate_calorie_goal, split_meal_budget. \
                 Status: dietcalc_status."
                    .into(),
            ),
        }
    }
}
