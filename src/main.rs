//! Diet Calculator
//!
//! An MCP server exposing the nutrition calculations over stdio.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use dietcalc::build_info::BuildStamp;
use dietcalc::config::Config;
use dietcalc::mcp::DietCalcService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    // Log to stderr so stdout stays free for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        build = %BuildStamp::current().summary(),
        fallback_goal = config.fallback_goal.code(),
        week_anchor = ?config.week_anchor,
        "Starting MCP server on stdio"
    );

    let service = DietCalcService::new(config);
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
