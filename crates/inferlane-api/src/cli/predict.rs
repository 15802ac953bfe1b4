//! `inferlane predict`: one-shot prediction from the command line.

use anyhow::Context;
use console::style;

use inferlane_core::budget::BudgetStatus;
use inferlane_core::cost::format_cost;
use inferlane_types::inference::InferenceRequest;

use crate::state::AppState;

/// Parse `input` as a JSON object request.
pub fn parse_request(input: &str) -> anyhow::Result<InferenceRequest> {
    serde_json::from_str(input).context("request must be a JSON object")
}

pub async fn run_predict(state: &AppState, input: &str, quiet: bool) -> anyhow::Result<()> {
    let request = parse_request(input)?;
    let outcome = state.adapter.predict_with_report(&request).await?;

    println!("{}", serde_json::to_string_pretty(&outcome.response)?);

    if !quiet {
        let metrics = &outcome.metrics;
        eprintln!(
            "  {} {} · {:.1}ms · {} tokens · {}",
            style("•").dim(),
            style(metrics.provider).cyan(),
            metrics.latency_ms,
            metrics.tokens_used,
            format_cost(metrics.estimated_cost_usd)
        );
        if let BudgetStatus::Exceeded { limit_usd, .. } = outcome.budget {
            eprintln!(
                "  {} cost exceeds per-inference limit of {}",
                style("!").yellow().bold(),
                format_cost(limit_usd)
            );
        }
    }

    Ok(())
}
