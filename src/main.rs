mod backend;
mod claim;
mod cli;
mod config;
mod error;
mod mess;
mod storage;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use colored::*;
use config::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("rsvs_meal_claim=debug,info")
        .init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Status { format } => show_status(&format),

        Commands::Claim {
            meal,
            yes,
            dry_run,
            force,
        } => {
            info!("Claiming meal: {}", meal);
            claim_meal(&config, &meal, yes, dry_run, force).await
        }

        Commands::Watch { interval } => {
            info!("Watching claim windows (interval: {}s)", interval);
            watch_windows(interval).await
        }

        Commands::History { limit, format } => show_history(&config, limit, &format),

        Commands::Stats { format } => show_stats(&config, &format),

        Commands::Init => initialize(&config),
    };

    if let Err(e) = result {
        error!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn show_status(format: &str) -> error::Result<()> {
    let now = mess::ist_now();
    let wall_clock = mess::ist_time_of_day(now);
    let results = claim::WindowEvaluator::evaluate_all(&mess::STANDARD_MEALS, wall_clock);

    if format == "json" {
        let rows: Vec<_> = results
            .iter()
            .map(|r| {
                serde_json::json!({
                    "index": r.meal.sequence_index,
                    "meal": r.meal.kind.to_string(),
                    "officialTiming": r.meal.official_timing(),
                    "claimWindow": utils::format_claim_window(&r.meal),
                    "claimable": r.claimable,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", "=== Meal Claim Status ===".cyan().bold());
    println!("Time now: {} IST\n", wall_clock.to_string().yellow());

    utils::print_table_border(72);
    utils::print_table_row(
        &["#", "Meal Type", "Official Timing", "Claim Window", "Action"],
        &[3, 12, 16, 16, 15],
    );
    utils::print_table_border(72);

    for result in &results {
        utils::print_table_row(
            &[
                &result.meal.sequence_index.to_string(),
                &result.meal.kind.to_string(),
                &result.meal.official_timing(),
                &utils::format_claim_window(&result.meal),
                &utils::availability_label(result.claimable),
            ],
            &[3, 12, 16, 16, 15],
        );
    }
    utils::print_table_border(72);

    Ok(())
}

async fn claim_meal(
    config: &Config,
    meal_name: &str,
    yes: bool,
    dry_run: bool,
    force: bool,
) -> error::Result<()> {
    let kind: mess::MealKind = meal_name.parse()?;
    let meal = mess::find_meal(&mess::STANDARD_MEALS, kind)
        .ok_or_else(|| error::ClaimError::UnknownMeal(meal_name.to_string()))?;

    let now = mess::ist_now();
    let today = mess::ist_date(now);

    println!("{}", format!("Claiming {}...", kind).cyan());

    // Advisory only; the backend enforces the once-per-day rule
    let journal = storage::Journal::new(&config.database.path)?;
    if let Some(previous) = journal.claim_for(kind, today)? {
        println!(
            "{}",
            format!(
                "Warning: {} already claimed today at {} (claim {})",
                kind,
                utils::format_timestamp(&previous.claimed_at),
                utils::format_claim_id(&previous.claim_id)
            )
            .yellow()
        );
    }

    if !yes && !dry_run && !utils::confirm_action(&format!("Submit claim for {}?", kind)) {
        println!("Cancelled");
        return Ok(());
    }

    config.validate()?;
    let api_client = backend::MessApiClient::new(
        &config.server.base_url,
        &config.session.auth_token,
        config.server.timeout_secs,
    )?;
    let engine = claim::ClaimEngine::new(api_client, dry_run);

    let outcome = engine.claim(meal, now, force).await?;

    if let Some(claim_id) = outcome.claim_id {
        println!("{}", "Claim successful!".green());
        println!("Show this token at the counter:");
        println!("  {}", claim_id.bold());

        journal.save_claim(&storage::ClaimRecord {
            id: 0, // auto-generated
            meal: kind,
            claim_id,
            claimed_on: today,
            claimed_at: outcome.claimed_at,
            note: if force {
                "forced past window pre-check".to_string()
            } else {
                "manual CLI claim".to_string()
            },
        })?;
        info!("Claim journaled");
    } else if outcome.dry_run {
        println!("DRY RUN: would claim {}", kind);
    }

    Ok(())
}

async fn watch_windows(interval: u64) -> error::Result<()> {
    println!("{}", "Watching meal claim windows...".green());
    println!("Interval: {} seconds (Ctrl-C to stop)", interval);

    let mut previous: Option<Vec<bool>> = None;

    loop {
        let now = mess::ist_now();
        let wall_clock = mess::ist_time_of_day(now);
        let results = claim::WindowEvaluator::evaluate_all(&mess::STANDARD_MEALS, wall_clock);
        let flags: Vec<bool> = results.iter().map(|r| r.claimable).collect();

        match &previous {
            None => {
                for result in &results {
                    info!(
                        "{}: {}",
                        result.meal.kind,
                        if result.claimable { "claimable" } else { "closed" }
                    );
                }
            }
            Some(last) => {
                for (result, was) in results.iter().zip(last.iter()) {
                    if result.claimable && !was {
                        println!(
                            "{}",
                            format!("{} window opened ({})", result.meal.kind, wall_clock).green()
                        );
                    } else if !result.claimable && *was {
                        println!(
                            "{}",
                            format!("{} window closed ({})", result.meal.kind, wall_clock).yellow()
                        );
                    }
                }
            }
        }

        previous = Some(flags);
        tokio::time::sleep(tokio::time::Duration::from_secs(interval)).await;
    }
}

fn show_history(config: &Config, limit: Option<usize>, format: &str) -> error::Result<()> {
    let journal = storage::Journal::new(&config.database.path)?;
    let history = journal.get_history(limit)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }

    if history.is_empty() {
        println!("No claims journaled yet");
        return Ok(());
    }

    println!("{}", "Recent Claims:".yellow());
    utils::print_table_border(80);
    utils::print_table_row(&["Date", "Meal", "Claim Id", "Submitted", "Note"], &[12, 10, 18, 22, 12]);
    utils::print_table_border(80);

    for record in history {
        utils::print_table_row(
            &[
                &record.claimed_on.to_string(),
                &record.meal.to_string(),
                &utils::format_claim_id(&record.claim_id),
                &utils::format_timestamp(&record.claimed_at),
                &record.note,
            ],
            &[12, 10, 18, 22, 12],
        );
    }
    utils::print_table_border(80);

    Ok(())
}

fn show_stats(config: &Config, format: &str) -> error::Result<()> {
    let journal = storage::Journal::new(&config.database.path)?;
    let stats = journal.get_stats()?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "=== Meal Claim Statistics ===".cyan().bold());
    println!("\nClaims:");
    println!("  Total:      {}", stats.total_claims);
    println!("  Breakfast:  {}", stats.breakfast_claims);
    println!("  Lunch:      {}", stats.lunch_claims);
    println!("  Snacks:     {}", stats.snacks_claims);
    println!("  Dinner:     {}", stats.dinner_claims);

    if let Some(first) = stats.first_claim_at {
        println!("\n  First:      {}", utils::format_timestamp(&first));
    }
    if let Some(last) = stats.last_claim_at {
        println!("  Last:       {}", utils::format_timestamp(&last));
    }

    Ok(())
}

fn initialize(config: &Config) -> error::Result<()> {
    println!("{}", "Initializing RSVS meal claim tool...".green());

    mess::validate_catalog(&mess::STANDARD_MEALS)?;
    println!("{}", "✓ Meal catalog validated".green());

    let _journal = storage::Journal::new(&config.database.path)?;
    println!("{}", "✓ Claim journal initialized".green());

    println!("\n{}", "Configuration:".cyan());
    println!("  Server:     {}", config.server.base_url);
    println!("  Timeout:    {}s", config.server.timeout_secs);
    println!("  Journal:    {}", config.database.path);
    println!(
        "  Session:    {}",
        if config.session.auth_token.is_empty() {
            "not set".to_string()
        } else {
            "configured".to_string()
        }
    );

    println!("\n{}", "Ready to use! Try running:".cyan());
    println!("  {} to see current windows", "rsvs-meal status".yellow());
    println!("  {} to claim a meal", "rsvs-meal claim lunch".yellow());
    println!("  {} to follow window transitions", "rsvs-meal watch".yellow());
    Ok(())
}
