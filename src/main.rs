//! Username Forge - styled username generation and availability checking
//!
//! Thin CLI front-end: parses a style and a count, runs one search, and
//! renders the result set. All real work lives in the library.

use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::process;
use std::time::Duration;

use username_forge::{
    search::MAX_REQUEST_COUNT, CheckConfig, CheckMethod, Result, SearchCompletion, SearchConfig,
    SearchContext, SearchOrchestrator, SearchOutcome, Style,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the library
    if let Err(e) = username_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_help();
        return Ok(());
    }

    let style = args
        .get(1)
        .map(|tag| Style::parse_or_default(tag))
        .unwrap_or(Style::FiveChar);
    let count: usize = args
        .get(2)
        .and_then(|c| c.parse().ok())
        .unwrap_or(5)
        .clamp(1, MAX_REQUEST_COUNT);

    if let Err(e) = run_search(style, count).await {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    Ok(())
}

/// Run one search and render the outcome
async fn run_search(style: Style, count: usize) -> Result<()> {
    println!("🎮 Username Forge - searching for available usernames");
    println!("═════════════════════════════════════════════════════");
    println!("Style: {} | Target: {}", style, count);
    println!();

    let context = SearchContext::new(CheckConfig::from_env(), SearchConfig::default());
    let orchestrator = SearchOrchestrator::new(context);

    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.enable_steady_tick(Duration::from_millis(120));
    bar.set_message("Checking candidates...");

    let outcome = orchestrator
        .request_usernames(style, count, |snapshot| {
            bar.set_message(format!(
                "Found {}/{} available | checked {} | attempts {}",
                snapshot.found, snapshot.target, snapshot.total_checked, snapshot.attempts
            ));
            Ok(())
        })
        .await?;

    bar.finish_and_clear();
    render_outcome(&outcome);

    Ok(())
}

/// Render the final result set
fn render_outcome(outcome: &SearchOutcome) {
    if outcome.is_empty() {
        println!("❌ No usernames could be produced. Try again.");
        return;
    }

    if !outcome.available.is_empty() {
        println!("✅ Available usernames ({}):", outcome.available.len());
        for result in &outcome.available {
            match result.method {
                CheckMethod::Remote => println!("  🟢 {} - Available", result.candidate),
                CheckMethod::ErrorFallback => {
                    println!("  🟡 {} - Check failed, likely available", result.candidate)
                }
                _ => println!("  🟡 {} - Likely available (heuristic)", result.candidate),
            }
        }
    }

    if !outcome.taken_sample.is_empty() {
        println!();
        println!("Taken (for context):");
        for result in &outcome.taken_sample {
            println!("  🔴 {} - Taken", result.candidate);
        }
    }

    println!();
    println!(
        "Checked {} distinct candidates in {} attempts.",
        outcome.total_checked, outcome.attempts
    );

    match outcome.completion {
        SearchCompletion::Satisfied => {}
        SearchCompletion::Exhausted => {
            println!("⚠️  Attempt ceiling reached before the target count was found.")
        }
        SearchCompletion::Cancelled => println!("⚠️  Search was cancelled."),
    }
}

fn print_help() {
    println!("🎮 Username Forge v{}", username_forge::VERSION);
    println!();
    println!("USAGE:");
    println!("    username-forge [STYLE] [COUNT]");
    println!();
    println!("STYLES:");
    println!("    5char     Exactly 5 characters (default)");
    println!("    random    Random length, 3-12 characters");
    println!("    gaming    Gaming-themed word compositions");
    println!("    cool      Cool/aesthetic word compositions");
    println!("    mixed     Letters and numbers, 4-10 characters");
    println!();
    println!("ARGS:");
    println!("    COUNT     Available names to find, 1-10 (default: 5)");
    println!();
    println!("ENVIRONMENT:");
    println!("    USERNAME_VALIDATION_URL    Override the validation endpoint");
    println!();
    println!("EXAMPLES:");
    println!("    username-forge gaming 3");
    println!("    username-forge 5char");
}
