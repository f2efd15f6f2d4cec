//! # chatsheet CLI
//!
//! Command-line interface for the chatsheet library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, info};

use chatsheet::ChatsheetError;
use chatsheet::cli::Args;
use chatsheet::config::Template;
use chatsheet::core::{group_by_sender, write_html};
use chatsheet::parser::parse_file;

fn main() {
    let args = <Args as ClapParser>::parse();
    setup_logging("info");

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so stdout only carries the run summary.
fn setup_logging(level: &str) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

fn run(args: &Args) -> Result<(), ChatsheetError> {
    let total_start = Instant::now();

    println!("📦 chatsheet v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("💾 Output:  {}", args.output.display());
    println!();

    // Step 1: Parse
    let parse_start = Instant::now();
    let messages = parse_file(&args.input)?;
    info!(
        messages = messages.len(),
        elapsed = ?parse_start.elapsed(),
        "parsed export"
    );

    // Step 2: Group
    let grouping = group_by_sender(messages);
    let stats = grouping.stats();
    info!(
        runs = stats.run_count,
        senders = stats.sender_count,
        "grouped messages"
    );
    for (sender, idx) in grouping.senders.iter() {
        debug!(sender, idx, "sender index");
    }

    // Step 3: Render and write
    let write_start = Instant::now();
    write_html(&grouping, &args.input, &args.output, &Template::default())?;
    info!(elapsed = ?write_start.elapsed(), "wrote page");

    let total_time = total_start.elapsed();

    println!("✅ Done! Output saved to {}", args.output.display());
    println!();
    println!("📊 Summary:");
    println!("   Messages:  {}", stats.message_count);
    println!("   Runs:      {}", stats.run_count);
    println!("   Senders:   {}", stats.sender_count);
    println!("   Per run:   {:.1}", stats.messages_per_run());
    println!();
    println!("⚡ Time: {:.2}s", total_time.as_secs_f64());

    Ok(())
}
