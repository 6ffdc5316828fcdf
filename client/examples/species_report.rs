use std::env;
use std::process;

use anyhow::{Context, Result, bail};
use clover_client::protocol::UsagePath;
use clover_client::{ClientConfig, DEFAULT_BASE_URL, SharedData, UsageClient, load_reference_data};
use clover_stats::{SpeciesBreakdown, Tab, entity_chip};
use tracing_subscriber::EnvFilter;

fn usage() -> ! {
    eprintln!("Usage: species_report <format/year/month/day> <species> [base-url]");
    eprintln!("Example: species_report gen9ou/2024/05/17 garchomp");
    process::exit(1);
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let (Some(day), Some(species)) = (args.next(), args.next()) else {
        usage();
    };
    let base_url = args.next().unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let Some(path) = UsagePath::from_segments(day.split('/').filter(|s| !s.is_empty())) else {
        bail!("{} is deeper than a day", day);
    };

    let client = UsageClient::new(ClientConfig::with_base_url(base_url))?;
    let shared = SharedData::new();
    let (report, snapshot) = tokio::join!(
        load_reference_data(&client, &shared),
        client.stats(&path)
    );
    if !report.is_complete() {
        eprintln!("Missing reference data: {:?}", report.failed);
    }

    let snapshot = snapshot?;
    let stats = snapshot
        .species(&species)
        .with_context(|| format!("No usage recorded for {} under {}", species, path))?;

    let data = shared.snapshot();
    let total_teams = snapshot.total_teams().unwrap_or_default();
    let chip = entity_chip(clover_stats::EntityKind::Species, &species, &data);

    println!("=== {} ===", chip.label);
    if let Some(tooltip) = &chip.tooltip {
        println!("{}", tooltip);
    }
    println!(
        "{} on {} of {} teams, {} wins\n",
        data.format_name(path.format().unwrap_or_default()),
        stats.usage,
        total_teams,
        stats.win
    );

    let breakdown = SpeciesBreakdown::new(stats);
    for tab in Tab::ALL {
        let table = breakdown.table(tab);
        if table.is_empty() {
            continue;
        }
        println!("── {} ──", tab);
        println!("{}\n", table.page().display(&data));
    }

    Ok(())
}
