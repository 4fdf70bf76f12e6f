use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use debrief::{
    AnalysisOptions, AnalysisReport, Tier, TicketConfig, analyze_for_ticket_with_options,
    analyze_with_options, write_json,
};

#[derive(Parser)]
#[command(name = "debrief")]
#[command(author, version, about = "Meeting transcript analysis engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a meeting transcript
    Analyze {
        /// Input transcript file (plain text)
        #[arg(short, long)]
        input: PathBuf,

        /// Tier selecting length ceilings (basic, ai, enterprise)
        #[arg(short, long, default_value = "basic")]
        tier: Tier,

        /// Restrict the analysis to one ticket id (e.g. PROJ-45)
        #[arg(long)]
        ticket: Option<String>,

        /// Output file for the analysis record (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for the human-readable report (text)
        #[arg(long)]
        human_readable: Option<PathBuf>,

        /// Also match the space-separated "PROJECT 123" ticket form
        #[arg(long)]
        separated_tickets: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            tier,
            ticket,
            output,
            human_readable,
            separated_tickets,
            verbose,
        } => {
            setup_logging(verbose);
            run_analyze(
                input,
                tier,
                ticket,
                output,
                human_readable,
                separated_tickets,
            )
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn run_analyze(
    input: PathBuf,
    tier: Tier,
    ticket: Option<String>,
    output: Option<PathBuf>,
    human_readable: Option<PathBuf>,
    separated_tickets: bool,
) -> Result<()> {
    info!("Loading transcript from {:?}", input);
    let transcript = std::fs::read_to_string(&input)
        .with_context(|| format!("Failed to read transcript: {:?}", input))?;

    let options = AnalysisOptions {
        tier: tier.config(),
        tickets: TicketConfig {
            match_separated_format: separated_tickets,
            ..TicketConfig::default()
        },
        ..AnalysisOptions::default()
    };

    if let Some(ticket_id) = ticket {
        let view = analyze_for_ticket_with_options(&transcript, &ticket_id, &options)
            .context("Analysis failed")?;
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let analysis = analyze_with_options(&transcript, &options).context("Analysis failed")?;

    info!(
        "Analyzed {} words: {} tickets, {} actions, {} decisions, {} participants",
        analysis.word_count,
        analysis.ticket_mentions.len(),
        analysis.action_items.len(),
        analysis.key_decisions.len(),
        analysis.participants.len()
    );

    let report = AnalysisReport::new(&analysis);
    print!("{}", report.format());

    if let Some(path) = output {
        write_json(&analysis, &path)?;
        info!("Analysis written to {:?}", path);
    }
    if let Some(path) = human_readable {
        report.write_file(&path)?;
        info!("Report written to {:?}", path);
    }

    Ok(())
}
