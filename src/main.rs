use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use floorgraph::{
    group_by_date, load_roster, process_transcript, read_transcript_parts, render_extraction,
    ExtractionConfig, InteractionType, PatternLibrary, RenderConfig, Roster, Sentiment,
    TranscriptExtraction,
};

#[derive(Parser)]
#[command(name = "floorgraph")]
#[command(author, version, about = "Floor transcript segmentation and member interaction extraction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract segments and interactions from transcript text files
    Process {
        /// Transcript text files; parts of one session share a date key
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Roster JSON file (array of {member_id, name, district, session_year})
        #[arg(short, long)]
        roster: PathBuf,

        /// Directory for the per-date reports
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Treat every input as a part of this date instead of deriving it from file names
        #[arg(long)]
        date: Option<String>,

        /// Also write a human-readable report per date
        #[arg(long)]
        human_readable: bool,

        /// Prior utterances searched when resolving "the sponsor"
        #[arg(long)]
        sponsor_lookback: Option<usize>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print extraction statistics without writing reports
    Analyze {
        /// Transcript text files
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Roster JSON file
        #[arg(short, long)]
        roster: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            roster,
            output_dir,
            date,
            human_readable,
            sponsor_lookback,
            verbose,
        } => {
            setup_logging(verbose);
            let mut config = ExtractionConfig::from_env();
            if let Some(lookback) = sponsor_lookback {
                config.sponsor_lookback = lookback;
            }
            let render_config = RenderConfig {
                generate_human: human_readable,
                ..Default::default()
            };
            process_inputs(input, roster, output_dir, date, config, render_config).await
        }
        Commands::Analyze {
            input,
            roster,
            verbose,
        } => {
            setup_logging(verbose);
            let extractions = run_extractions(
                input,
                roster,
                None,
                ExtractionConfig::from_env(),
                None,
            )
            .await?;
            for extraction in &extractions {
                print_analysis(extraction);
            }
            Ok(())
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

async fn process_inputs(
    input: Vec<PathBuf>,
    roster: PathBuf,
    output_dir: PathBuf,
    date: Option<String>,
    config: ExtractionConfig,
    render_config: RenderConfig,
) -> Result<()> {
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create directory: {:?}", output_dir))?;

    let extractions = run_extractions(
        input,
        roster,
        date,
        config,
        Some((output_dir, render_config)),
    )
    .await?;

    let interactions: usize = extractions.iter().map(|e| e.interactions.len()).sum();
    info!(
        "Complete: {} dates, {} interactions",
        extractions.len(),
        interactions
    );

    Ok(())
}

/// Run one independent pipeline per date on the blocking pool
async fn run_extractions(
    input: Vec<PathBuf>,
    roster_path: PathBuf,
    date: Option<String>,
    config: ExtractionConfig,
    render: Option<(PathBuf, RenderConfig)>,
) -> Result<Vec<TranscriptExtraction>> {
    info!("Loading roster from {:?}", roster_path);
    let roster: Arc<Roster> =
        Arc::new(load_roster(&roster_path).context("Failed to load roster")?);
    info!("Loaded {} roster entries", roster.len());

    let patterns = Arc::new(PatternLibrary::new()?);
    let config = Arc::new(config);
    let render = Arc::new(render);

    let groups: BTreeMap<String, Vec<PathBuf>> = match date {
        Some(date) => BTreeMap::from([(date, input)]),
        None => group_by_date(&input),
    };

    let mut handles = Vec::with_capacity(groups.len());
    for (date, parts) in groups {
        let roster = Arc::clone(&roster);
        let patterns = Arc::clone(&patterns);
        let config = Arc::clone(&config);
        let render = Arc::clone(&render);

        handles.push(tokio::task::spawn_blocking(move || -> Result<TranscriptExtraction> {
            info!("Processing {} ({} parts)", date, parts.len());
            let text = read_transcript_parts(&parts)?;
            let extraction = process_transcript(&text, &date, &roster, &patterns, &config)
                .with_context(|| format!("Failed to extract {}", date))?;
            if let Some((output_dir, render_config)) = &*render {
                render_extraction(&extraction, output_dir, render_config)?;
            }
            Ok(extraction)
        }));
    }

    let mut extractions = Vec::with_capacity(handles.len());
    for handle in handles {
        extractions.push(handle.await.context("Extraction task panicked")??);
    }

    Ok(extractions)
}

fn print_analysis(extraction: &TranscriptExtraction) {
    println!("Transcript Analysis: {}", extraction.date);
    println!("==================");
    if let Some(session_date) = extraction.session_date {
        println!("Session date: {}", session_date);
    }
    println!("Segments: {}", extraction.segments.len());
    println!("Member segments: {}", extraction.member_segment_count());
    println!(
        "Questions asked: {}",
        extraction.segments.iter().map(|s| s.markers.questions).sum::<usize>()
    );
    println!(
        "Bills mentioned: {}",
        extraction
            .segments
            .iter()
            .filter(|s| s.bill_context.bill_number.is_some())
            .count()
    );
    println!();

    println!("Sentiment");
    println!("---------");
    for sentiment in [
        Sentiment::AmendmentOffer,
        Sentiment::Disagreement,
        Sentiment::Agreement,
        Sentiment::Neutral,
    ] {
        let count = extraction
            .segments
            .iter()
            .filter(|s| s.sentiment == sentiment)
            .count();
        println!("{}: {}", sentiment, count);
    }
    println!();

    println!("Interactions");
    println!("------------");
    for interaction_type in [
        InteractionType::Question,
        InteractionType::Address,
        InteractionType::Response,
    ] {
        let count = extraction
            .interactions
            .iter()
            .filter(|r| r.interaction_type == interaction_type)
            .count();
        println!("{}: {}", interaction_type, count);
    }

    let mut pairs: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for record in &extraction.interactions {
        *pairs
            .entry((record.from_member_name.as_str(), record.to_member_name.as_str()))
            .or_insert(0) += 1;
    }
    let mut pairs: Vec<_> = pairs.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    println!();
    println!("Most frequent pairs");
    println!("-------------------");
    for ((from, to), count) in pairs.iter().take(10) {
        println!("{} -> {}: {}", from, to, count);
    }
    println!();
}
