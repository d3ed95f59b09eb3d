use anyhow::{Context, Result, bail};
use assistant::{AssistantConfig, ChatAssistant, PreparedPrompts};
use clap::{Parser, Subcommand};
use colored::Colorize;
use intent::Intent;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// ReelChat - conversational movie recommendation context builder
#[derive(Parser)]
#[command(name = "reel-chat")]
#[command(about = "Builds prompt-ready movie context for chat questions", long_about = None)]
struct Cli {
    /// Directory holding the catalog snapshot (popular.json, genres.json, ...)
    #[arg(short, long, default_value = "data/sample")]
    data_dir: PathBuf,

    /// Optional JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// User id used for the chat session
    #[arg(short, long, default_value = "local")]
    user: String,

    /// Display name used in the prompts
    #[arg(long)]
    name: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the movie context for one question
    Ask {
        #[arg(long, short)]
        question: String,

        /// Also print the system and user prompts
        #[arg(long)]
        prompts: bool,
    },

    /// Show how a question is classified
    Classify {
        #[arg(long, short)]
        question: String,
    },

    /// Interactive session over stdin
    Chat,

    /// Build many contexts in parallel and report latency
    Benchmark {
        /// Number of questions to build contexts for
        #[arg(long, default_value = "1000")]
        requests: usize,
    },
}

const BENCHMARK_QUESTIONS: &[&str] = &[
    "Any good rom-coms?",
    "Recommend a horror movie",
    "What's coming out soon?",
    "What's playing in theaters?",
    "What's trending right now?",
    "Show me the highest rated films",
    "Something funny for the kids",
    "What should I watch tonight?",
    "I want a sci-fi adventure",
];

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Classification needs no catalog
    if let Commands::Classify { question } = &cli.command {
        return handle_classify(question);
    }

    let config = match &cli.config {
        Some(path) => AssistantConfig::load(path)?,
        None => AssistantConfig::default(),
    };

    println!("Loading catalog snapshot from {}...", cli.data_dir.display());
    let start = Instant::now();
    let assistant = ChatAssistant::from_dir(&cli.data_dir, config).context("Failed to load catalog snapshot")?;
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        assistant.snapshot().catalog.total_len(),
        start.elapsed()
    );

    let name = cli.name.as_deref();
    match cli.command {
        Commands::Ask { question, prompts } => handle_ask(&assistant, &cli.user, name, &question, prompts),
        Commands::Classify { .. } => Ok(()),
        Commands::Chat => handle_chat(&assistant, &cli.user, name).await,
        Commands::Benchmark { requests } => handle_benchmark(&assistant, requests),
    }
}

/// Handle the 'classify' command
fn handle_classify(question: &str) -> Result<()> {
    let intent = Intent::classify(question);
    println!("{}", format!("Question: {question}").bold().blue());
    match intent {
        Intent::Genre(filter) => {
            println!("{}Genre request: {}", "• ".green(), filter.label());
            if filter.prefer_both {
                println!("{}Movies with both genres rank first", "• ".green());
            }
        }
        Intent::Category(bucket) => println!("{}Category request: {:?}", "• ".cyan(), bucket),
        Intent::General => println!("{}General recommendation", "• ".yellow()),
    }
    Ok(())
}

/// Handle the 'ask' command
fn handle_ask(
    assistant: &ChatAssistant,
    user: &str,
    name: Option<&str>,
    question: &str,
    show_prompts: bool,
) -> Result<()> {
    let prepared = assistant.prepare(user, name, question);
    print_prepared(&prepared, show_prompts);
    Ok(())
}

/// Handle the 'chat' command
///
/// Each line is a question. A line starting with `assistant:` is recorded
/// as the model's reply instead, so multi-turn history can be exercised
/// without a model.
async fn handle_chat(assistant: &ChatAssistant, user: &str, name: Option<&str>) -> Result<()> {
    let sweeper = assistant.spawn_session_sweeper();
    println!(
        "{}",
        "Type a question, 'assistant: <reply>' to record a reply, or 'quit'.".bold()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }
        if let Some(reply) = line.strip_prefix("assistant:") {
            assistant.record_reply(user, reply.trim());
            println!("{} Reply recorded", "✓".green());
            continue;
        }

        let prepared = assistant.prepare(user, name, line);
        print_prepared(&prepared, false);
    }

    sweeper.abort();
    info!("Chat session for {} ended", user);
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(assistant: &ChatAssistant, requests: usize) -> Result<()> {
    if requests == 0 {
        bail!("Benchmark needs at least one request");
    }

    let mut rng = rand::rng();
    let questions: Vec<&str> = (0..requests)
        .filter_map(|_| BENCHMARK_QUESTIONS.choose(&mut rng).copied())
        .collect();

    let snapshot = assistant.snapshot();
    let builder = assistant::ContextBuilder::new(assistant.config().limits);

    let wall = Instant::now();
    let mut timings: Vec<Duration> = questions
        .par_iter()
        .map(|question| {
            let start = Instant::now();
            let text = builder.build(&snapshot.catalog, &snapshot.genres, question, &snapshot.favorites);
            std::hint::black_box(text);
            start.elapsed()
        })
        .collect();
    let wall = wall.elapsed();

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f32 / wall.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Wall time: {:?}", wall);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} contexts/second", throughput);

    Ok(())
}

/// Helper function to print a prepared turn
fn print_prepared(prepared: &PreparedPrompts, show_prompts: bool) {
    println!("{}", format!("Movie context ({}):", prepared.shape).bold().blue());
    println!("{}", prepared.movie_context);

    if show_prompts {
        println!();
        println!("{}", "System prompt:".bold().green());
        println!("{}", prepared.system_prompt);
        println!();
        println!("{}", "User prompt:".bold().green());
        println!("{}", prepared.user_prompt);
    }
}
