mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tone_reader::config::ToneConfig;
use tone_reader::cues::{extract_highlights, Cue};
use tone_reader::ranking::{EmotionRanker, FixedRanker, HttpRanker};
use tone_reader::{analyze, format_float, format_percent, AnalysisResult, FriendlyResult};
use tracing::info;

#[derive(Parser)]
#[command(name = "tone-reader", about = "Message tone interpreter")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Analyze(AnalyzeArgs),
    Highlights(HighlightsArgs),
    Serve(ServeArgs),
    Config(ConfigArgs),
}

#[derive(Args, Debug, Clone)]
struct AnalyzeArgs {
    #[arg(long)]
    text: Option<String>,
    /// Skip the classifier and use a fixed ranking, e.g. `joy=0.6,anger=0.25`.
    #[arg(long)]
    emotions: Option<String>,
    #[arg(long)]
    friendly: bool,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct HighlightsArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct ServeArgs {
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
    #[arg(long)]
    web_root: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct ConfigArgs {
    #[arg(long)]
    write: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let (config, config_path) = ToneConfig::load(cli.config)?;
    if let Some(path) = config_path.as_ref().filter(|path| path.exists()) {
        info!(path = %path.display(), "loaded config");
    }

    match cli.command {
        Command::Analyze(args) => run_analyze(args, &config).await,
        Command::Highlights(args) => run_highlights(args),
        Command::Serve(args) => run_serve(args, config).await,
        Command::Config(args) => run_config(args, &config),
    }
}

async fn run_analyze(args: AnalyzeArgs, config: &ToneConfig) -> Result<(), String> {
    let text = read_text(args.text)?;
    let ranker: Box<dyn EmotionRanker> = match args.emotions.as_deref() {
        Some(spec) => Box::new(FixedRanker::parse(spec).map_err(|err| err.to_string())?),
        None => Box::new(HttpRanker::from_config(config)?),
    };

    let result = analyze(ranker.as_ref(), &text)
        .await
        .map_err(|failure| failure.error)?;

    if args.friendly {
        let friendly = FriendlyResult::from_analysis(&result);
        if args.json {
            return print_json(&friendly);
        }
        print_friendly(&friendly);
    } else {
        if args.json {
            return print_json(&result);
        }
        print_analysis(&result);
    }
    Ok(())
}

fn run_highlights(args: HighlightsArgs) -> Result<(), String> {
    let text = read_text(args.text)?;
    let highlights = extract_highlights(&text);
    if args.json {
        return print_json(&highlights);
    }
    if highlights.is_empty() {
        println!("No cues found.");
    }
    print_highlights(&highlights);
    Ok(())
}

async fn run_serve(args: ServeArgs, config: ToneConfig) -> Result<(), String> {
    let ranker = HttpRanker::from_config(&config)?;
    info!(url = ranker.url(), "emotion ranking endpoint");

    let mut server = config.server;
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }
    if let Some(web_root) = args.web_root {
        server.web_root = web_root;
    }

    server::serve(server, Arc::new(ranker)).await
}

fn run_config(args: ConfigArgs, config: &ToneConfig) -> Result<(), String> {
    match args.write {
        Some(path) => {
            config.write(&path)?;
            println!("Wrote config to {}", path.display());
        }
        None => print!("{}", config.to_toml()?),
    }
    Ok(())
}

fn print_analysis(result: &AnalysisResult) {
    let verdict = &result.social_interpretation;
    match (&result.emotion, result.score) {
        (Some(label), Some(score)) => println!("Emotion: {} ({})", label, format_percent(score)),
        _ => println!("Emotion: none"),
    }
    println!(
        "Tone: {} (confidence {})",
        verdict.tone.label(),
        verdict.confidence.label()
    );
    println!("Explanation: {}", verdict.explanation);
    if let Some(alternatives) = &verdict.alternatives {
        let listed: Vec<String> = alternatives
            .iter()
            .map(|alt| format!("{} {}", alt.emotion_hint, format_float(alt.score, 4)))
            .collect();
        println!("Alternatives: {}", listed.join(" | "));
    }

    if !result.emotions.is_empty() {
        println!("\nRanked emotions:");
        for entry in &result.emotions {
            println!("  {}: {}", entry.label, format_float(entry.score, 4));
        }
    }
    print_highlights(&result.highlights);
    println!("\nNote: {}", verdict.note);
}

fn print_friendly(result: &FriendlyResult) {
    println!("Emotion: {}", result.emotion);
    println!("Confidence: {}", result.confidence.label());
    println!("{}", result.interpretation);
    println!(
        "Tone: {} ({})",
        result.social_interpretation.tone.label(),
        result.social_interpretation.explanation
    );
    print_highlights(&result.highlights);
}

fn print_highlights(highlights: &[Cue]) {
    if highlights.is_empty() {
        return;
    }
    println!("\nCues:");
    for cue in highlights {
        println!("- {} [{:?}]: {}", cue.span, cue.kind, cue.reason);
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize output: {}", err))?;
    println!("{}", payload);
    Ok(())
}

fn read_text(arg: Option<String>) -> Result<String, String> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text.trim().to_string());
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing message text: pass --text or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tone_reader=info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
