use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use indic_itrans::{EngineConfig, MarkerStyle, OutputMode, ScriptId, Segment, Transliterator};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text file (stdin when omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Host settings JSON, e.g. {"devanagari": true, "kannada": false}
    #[arg(short, long)]
    config: Option<String>,

    /// Script to leave untouched (repeatable)
    #[arg(short, long, value_name = "SCRIPT")]
    disable: Vec<ScriptId>,

    /// Output shape
    #[arg(short, long, value_enum, default_value_t = OutputMode::Flat)]
    mode: OutputMode,

    /// How a surviving inherent vowel is written
    #[arg(long, value_enum, default_value_t = MarkerStyle::Subscript)]
    marker: MarkerStyle,

    /// Limit number of lines to process
    #[arg(short, long)]
    limit: Option<usize>,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct SegmentRecord<'a> {
    id: usize,
    segments: &'a [Segment],
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "indic_itrans=debug,itrans=debug" } else { "indic_itrans=info,itrans=info" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}

fn load_config(args: &Args) -> anyhow::Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            EngineConfig::from_json(&json)?
        }
        None => EngineConfig::default(),
    };
    for &id in &args.disable {
        config.set_enabled(id, false);
    }
    config.set_marker_style(args.marker);
    Ok(config)
}

fn read_lines(input: Option<&str>) -> anyhow::Result<Vec<String>> {
    let mut text = String::new();
    match input {
        Some(path) => {
            BufReader::new(File::open(path)?).read_to_string(&mut text)?;
        }
        None => {
            io::stdin().lock().read_to_string(&mut text)?;
        }
    }
    Ok(text.lines().map(str::to_string).collect())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = load_config(&args)?;
    let enabled: Vec<&str> = config.enabled_scripts().map(ScriptId::name).collect();
    debug!(scripts = ?enabled, mode = ?args.mode, marker = ?args.marker, "configuration loaded");

    let mut lines = read_lines(args.input.as_deref())?;
    if let Some(limit) = args.limit {
        lines.truncate(limit);
    }

    info!(lines = lines.len(), "transliterating");
    let start = Instant::now();
    let transliterator = Transliterator::builtin();

    let results: Vec<String> = match args.mode {
        OutputMode::Flat => transliterator.transliterate_batch(&lines, &config),
        OutputMode::Segmented => lines
            .par_iter()
            .enumerate()
            .map(|(id, line)| {
                let segments = transliterator.transliterate_segments(line, &config);
                serde_json::to_string(&SegmentRecord { id, segments: &segments })
            })
            .collect::<Result<Vec<String>, _>>()?,
    };

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::with_capacity(262144, sink);
    for result in &results {
        writeln!(writer, "{}", result)?;
    }
    writer.flush()?;

    let elapsed = start.elapsed();
    info!(
        "Transliteration: {:.2}ms ({:.0} lines/sec)",
        elapsed.as_secs_f64() * 1000.0,
        lines.len() as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );
    if let Some(ref output_path) = args.output {
        info!("Done. Saved to {}", output_path);
    }

    Ok(())
}
