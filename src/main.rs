use anyhow::Result;
use clap::Parser;
use code_chunker::{
    ChunkingConfig, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, PreprocessorRegistry, RunSummary,
    TextSplitter, ingest, process_directory, write_json_report, write_markdown_chunks,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::Level;

/// Split every recognized text file under a directory into overlapping chunks.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to scan
    directory: PathBuf,

    /// Maximum characters per chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Characters of context shared by adjacent chunks
    #[arg(long, default_value_t = DEFAULT_CHUNK_OVERLAP)]
    chunk_overlap: usize,

    /// Separator hierarchy, coarse to fine. Repeat the flag; the last one
    /// must be the empty string (`--separator ''`)
    #[arg(long = "separator", allow_hyphen_values = true)]
    separators: Vec<String>,

    /// Directory that receives the JSON report and Markdown chunks
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Skip files and directories with this exact name (repeatable)
    #[arg(long)]
    exclude: Vec<String>,

    /// Only write the JSON report
    #[arg(long)]
    no_markdown: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Unescape `\n`, `\t` and `\\` so separators can be passed on the command line
fn unescape(raw: &str) -> String {
    raw.replace("\\\\", "\u{0}")
        .replace("\\n", "\n")
        .replace("\\t", "\t")
        .replace('\u{0}', "\\")
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let start_time = Instant::now();

    let mut config = ChunkingConfig::new(args.chunk_size, args.chunk_overlap);
    if !args.separators.is_empty() {
        config = config.with_separators(args.separators.iter().map(|s| unescape(s)));
    }
    let splitter = TextSplitter::new(config)?;

    ingest::check_root(&args.directory)?;
    println!("Scanning directory: {}", args.directory.display());

    let registry = PreprocessorRegistry::new();
    let results = process_directory(&args.directory, &splitter, &registry, &args.exclude)?;
    let summary = RunSummary::from_results(&results);

    println!("\n=== Summary ===");
    println!("Total files processed: {}", summary.files);
    println!("Total chunks created: {}", summary.chunks);

    let report_path = write_json_report(&results, &args.output_dir)?;
    println!("\nResults saved to: {}", report_path.display());

    if !args.no_markdown {
        let (chunks_dir, _) = write_markdown_chunks(&results, &args.output_dir)?;
        println!("Markdown chunks saved to: {}", chunks_dir.display());
    }

    println!("Completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}
