//! Run illustrations for a CSV batch of requests
//!
//! Outputs one summary row per request

use anyhow::{Context, Result};
use clap::Parser;
use illustration_engine::{
    assumptions::ActuarialParameters,
    report::write_summary_csv,
    request::load_requests_csv,
    IllustrationEngine, IllustrationRunner,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Project a batch of illustration requests in parallel")]
struct Args {
    /// CSV batch of illustration requests
    #[arg(long, default_value = "data/requests/batch.csv")]
    input: PathBuf,

    /// Summary CSV output path
    #[arg(long, default_value = "batch_summary.csv")]
    output: PathBuf,

    /// Actuarial parameters JSON
    #[arg(long)]
    parameters: Option<PathBuf>,

    /// Project malformed requests instead of rejecting them
    #[arg(long)]
    permissive: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading requests from {}...", args.input.display());
    let requests = load_requests_csv(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;
    println!("Loaded {} requests in {:?}", requests.len(), start.elapsed());

    let parameters = match &args.parameters {
        Some(path) => ActuarialParameters::from_json_path(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => ActuarialParameters::default(),
    };
    let runner = IllustrationRunner::new(IllustrationEngine::new(parameters)).strict(!args.permissive);

    let proj_start = Instant::now();
    let outputs = runner.run_batch(&requests);
    println!("Illustrations complete in {:?}", proj_start.elapsed());

    let mut summaries = Vec::with_capacity(outputs.len());
    for (i, (request, output)) in requests.iter().zip(outputs).enumerate() {
        let label = format!("{}:{}:{}", i + 1, request.client_info.name, request.product_id);
        match output {
            Ok(output) => summaries.push((label, output.summary)),
            Err(err) => eprintln!("  skipped {}: {}", label, err),
        }
    }

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_summary_csv(BufWriter::new(file), &summaries)?;
    println!("Output written to {}", args.output.display());

    println!("\nBatch Summary:");
    println!("  Illustrated: {}", summaries.len());
    println!("  Rejected: {}", requests.len() - summaries.len());
    let breaking_even = summaries.iter().filter(|(_, s)| s.break_even_year.is_some()).count();
    println!("  Reaching break-even: {}", breaking_even);

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
