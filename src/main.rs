//! Illustration CLI
//!
//! Projects a single illustration, either from a wizard JSON request or from
//! a catalog product plus a few client details.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use illustration_engine::{
    assumptions::{ActuarialParameters, ProductCatalog, DEFAULT_PARAMETERS_PATH},
    projection::YieldMethod,
    report::write_projection_csv,
    request::{load_request, validate, ClientInfo, Gender, HealthClass, IllustrationRequest, SmokerStatus},
    IllustrationEngine, IllustrationResult,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum YieldArg {
    Approximate,
    CashFlow,
}

#[derive(Debug, Parser)]
#[command(name = "illustrate", about = "Project a life insurance illustration")]
struct Args {
    /// Wizard JSON request to illustrate
    #[arg(long, conflicts_with = "product")]
    request: Option<PathBuf>,

    /// Catalog product id for a quick quote (e.g. wl-100)
    #[arg(long, requires_all = ["coverage", "premium"])]
    product: Option<String>,

    #[arg(long, default_value_t = 35)]
    age: u8,

    #[arg(long)]
    coverage: Option<f64>,

    #[arg(long)]
    premium: Option<f64>,

    #[arg(long, default_value_t = 100)]
    end_age: u8,

    #[arg(long)]
    smoker: bool,

    /// Actuarial parameters JSON (defaults to data/parameters.json when present)
    #[arg(long)]
    parameters: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "approximate")]
    yield_method: YieldArg,

    /// Project malformed requests instead of rejecting them
    #[arg(long)]
    permissive: bool,

    /// Ledger CSV output path
    #[arg(long, default_value = "illustration_ledger.csv")]
    output: PathBuf,

    /// Also write the full illustration result as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    #[arg(long, default_value = "advisor")]
    author: String,
}

fn load_parameters(path: Option<&Path>) -> Result<ActuarialParameters> {
    match path {
        Some(path) => ActuarialParameters::from_json_path(path)
            .with_context(|| format!("loading parameters from {}", path.display())),
        None if Path::new(DEFAULT_PARAMETERS_PATH).exists() => {
            log::info!("using actuarial parameters from {}", DEFAULT_PARAMETERS_PATH);
            ActuarialParameters::from_json_path(DEFAULT_PARAMETERS_PATH)
                .with_context(|| format!("loading parameters from {}", DEFAULT_PARAMETERS_PATH))
        }
        None => Ok(ActuarialParameters::default()),
    }
}

fn build_request(args: &Args) -> Result<IllustrationRequest> {
    if let Some(path) = &args.request {
        return load_request(path).with_context(|| format!("loading request from {}", path.display()));
    }

    let Some(product_id) = &args.product else {
        bail!("either --request or --product is required");
    };

    let catalog = ProductCatalog::default();
    let product = catalog.get(product_id).with_context(|| {
        let known: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        format!("unknown product id: {} (available: {})", product_id, known.join(", "))
    })?;

    let coverage = args.coverage.context("--coverage is required with --product")?;
    let premium = args.premium.context("--premium is required with --product")?;
    if !product.is_available(args.age, coverage) {
        log::warn!(
            "{} is outside product limits for age {} and coverage {:.0}",
            product.name,
            args.age,
            coverage
        );
    }

    let client = ClientInfo {
        name: "Quick Quote".to_string(),
        age: args.age,
        gender: Gender::Male,
        smoker_status: if args.smoker { SmokerStatus::Smoker } else { SmokerStatus::NonSmoker },
        health_class: HealthClass::Standard,
        state: "NY".to_string(),
    };
    Ok(product.request_for(client, coverage, premium, args.end_age))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let request = build_request(&args)?;
    if !args.permissive {
        validate(&request).context("request failed validation (use --permissive to project anyway)")?;
    }

    let yield_method = match args.yield_method {
        YieldArg::Approximate => YieldMethod::Approximate,
        YieldArg::CashFlow => YieldMethod::CashFlowIrr,
    };
    let engine = IllustrationEngine::new(load_parameters(args.parameters.as_deref())?)
        .with_yield_method(yield_method);

    let id = format!("ILL-{}", chrono::Utc::now().format("%Y%m%d%H%M%S"));
    let result = IllustrationResult::new(id, request, &engine, args.author.clone());

    println!("Illustration {}", result.id);
    println!("  Client: {} (age {})", result.request.client_info.name, result.request.client_info.age);
    println!("  Product: {} ({})", result.request.product_name, result.request.product_type);
    println!("  Coverage: ${:.0}  Premium: ${:.0} (${:.2} {})",
        result.request.coverage_amount,
        result.request.premium_amount,
        result.request.modal_premium(),
        result.request.premium_mode.as_str(),
    );
    println!();

    println!("{:>4} {:>4} {:>10} {:>12} {:>12} {:>12} {:>12}",
        "Year", "Age", "Premium", "Cumulative", "Guaranteed", "Current", "Death Ben");
    println!("{}", "-".repeat(74));
    for row in result.projections.iter().take(20) {
        println!("{:>4} {:>4} {:>10.0} {:>12.0} {:>12.0} {:>12.0} {:>12.0}",
            row.policy_year,
            row.age,
            row.premium_paid,
            row.cumulative_premiums,
            row.cash_value.guaranteed,
            row.cash_value.current,
            row.death_benefit,
        );
    }
    if result.projections.len() > 20 {
        println!("... ({} more years)", result.projections.len() - 20);
    }

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_projection_csv(BufWriter::new(file), &result.projections, &result.request.options)?;
    println!("\nFull ledger written to: {}", args.output.display());

    if let Some(path) = &args.json {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &result)?;
        println!("Illustration JSON written to: {}", path.display());
    }

    let summary = &result.summary;
    println!("\nSummary:");
    println!("  Total Premiums Paid: ${:.0}", summary.total_premiums_paid);
    println!("  Cash Value at 65: ${:.0}", summary.cash_value_at_65);
    println!("  Death Benefit at 65: ${:.0}", summary.death_benefit_at_65);
    println!("  Final Cash Value: ${:.0}", summary.cash_value_at_100);
    println!("  Internal Rate of Return: {:.2}%", summary.internal_rate_of_return);
    match summary.break_even_year {
        Some(year) => println!("  Break-even Year: {}", year),
        None => println!("  Break-even Year: never"),
    }

    Ok(())
}
