use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use structopt::StructOpt;
use tracing::*;
use tracing_subscriber::EnvFilter;

use grid_courier::audit::audit_schedule;
use grid_courier::fleet::{CarrierCountStrategy, DEFAULT_REQUESTS_PER_CARRIER};
use grid_courier::grid::GridMap;
use grid_courier::models::DeliveryPlan;
use grid_courier::scheduler::{PlannerConfig, ScheduleBuilder};

#[derive(Debug, StructOpt)]
#[structopt(name = "grid-courier", about = "Plan delivery routes on a grid map")]
struct ClArgs {
    /// Map text file: one row per line, space = road, H = headquarters.
    #[structopt(parse(from_os_str))]
    map: PathBuf,
    /// Request JSON: {"deliveryHeadquarter": {x, y}, "requests": [...]}.
    /// Without deliveryHeadquarter the first H of the map is used.
    #[structopt(parse(from_os_str))]
    requests: PathBuf,
    /// Single carrier named car1.
    #[structopt(long, conflicts_with_all = &["carriers", "per-carrier"])]
    legacy: bool,
    /// Dispatch exactly this many carriers (capped by the request count).
    #[structopt(name = "carriers", long = "carriers", short = "c", conflicts_with = "per-carrier")]
    carriers: Option<usize>,
    /// Requests per carrier for the default heuristic [default: 4].
    #[structopt(name = "per-carrier", long = "per-carrier")]
    per_carrier: Option<usize>,
    /// Print an audit summary instead of the schedule.
    #[structopt(long)]
    summary: bool,
    /// Write the output here instead of stdout.
    #[structopt(long = "output", short = "o", parse(from_os_str))]
    output: Option<PathBuf>,
}

impl ClArgs {
    fn config(&self) -> Result<PlannerConfig> {
        if self.legacy {
            return Ok(PlannerConfig::legacy());
        }
        let strategy = match (self.carriers, self.per_carrier) {
            (Some(n), _) => CarrierCountStrategy::Fixed(n),
            (None, Some(0)) => bail!("--per-carrier must be at least 1"),
            (None, k) => CarrierCountStrategy::Heuristic {
                requests_per_carrier: k.unwrap_or(DEFAULT_REQUESTS_PER_CARRIER),
            },
        };
        Ok(PlannerConfig::default().with_strategy(strategy))
    }
}

/// Plans from file contents and renders the JSON output.
fn plan(args: &ClArgs, map_text: &str, request_text: &str) -> Result<String> {
    let plan: DeliveryPlan = serde_json::from_str(request_text)
        .with_context(|| format!("parsing requests {}", args.requests.display()))?;
    let grid = GridMap::parse(map_text)?;
    if let (Some(marker), Some(given)) = (grid.headquarters_markers().first(), plan.headquarters) {
        if *marker != given {
            warn!(map = ?marker, requests = ?given, "headquarters differs from map marker");
        }
    }

    let config = args.config()?;
    info!(?config, requests = plan.requests.len(), "planning");
    let schedule = ScheduleBuilder::new(config).build_on(&grid, &plan)?;

    let rendered = if args.summary {
        let report = audit_schedule(&schedule);
        if !report.is_valid() {
            error!(violations = report.violations.len(), "schedule failed audit");
        }
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string_pretty(&schedule)?
    };
    Ok(rendered)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = ClArgs::from_args();
    let map_text = fs::read_to_string(&args.map)
        .with_context(|| format!("reading map {}", args.map.display()))?;
    let request_text = fs::read_to_string(&args.requests)
        .with_context(|| format!("reading requests {}", args.requests.display()))?;
    let rendered = plan(&args, &map_text, &request_text)?;

    let mut out: Box<dyn Write> = match args.output.as_ref() {
        Some(path) => Box::new(io::BufWriter::new(fs::File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}
