use clap::Parser;
use futures::future::join_all;
use nodeval_domain::CliOverrides;
use report::SeedReport;
use std::process::ExitCode;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod report;

#[derive(Parser)]
#[command(name = "nodeval")]
#[command(version)]
#[command(about = "Validate candidate cluster nodes before admitting them")]
struct Cli {
    /// Seed hosts as host[:port]; replaces the configured seeds
    seeds: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Connect timeout in milliseconds
    #[arg(short = 't', long)]
    timeout_ms: Option<u64>,

    /// User for authentication
    #[arg(short = 'u', long)]
    user: Option<String>,

    /// Credential sent with the user
    #[arg(short = 'p', long, env = "NODEVAL_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print one JSON document per seed
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        seeds: cli.seeds.clone(),
        connect_timeout_ms: cli.timeout_ms,
        user: cli.user.clone(),
        password: cli.password.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting nodeval v{}", env!("CARGO_PKG_VERSION"));

    let hosts = config.cluster.seed_hosts()?;
    let credentials = config.cluster.credentials();
    let connect_timeout = config.cluster.connect_timeout();
    let use_cases = di::UseCases::new();

    // Seeds are independent; each one still walks its own aliases sequentially.
    let results = join_all(hosts.iter().map(|host| {
        use_cases
            .validate_node
            .execute(host, credentials.as_ref(), connect_timeout)
    }))
    .await;

    let mut failures = 0usize;
    for (host, result) in hosts.iter().zip(results) {
        let report = SeedReport::new(host, result);
        if !report.is_ok() {
            failures += 1;
        }
        if cli.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}", report.render_text());
        }
    }

    if failures > 0 {
        warn!(
            failures,
            total = hosts.len(),
            "Some seeds failed validation"
        );
        return Ok(ExitCode::FAILURE);
    }

    info!(total = hosts.len(), "All seeds validated");
    Ok(ExitCode::SUCCESS)
}
