use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fieldopt::cli_app::{handle_command, Cli};
use fieldopt::config::Config;
use fieldopt::ApiError;

/// `RUST_LOG` (or `warn`) with `fieldopt=debug` added when verbose
fn build_filter(env_filter: Option<&str>, verbose: bool) -> EnvFilter {
    let mut filter = env_filter
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    if verbose {
        if let Ok(directive) = "fieldopt=debug".parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

fn setup_logging(verbose: bool) {
    let env_filter = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(build_filter(env_filter.as_deref(), verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: &Cli) -> Result<String, ApiError> {
    let config = Config::load_or_create(
        &Config::default_path()?,
        std::io::stdin().lock(),
        std::io::stdout(),
        |key| std::env::var(key).ok(),
    )?;
    let api = config.build_api()?;
    handle_command(cli, &api).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(&cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
