use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use domain_checker::checker::{self, CheckerConfig};

#[derive(Parser)]
#[command(name = "domain-checker")]
#[command(
    about = "Check domains against a blocklist, including subdomains",
    long_about = "Reads a count and that many blocked domains, then a count and that many \
                  queries. Prints Bad for every query that is blocked or lies under a \
                  blocked domain, Good otherwise."
)]
struct Args {
    /// Read input from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Args> for CheckerConfig {
    fn from(args: Args) -> Self {
        Self { input: args.input }
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG overrides the -v flags when set.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    // Verdicts own stdout, so logs go to stderr.
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose);

    match checker::run(&args.into()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
