use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use hamlib_fetch::config::VERSION;
use hamlib_fetch::error::{FetchError, exit_code_for};
use hamlib_fetch::{FetchConfig, Fetcher};
use std::path::PathBuf;
use std::process::ExitCode;

/// hamlib-fetch - download the latest Hamlib 4.x Windows build
///
/// Lists the Hamlib releases on GitHub, downloads the hamlib-w64 zip of the
/// newest 4.x release into TARGET_DIR, unpacks it, and renames the unpacked
/// directory to TARGET_DIR/hamlib.
///
/// Examples:
///   hamlib-fetch build/deps     # produces build/deps/hamlib
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about)]
struct Cli {
    /// Directory to download and unpack into (created if missing)
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: PathBuf,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL", hide = true)]
    pub api_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_error(e),
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = FetchConfig::with_api_url(cli.api_url);
    let fetcher = Fetcher::from_config(hamlib_fetch::runtime::RealRuntime, config)?;
    let outcome = fetcher.fetch(&cli.target_dir).await?;

    println!(
        "Hamlib {} unpacked to {}",
        outcome.tag,
        outcome.install_dir.display()
    );
    Ok(())
}

fn usage_error(e: clap::Error) -> ExitCode {
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        e.exit();
    }
    eprint!("{}", e);
    ExitCode::from(FetchError::Usage(e.to_string()).exit_code())
}
