//! The quick-commerce consumer survey in the terminal, posting to a live
//! endpoint.
//!
//! Run with: cargo run -p survey-wizard-ratatui --example quick_commerce -- --endpoint http://localhost:8000/submit-response

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use example_surveys::{CATEGORIES_ERROR, PLATFORMS_ERROR, PRICE_ERROR, PRICE_SENSITIVITY};
use survey_wizard::{MemoryLocation, Wizard};
use survey_wizard_ratatui::{RatatuiApp, RatatuiError, TerminalSurface};
use survey_wizard_reqwest::{ReqwestSubmitter, SUBMIT_PATH};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Quick-commerce consumer survey")]
struct Args {
    /// Where the finished survey is posted.
    #[arg(long, default_value_t = format!("http://127.0.0.1:8000{SUBMIT_PATH}"))]
    endpoint: String,

    /// Give up on the request after this many seconds. Waits indefinitely
    /// when not given.
    #[arg(long)]
    timeout: Option<u64>,

    /// Log file; the terminal is taken by the UI.
    #[arg(long, default_value = "survey-wizard.log")]
    log_file: PathBuf,

    /// Title on the landing page.
    #[arg(long, default_value = "Quick Commerce Insights")]
    title: String,
}

fn submitter(args: &Args) -> anyhow::Result<ReqwestSubmitter> {
    let mut builder = ReqwestSubmitter::builder(&args.endpoint);
    if let Some(secs) = args.timeout {
        builder = builder.with_timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log = File::create(&args.log_file)
        .with_context(|| format!("Failed to create log file {}", args.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log))
        .with_ansi(false)
        .init();

    let submitter = submitter(&args)?;

    let (min, max) = PRICE_SENSITIVITY;
    let surface = TerminalSurface::new()
        .with_indicator(PLATFORMS_ERROR, "Please select at least one platform.")
        .with_indicator(CATEGORIES_ERROR, "Please select at least one category.")
        .with_indicator(
            PRICE_ERROR,
            format!("Please enter a number between {min} and {max}."),
        );

    let mut wizard = Wizard::new(
        example_surveys::quick_commerce(),
        surface,
        MemoryLocation::new(),
        submitter,
    )?;
    wizard.start()?;

    match RatatuiApp::new().with_title(args.title).run(&mut wizard).await {
        Ok(()) => println!("Thanks for taking the survey!"),
        Err(RatatuiError::Cancelled) => println!("Survey cancelled."),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_timeout_unless_asked() {
        let args = Args::try_parse_from(["quick_commerce"]).unwrap();
        assert_eq!(args.timeout, None);
        assert_eq!(submitter(&args).unwrap().timeout(), None);

        let args = Args::try_parse_from(["quick_commerce", "--timeout", "5"]).unwrap();
        assert_eq!(submitter(&args).unwrap().timeout(), Some(Duration::from_secs(5)));
    }
}
