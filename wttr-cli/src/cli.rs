use std::{io::Write, path::PathBuf};

use anyhow::Context;
use chrono::{Local, Timelike};
use clap::Parser;
use tracing::info;
use wttr_core::{Config, ReportOptions, WeatherProvider, fetch_report, provider_from_config};

/// Weather for a Waybar custom module, from wttr.in.
#[derive(Debug, Parser)]
#[command(name = "wttr-bar", version)]
pub struct Cli {
    /// URL returning wttr.in `format=j1` JSON; overrides the config file.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Read settings from this file instead of the platform config dir.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbosity of the stderr log (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        Ok(config.with_endpoint_override(self.endpoint.clone()))
    }

    /// Fetch, format and print one JSON line to `out`.
    pub async fn run(self, out: &mut impl Write) -> anyhow::Result<()> {
        let config = self.load_config().context("Error loading configuration")?;
        let provider = provider_from_config(&config);
        let hour = Local::now().hour();
        let options = ReportOptions::new(hour).with_lookback(config.lookback_hours);

        info!(endpoint = %config.endpoint, hour = options.current_hour, "fetching weather");
        emit(&provider, options, out).await
    }
}

/// Writes nothing to `out` unless the whole report was built.
async fn emit<P, W>(provider: &P, options: ReportOptions, out: &mut W) -> anyhow::Result<()>
where
    P: WeatherProvider + ?Sized,
    W: Write + ?Sized,
{
    let output = fetch_report(provider, options)
        .await
        .context("Error building weather report")?;
    let line = output.to_json_line()?;

    writeln!(out, "{line}").context("Error writing output")?;
    out.flush().context("Error writing output")?;
    Ok(())
}
