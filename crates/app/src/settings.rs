//! Settings for the `despesa` binary.
//!
//! Layered, last wins: `config/despesa.toml` (or `--config`), `DESPESA_*`
//! environment variables, then command-line flags.
use chrono_tz::Tz;
use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/despesa";

/// How each processed message is written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Chat confirmation or error text.
    #[default]
    Reply,
    /// One JSON document per line.
    Json,
    /// Spreadsheet rows (identifier, amount, category, date).
    Csv,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub level: String,
    pub timezone: String,
    pub format: OutputFormat,
    pub submitter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            timezone: "America/Sao_Paulo".to_string(),
            format: OutputFormat::Reply,
            submitter: "local".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "despesa", version)]
#[command(about = "Turn free-text expense messages into structured records")]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    pub config: Option<String>,
    /// Override log level (e.g. debug).
    #[arg(long)]
    pub level: Option<String>,
    /// Override timezone used to date undated messages (IANA name).
    #[arg(long)]
    pub timezone: Option<String>,
    /// Override output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Identifier written in the first spreadsheet column.
    #[arg(long)]
    pub submitter: Option<String>,
    /// Print the greeting text and exit.
    #[arg(long)]
    pub start_text: bool,
    /// Print the usage help text and exit.
    #[arg(long)]
    pub help_text: bool,
    /// Messages to process; read one per line from stdin when omitted.
    pub messages: Vec<String>,
}

impl Settings {
    pub fn load(args: &Args) -> Result<Self> {
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut builder = config::Config::builder();
        builder = builder.add_source(config::File::with_name(config_path).required(false));
        builder = builder.add_source(config::Environment::with_prefix("DESPESA"));
        let mut settings: Settings = builder.build()?.try_deserialize()?;

        if let Some(level) = &args.level {
            settings.level = level.clone();
        }
        if let Some(timezone) = &args.timezone {
            settings.timezone = timezone.clone();
        }
        if let Some(format) = args.format {
            settings.format = format;
        }
        if let Some(submitter) = &args.submitter {
            settings.submitter = submitter.clone();
        }

        Ok(settings)
    }

    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| AppError::Timezone(self.timezone.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["despesa", "--config", "does/not/exist"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_without_config_file() {
        let settings = Settings::load(&args(&[])).unwrap();
        assert_eq!(settings.level, "info");
        assert_eq!(settings.format, OutputFormat::Reply);
        assert_eq!(settings.submitter, "local");
        assert_eq!(settings.tz().unwrap(), chrono_tz::America::Sao_Paulo);
    }

    #[test]
    fn flags_override_defaults() {
        let settings = Settings::load(&args(&[
            "--format",
            "csv",
            "--timezone",
            "Europe/Lisbon",
            "--submitter",
            "123",
            "Gastei R$20 no mercado",
        ]))
        .unwrap();
        assert_eq!(settings.format, OutputFormat::Csv);
        assert_eq!(settings.submitter, "123");
        assert_eq!(settings.tz().unwrap(), chrono_tz::Europe::Lisbon);
    }

    #[test]
    fn positional_messages_are_collected() {
        let parsed = args(&["R$1 no bar", "R$2 na feira"]);
        assert_eq!(parsed.messages, vec!["R$1 no bar", "R$2 na feira"]);
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        let settings = Settings::load(&args(&["--timezone", "Mars/Olympus"])).unwrap();
        assert!(matches!(settings.tz(), Err(AppError::Timezone(_))));
    }
}
