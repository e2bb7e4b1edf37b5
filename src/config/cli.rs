use crate::config::settings::{Settings, SourceSelection};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "vacancy-stats")]
#[command(about = "Average programmer salaries on HeadHunter and SuperJob")]
pub struct CliArgs {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Comma separated languages, overrides the settings file
    #[arg(long, env = "LANGUAGES", value_delimiter = ',')]
    pub languages: Option<Vec<String>>,

    /// SuperJob application key (X-Api-App-Id)
    #[arg(long, env = "SUPERJOB_SECRET_KEY", hide_env_values = true)]
    pub superjob_secret_key: Option<String>,

    /// Job sites to query
    #[arg(long, value_enum, default_value_t = SourceSelection::All)]
    pub source: SourceSelection,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    /// Defaults, then the settings file, then flags and their environment fallbacks.
    pub fn resolve_settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("Loading settings from: {}", path.display());
                Settings::from_file(path)?
            }
            None => Settings::default(),
        };

        if let Some(languages) = &self.languages {
            settings.languages = languages
                .iter()
                .map(|language| language.trim().to_string())
                .filter(|language| !language.is_empty())
                .collect();
        }

        if let Some(secret_key) = &self.superjob_secret_key {
            settings.superjob.secret_key = Some(secret_key.clone());
        }

        Ok(settings)
    }
}
