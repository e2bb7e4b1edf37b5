use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{
    validate_no_unresolved_placeholder, validate_non_empty_string, validate_positive_number,
    validate_range, validate_required_field, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_LANGUAGES: [&str; 9] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "Go",
    "TypeScript",
];

/// Everything a report run needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub languages: Vec<String>,
    pub headhunter: HeadHunterSettings,
    pub superjob: SuperJobSettings,
    pub http: HttpSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadHunterSettings {
    pub base_url: String,
    pub title: String,
    pub professional_role: String,
    pub area: String,
    pub parent_area: String,
    pub period_days: u32,
    pub only_with_salary: bool,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperJobSettings {
    pub base_url: String,
    pub title: String,
    pub catalogue: String,
    pub town: String,
    pub no_agreement: bool,
    pub count: Option<u32>,
    pub secret_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Which job sites a run queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SourceSelection {
    #[default]
    All,
    #[cfg_attr(feature = "cli", value(name = "headhunter"))]
    HeadHunter,
    #[cfg_attr(feature = "cli", value(name = "superjob"))]
    SuperJob,
}

impl SourceSelection {
    pub fn includes_headhunter(self) -> bool {
        matches!(self, SourceSelection::All | SourceSelection::HeadHunter)
    }

    pub fn includes_superjob(self) -> bool {
        matches!(self, SourceSelection::All | SourceSelection::SuperJob)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            headhunter: HeadHunterSettings::default(),
            superjob: SuperJobSettings::default(),
            http: HttpSettings::default(),
        }
    }
}

impl Default for HeadHunterSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.hh.ru/vacancies".to_string(),
            title: "HeadHunter Moscow".to_string(),
            professional_role: "96".to_string(),
            area: "1".to_string(),
            parent_area: "113".to_string(),
            period_days: 30,
            only_with_salary: true,
            per_page: None,
        }
    }
}

impl Default for SuperJobSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.superjob.ru/2.0/vacancies".to_string(),
            title: "SuperJob Moscow".to_string(),
            catalogue: "48".to_string(),
            town: "Москва".to_string(),
            no_agreement: true,
            count: None,
            secret_key: None,
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: format!("vacancy-stats/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses settings, filling anything missing with defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StatsError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StatsError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Validates only what the selected sources need.
    pub fn validate_for(&self, selection: SourceSelection) -> Result<()> {
        if self.languages.is_empty() {
            return Err(StatsError::InvalidConfigValueError {
                field: "languages".to_string(),
                value: String::new(),
                reason: "At least one language is required".to_string(),
            });
        }
        for language in &self.languages {
            validate_non_empty_string("languages", language)?;
        }

        validate_positive_number("http.timeout_seconds", self.http.timeout_seconds, 1)?;

        if selection.includes_headhunter() {
            validate_url("headhunter.base_url", &self.headhunter.base_url)?;
            if let Some(per_page) = self.headhunter.per_page {
                validate_range("headhunter.per_page", per_page, 1, 100)?;
            }
        }

        if selection.includes_superjob() {
            validate_url("superjob.base_url", &self.superjob.base_url)?;
            if let Some(count) = self.superjob.count {
                validate_range("superjob.count", count, 1, 100)?;
            }
            let secret_key = validate_required_field("superjob.secret_key", &self.superjob.secret_key)?;
            validate_non_empty_string("superjob.secret_key", secret_key)?;
            validate_no_unresolved_placeholder("superjob.secret_key", secret_key)?;
        }

        Ok(())
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.validate_for(SourceSelection::All)
    }
}
