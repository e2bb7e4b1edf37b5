use crate::adapters::http::build_client;
use crate::adapters::{HeadHunterSource, SuperJobSource};
use crate::config::settings::{Settings, SourceSelection};
use crate::core::statistics::collect_statistics;
use crate::domain::model::LanguageStatistics;
use crate::domain::ports::VacancySource;
use crate::report::render_report;
use crate::utils::error::Result;
use reqwest::Client;

/// Statistics of one job site, ready to be rendered under `title`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub title: String,
    pub statistics: LanguageStatistics,
}

pub async fn collect_section<S: VacancySource + ?Sized>(
    title: &str,
    languages: &[String],
    source: &S,
) -> Result<ReportSection> {
    let statistics = collect_statistics(languages, source).await?;
    tracing::info!(
        source = source.name(),
        languages = statistics.len(),
        "Source aggregated"
    );
    Ok(ReportSection {
        title: title.to_string(),
        statistics,
    })
}

/// Runs every selected source and renders the combined report.
pub struct ReportEngine {
    settings: Settings,
    client: Client,
}

impl ReportEngine {
    pub fn new(settings: Settings) -> Result<Self> {
        let client = build_client(&settings.http)?;
        Ok(Self { settings, client })
    }

    /// Collects sections in a fixed order: HeadHunter, then SuperJob.
    ///
    /// Any error discards what was collected before it.
    pub async fn collect(&self, selection: SourceSelection) -> Result<Vec<ReportSection>> {
        let mut sections = Vec::new();
        let languages = &self.settings.languages;

        if selection.includes_headhunter() {
            let settings = &self.settings.headhunter;
            let source = HeadHunterSource::new(self.client.clone(), settings.clone());
            sections.push(collect_section(&settings.title, languages, &source).await?);
        }

        if selection.includes_superjob() {
            let settings = &self.settings.superjob;
            let source = SuperJobSource::new(self.client.clone(), settings.clone())?;
            sections.push(collect_section(&settings.title, languages, &source).await?);
        }

        Ok(sections)
    }

    pub async fn run(&self, selection: SourceSelection) -> Result<String> {
        tracing::info!(?selection, languages = self.settings.languages.len(), "Starting report");
        let sections = self.collect(selection).await?;
        Ok(render_report(
            sections
                .iter()
                .map(|section| (section.title.as_str(), &section.statistics)),
        ))
    }
}
