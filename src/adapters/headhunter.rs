use crate::adapters::http::fetch_page;
use crate::config::settings::HeadHunterSettings;
use crate::domain::model::{FetchedVacancies, HeadHunterPage, HeadHunterVacancy, SalaryBounds};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Currency code HeadHunter uses for roubles.
pub const HEADHUNTER_CURRENCY: &str = "RUR";

/// HeadHunter vacancy search. Walks pages until the reported page count is reached.
pub struct HeadHunterSource {
    client: Client,
    settings: HeadHunterSettings,
}

impl HeadHunterSource {
    pub fn new(client: Client, settings: HeadHunterSettings) -> Self {
        Self { client, settings }
    }

    fn query(&self, language: &str, page: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("professional_roles", self.settings.professional_role.clone()),
            ("text", language.to_lowercase()),
            ("parent_area", self.settings.parent_area.clone()),
            ("area", self.settings.area.clone()),
            ("period", self.settings.period_days.to_string()),
            ("page", page.to_string()),
        ];
        if self.settings.only_with_salary {
            params.push(("only_with_salary", "true".to_string()));
        }
        if let Some(per_page) = self.settings.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        params
    }
}

#[async_trait]
impl VacancySource for HeadHunterSource {
    type Vacancy = HeadHunterVacancy;

    fn name(&self) -> &str {
        "HeadHunter"
    }

    async fn fetch(&self, language: &str) -> Result<FetchedVacancies<HeadHunterVacancy>> {
        let mut vacancies = Vec::new();
        let mut page = 0;

        loop {
            let request = self
                .client
                .get(&self.settings.base_url)
                .query(&self.query(language, page));
            let summary: HeadHunterPage = fetch_page(request, self.name()).await?;

            let batch = summary.items.len();
            vacancies.extend(summary.items);
            tracing::info!(
                source = self.name(),
                %language,
                page,
                pages = summary.pages,
                batch,
                "Page added"
            );

            // page count is re-read on every response
            if page + 1 >= summary.pages {
                return Ok(FetchedVacancies {
                    vacancies,
                    found: summary.found,
                });
            }
            page += 1;
        }
    }

    fn salary_bounds(&self, vacancy: &HeadHunterVacancy) -> Option<SalaryBounds> {
        let salary = vacancy.salary.as_ref()?;
        if salary.currency.as_deref() != Some(HEADHUNTER_CURRENCY) {
            return None;
        }
        Some(SalaryBounds::new(salary.from, salary.to))
    }
}
