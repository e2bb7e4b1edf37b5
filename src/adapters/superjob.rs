use crate::adapters::http::fetch_page;
use crate::config::settings::SuperJobSettings;
use crate::domain::model::{FetchedVacancies, SalaryBounds, SuperJobPage, SuperJobVacancy};
use crate::domain::ports::VacancySource;
use crate::utils::error::{Result, StatsError};
use async_trait::async_trait;
use reqwest::Client;

/// Currency code SuperJob uses for roubles.
pub const SUPERJOB_CURRENCY: &str = "rub";

const APP_ID_HEADER: &str = "X-Api-App-Id";

/// SuperJob vacancy search. Walks pages while the response says `more`.
pub struct SuperJobSource {
    client: Client,
    settings: SuperJobSettings,
    secret_key: String,
}

impl SuperJobSource {
    /// Fails when no secret key is configured.
    pub fn new(client: Client, settings: SuperJobSettings) -> Result<Self> {
        let secret_key = settings
            .secret_key
            .clone()
            .ok_or_else(|| StatsError::MissingConfigError {
                field: "superjob.secret_key".to_string(),
            })?;
        Ok(Self {
            client,
            settings,
            secret_key,
        })
    }

    fn query(&self, language: &str, page: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("catalogues", self.settings.catalogue.clone()),
            ("town", self.settings.town.clone()),
            ("page", page.to_string()),
            ("keyword", language.to_lowercase()),
        ];
        if self.settings.no_agreement {
            params.push(("no_agreement", "1".to_string()));
        }
        if let Some(count) = self.settings.count {
            params.push(("count", count.to_string()));
        }
        params
    }
}

#[async_trait]
impl VacancySource for SuperJobSource {
    type Vacancy = SuperJobVacancy;

    fn name(&self) -> &str {
        "SuperJob"
    }

    async fn fetch(&self, language: &str) -> Result<FetchedVacancies<SuperJobVacancy>> {
        let mut vacancies = Vec::new();
        let mut page = 0;

        loop {
            let request = self
                .client
                .get(&self.settings.base_url)
                .header(APP_ID_HEADER, &self.secret_key)
                .query(&self.query(language, page));
            let summary: SuperJobPage = fetch_page(request, self.name()).await?;

            let batch = summary.objects.len();
            vacancies.extend(summary.objects);
            tracing::info!(
                source = self.name(),
                %language,
                page,
                more = summary.more,
                batch,
                "Page added"
            );

            if !summary.more {
                return Ok(FetchedVacancies {
                    vacancies,
                    found: summary.total,
                });
            }
            page += 1;
        }
    }

    fn salary_bounds(&self, vacancy: &SuperJobVacancy) -> Option<SalaryBounds> {
        if vacancy.currency != SUPERJOB_CURRENCY {
            return None;
        }
        // 0 means "not specified"
        let specified = |bound: Option<f64>| bound.filter(|value| *value > 0.0);
        Some(SalaryBounds::new(
            specified(vacancy.payment_from),
            specified(vacancy.payment_to),
        ))
    }
}
