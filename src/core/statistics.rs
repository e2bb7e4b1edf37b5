use crate::core::salary::predict_from_bounds;
use crate::domain::model::{LanguageStat, LanguageStatistics};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;

/// Salary estimates for every vacancy of a source that has a usable salary.
pub fn collect_salaries<S: VacancySource + ?Sized>(source: &S, vacancies: &[S::Vacancy]) -> Vec<f64> {
    vacancies
        .iter()
        .filter_map(|vacancy| source.salary_bounds(vacancy))
        .filter_map(predict_from_bounds)
        .collect()
}

/// Integer-truncated mean, `None` for an empty slice.
pub fn average_salary(salaries: &[f64]) -> Option<u64> {
    if salaries.is_empty() {
        return None;
    }
    let total: f64 = salaries.iter().sum();
    Some((total / salaries.len() as f64) as u64)
}

/// Fetches each language from `source` in order and averages the salaries.
///
/// Languages without a single usable salary are left out. The first fetch
/// error aborts the whole run and nothing collected so far is returned.
pub async fn collect_statistics<S: VacancySource + ?Sized>(
    languages: &[String],
    source: &S,
) -> Result<LanguageStatistics> {
    let mut statistics = LanguageStatistics::new();

    for language in languages {
        tracing::info!(source = source.name(), %language, "Collecting vacancies");
        let fetched = source.fetch(language).await?;
        let salaries = collect_salaries(source, &fetched.vacancies);

        let Some(average) = average_salary(&salaries) else {
            tracing::info!(
                source = source.name(),
                %language,
                fetched = fetched.vacancies.len(),
                "No vacancies with a usable salary, skipping"
            );
            continue;
        };

        tracing::debug!(
            source = source.name(),
            %language,
            found = fetched.found,
            processed = salaries.len(),
            average,
            "Language aggregated"
        );

        statistics.insert(
            language.clone(),
            LanguageStat {
                vacancies_found: fetched.found,
                vacancies_processed: salaries.len(),
                average_salary: average,
            },
        );
    }

    Ok(statistics)
}
