use crate::domain::model::{FetchedVacancies, SalaryBounds};
use crate::utils::error::Result;
use async_trait::async_trait;

/// A job site that can be searched by programming language.
#[async_trait]
pub trait VacancySource: Send + Sync {
    type Vacancy: Send + Sync;

    /// Human readable name used in logs and errors.
    fn name(&self) -> &str;

    /// Fetches every page of vacancies matching `language`.
    async fn fetch(&self, language: &str) -> Result<FetchedVacancies<Self::Vacancy>>;

    /// Salary bounds in the site's home currency, or `None` when the
    /// vacancy has no usable salary.
    fn salary_bounds(&self, vacancy: &Self::Vacancy) -> Option<SalaryBounds>;
}
