pub mod report;
pub mod salary;
pub mod statistics;

pub use crate::domain::model::{LanguageStat, LanguageStatistics, SalaryBounds};
pub use crate::domain::ports::VacancySource;
pub use crate::utils::error::Result;
