use serde::{Deserialize, Serialize};

/// Lower/upper salary pair as published by a job site, already filtered by currency.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalaryBounds {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl SalaryBounds {
    pub fn new(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self { lower, upper }
    }
}

/// A HeadHunter vacancy. Only the salary block is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadHunterVacancy {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub salary: Option<HeadHunterSalary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadHunterSalary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
}

/// One page of `GET /vacancies` on HeadHunter.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadHunterPage {
    pub items: Vec<HeadHunterVacancy>,
    pub found: u64,
    pub pages: u32,
}

/// A SuperJob vacancy. Unspecified bounds are reported as `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperJobVacancy {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub profession: Option<String>,
    pub currency: String,
    #[serde(default)]
    pub payment_from: Option<f64>,
    #[serde(default)]
    pub payment_to: Option<f64>,
}

/// One page of `GET /2.0/vacancies` on SuperJob.
#[derive(Debug, Clone, Deserialize)]
pub struct SuperJobPage {
    pub objects: Vec<SuperJobVacancy>,
    pub total: u64,
    pub more: bool,
}

/// Everything a source returned for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedVacancies<V> {
    pub vacancies: Vec<V>,
    /// Total reported by the last page fetched.
    pub found: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageStat {
    pub vacancies_found: u64,
    pub vacancies_processed: usize,
    pub average_salary: u64,
}

/// Per-language statistics, kept in the order languages were aggregated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LanguageStatistics {
    entries: Vec<(String, LanguageStat)>,
}

impl LanguageStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for `language`.
    pub fn insert(&mut self, language: impl Into<String>, stat: LanguageStat) {
        let language = language.into();
        match self.entries.iter_mut().find(|(name, _)| *name == language) {
            Some((_, existing)) => *existing = stat,
            None => self.entries.push((language, stat)),
        }
    }

    pub fn get(&self, language: &str) -> Option<&LanguageStat> {
        self.entries
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, stat)| stat)
    }

    pub fn contains(&self, language: &str) -> bool {
        self.get(language).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageStat)> {
        self.entries.iter().map(|(name, stat)| (name.as_str(), stat))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
