use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

/// One entry of the directory, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "careerUrl")]
    pub career_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

impl Company {
    pub fn new(name: impl Into<String>, career_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            career_url: career_url.into(),
            industry: None,
        }
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Trims the industry and folds empty values into "uncategorized".
    pub fn normalized(mut self) -> Self {
        self.industry = self
            .industry
            .take()
            .map(|industry| industry.trim().to_string())
            .filter(|industry| !industry.is_empty());
        self
    }

    pub fn key(&self) -> CompanyKey {
        CompanyKey {
            name: self.name.to_lowercase(),
            career_url: self.career_url.to_lowercase(),
        }
    }
}

/// Case-insensitive identity of a company within the working list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompanyKey {
    pub name: String,
    pub career_url: String,
}

/// Top-level shape of the static data file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DirectoryDocument {
    #[serde(default)]
    pub companies: Vec<Company>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryFacet {
    pub name: String,
    pub count: usize,
}

/// Keeps the first occurrence of every case-insensitive `(name, careerUrl)` pair.
pub fn dedupe(companies: Vec<Company>) -> Vec<Company> {
    let mut seen: HashSet<CompanyKey> = HashSet::with_capacity(companies.len());
    companies
        .into_iter()
        .filter(|company| seen.insert(company.key()))
        .collect()
}

/// Normalizes every entry, then removes duplicates.
pub fn prepare(companies: Vec<Company>) -> Vec<Company> {
    dedupe(companies.into_iter().map(Company::normalized).collect())
}

/// Distinct industries with their company counts, in collation order.
pub fn industries(companies: &[Company]) -> Vec<IndustryFacet> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for industry in companies.iter().filter_map(|c| c.industry.as_deref()) {
        *counts.entry(industry).or_default() += 1;
    }
    let mut facets: Vec<IndustryFacet> = counts
        .into_iter()
        .map(|(name, count)| IndustryFacet {
            name: name.to_string(),
            count,
        })
        .collect();
    facets.sort_by(|a, b| collate(&a.name, &b.name));
    facets
}

/// Key under which the visited record of `company` is stored.
pub fn visited_key(company: &Company) -> String {
    company.career_url.trim().to_string()
}

/// Case-folded comparison with the raw string as tie-break.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
