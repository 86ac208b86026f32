use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::company::{collate, visited_key, Company};
use crate::visited::VisitedSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    NameAsc,
    NameDesc,
    IndustryThenName,
}

impl SortOrder {
    /// Accepts the short names used on the command line (`az`, `za`, `industry`).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "az" | "asc" | "name" => Some(Self::NameAsc),
            "za" | "desc" => Some(Self::NameDesc),
            "industry" => Some(Self::IndustryThenName),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::NameAsc => Self::NameDesc,
            Self::NameDesc => Self::IndustryThenName,
            Self::IndustryThenName => Self::NameAsc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NameAsc => "A-Z",
            Self::NameDesc => "Z-A",
            Self::IndustryThenName => "Industry",
        }
    }

    fn compare(self, a: &SortKey, b: &SortKey) -> Ordering {
        match self {
            Self::NameAsc => a.by_name(b),
            Self::NameDesc => b.by_name(a),
            Self::IndustryThenName => a.by_industry(b).then_with(|| a.by_name(b)),
        }
    }
}

/// What an empty industry selection means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmptySelection {
    /// No industry checked means no industry filter.
    #[default]
    ShowAll,
    /// Companies must match an explicitly checked industry.
    ShowNone,
}

impl EmptySelection {
    pub fn toggled(self) -> Self {
        match self {
            Self::ShowAll => Self::ShowNone,
            Self::ShowNone => Self::ShowAll,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewQuery {
    pub search: String,
    pub selected_industries: BTreeSet<String>,
    pub sort: SortOrder,
    pub empty_selection: EmptySelection,
    pub hide_visited: bool,
}

impl ViewQuery {
    pub fn matches_search(&self, company: &Company) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        company.name.to_lowercase().contains(&needle)
            || company
                .industry
                .as_deref()
                .is_some_and(|industry| industry.to_lowercase().contains(&needle))
    }

    pub fn matches_industry(&self, company: &Company) -> bool {
        if self.selected_industries.is_empty() {
            return self.empty_selection == EmptySelection::ShowAll;
        }
        company
            .industry
            .as_deref()
            .is_some_and(|industry| self.selected_industries.contains(industry))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRow {
    pub company: Company,
    pub visited: bool,
}

/// Result of filtering and sorting; `Empty` is the no-results marker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DirectoryView {
    #[default]
    Empty,
    Rows(Vec<CompanyRow>),
}

impl DirectoryView {
    pub fn rows(&self) -> &[CompanyRow] {
        match self {
            Self::Empty => &[],
            Self::Rows(rows) => rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn names(&self) -> Vec<&str> {
        self.rows().iter().map(|row| row.company.name.as_str()).collect()
    }
}

/// Filters and orders `companies` for display, decorating each row with its visited flag.
pub fn compute_view(
    companies: &[Company],
    query: &ViewQuery,
    visited: &VisitedSet,
) -> DirectoryView {
    let mut keyed: Vec<(SortKey, CompanyRow)> = companies
        .iter()
        .filter(|company| query.matches_search(company) && query.matches_industry(company))
        .map(|company| CompanyRow {
            visited: visited.contains(&visited_key(company)),
            company: company.clone(),
        })
        .filter(|row| !(query.hide_visited && row.visited))
        .map(|row| (SortKey::of(&row.company), row))
        .collect();

    if keyed.is_empty() {
        return DirectoryView::Empty;
    }

    keyed.sort_by(|(a, _), (b, _)| query.sort.compare(a, b));
    DirectoryView::Rows(keyed.into_iter().map(|(_, row)| row).collect())
}

struct SortKey {
    name: String,
    url_folded: String,
    industry: Option<String>,
}

impl SortKey {
    fn of(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
            url_folded: company.career_url.to_lowercase(),
            industry: company.industry.clone(),
        }
    }

    // The URL tie-break makes this a total order over a de-duplicated list.
    fn by_name(&self, other: &Self) -> Ordering {
        collate(&self.name, &other.name).then_with(|| self.url_folded.cmp(&other.url_folded))
    }

    fn by_industry(&self, other: &Self) -> Ordering {
        match (&self.industry, &other.industry) {
            (Some(a), Some(b)) => collate(a, b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}
