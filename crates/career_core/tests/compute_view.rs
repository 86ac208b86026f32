use std::collections::BTreeSet;

use career_core::{
    compute_view, Company, DirectoryView, EmptySelection, SortOrder, ViewQuery, VisitedSet,
};
use pretty_assertions::assert_eq;

fn sample() -> Vec<Company> {
    vec![
        Company::new("Corp", "https://corp.example").with_industry("Manufacturing"),
        Company::new("Acme", "https://acme.example").with_industry("Tech"),
        Company::new("Beta", "https://beta.example").with_industry("Finance"),
        Company::new("delta", "https://delta.example"),
    ]
}

fn query(search: &str) -> ViewQuery {
    ViewQuery {
        search: search.to_string(),
        ..ViewQuery::default()
    }
}

fn selected(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn search_matches_industry_case_insensitively() {
    let companies = vec![
        Company::new("Acme", "https://acme.example").with_industry("Tech"),
        Company::new("Beta", "https://beta.example").with_industry("Finance"),
    ];

    let view = compute_view(&companies, &query("tech"), &VisitedSet::new());

    assert_eq!(view.names(), vec!["Acme"]);
}

#[test]
fn every_row_contains_the_search_text() {
    let companies = sample();
    for search in ["", "a", "E", "corp", "tech", "zzz", " beta "] {
        let view = compute_view(&companies, &query(search), &VisitedSet::new());
        let needle = search.trim().to_lowercase();
        for row in view.rows() {
            let name = row.company.name.to_lowercase();
            let industry = row.company.industry.clone().unwrap_or_default().to_lowercase();
            assert!(
                name.contains(&needle) || industry.contains(&needle),
                "{} does not match {search:?}",
                row.company.name
            );
        }
    }
}

#[test]
fn no_match_yields_empty_marker() {
    let view = compute_view(&sample(), &query("nothing here"), &VisitedSet::new());
    assert_eq!(view, DirectoryView::Empty);
    assert!(view.is_empty());
    assert!(view.rows().is_empty());
}

#[test]
fn empty_selection_shows_all_by_default() {
    let view = compute_view(&sample(), &ViewQuery::default(), &VisitedSet::new());
    assert_eq!(view.len(), 4);
}

#[test]
fn empty_selection_can_mean_show_none() {
    let query = ViewQuery {
        empty_selection: EmptySelection::ShowNone,
        ..ViewQuery::default()
    };
    let view = compute_view(&sample(), &query, &VisitedSet::new());
    assert_eq!(view, DirectoryView::Empty);
}

#[test]
fn selected_industries_restrict_rows_and_exclude_uncategorized() {
    let query = ViewQuery {
        selected_industries: selected(&["Tech", "Finance"]),
        ..ViewQuery::default()
    };
    let view = compute_view(&sample(), &query, &VisitedSet::new());
    assert_eq!(view.names(), vec!["Acme", "Beta"]);
}

#[test]
fn search_and_industry_filters_combine() {
    let query = ViewQuery {
        search: "a".to_string(),
        selected_industries: selected(&["Finance"]),
        ..ViewQuery::default()
    };
    let view = compute_view(&sample(), &query, &VisitedSet::new());
    assert_eq!(view.names(), vec!["Beta"]);
}

#[test]
fn za_sort_reverses_names() {
    let companies = vec![
        Company::new("Acme", "https://acme.example"),
        Company::new("Beta", "https://beta.example"),
        Company::new("Corp", "https://corp.example"),
    ];
    let query = ViewQuery {
        sort: SortOrder::parse("za").unwrap(),
        ..ViewQuery::default()
    };
    let view = compute_view(&companies, &query, &VisitedSet::new());
    assert_eq!(view.names(), vec!["Corp", "Beta", "Acme"]);
}

#[test]
fn name_sort_ignores_case() {
    let view = compute_view(&sample(), &ViewQuery::default(), &VisitedSet::new());
    assert_eq!(view.names(), vec!["Acme", "Beta", "Corp", "delta"]);
}

#[test]
fn descending_is_exact_reverse_of_ascending() {
    let mut companies = sample();
    companies.push(Company::new("Acme", "https://acme.example/other"));
    companies.push(Company::new("acme", "https://acme.example/third"));

    let asc = compute_view(&companies, &ViewQuery::default(), &VisitedSet::new());
    let desc = compute_view(
        &companies,
        &ViewQuery {
            sort: SortOrder::NameDesc,
            ..ViewQuery::default()
        },
        &VisitedSet::new(),
    );

    let mut reversed = asc.rows().to_vec();
    reversed.reverse();
    assert_eq!(desc.rows(), reversed.as_slice());
}

#[test]
fn industry_sort_groups_then_orders_by_name() {
    let mut companies = sample();
    companies.push(Company::new("Zeta", "https://zeta.example").with_industry("Finance"));
    let query = ViewQuery {
        sort: SortOrder::IndustryThenName,
        ..ViewQuery::default()
    };
    let view = compute_view(&companies, &query, &VisitedSet::new());
    assert_eq!(view.names(), vec!["Beta", "Zeta", "Corp", "Acme", "delta"]);
}

#[test]
fn rows_carry_visited_flag_and_can_hide_visited() {
    let visited: VisitedSet = ["https://acme.example"].into_iter().collect();

    let view = compute_view(&sample(), &ViewQuery::default(), &visited);
    let flags: Vec<_> = view.rows().iter().map(|r| r.visited).collect();
    assert_eq!(flags, vec![true, false, false, false]);

    let hidden = ViewQuery {
        hide_visited: true,
        ..ViewQuery::default()
    };
    let view = compute_view(&sample(), &hidden, &visited);
    assert_eq!(view.names(), vec!["Beta", "Corp", "delta"]);
}

#[test]
fn sort_order_parses_cli_names() {
    assert_eq!(SortOrder::parse("az"), Some(SortOrder::NameAsc));
    assert_eq!(SortOrder::parse("DESC"), Some(SortOrder::NameDesc));
    assert_eq!(SortOrder::parse("industry"), Some(SortOrder::IndustryThenName));
    assert_eq!(SortOrder::parse("random"), None);
}
