use std::collections::HashSet;

use career_core::{dedupe, industries, prepare, Company, DirectoryDocument, IndustryFacet};
use pretty_assertions::assert_eq;

#[test]
fn case_insensitive_url_match_keeps_one_entry() {
    let json = r#"{"companies":[
        {"name":"Acme","careerUrl":"https://acme.example/jobs","industry":"Tech"},
        {"name":"Acme","careerUrl":"https://ACME.example/jobs","industry":"Tech"}
    ]}"#;
    let doc: DirectoryDocument = serde_json::from_str(json).unwrap();

    let companies = dedupe(doc.companies);

    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].career_url, "https://acme.example/jobs");
}

#[test]
fn first_occurrence_wins_and_order_is_preserved() {
    let input = vec![
        Company::new("Beta", "https://beta.example"),
        Company::new("Acme", "https://acme.example").with_industry("Tech"),
        Company::new("BETA", "https://Beta.example").with_industry("Finance"),
        Company::new("Corp", "https://corp.example"),
    ];

    let names: Vec<_> = dedupe(input)
        .into_iter()
        .map(|c| (c.name, c.industry))
        .collect();

    assert_eq!(
        names,
        vec![
            ("Beta".to_string(), None),
            ("Acme".to_string(), Some("Tech".to_string())),
            ("Corp".to_string(), None),
        ]
    );
}

#[test]
fn same_name_with_different_url_is_kept() {
    let input = vec![
        Company::new("Acme", "https://acme.example/jobs"),
        Company::new("Acme", "https://acme.example/careers"),
    ];
    assert_eq!(dedupe(input).len(), 2);
}

#[test]
fn dedupe_is_idempotent_and_keys_are_unique() {
    let input = vec![
        Company::new("Acme", "https://a.example"),
        Company::new("acme", "HTTPS://A.EXAMPLE"),
        Company::new("Beta", "https://b.example"),
        Company::new("beta", "https://b.example/other"),
        Company::new("Beta", "https://b.example"),
    ];

    let once = dedupe(input);
    let twice = dedupe(once.clone());
    assert_eq!(once, twice);

    let keys: HashSet<_> = once.iter().map(Company::key).collect();
    assert_eq!(keys.len(), once.len());
}

#[test]
fn missing_and_blank_industries_become_uncategorized() {
    let json = r#"{"companies":[
        {"name":"Acme","careerUrl":"https://acme.example","industry":""},
        {"name":"Beta","careerUrl":"https://beta.example"},
        {"name":"Corp","careerUrl":"https://corp.example","industry":null, "extra": 1}
    ]}"#;
    let doc: DirectoryDocument = serde_json::from_str(json).unwrap();

    let companies = prepare(doc.companies);

    assert!(companies.iter().all(|c| c.industry.is_none()));
}

#[test]
fn industries_are_counted_and_collated() {
    let companies = vec![
        Company::new("A", "a").with_industry("tech"),
        Company::new("B", "b").with_industry("Finance"),
        Company::new("C", "c").with_industry("tech"),
        Company::new("D", "d"),
    ];

    assert_eq!(
        industries(&companies),
        vec![
            IndustryFacet {
                name: "Finance".to_string(),
                count: 1
            },
            IndustryFacet {
                name: "tech".to_string(),
                count: 2
            },
        ]
    );
}
