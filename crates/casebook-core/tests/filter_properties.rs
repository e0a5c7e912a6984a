//! Catalog filter property tests.
//!
//! Checks identity, order preservation, idempotence, and case-insensitivity
//! over a generated catalog and a grid of predicate values.

use casebook_core::filter::{
    distinct_categories, distinct_difficulties, filter_owned, filter_scenarios, ScenarioFilter,
};
use casebook_core::model::{Difficulty, Scenario};

const CATEGORIES: [&str; 4] = [
    "Emergency Medicine",
    "Pediatrics",
    "General Practice",
    "Obstetrics",
];

const WORDS: [&str; 8] = [
    "Chest", "Pain", "Asthma", "History", "Sepsis", "Breaking", "News", "Consent",
];

fn generated_catalog(n: usize) -> Vec<Scenario> {
    (0..n)
        .map(|i| Scenario {
            id: format!("s{i}"),
            title: format!("{} {} Station", WORDS[i % WORDS.len()], WORDS[(i * 3 + 1) % WORDS.len()]),
            category: CATEGORIES[(i * 7) % CATEGORIES.len()].to_string(),
            difficulty: Difficulty::ALL[(i * 5) % 3],
            duration: format!("{} mins", 10 + (i % 4) * 5),
            description: format!("Practice case {i} about {}", WORDS[(i + 2) % WORDS.len()].to_lowercase()),
            tags: vec![WORDS[(i + 5) % WORDS.len()].to_string()],
        })
        .collect()
}

fn filters() -> Vec<ScenarioFilter> {
    let queries = ["", "chest", "PAIN", "station", "about sepsis", "nothing-matches"];
    let categories = ["", "Pediatrics", "General Practice", "Unknown"];
    let difficulties = [
        None,
        Some(Difficulty::Beginner),
        Some(Difficulty::Intermediate),
        Some(Difficulty::Advanced),
    ];

    let mut out = Vec::new();
    for q in queries {
        for c in categories {
            for d in difficulties {
                out.push(
                    ScenarioFilter::new()
                        .with_query(q)
                        .with_category(c)
                        .with_difficulty(d),
                );
            }
        }
    }
    out
}

fn is_subsequence(sub: &[&Scenario], all: &[Scenario]) -> bool {
    let mut rest = all.iter();
    sub.iter()
        .all(|needle| rest.by_ref().any(|s| std::ptr::eq(s, *needle)))
}

#[test]
fn empty_predicates_are_identity() {
    let all = generated_catalog(40);
    assert_eq!(filter_owned(&all, &ScenarioFilter::new()), all);
    assert!(filter_owned(&[], &ScenarioFilter::new()).is_empty());
}

#[test]
fn results_preserve_source_order() {
    let all = generated_catalog(40);
    for filter in filters() {
        let found = filter_scenarios(&all, &filter);
        assert!(is_subsequence(&found, &all), "{filter:?}");
    }
}

#[test]
fn filtering_is_idempotent() {
    let all = generated_catalog(40);
    for filter in filters() {
        let once = filter_owned(&all, &filter);
        let twice = filter_owned(&once, &filter);
        assert_eq!(once, twice, "{filter:?}");
    }
}

#[test]
fn query_case_does_not_matter() {
    let all = generated_catalog(40);
    for word in WORDS {
        let lower = filter_owned(&all, &ScenarioFilter::new().with_query(word.to_lowercase()));
        let upper = filter_owned(&all, &ScenarioFilter::new().with_query(word.to_uppercase()));
        assert_eq!(lower, upper, "{word}");
    }
}

#[test]
fn every_match_satisfies_every_predicate() {
    let all = generated_catalog(40);
    for filter in filters() {
        let query = filter.query.to_lowercase();
        for s in filter_scenarios(&all, &filter) {
            assert!(
                s.title.to_lowercase().contains(&query)
                    || s.description.to_lowercase().contains(&query)
            );
            if let Some(c) = &filter.category {
                assert_eq!(&s.category, c);
            }
            if let Some(d) = filter.difficulty {
                assert_eq!(s.difficulty, d);
            }
        }
    }
}

#[test]
fn nothing_that_passes_is_dropped() {
    let all = generated_catalog(40);
    for filter in filters() {
        let found = filter_scenarios(&all, &filter);
        let expected = all.iter().filter(|s| filter.matches(s)).count();
        assert_eq!(found.len(), expected, "{filter:?}");
    }
}

#[test]
fn documented_example() {
    let s = vec![
        Scenario {
            id: "0".into(),
            title: "Acute Chest Pain Assessment".into(),
            category: "Emergency Medicine".into(),
            difficulty: Difficulty::Intermediate,
            duration: "20 mins".into(),
            description: String::new(),
            tags: vec![],
        },
        Scenario {
            id: "1".into(),
            title: "Basic Patient History Taking".into(),
            category: "General Practice".into(),
            difficulty: Difficulty::Beginner,
            duration: "15 mins".into(),
            description: String::new(),
            tags: vec![],
        },
    ];

    assert_eq!(
        filter_owned(&s, &ScenarioFilter::new().with_query("chest")),
        vec![s[0].clone()]
    );
    assert_eq!(
        filter_owned(&s, &ScenarioFilter::new().with_category("General Practice")),
        vec![s[1].clone()]
    );
    assert!(filter_owned(
        &s,
        &ScenarioFilter::new().with_difficulty(Some(Difficulty::Advanced))
    )
    .is_empty());
}

#[test]
fn facets_come_from_the_full_collection() {
    let all = generated_catalog(40);
    let narrowed = filter_owned(&all, &ScenarioFilter::new().with_category("Pediatrics"));
    assert_eq!(distinct_categories(&narrowed), vec!["Pediatrics"]);
    assert_eq!(distinct_categories(&all).len(), CATEGORIES.len());
    assert_eq!(distinct_difficulties(&all).len(), 3);
}
