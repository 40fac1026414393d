use serde_json::json;

use crate::model::article::{Article, ArticleFilters, ArticleQuery, PageSize};

fn article_with_awards(flags: &[bool]) -> Article {
    let authors: Vec<_> = flags
        .iter()
        .enumerate()
        .map(|(i, applied)| {
            json!({
                "id": i as i32 + 1,
                "article_id": 1,
                "author_name": format!("Author {}", i + 1),
                "contribution": 100.0 / flags.len() as f64,
                "applied_for_award": applied,
                "award_applied_date": if *applied { json!("2024-03-01") } else { json!(null) },
            })
        })
        .collect();

    serde_json::from_value(json!({
        "id": 1,
        "title": "Graph colouring",
        "year_pub": 2023,
        "in_rinc": true,
        "authors": authors,
    }))
    .unwrap()
}

/// Tests the award badge flag when one author applied.
///
/// Expected: true
#[test]
fn applied_for_award_when_any_author_applied() {
    assert!(article_with_awards(&[false, true, false]).applied_for_award());
}

/// Tests the award badge flag when nobody applied.
///
/// Expected: false
#[test]
fn not_applied_for_award_when_no_author_applied() {
    assert!(!article_with_awards(&[false, false]).applied_for_award());
    assert!(!article_with_awards(&[]).applied_for_award());
}

/// Tests that the award date is parsed as a calendar date.
///
/// Expected: 2024-03-01 for the applying author
#[test]
fn parses_award_applied_date() {
    let article = article_with_awards(&[true]);

    assert_eq!(
        article.authors[0].award_applied_date,
        chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
    );
    assert_eq!(article.authors[0].initial(), "A");
}

/// Tests the query parameters of an unfiltered request.
///
/// Expected: only page and per_page
#[test]
fn query_without_filters_sends_only_pagination() {
    let params = ArticleQuery::default().params();

    assert_eq!(
        params,
        vec![("page", "1".to_string()), ("per_page", "12".to_string())]
    );
}

/// Tests that filters are trimmed and blank ones are dropped.
///
/// Expected: search_title and search_author present, search_id omitted
#[test]
fn query_omits_blank_filters() {
    let query = ArticleQuery {
        filters: ArticleFilters {
            id: "   ".to_string(),
            title: " graph ".to_string(),
            author: "Ivanov".to_string(),
        },
        page: 3,
        per_page: PageSize::TwentyFour,
    };

    assert_eq!(
        query.params(),
        vec![
            ("search_title", "graph".to_string()),
            ("search_author", "Ivanov".to_string()),
            ("page", "3".to_string()),
            ("per_page", "24".to_string()),
        ]
    );
}

/// Tests mapping numeric page sizes to selectable sizes.
///
/// Expected: only 6, 12, 24 and 48 are accepted
#[test]
fn page_size_accepts_only_fixed_values() {
    assert_eq!(PageSize::from_value(6), Some(PageSize::Six));
    assert_eq!(PageSize::from_value(48), Some(PageSize::FortyEight));
    assert_eq!(PageSize::from_value(10), None);
    assert_eq!(PageSize::default().get(), 12);
}
