//! Tests for Route parsing and formatting

use std::str::FromStr;

use crate::client::router::Route;

/// Tests the paths of parameterized routes.
///
/// Expected: ids rendered into the path
#[test]
fn formats_detail_paths() {
    assert_eq!(Route::ArticleDetail { id: 42 }.to_string(), "/article/42");
    assert_eq!(Route::DepartmentDetail { id: 3 }.to_string(), "/department/3");
}

/// Tests parsing known paths.
///
/// Expected: the matching route
#[test]
fn parses_known_paths() {
    assert_eq!(Route::from_str("/article/7").ok(), Some(Route::ArticleDetail { id: 7 }));
    assert_eq!(Route::from_str("/add-article").ok(), Some(Route::AddArticle {}));
}

/// Tests an unknown path.
///
/// Expected: NotFound with the path segments
#[test]
fn unknown_path_is_not_found() {
    assert_eq!(
        Route::from_str("/no/such/page").ok(),
        Some(Route::NotFound {
            segments: vec!["no".to_string(), "such".to_string(), "page".to_string()],
        })
    );
}
