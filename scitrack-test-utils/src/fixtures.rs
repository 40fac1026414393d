//! JSON fixtures shaped like the registry backend's responses.

pub mod factory {
    use serde_json::{json, Value};

    pub fn author(id: i32, article_id: i32, name: &str, contribution: f64, applied: bool) -> Value {
        json!({
            "id": id,
            "article_id": article_id,
            "author_name": name,
            "contribution": contribution,
            "applied_for_award": applied,
            "award_applied_date": if applied { json!("2024-03-01") } else { Value::Null },
        })
    }

    pub fn article(id: i32, title: &str, year_pub: i32, in_rinc: bool, authors: Vec<Value>) -> Value {
        json!({
            "id": id,
            "title": title,
            "year_pub": year_pub,
            "in_rinc": in_rinc,
            "authors": authors,
        })
    }

    /// Article with a single author holding the full contribution.
    pub fn simple_article(id: i32, title: &str) -> Value {
        article(id, title, 2023, true, vec![author(id * 10, id, "Ivanov I. I.", 100.0, false)])
    }

    /// Paginated list response, computing `pages` the way the backend does.
    pub fn article_page(articles: Vec<Value>, total: u64, page: u32, per_page: u32) -> Value {
        let pages = total.div_ceil(u64::from(per_page)).max(1);

        json!({
            "articles": articles,
            "total": total,
            "page": page,
            "pages": pages,
            "per_page": per_page,
        })
    }

    pub fn department(id: i32, name: &str, manager_id: Option<i32>, employees: &[(i32, &str)]) -> Value {
        let employees: Vec<Value> = employees
            .iter()
            .map(|(id, fio)| json!({ "id": id, "fio": fio }))
            .collect();

        json!({
            "id": id,
            "name": name,
            "manager_id": manager_id,
            "employees": employees,
        })
    }

    pub fn user(id: i32, login: &str, role: &str, full_name: Option<&str>, email: Option<&str>) -> Value {
        json!({
            "id": id,
            "login": login,
            "role": role,
            "full_name": full_name,
            "email": email,
        })
    }
}
