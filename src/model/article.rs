use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub article_id: i32,
    pub author_name: String,
    /// Share of the work in percent, 0 to 100.
    pub contribution: f64,
    pub applied_for_award: bool,
    pub award_applied_date: Option<NaiveDate>,
    // Only populated by the detail endpoint
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Author {
    /// Uppercased first letter of the author's name, used as an avatar placeholder.
    pub fn initial(&self) -> String {
        self.author_name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub year_pub: i32,
    /// Whether the article is indexed by the RINC citation index.
    pub in_rinc: bool,
    pub authors: Vec<Author>,
}

impl Article {
    /// Returns true when at least one author applied for an award with this article.
    pub fn applied_for_award(&self) -> bool {
        self.authors.iter().any(|author| author.applied_for_award)
    }
}

/// One page of the filtered article collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    pub total: u64,
    pub page: u32,
    pub pages: u32,
    pub per_page: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAuthor {
    pub author_name: String,
    pub contribution: f64,
    pub applied_for_award: bool,
    pub award_applied_date: Option<NaiveDate>,
}

/// Payload for creating an article together with its authors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub year_pub: i32,
    pub in_rinc: bool,
    pub authors: Vec<NewAuthor>,
}

/// Number of articles shown per page of the search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    Six,
    #[default]
    Twelve,
    TwentyFour,
    FortyEight,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Six,
        PageSize::Twelve,
        PageSize::TwentyFour,
        PageSize::FortyEight,
    ];

    pub fn get(self) -> u32 {
        match self {
            Self::Six => 6,
            Self::Twelve => 12,
            Self::TwentyFour => 24,
            Self::FortyEight => 48,
        }
    }

    /// Maps a numeric page size back to one of the selectable sizes.
    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.get() == value)
    }
}

/// Free text filters of the article search form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilters {
    pub id: String,
    pub title: String,
    pub author: String,
}

impl ArticleFilters {
    pub fn trimmed(&self) -> Self {
        Self {
            id: self.id.trim().to_string(),
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.trim().is_empty() && self.title.trim().is_empty() && self.author.trim().is_empty()
    }
}

/// A request for one page of the article collection.
///
/// Filtering and pagination are performed by the backend, the client only forwards
/// the parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleQuery {
    pub filters: ArticleFilters,
    pub page: u32,
    pub per_page: PageSize,
}

impl Default for ArticleQuery {
    fn default() -> Self {
        Self {
            filters: ArticleFilters::default(),
            page: 1,
            per_page: PageSize::default(),
        }
    }
}

impl ArticleQuery {
    /// Query string parameters for `GET /articles/`.
    ///
    /// Empty filters are omitted, `page` and `per_page` are always sent.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(5);

        let filters = [
            ("search_id", &self.filters.id),
            ("search_title", &self.filters.title),
            ("search_author", &self.filters.author),
        ];
        for (name, value) in filters {
            let value = value.trim();
            if !value.is_empty() {
                params.push((name, value.to_string()));
            }
        }

        params.push(("page", self.page.max(1).to_string()));
        params.push(("per_page", self.per_page.get().to_string()));

        params
    }
}
