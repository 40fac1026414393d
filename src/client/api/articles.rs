use crate::{
    client::{
        api::{ApiClient, Transport},
        error::ApiError,
    },
    model::article::{Article, ArticlePage, ArticleQuery, NewArticle},
};

impl<T: Transport> ApiClient<T> {
    /// Fetches one filtered page of articles; the backend filters and paginates.
    pub async fn list_articles(&self, query: &ArticleQuery) -> Result<ArticlePage, ApiError> {
        // Trailing slash avoids a redirect on the backend
        self.get("/articles/", &query.params()).await
    }

    pub async fn get_article(&self, id: i32) -> Result<Article, ApiError> {
        self.get(&format!("/articles/{id}"), &[]).await
    }

    /// Creates an article; only the response status is checked.
    pub async fn create_article(&self, article: &NewArticle) -> Result<(), ApiError> {
        self.post_json_status("/articles/", article).await
    }
}
