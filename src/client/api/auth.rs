use crate::{
    client::{
        api::{ApiClient, Transport},
        error::ApiError,
    },
    model::user::{AccountKind, NewUser, TokenResponse, User},
};

impl<T: Transport> ApiClient<T> {
    /// Exchanges credentials for a bearer token.
    ///
    /// The token endpoint takes an OAuth2 password form rather than JSON.
    pub async fn login(&self, login: &str, password: &str) -> Result<TokenResponse, ApiError> {
        self.post_form("/auth/token", &[("username", login), ("password", password)])
            .await
    }

    pub async fn register(&self, user: &NewUser) -> Result<User, ApiError> {
        self.post_json("/auth/register", user).await
    }

    /// Creates a manager or a regular user on behalf of the signed in account.
    pub async fn create_account(&self, kind: AccountKind, user: &NewUser) -> Result<User, ApiError> {
        self.post_json(kind.endpoint(), user).await
    }

    pub async fn me(&self) -> Result<User, ApiError> {
        self.get("/auth/me", &[]).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get("/auth/users", &[]).await
    }
}
