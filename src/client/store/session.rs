//! The signed in session.
//!
//! [`Session`] is provided once by the app as a `Signal<Session>` context. Login stores
//! the token, logout clears it, and the layout re-resolves who is signed in on every
//! route change with [`resolve_session`].

use std::{cell::RefCell, fmt, rc::Rc};

use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ApiClient, Transport},
        store::token::decode_claims,
    },
    model::user::Role,
};

/// Key the token is persisted under.
pub static TOKEN_KEY: &str = "token";

/// Display name used when the token carries no subject.
pub static DEFAULT_USER_NAME: &str = "User";

/// Persistent storage for the session token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Token storage that lives only as long as the process, used by desktop builds and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Browser `localStorage` token storage.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTokenStore;

#[cfg(target_arch = "wasm32")]
impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        use gloo::storage::{LocalStorage, Storage};

        LocalStorage::raw().get_item(TOKEN_KEY).ok().flatten()
    }

    fn save(&self, token: &str) {
        use gloo::storage::{LocalStorage, Storage};

        if let Err(err) = LocalStorage::raw().set_item(TOKEN_KEY, token) {
            tracing::error!("Failed to persist session token: {:?}", err);
        }
    }

    fn clear(&self) {
        use gloo::storage::{LocalStorage, Storage};

        if let Err(err) = LocalStorage::raw().remove_item(TOKEN_KEY) {
            tracing::error!("Failed to clear session token: {:?}", err);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn default_token_store() -> Rc<dyn TokenStore> {
    Rc::new(LocalTokenStore)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_token_store() -> Rc<dyn TokenStore> {
    Rc::new(MemoryTokenStore::default())
}

/// Who is signed in, as far as the frontend can tell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub name: String,
    pub role: Role,
}

/// Outcome of resolving a token into a [`SessionUser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No token is stored.
    Anonymous,
    /// Read from the token's own claims.
    Decoded(SessionUser),
    /// The token could not be decoded but the backend accepted it.
    Fetched(SessionUser),
    /// The token could not be decoded and the backend rejected it.
    Revoked,
}

#[derive(Clone)]
pub struct Session {
    token: Option<String>,
    user: Option<SessionUser>,
    store: Rc<dyn TokenStore>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.token.is_some())
            .field("user", &self.user)
            .finish()
    }
}

impl Session {
    /// Picks up a token persisted by an earlier visit.
    pub fn restore(store: Rc<dyn TokenStore>) -> Self {
        let token = store.load().filter(|token| !token.is_empty());

        Self {
            token,
            user: None,
            store,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn login(&mut self, token: String) {
        self.store.save(&token);
        self.token = Some(token);
        self.user = None;
    }

    pub fn logout(&mut self) {
        self.store.clear();
        self.token = None;
        self.user = None;
    }

    /// Applies a resolution computed for `token`.
    ///
    /// Returns false without changes when the session token changed while the resolution
    /// was in flight.
    pub fn apply(&mut self, token: Option<&str>, resolution: Resolution) -> bool {
        if self.token.as_deref() != token {
            return false;
        }

        match resolution {
            Resolution::Anonymous => self.user = None,
            Resolution::Decoded(user) | Resolution::Fetched(user) => self.user = Some(user),
            Resolution::Revoked => self.logout(),
        }

        true
    }
}

/// Works out who `token` belongs to.
///
/// The token's own claims are tried first. When they cannot be read the backend is asked,
/// and a token it rejects is treated as revoked.
pub async fn resolve_session<T>(token: Option<&str>, api: &ApiClient<T>) -> Resolution
where
    T: Transport + Clone,
{
    let Some(token) = token else {
        return Resolution::Anonymous;
    };

    let err = match decode_claims(token) {
        Ok(claims) => {
            return Resolution::Decoded(SessionUser {
                name: claims
                    .sub
                    .filter(|sub| !sub.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
                role: Role::from_claim(claims.role.as_deref()),
            })
        }
        Err(err) => err,
    };
    tracing::warn!("Falling back to /auth/me: {}", err);

    match api.with_token(Some(token.to_string())).me().await {
        Ok(user) => Resolution::Fetched(SessionUser {
            name: user.display_name().to_string(),
            role: user.role(),
        }),
        Err(err) => {
            tracing::warn!("Stored session token rejected: {}", err);
            Resolution::Revoked
        }
    }
}
