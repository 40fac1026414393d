use dioxus::prelude::*;

use crate::client::{api::ApiClient, store::Session};

/// Handle to the shared [`ApiClient`] that authenticates as the current session.
#[derive(Clone, Copy, PartialEq)]
pub struct Api {
    client: Signal<ApiClient>,
    session: Signal<Session>,
}

impl Api {
    /// A client carrying the session token as it is right now.
    ///
    /// Reads without subscribing, so it is safe to call from event handlers and tasks.
    pub fn client(&self) -> ApiClient {
        let token = self.session.peek().token().map(str::to_string);

        self.client.peek().with_token(token)
    }
}

pub fn use_api() -> Api {
    Api {
        client: use_context(),
        session: use_context(),
    }
}
