mod departments;
mod login;
mod session;
mod token;

use std::rc::Rc;

use crate::client::{
    api::{transport::NativeTransport, ApiClient},
    store::session::{MemoryTokenStore, Session, TokenStore},
};

fn client(base_url: &str) -> ApiClient<NativeTransport> {
    ApiClient::with_transport(base_url, NativeTransport::default())
}

/// Session backed by an in-memory store, returned together with the store.
fn session(token: Option<&str>) -> (Session, Rc<MemoryTokenStore>) {
    let store = Rc::new(match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::default(),
    });
    let session = Session::restore(store.clone() as Rc<dyn TokenStore>);

    (session, store)
}
