//! Page state machines.
//!
//! Each page keeps its state in one of these types behind a Dioxus signal. The types hold
//! no Dioxus handles themselves so that every transition can be tested without a
//! renderer; components only wire events to them and spawn the network calls.

pub mod account_form;
pub mod article_form;
pub mod article_list;
pub mod departments;
pub mod employee_form;
pub mod form;
pub mod generation;
pub mod login;
pub mod register;
pub mod remote;
pub mod session;
pub mod token;

#[cfg(test)]
mod tests;

pub use self::{
    form::{Flash, FormStatus},
    generation::{FetchGeneration, FetchTicket},
    remote::Remote,
    session::{Session, SessionUser},
};
