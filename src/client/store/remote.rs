use dioxus_logger::tracing;

use crate::client::store::generation::{FetchGeneration, FetchTicket};

/// A value loaded from the backend with loading and error state.
///
/// Used by the detail pages. A failed reload keeps the previously loaded value so the
/// page can keep rendering it next to the error.
#[derive(Debug, Clone, PartialEq)]
pub struct Remote<T> {
    pub value: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    generation: FetchGeneration,
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self {
            value: None,
            loading: true,
            error: None,
            generation: FetchGeneration::default(),
        }
    }
}

impl<T> Remote<T> {
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        self.error = None;
        self.generation.issue()
    }

    /// Stores `value` if `ticket` belongs to the latest fetch.
    pub fn apply(&mut self, ticket: FetchTicket, value: T) -> bool {
        if !self.generation.is_current(ticket) {
            tracing::debug!("Discarding stale response");
            return false;
        }

        self.value = Some(value);
        self.loading = false;
        true
    }

    pub fn apply_failure(&mut self, ticket: FetchTicket, message: String) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }

        self.error = Some(message);
        self.loading = false;
        true
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
