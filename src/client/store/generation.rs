/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Counter of issued fetches.
///
/// Every fetch takes a ticket before sending its request and presents it when the
/// response arrives. Only the most recently issued ticket is current, so a slow response
/// to an older request can never overwrite the result of a newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchGeneration {
    latest: u64,
}

impl FetchGeneration {
    pub fn issue(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }
}
