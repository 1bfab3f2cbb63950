//! Fetch trigger
//!
//! Decides when a list controller has to ask the server again. The controller
//! reports its tracked inputs after every state change; a request is issued only
//! when the effective inputs differ from the last ones observed. Every request
//! carries a sequence number so a late response for superseded inputs can be
//! recognised and dropped.

use crate::types::{ListQuery, NamePattern};

/// Values the fetch depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchInputs {
    pub tab_active: bool,
    pub page: u32,
    pub pattern: NamePattern,
}

/// Whether the active tab takes part in the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabGate {
    /// Fetch regardless of which tab is shown; tab switches are not a trigger.
    Always,
    /// Fetch only while the tab is active; activation is a trigger.
    WhenActive,
}

/// A request the controller has committed to issuing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    query: ListQuery,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }
}

#[derive(Debug)]
pub struct FetchTrigger {
    gate: TabGate,
    page_size: u32,
    last_seen: Option<FetchInputs>,
    issued: u64,
}

impl FetchTrigger {
    pub fn new(gate: TabGate, page_size: u32) -> Self {
        Self {
            gate,
            page_size,
            last_seen: None,
            issued: 0,
        }
    }

    pub fn gate(&self) -> TabGate {
        self.gate
    }

    /// Sequence number of the most recent request, 0 before the first one.
    pub fn latest_seq(&self) -> u64 {
        self.issued
    }

    /// Record `inputs`; returns a ticket when they changed and the gate is open.
    pub fn observe(&mut self, inputs: FetchInputs) -> Option<FetchTicket> {
        let inputs = self.effective(inputs);
        if self.last_seen.as_ref() == Some(&inputs) {
            return None;
        }
        let open = inputs.tab_active;
        let query = self.query_for(&inputs);
        self.last_seen = Some(inputs);
        open.then(|| self.issue(query))
    }

    /// Like [`observe`](Self::observe) but issues even for unchanged inputs.
    pub fn force(&mut self, inputs: FetchInputs) -> Option<FetchTicket> {
        let inputs = self.effective(inputs);
        let open = inputs.tab_active;
        let query = self.query_for(&inputs);
        self.last_seen = Some(inputs);
        open.then(|| self.issue(query))
    }

    /// Unconditionally issue a request for `query`, superseding everything in flight.
    pub fn issue(&mut self, query: ListQuery) -> FetchTicket {
        self.issued += 1;
        FetchTicket {
            seq: self.issued,
            query,
        }
    }

    /// Mark `inputs` as already satisfied without issuing anything.
    pub fn settle(&mut self, inputs: FetchInputs) {
        self.last_seen = Some(self.effective(inputs));
    }

    pub fn is_latest(&self, ticket: &FetchTicket) -> bool {
        ticket.seq == self.issued
    }

    fn effective(&self, mut inputs: FetchInputs) -> FetchInputs {
        if self.gate == TabGate::Always {
            inputs.tab_active = true;
        }
        inputs
    }

    fn query_for(&self, inputs: &FetchInputs) -> ListQuery {
        ListQuery {
            page: inputs.page,
            page_size: self.page_size,
            pattern: inputs.pattern.clone(),
        }
    }
}
