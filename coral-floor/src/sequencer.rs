//! Request sequencing
//!
//! A widget takes a [`RequestToken`] before it fetches and only applies the
//! response while that token is still the latest one issued. Late responses
//! of superseded requests are dropped.

use std::collections::HashMap;

/// Widgets that render fetched data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Widget {
    Board,
    Orders,
    Categories,
    Products,
    Options,
    /// Print and preview lists; both stage the one print ticket
    Staging,
}

/// Monotonic token source for one widget
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: u64,
}

/// Proof of which request a response belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

impl RequestSequencer {
    /// Start a new request, superseding all earlier tokens
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest == token.0
    }
}

/// One sequencer per widget
#[derive(Debug, Clone, Default)]
pub struct Sequencers {
    widgets: HashMap<Widget, RequestSequencer>,
}

impl Sequencers {
    pub fn issue(&mut self, widget: Widget) -> RequestToken {
        self.widgets.entry(widget).or_default().issue()
    }

    pub fn is_current(&self, widget: Widget, token: RequestToken) -> bool {
        self.widgets
            .get(&widget)
            .is_some_and(|seq| seq.is_current(token))
    }
}
