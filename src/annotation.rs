use std::fmt::Display;

use crate::duration::WorkDuration;
use crate::ticket::TicketId;

/// Marker the issue tracker picks up to log work against the ticket.
pub const TIME_MARKER: &str = "#time";

/// The commit message fragment written into the commit message box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub ticket: Option<TicketId>,
    pub duration: WorkDuration,
}

impl Annotation {
    pub fn new(ticket: Option<TicketId>, duration: WorkDuration) -> Self {
        Self { ticket, duration }
    }
}

/// Renders `<ticket> #time <duration> `, trailing space included so the
/// user can keep typing. A missing ticket renders as an empty segment.
impl Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ticket = self.ticket.as_ref().map(TicketId::as_ref).unwrap_or("");
        write!(f, "{ticket} {TIME_MARKER} {} ", self.duration)
    }
}
