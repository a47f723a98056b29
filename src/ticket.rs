use std::fmt::Display;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

/// Branch shape `<letters>/<TICKET>-<digits>...`, e.g. `release/FRCS-123-hotfix`.
static BRANCH_TICKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+/([A-Za-z]+-[0-9]+)").expect("valid regex"));

/// An issue tracker ticket id such as `FRCS-123`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketId(pub String);

impl Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TicketId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extract the ticket id from a branch name.
///
/// Only the start of the branch is matched, so anything after the digits is
/// ignored. Returns `None` when there is no branch or it doesn't carry a
/// ticket.
pub fn extract_ticket_id(branch: Option<&str>) -> Option<TicketId> {
    debug!("extract_ticket_id {:?}", branch);
    let captures = BRANCH_TICKET.captures(branch?)?;
    let ticket = TicketId(captures[1].to_string());
    debug!("ticket id: {}", ticket);
    Some(ticket)
}
