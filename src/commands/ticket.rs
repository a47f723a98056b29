use std::path::Path;

use colored::Colorize;

use crate::App;
use crate::commands::report_abort;
use crate::ops::git::ScmOps;
use crate::ops::prompt::PromptOps;
use crate::ticket::extract_ticket_id;

impl<G: ScmOps, P: PromptOps> App<G, P> {
    /// Print the ticket id carried by the current branch without touching
    /// the commit message.
    pub async fn cmd_ticket(
        &self,
        context: Option<&Path>,
        stdout: &mut impl std::io::Write,
        stderr: &mut impl std::io::Write,
    ) -> anyhow::Result<bool> {
        let (_, branch) = match self.resolve_branch(context).await {
            Ok(resolved) => resolved,
            Err(err) => return report_abort(err, stdout, stderr),
        };

        match extract_ticket_id(Some(&branch)) {
            Some(ticket) => writeln!(stdout, "{}", ticket.to_string().cyan())?,
            None => writeln!(stdout, "{}", format!("No ticket id in branch {branch}").dimmed())?,
        }
        Ok(true)
    }
}
