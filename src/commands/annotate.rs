use std::path::Path;

use colored::Colorize;
use tracing::info;
use tracing::instrument;

use crate::App;
use crate::annotation::Annotation;
use crate::commands::report_abort;
use crate::duration::WorkDuration;
use crate::error::AnnotateError;
use crate::ops::git::Repository;
use crate::ops::git::ScmOps;
use crate::ops::prompt::PromptOps;
use crate::ops::prompt::PromptRequest;
use crate::ticket::extract_ticket_id;

/// The result of a successful annotate run.
#[derive(Debug)]
pub struct Annotated {
    pub repository: Repository,
    pub annotation: Annotation,
}

impl<G: ScmOps, P: PromptOps> App<G, P> {
    /// Fill the commit message box with the branch's ticket id and a work time.
    ///
    /// 1. Pick the repository and read its current branch.
    /// 2. Take the ticket id from the branch name. A branch without one is
    ///    not an error; the ticket segment is left empty.
    /// 3. Ask for the work time and check it.
    /// 4. Overwrite the commit message box with `<ticket> #time <work time> `.
    ///
    /// Nothing is written unless every step succeeds.
    #[instrument(skip(self))]
    pub async fn annotate(&self, context: Option<&Path>) -> Result<Annotated, AnnotateError> {
        let (repository, branch) = self.resolve_branch(context).await?;

        let ticket = extract_ticket_id(Some(&branch));
        if ticket.is_none() {
            info!("branch {} carries no ticket id", branch);
        }

        let Some(work_time) = self.prompt.input(&self.work_time_request()).await? else {
            return Err(AnnotateError::Cancelled);
        };
        info!("input work time: {}", work_time);
        let Some(duration) = WorkDuration::parse(&work_time) else {
            return Err(AnnotateError::InvalidDuration(work_time));
        };

        let annotation = Annotation::new(ticket, duration);
        self.scm
            .write_input_box(&repository, &annotation.to_string())
            .await?;

        Ok(Annotated {
            repository,
            annotation,
        })
    }

    /// Run [`App::annotate`] and report the outcome.
    ///
    /// Returns `false` when the command stopped early.
    pub async fn cmd_annotate(
        &self,
        context: Option<&Path>,
        stdout: &mut impl std::io::Write,
        stderr: &mut impl std::io::Write,
    ) -> anyhow::Result<bool> {
        match self.annotate(context).await {
            Ok(Annotated {
                repository,
                annotation,
            }) => {
                let path = repository.input_box();
                writeln!(
                    stdout,
                    "Wrote \"{}\" to {}",
                    annotation.to_string().cyan(),
                    path.display()
                )?;
                writeln!(
                    stdout,
                    "{}",
                    format!("  git commit -e -F {}", path.display()).dimmed()
                )?;
                Ok(true)
            }
            Err(err) => report_abort(err, stdout, stderr),
        }
    }

    fn work_time_request(&self) -> PromptRequest {
        PromptRequest {
            title: "Work time:".to_string(),
            prompt: "days d, hours h, minutes m  e.g. 1d3h25m".to_string(),
            default: self.config.default_duration.clone(),
        }
    }
}
