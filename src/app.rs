use std::path::Path;

use tracing::debug;
use tracing::instrument;

use crate::config::Config;
use crate::error::AnnotateError;
use crate::ops::git::Head;
use crate::ops::git::Repository;
use crate::ops::git::SCM_API_VERSION;
use crate::ops::git::ScmOps;
use crate::ops::prompt::PromptOps;

pub struct App<G: ScmOps, P: PromptOps> {
    pub config: Config,
    pub scm: G,
    pub prompt: P,
}

impl<G: ScmOps, P: PromptOps> App<G, P> {
    pub fn new(config: Config, scm: G, prompt: P) -> Self {
        Self {
            config,
            scm,
            prompt,
        }
    }
}

/// Shared helper methods for App
impl<G: ScmOps, P: PromptOps> App<G, P> {
    /// Pick the repository to work on and return it with its current branch.
    ///
    /// With a `context` path the repository rooted exactly there is used,
    /// otherwise the first known repository.
    #[instrument(skip(self))]
    pub(crate) async fn resolve_branch(
        &self,
        context: Option<&Path>,
    ) -> Result<(Repository, String), AnnotateError> {
        if self.scm.api_version() != SCM_API_VERSION {
            debug!(
                "unsupported scm api version {}, expected {}",
                self.scm.api_version(),
                SCM_API_VERSION
            );
            return Err(AnnotateError::IntegrationUnavailable);
        }
        if !self.scm.is_enabled().await {
            return Err(AnnotateError::IntegrationUnavailable);
        }

        let repositories = self.scm.repositories().await?;
        debug!("repositories: {:?}", repositories);
        if repositories.is_empty() {
            return Err(AnnotateError::NoRepositories);
        }

        let repository = match context {
            Some(context) => repositories
                .into_iter()
                .find(|repository| repository.root == context)
                .ok_or_else(|| AnnotateError::RepositoryNotFound(context.to_path_buf()))?,
            None => repositories
                .into_iter()
                .next()
                .ok_or(AnnotateError::NoRepositories)?,
        };

        let branch = match &repository.head {
            None => return Err(AnnotateError::HeadUnavailable(repository.root.clone())),
            Some(Head { name: None }) => {
                return Err(AnnotateError::HeadUnnamed(repository.root.clone()));
            }
            Some(Head { name: Some(name) }) => name.clone(),
        };
        debug!("current branch {}", branch);

        Ok((repository, branch))
    }
}
