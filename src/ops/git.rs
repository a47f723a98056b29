#![allow(async_fn_in_trait)]

use std::path::Path;
use std::path::PathBuf;
use std::process::Output;

use anyhow::Context;
use anyhow::Result;
use anyhow::anyhow;
#[cfg(test)]
use mockall::automock;
use tokio::process::Command;
use tracing::debug;
use tracing::warn;

/// Version of the [`ScmOps`] surface this crate is written against.
pub const SCM_API_VERSION: u32 = 1;

/// File in the git directory that plays the role of the commit message box.
///
/// Commit with `git commit -e -F <file>` to pick it up.
pub const INPUT_BOX_FILE: &str = "COMMIT_EDITMSG";

// -----------------------------------------------------------------------------
// ScmOps trait

/// Operations offered by the version control integration
#[cfg_attr(test, automock)]
pub trait ScmOps {
    /// Version of the operations surface the provider implements.
    fn api_version(&self) -> u32;

    /// Whether the integration is installed and usable.
    async fn is_enabled(&self) -> bool;

    /// All repositories the integration knows about, in discovery order.
    async fn repositories(&self) -> Result<Vec<Repository>>;

    /// Replace the contents of the repository's commit message box.
    async fn write_input_box(&self, repository: &Repository, message: &str) -> Result<()>;
}

/// A repository known to the integration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Root of the working tree.
    pub root: PathBuf,
    pub git_dir: PathBuf,
    /// `None` when HEAD can't be resolved at all.
    pub head: Option<Head>,
}

/// The checked out reference of a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    /// Short branch name; `None` for a detached HEAD.
    pub name: Option<String>,
}

impl Repository {
    /// Path of the commit message box for this repository.
    pub fn input_box(&self) -> PathBuf {
        self.git_dir.join(INPUT_BOX_FILE)
    }
}

// -----------------------------------------------------------------------------
// RealGit

/// Real implementation that calls the git CLI
pub struct RealGit {
    search_paths: Vec<PathBuf>,
}

impl RealGit {
    /// Repositories are discovered from `search_paths`; each path may be
    /// anywhere inside a working tree.
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    async fn git(&self, dir: &Path, args: &[&str]) -> Result<Output> {
        Command::new("git")
            .current_dir(dir)
            .args(args)
            .output()
            .await
            .context("Failed to execute git command")
    }

    /// Resolve the repository containing `path`, if any.
    async fn discover(&self, path: &Path) -> Result<Option<Repository>> {
        match tokio::fs::try_exists(path).await {
            Ok(true) => {}
            Ok(false) => {
                warn!("Skipping {}: no such directory", path.display());
                return Ok(None);
            }
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                return Ok(None);
            }
        }

        let output = self
            .git(path, &["rev-parse", "--show-toplevel", "--absolute-git-dir"])
            .await?;
        if !output.status.success() {
            debug!(
                "{} is not inside a working tree: {}",
                path.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Ok(None);
        }

        let stdout = String::from_utf8(output.stdout)?;
        let mut lines = stdout.lines();
        let (Some(root), Some(git_dir)) = (lines.next(), lines.next()) else {
            return Err(anyhow!("unexpected git rev-parse output: {}", stdout));
        };
        let root = tokio::fs::canonicalize(root)
            .await
            .with_context(|| format!("Failed to resolve {}", root))?;
        let git_dir = tokio::fs::canonicalize(git_dir)
            .await
            .with_context(|| format!("Failed to resolve {}", git_dir))?;
        let head = self.read_head(&root).await?;

        Ok(Some(Repository {
            root,
            git_dir,
            head,
        }))
    }

    async fn read_head(&self, root: &Path) -> Result<Option<Head>> {
        let output = self
            .git(root, &["symbolic-ref", "-q", "--short", "HEAD"])
            .await?;
        if output.status.success() {
            let name = String::from_utf8(output.stdout)?.trim().to_string();
            return Ok(Some(Head { name: Some(name) }));
        }

        // Not on a branch; HEAD may still point at a commit
        let output = self
            .git(root, &["rev-parse", "-q", "--verify", "HEAD"])
            .await?;
        if output.status.success() {
            return Ok(Some(Head { name: None }));
        }

        Ok(None)
    }
}

impl ScmOps for RealGit {
    fn api_version(&self) -> u32 {
        SCM_API_VERSION
    }

    async fn is_enabled(&self) -> bool {
        match Command::new("git").arg("--version").output().await {
            Ok(output) => output.status.success(),
            Err(e) => {
                debug!("git --version failed: {}", e);
                false
            }
        }
    }

    async fn repositories(&self) -> Result<Vec<Repository>> {
        let mut repositories: Vec<Repository> = Vec::new();
        for path in &self.search_paths {
            let Some(repository) = self.discover(path).await? else {
                continue;
            };
            if repositories.iter().any(|r| r.root == repository.root) {
                continue;
            }
            repositories.push(repository);
        }
        Ok(repositories)
    }

    async fn write_input_box(&self, repository: &Repository, message: &str) -> Result<()> {
        let path = repository.input_box();
        tokio::fs::write(&path, message)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}
