//! Stage, commit and push the posts file with git.

use std::{
    fmt, iter,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::{
    diagnostics::Diagnostics,
    error::{Error, Result},
};

/// What to do when a publish step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Report the failure and run the remaining steps anyway.
    Continue,
    /// Stop at the first failure and return it.
    Abort,
}

/// One git invocation in the publish sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `git add .`
    Stage,
    /// `git commit -m <message>`
    Commit,
    /// `git push <remote>`
    Push,
}

impl Step {
    /// Steps in the order they run.
    pub(crate) fn all() -> [Self; 3] {
        [Self::Stage, Self::Commit, Self::Push]
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Stage => "stage",
            Self::Commit => "commit",
            Self::Push => "push",
        };
        f.write_str(name)
    }
}

/// Runs the git steps that publish a change.
#[derive(Debug, Clone)]
pub struct Publisher {
    /// Git program.
    program: String,
    /// Arguments placed before every subcommand.
    base_args: Vec<String>,
    /// Remote that receives the push.
    remote: String,
    /// Directory the commands run in.
    work_dir: PathBuf,
}

impl Publisher {
    /// Build a publisher from a git command line such as `git` or `git -C site`.
    pub fn new(git: &str, remote: &str, work_dir: &Path) -> Result<Self> {
        let mut parts = shell_words::split(git).map_err(|error| Error::GitCommand {
            message: error.to_string(),
        })?;
        if parts.is_empty() {
            return Err(Error::GitCommand {
                message: "git command is empty".to_string(),
            });
        }
        let base_args = parts.split_off(1);
        let program = parts.remove(0);
        Ok(Self {
            program,
            base_args,
            remote: remote.to_string(),
            work_dir: work_dir.to_path_buf(),
        })
    }

    /// Arguments for a single step.
    fn step_args(&self, step: Step, message: &str) -> Vec<String> {
        let mut args = self.base_args.clone();
        match step {
            Step::Stage => args.extend(["add".to_string(), ".".to_string()]),
            Step::Commit => {
                args.extend(["commit".to_string(), "-m".to_string(), message.to_string()]);
            }
            Step::Push => args.extend(["push".to_string(), self.remote.clone()]),
        }
        args
    }

    /// Run one step, failing on spawn errors and non-zero exits.
    pub fn run_step(&self, step: Step, message: &str) -> Result<()> {
        let args = self.step_args(step, message);
        let command = shell_words::join(iter::once(&self.program).chain(&args));

        let status = Command::new(&self.program)
            .args(&args)
            .current_dir(&self.work_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|error| Error::GitSpawn {
                command: command.clone(),
                source: error,
            })?;

        if !status.success() {
            return Err(Error::GitStatus { command, status });
        }

        Ok(())
    }

    /// Run stage, commit and push in order.
    ///
    /// Returns the steps that failed. Under [`FailurePolicy::Abort`] the first
    /// failure is returned as an error instead.
    pub fn publish(
        &self,
        message: &str,
        policy: FailurePolicy,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<Step>> {
        let mut failed = Vec::new();
        for step in Step::all() {
            diagnostics.note(format!("git: {step}"));
            match self.run_step(step, message) {
                Ok(()) => {}
                Err(error) if policy == FailurePolicy::Abort => return Err(error),
                Err(error) => {
                    diagnostics.warn(format!("{step} failed: {error}"));
                    failed.push(step);
                }
            }
        }
        Ok(failed)
    }
}
