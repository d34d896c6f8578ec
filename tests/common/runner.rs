//! Scripted stand-in for the git binary

use anyhow::Result;
use async_trait::async_trait;
use git_repo_manager::git::{CommandRunner, ProcessOutput};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// What a scripted invocation answers with
#[derive(Clone, Debug)]
pub enum Reply {
    Output(ProcessOutput),
    LaunchError(String),
    /// The runner panics, as a bug inside one unit of work would
    Panic(String),
}

struct Rule {
    location: Option<PathBuf>,
    args: Vec<String>,
    reply: Reply,
}

/// Answers invocations from a rule list and records every call
///
/// Rules are matched on the exact argument list, optionally restricted to
/// one location. Location-specific rules win, and a later rule overrides an
/// earlier one. Unmatched calls succeed with empty output.
pub struct ScriptedRunner {
    rules: Mutex<Vec<Rule>>,
    calls: Mutex<Vec<(PathBuf, Vec<String>)>>,
    delay: Mutex<Duration>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self {
            rules: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            delay: Mutex::new(Duration::ZERO),
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    /// Answer `args` in every location
    pub fn on(&self, args: &[&str], reply: Reply) {
        self.rules.lock().unwrap().push(Rule {
            location: None,
            args: owned(args),
            reply,
        });
    }

    /// Answer `args` in `location` only
    pub fn on_at(&self, location: &Path, args: &[&str], reply: Reply) {
        self.rules.lock().unwrap().push(Rule {
            location: Some(location.to_path_buf()),
            args: owned(args),
            reply,
        });
    }

    /// Shorthand for a successful reply with `stdout`
    pub fn ok(stdout: &str) -> Reply {
        Reply::Output(ProcessOutput::ok(stdout))
    }

    /// Shorthand for a non-zero exit with `stderr`
    pub fn fail(stderr: &str) -> Reply {
        Reply::Output(ProcessOutput::failed(stderr))
    }

    /// Makes every invocation take at least `delay`
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = delay;
    }

    pub fn calls(&self) -> Vec<(PathBuf, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls whose argument list starts with `prefix`
    pub fn calls_with(&self, prefix: &[&str]) -> Vec<(PathBuf, Vec<String>)> {
        let prefix = owned(prefix);
        self.calls()
            .into_iter()
            .filter(|(_, args)| args.starts_with(&prefix))
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Highest number of invocations that were running at the same time
    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    fn lookup(&self, location: &Path, args: &[String]) -> Option<Reply> {
        let rules = self.rules.lock().unwrap();
        let matching = |rule: &&Rule| rule.args == args;
        rules
            .iter()
            .rev()
            .filter(matching)
            .find(|rule| rule.location.as_deref() == Some(location))
            .or_else(|| {
                rules
                    .iter()
                    .rev()
                    .filter(matching)
                    .find(|rule| rule.location.is_none())
            })
            .map(|rule| rule.reply.clone())
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, location: &Path, args: &[String]) -> Result<ProcessOutput> {
        self.calls
            .lock()
            .unwrap()
            .push((location.to_path_buf(), args.to_vec()));

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        let delay = *self.delay.lock().unwrap();
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.lookup(location, args) {
            Some(Reply::Output(output)) => Ok(output),
            Some(Reply::LaunchError(message)) => Err(anyhow::anyhow!(message)),
            Some(Reply::Panic(message)) => panic!("{message}"),
            None => Ok(ProcessOutput::ok("")),
        }
    }
}
