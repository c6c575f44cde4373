//! Scripted stand-in for the OS used by the unit tests.

use std::collections::VecDeque;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;

use crate::platform::{Decision, Platform, PromptKind};

/// Unwind payload standing in for process termination.
#[derive(Debug)]
pub struct Terminated(pub u32);

#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub title: String,
    pub message: String,
}

/// Answers prompts from a script and records everything asked of it.
/// Without scripted answers every prompt comes back `Unavailable`.
#[derive(Debug, Default)]
pub struct ScriptedPlatform {
    documents: Option<PathBuf>,
    answers: Mutex<VecDeque<Decision>>,
    prompts: Mutex<Vec<Prompt>>,
    terminations: Mutex<Vec<u32>>,
}

impl ScriptedPlatform {
    pub fn with_documents(dir: &Path) -> Self {
        Self {
            documents: Some(dir.to_path_buf()),
            ..Self::default()
        }
    }

    pub fn answering(answers: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn prompts(&self) -> Vec<Prompt> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn terminations(&self) -> Vec<u32> {
        self.terminations.lock().unwrap().clone()
    }
}

impl Platform for ScriptedPlatform {
    fn resolve_log_directory(&self) -> anyhow::Result<PathBuf> {
        self.documents.clone().context("no documents folder")
    }

    fn prompt_user(&self, kind: PromptKind, title: &str, message: &str) -> Decision {
        self.prompts.lock().unwrap().push(Prompt {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Decision::Unavailable)
    }

    fn terminate_process(&self, code: u32) -> ! {
        self.terminations.lock().unwrap().push(code);
        panic::resume_unwind(Box::new(Terminated(code)))
    }
}

/// Runs `f`, which must end in [`Platform::terminate_process`], and returns
/// the exit code it asked for.
pub fn expect_termination(f: impl FnOnce()) -> u32 {
    let payload = panic::catch_unwind(AssertUnwindSafe(f))
        .expect_err("call returned instead of terminating the process");
    match payload.downcast::<Terminated>() {
        Ok(t) => t.0,
        Err(other) => panic::resume_unwind(other),
    }
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
