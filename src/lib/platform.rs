//! Operating system services the logger needs: where documents live, how to
//! ask the user something, and how to stop the process.
//!
//! [`NativePlatform`] talks to the real OS. Anything else implementing
//! [`Platform`] can stand in for it, which is how the escalation path is
//! exercised without modal dialogs.

use std::path::PathBuf;

/// Shape of the question put to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Yes/No choice.
    YesNo,
    /// OK-only acknowledgment.
    Acknowledge,
}

/// The user's answer to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Yes,
    No,
    Acknowledged,
    /// The prompt could not be shown or was closed without an answer.
    Unavailable,
}

pub trait Platform: Send + Sync {
    /// The user's documents folder.
    fn resolve_log_directory(&self) -> anyhow::Result<PathBuf>;

    /// Shows a blocking prompt and waits for the answer.
    fn prompt_user(&self, kind: PromptKind, title: &str, message: &str) -> Decision;

    /// Ends the whole process immediately with `code`.
    fn terminate_process(&self, code: u32) -> !;
}

/// The host operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePlatform;

impl Platform for NativePlatform {
    fn resolve_log_directory(&self) -> anyhow::Result<PathBuf> {
        native::documents_directory()
    }

    fn prompt_user(&self, kind: PromptKind, title: &str, message: &str) -> Decision {
        native::prompt(kind, title, message)
    }

    fn terminate_process(&self, code: u32) -> ! {
        native::terminate(code)
    }
}

#[cfg(windows)]
mod native {
    use super::{Decision, PromptKind};
    use anyhow::Context;
    use std::ffi::{OsStr, OsString, c_void};
    use std::os::windows::prelude::{OsStrExt, OsStringExt};
    use std::path::PathBuf;
    use windows::{
        Win32::{
            System::{
                Com::CoTaskMemFree,
                Threading::{GetCurrentProcess, TerminateProcess},
            },
            UI::{
                Shell::{FOLDERID_Documents, KF_FLAG_DEFAULT, SHGetKnownFolderPath},
                WindowsAndMessaging::{
                    IDNO, IDOK, IDYES, MB_ICONEXCLAMATION, MB_ICONSTOP, MB_OK, MB_YESNO,
                    MessageBoxW,
                },
            },
        },
        core::PCWSTR,
    };

    pub fn documents_directory() -> anyhow::Result<PathBuf> {
        let raw = unsafe { SHGetKnownFolderPath(&FOLDERID_Documents, KF_FLAG_DEFAULT, None) }
            .context("SHGetKnownFolderPath(FOLDERID_Documents) failed")?;

        let path = OsString::from_wide(unsafe { raw.as_wide() });
        unsafe { CoTaskMemFree(Some(raw.0 as *const c_void)) };

        if path.is_empty() {
            anyhow::bail!("documents folder resolved to an empty path");
        }
        Ok(PathBuf::from(path))
    }

    pub fn prompt(kind: PromptKind, title: &str, message: &str) -> Decision {
        let style = match kind {
            PromptKind::YesNo => MB_YESNO | MB_ICONEXCLAMATION,
            PromptKind::Acknowledge => MB_OK | MB_ICONSTOP,
        };

        let title = to_wide(title);
        let body = to_wide(message);
        let result = unsafe {
            MessageBoxW(
                None,
                PCWSTR(body.as_ptr()),
                PCWSTR(title.as_ptr()),
                style,
            )
        };

        match result {
            IDYES => Decision::Yes,
            IDNO => Decision::No,
            IDOK => Decision::Acknowledged,
            _ => Decision::Unavailable,
        }
    }

    pub fn terminate(code: u32) -> ! {
        unsafe {
            let _ = TerminateProcess(GetCurrentProcess(), code);
        }
        // TerminateProcess on the current process only returns on failure.
        std::process::exit(code as i32)
    }

    fn to_wide(s: &str) -> Vec<u16> {
        OsStr::new(s).encode_wide().chain(Some(0)).collect()
    }
}

#[cfg(unix)]
mod native {
    use super::{Decision, PromptKind};
    use anyhow::Context;
    use std::io::{self, BufRead, Write};
    use std::path::PathBuf;

    /// Only the `XDG_DOCUMENTS_DIR` environment variable is consulted;
    /// `~/.config/user-dirs.dirs` is not parsed. Most desktops export nothing,
    /// so `$HOME/Documents` is the path users normally get.
    pub fn documents_directory() -> anyhow::Result<PathBuf> {
        if let Some(dir) = std::env::var_os("XDG_DOCUMENTS_DIR").filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let home = std::env::var_os("HOME")
            .filter(|v| !v.is_empty())
            .context("neither XDG_DOCUMENTS_DIR nor HOME is set")?;
        Ok(PathBuf::from(home).join("Documents"))
    }

    /// Terminal stand-in for a message box. Without a terminal on stdin
    /// nobody can answer, so the prompt is reported as unavailable.
    pub fn prompt(kind: PromptKind, title: &str, message: &str) -> Decision {
        if unsafe { libc::isatty(libc::STDIN_FILENO) } != 1 {
            return Decision::Unavailable;
        }

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut err = io::stderr().lock();

        if write!(err, "==== {title} ====\n{message}").is_err() {
            return Decision::Unavailable;
        }

        loop {
            let question = match kind {
                PromptKind::YesNo => "[y/n] ",
                PromptKind::Acknowledge => "[press Enter to exit] ",
            };
            if err.write_all(question.as_bytes()).and_then(|_| err.flush()).is_err() {
                return Decision::Unavailable;
            }

            let mut answer = String::new();
            match input.read_line(&mut answer) {
                Ok(0) | Err(_) => return Decision::Unavailable,
                Ok(_) => {}
            }

            match kind {
                PromptKind::Acknowledge => return Decision::Acknowledged,
                PromptKind::YesNo => match answer.trim().to_ascii_lowercase().as_str() {
                    "y" | "yes" => return Decision::Yes,
                    "n" | "no" => return Decision::No,
                    _ => continue,
                },
            }
        }
    }

    pub fn terminate(code: u32) -> ! {
        // Like TerminateProcess: no destructors, no atexit handlers, no
        // buffered stdio flush. Only the low byte survives as the status.
        unsafe { libc::_exit(code as i32) }
    }
}

#[cfg(not(any(unix, windows)))]
mod native {
    use super::{Decision, PromptKind};
    use std::path::PathBuf;

    pub fn documents_directory() -> anyhow::Result<PathBuf> {
        anyhow::bail!("no documents folder on this platform")
    }

    pub fn prompt(_kind: PromptKind, _title: &str, _message: &str) -> Decision {
        Decision::Unavailable
    }

    pub fn terminate(code: u32) -> ! {
        std::process::exit(code as i32)
    }
}
