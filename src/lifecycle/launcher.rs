// src/lifecycle/launcher.rs

//! Starts the external program that previews an output file and reports when
//! it has exited.

use crate::config::{Config, EditorCommand};
use crate::constants::HANDOFF_DELETE_DELAY_MS;
use crate::errors::{Error, Result};
use log::{debug, info, warn};
use std::io;
use std::path::Path;
use std::process::{Child, Command};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

/// How a preview program ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewExit {
    /// The program exited. The code is `None` if it was killed by a signal.
    Exited(Option<i32>),
    /// Waiting on the program failed; it is assumed to be gone.
    WaitFailed(String),
}

/// A single-shot completion signal for one running preview.
///
/// [`PreviewHandle::wait`] consumes the handle, so completion can be observed
/// at most once.
#[derive(Debug)]
pub struct PreviewHandle {
    receiver: Receiver<PreviewExit>,
}

impl PreviewHandle {
    /// Watches `child` on a background thread and resolves when it exits.
    pub fn from_child(mut child: Child, program: String) -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let exit = match child.wait() {
                Ok(status) => {
                    debug!("Preview program '{}' exited with {}", program, status);
                    PreviewExit::Exited(status.code())
                }
                Err(e) => {
                    warn!("Failed waiting for preview program '{}': {}", program, e);
                    PreviewExit::WaitFailed(e.to_string())
                }
            };
            // The receiver may already be gone if the lifecycle was abandoned.
            let _ = sender.send(exit);
        });
        Self { receiver }
    }

    /// A handle that is already resolved with `exit`.
    pub fn completed(exit: PreviewExit) -> Self {
        let (sender, receiver) = mpsc::channel();
        let _ = sender.send(exit);
        Self { receiver }
    }

    /// A handle that resolves when the returned sender reports an exit.
    ///
    /// Lets a launcher that watches its program some other way feed the
    /// lifecycle. Dropping the sender resolves the handle with `WaitFailed`.
    pub fn pending() -> (mpsc::Sender<PreviewExit>, Self) {
        let (sender, receiver) = mpsc::channel();
        (sender, Self { receiver })
    }

    /// Blocks until the preview program has exited.
    pub fn wait(self) -> PreviewExit {
        self.receiver.recv().unwrap_or_else(|_| {
            PreviewExit::WaitFailed("preview watcher stopped without reporting".to_string())
        })
    }
}

/// Opens an output file for the operator to read.
pub trait PreviewLauncher: Send + Sync {
    /// Starts the preview of `path` and returns its completion signal.
    ///
    /// # Errors
    /// Returns `Error::Launch` if the program cannot be started.
    fn launch(&self, path: &Path) -> Result<PreviewHandle>;

    /// How long to wait after the preview exits before deleting the file, when
    /// no delay is configured.
    fn default_delete_delay(&self) -> Duration {
        Duration::ZERO
    }
}

/// The configured delay if there is one, the launcher's default otherwise.
pub fn effective_delete_delay(
    configured: Option<Duration>,
    launcher: &dyn PreviewLauncher,
) -> Duration {
    configured.unwrap_or_else(|| launcher.default_delete_delay())
}

/// The preview programs available out of the box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformLauncher {
    /// macOS: `open -W -a TextEdit <file>`, which returns once TextEdit quits.
    TextEdit,
    /// Windows: `notepad.exe <file>`.
    Notepad,
    /// The platform opener chosen by the `open` crate (`xdg-open` and friends).
    ///
    /// Many openers hand the file to another application and return at once,
    /// so deletion waits [`HANDOFF_DELETE_DELAY_MS`] by default.
    System,
    /// An operator-supplied command; the file path is appended to its arguments.
    Command(EditorCommand),
}

impl PlatformLauncher {
    /// Picks the default preview program for the host operating system.
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            PlatformLauncher::TextEdit
        } else if cfg!(windows) {
            PlatformLauncher::Notepad
        } else {
            PlatformLauncher::System
        }
    }

    /// Uses the configured editor if there is one, the platform default otherwise.
    pub fn from_config(config: &Config) -> Self {
        match &config.editor {
            Some(editor) => PlatformLauncher::Command(editor.clone()),
            None => Self::detect(),
        }
    }

    fn command(&self, path: &Path) -> Result<Command> {
        let command = match self {
            PlatformLauncher::TextEdit => {
                let mut cmd = Command::new("open");
                cmd.args(["-W", "-a", "TextEdit"]).arg(path);
                cmd
            }
            PlatformLauncher::Notepad => {
                let mut cmd = Command::new("notepad.exe");
                cmd.arg(path);
                cmd
            }
            PlatformLauncher::System => open::commands(path).into_iter().next().ok_or_else(|| {
                Error::Launch {
                    program: "system opener".to_string(),
                    source: io::Error::new(
                        io::ErrorKind::NotFound,
                        "no opener is known for this platform",
                    ),
                }
            })?,
            PlatformLauncher::Command(editor) => {
                let mut cmd = Command::new(&editor.program);
                cmd.args(&editor.args).arg(path);
                cmd
            }
        };
        Ok(command)
    }
}

impl PreviewLauncher for PlatformLauncher {
    fn launch(&self, path: &Path) -> Result<PreviewHandle> {
        let mut command = self.command(path)?;
        let program = command.get_program().to_string_lossy().into_owned();
        info!("Opening {} with '{}'", path.display(), program);

        let child = command.spawn().map_err(|source| Error::Launch {
            program: program.clone(),
            source,
        })?;
        Ok(PreviewHandle::from_child(child, program))
    }

    fn default_delete_delay(&self) -> Duration {
        match self {
            PlatformLauncher::TextEdit | PlatformLauncher::System => {
                Duration::from_millis(HANDOFF_DELETE_DELAY_MS)
            }
            PlatformLauncher::Notepad | PlatformLauncher::Command(_) => Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(program: &str, args: &[&str]) -> PlatformLauncher {
        PlatformLauncher::Command(EditorCommand {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn test_default_delete_delay_per_launcher() {
        let handoff = Duration::from_millis(HANDOFF_DELETE_DELAY_MS);
        assert_eq!(PlatformLauncher::System.default_delete_delay(), handoff);
        assert_eq!(PlatformLauncher::TextEdit.default_delete_delay(), handoff);
        assert_eq!(PlatformLauncher::Notepad.default_delete_delay(), Duration::ZERO);
        assert_eq!(editor("vim", &[]).default_delete_delay(), Duration::ZERO);
    }

    #[test]
    fn test_effective_delete_delay_prefers_configured() {
        let configured = Some(Duration::from_millis(5));
        assert_eq!(
            effective_delete_delay(configured, &PlatformLauncher::System),
            Duration::from_millis(5)
        );
        assert_eq!(
            effective_delete_delay(Some(Duration::ZERO), &PlatformLauncher::System),
            Duration::ZERO
        );
        assert_eq!(
            effective_delete_delay(None, &PlatformLauncher::System),
            Duration::from_millis(HANDOFF_DELETE_DELAY_MS)
        );
        assert_eq!(
            effective_delete_delay(None, &editor("cat", &[])),
            Duration::ZERO
        );
    }

    #[test]
    fn test_completed_handle_resolves_immediately() {
        let handle = PreviewHandle::completed(PreviewExit::Exited(Some(0)));
        assert_eq!(handle.wait(), PreviewExit::Exited(Some(0)));
    }

    #[test]
    fn test_pending_handle_resolves_from_sender() {
        let (sender, handle) = PreviewHandle::pending();
        sender.send(PreviewExit::Exited(Some(2))).unwrap();
        assert_eq!(handle.wait(), PreviewExit::Exited(Some(2)));

        let (sender, handle) = PreviewHandle::pending();
        drop(sender);
        assert!(matches!(handle.wait(), PreviewExit::WaitFailed(_)));
    }

    #[test]
    fn test_detect_matches_host() {
        let launcher = PlatformLauncher::detect();
        if cfg!(target_os = "macos") {
            assert_eq!(launcher, PlatformLauncher::TextEdit);
        } else if cfg!(windows) {
            assert_eq!(launcher, PlatformLauncher::Notepad);
        } else {
            assert_eq!(launcher, PlatformLauncher::System);
        }
    }

    #[test]
    fn test_from_config_prefers_editor() {
        let mut config = Config::new_for_test();
        assert_eq!(PlatformLauncher::from_config(&config), PlatformLauncher::detect());

        config.editor = Some(EditorCommand {
            program: "code".to_string(),
            args: vec!["--wait".to_string()],
        });
        assert_eq!(
            PlatformLauncher::from_config(&config),
            editor("code", &["--wait"])
        );
    }

    #[test]
    fn test_command_appends_path() -> anyhow::Result<()> {
        let launcher = editor("code", &["--wait"]);
        let command = launcher.command(Path::new("Output_app.txt"))?;
        assert_eq!(command.get_program(), "code");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, ["--wait", "Output_app.txt"]);
        Ok(())
    }

    #[test]
    fn test_text_edit_command_waits() -> anyhow::Result<()> {
        let command = PlatformLauncher::TextEdit.command(Path::new("Output_app.txt"))?;
        assert_eq!(command.get_program(), "open");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, ["-W", "-a", "TextEdit", "Output_app.txt"]);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_reports_exit_code() -> anyhow::Result<()> {
        let handle = editor("sh", &["-c", "exit 3", "sh"]).launch(Path::new("ignored.txt"))?;
        assert_eq!(handle.wait(), PreviewExit::Exited(Some(3)));
        Ok(())
    }

    #[test]
    fn test_launch_missing_program_fails() {
        let result = editor("codecollect-no-such-editor", &[]).launch(Path::new("x.txt"));
        match result {
            Err(Error::Launch { program, .. }) => assert_eq!(program, "codecollect-no-such-editor"),
            other => panic!("Expected Error::Launch, got {:?}", other),
        }
    }
}
