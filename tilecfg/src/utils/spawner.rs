//! A minimal [`Host`] that only knows how to launch processes.
//!
//! Window and layout commands need the window manager itself, so this host reports
//! them as unsupported, or only prints them on a dry run. It is what
//! `tilecfg-command` uses to try a binding from a terminal.
use std::process::{Child, Command as Process, Stdio};
use tilecfg_core::{errors::HostError, Backend, Command, Host};

#[derive(Debug, Default)]
pub struct SpawnHost {
    backend: Option<Backend>,
    /// Print what would run instead of running it.
    pub dry_run: bool,
    /// Command lines handed over, in order, including dry runs.
    pub spawned: Vec<Vec<String>>,
    /// Children not yet waited for. Exited ones are reaped on the next spawn or
    /// by [`SpawnHost::reap`]; the rest are left running when the host is dropped.
    children: Vec<Child>,
}

impl SpawnHost {
    pub fn new(backend: Option<Backend>) -> Self {
        Self {
            backend,
            ..Self::default()
        }
    }

    /// Uses the backend of the current session: Wayland when `WAYLAND_DISPLAY` is
    /// set, X11 when `DISPLAY` is, unknown otherwise.
    pub fn detect() -> Self {
        let backend = if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Some(Backend::Wayland)
        } else if std::env::var_os("DISPLAY").is_some() {
            Some(Backend::X11)
        } else {
            None
        };
        Self::new(backend)
    }

    /// Waits for children that already exited, returning how many are still running.
    pub fn reap(&mut self) -> usize {
        self.children.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                tracing::debug!("Child {} exited with {status}", child.id());
                false
            }
            Ok(None) => true,
            Err(err) => {
                tracing::warn!("Could not wait for child {}: {err}", child.id());
                false
            }
        });
        self.children.len()
    }

    fn spawn(&mut self, cmd: &str, shell: bool) -> Result<(), HostError> {
        self.reap();
        let argv = command_line(cmd, shell)?;
        self.spawned.push(argv.clone());
        if self.dry_run {
            println!("{}", shell_words::join(&argv));
            return Ok(());
        }
        let child = exec(&argv).map_err(|source| HostError::Spawn {
            cmd: cmd.to_owned(),
            source,
        })?;
        tracing::debug!("Spawned `{}` as {}", cmd, child.id());
        self.children.push(child);
        Ok(())
    }
}

impl Host for SpawnHost {
    fn backend(&self) -> Option<Backend> {
        self.backend
    }

    fn execute(&mut self, command: &Command) -> Result<(), HostError> {
        match command {
            Command::Spawn { cmd, shell } => self.spawn(cmd, *shell),
            other if self.dry_run => {
                println!("{other}");
                Ok(())
            }
            other => {
                tracing::info!("Not running {other}: it needs the window manager");
                Err(HostError::Unsupported(other.to_string()))
            }
        }
    }
}

/// Turns a spawn command into argv. Shell commands go to `sh -c` untouched so
/// pipes and `~` keep working; plain ones are split like a shell would.
pub fn command_line(cmd: &str, shell: bool) -> Result<Vec<String>, HostError> {
    if shell {
        return Ok(vec!["sh".to_owned(), "-c".to_owned(), cmd.to_owned()]);
    }
    let argv = shell_words::split(cmd).map_err(|_| HostError::CommandLine(cmd.to_owned()))?;
    if argv.is_empty() {
        return Err(HostError::CommandLine(cmd.to_owned()));
    }
    Ok(argv)
}

// Assumes STDIN/STDERR/STDOUT unwanted.
fn exec(argv: &[String]) -> std::io::Result<Child> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::InvalidInput))?;
    Process::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
}
