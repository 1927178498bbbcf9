//! Trigger-time side of key bindings.
use crate::config::{KeyBinding, ModifierSet};
use crate::errors::HostError;
use crate::{Backend, Command};

/// The running window manager, as seen by a triggered binding.
pub trait Host {
    /// The active display backend, `None` while the host is still starting.
    fn backend(&self) -> Option<Backend>;

    /// Run one command. Failures are reported, never retried.
    fn execute(&mut self, command: &Command) -> Result<(), HostError>;
}

/// Outcome of one trigger.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dispatched {
    pub fired: usize,
    /// Commands whose guard did not hold.
    pub skipped: usize,
    pub failed: usize,
}

/// Runs the commands of `binding` in order. Each guard is evaluated right before
/// its own command, so a command may change what a later guard sees. A failing
/// command is logged and does not stop the rest.
pub fn dispatch<H: Host>(binding: &KeyBinding, host: &mut H) -> Dispatched {
    let mut outcome = Dispatched::default();
    for call in &binding.commands {
        if !call.allowed(host.backend()) {
            tracing::debug!("Guard {:?} blocked {} on {}", call.guard, call.command, binding);
            outcome.skipped += 1;
            continue;
        }
        match host.execute(&call.command) {
            Ok(()) => outcome.fired += 1,
            Err(err) => {
                tracing::warn!("{} failed on {}: {}", call.command, binding, err);
                outcome.failed += 1;
            }
        }
    }
    outcome
}

/// The binding the host ends up with for a combination. Duplicates are tolerated and
/// the last registration wins.
pub fn find_binding<'a>(
    keys: &'a [KeyBinding],
    modifiers: &ModifierSet,
    key: &str,
) -> Option<&'a KeyBinding> {
    keys.iter().rev().find(|k| k.matches(modifiers, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Modifier;
    use crate::{Guard, LazyCall};

    #[derive(Default)]
    struct MockHost {
        backend: Option<Backend>,
        executed: Vec<Command>,
        fail_spawns: bool,
    }

    impl Host for MockHost {
        fn backend(&self) -> Option<Backend> {
            self.backend
        }

        fn execute(&mut self, command: &Command) -> Result<(), HostError> {
            if self.fail_spawns && matches!(command, Command::Spawn { .. }) {
                return Err(HostError::Unsupported(command.to_string()));
            }
            self.executed.push(command.clone());
            Ok(())
        }
    }

    fn vt_binding() -> KeyBinding {
        KeyBinding::new(
            [Modifier::Control, Modifier::Mod1],
            "f1",
            Command::ChangeVt(1).when(Guard::Backend(Backend::Wayland)),
        )
    }

    #[test]
    fn guarded_command_runs_on_wayland() {
        let mut host = MockHost {
            backend: Some(Backend::Wayland),
            ..MockHost::default()
        };
        let outcome = dispatch(&vt_binding(), &mut host);
        assert_eq!(outcome.fired, 1);
        assert_eq!(host.executed, [Command::ChangeVt(1)]);
    }

    #[test]
    fn guarded_command_skipped_on_x11_and_before_startup() {
        for backend in [Some(Backend::X11), None] {
            let mut host = MockHost {
                backend,
                ..MockHost::default()
            };
            let outcome = dispatch(&vt_binding(), &mut host);
            assert_eq!(outcome.skipped, 1);
            assert!(host.executed.is_empty());
        }
    }

    #[test]
    fn failure_does_not_stop_later_commands() {
        let mut binding = KeyBinding::new([Modifier::Mod4], "r", Command::spawn("rofi -show drun"));
        binding.commands.push(LazyCall::from(Command::NextLayout));
        let mut host = MockHost {
            fail_spawns: true,
            ..MockHost::default()
        };
        let outcome = dispatch(&binding, &mut host);
        assert_eq!(
            outcome,
            Dispatched {
                fired: 1,
                skipped: 0,
                failed: 1
            }
        );
        assert_eq!(host.executed, [Command::NextLayout]);
    }

    #[test]
    fn last_registration_wins() {
        let keys = vec![
            KeyBinding::new([Modifier::Mod4], "Return", Command::spawn("xterm")),
            KeyBinding::new([Modifier::Mod4], "Tab", Command::NextLayout),
            KeyBinding::new([Modifier::Mod4], "Return", Command::spawn("alacritty")),
        ];
        let found = find_binding(&keys, &ModifierSet::from([Modifier::Mod4]), "Return").unwrap();
        assert_eq!(found.commands[0].command, Command::spawn("alacritty"));
        assert!(find_binding(&keys, &ModifierSet::none(), "Return").is_none());
    }
}
