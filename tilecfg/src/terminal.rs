//! Finds a terminal emulator for the `mod+Return` binding.
use std::env;
use std::fs;
use std::path::Path;

/// Tried in order after `$TERMINAL` (and `foot` on Wayland).
const TERMINALS: &[&str] = &[
    "roxterm",
    "sakura",
    "hyper",
    "alacritty",
    "terminator",
    "termite",
    "gnome-terminal",
    "konsole",
    "xfce4-terminal",
    "lxterminal",
    "mate-terminal",
    "kitty",
    "yakuake",
    "tilix",
    "guake",
    "eterm",
    "st",
    "urxvt",
    "wezterm",
    "xterm",
    "x-terminal-emulator",
];

const FALLBACK: &str = "xterm";

#[must_use]
pub fn is_program_in_path(program: &str) -> bool {
    env::var("PATH").map_or(false, |path| is_program_in(program, &path))
}

fn is_program_in(program: &str, path: &str) -> bool {
    if program.contains('/') {
        return Path::new(program).is_file();
    }
    path.split(':')
        .filter(|dir| !dir.is_empty())
        .any(|dir| fs::metadata(Path::new(dir).join(program)).is_ok_and(|m| m.is_file()))
}

/// Returns the preferred terminal found on this machine.
///
/// Inspects the environment once; the result is baked into the key bindings.
#[must_use]
pub fn guess_terminal() -> String {
    let path = env::var("PATH").unwrap_or_default();
    let preference = env::var("TERMINAL").ok();
    let wayland = env::var_os("WAYLAND_DISPLAY").is_some();
    guess_terminal_in(&path, preference.as_deref(), wayland)
}

fn guess_terminal_in(path: &str, preference: Option<&str>, wayland: bool) -> String {
    let candidates = preference
        .into_iter()
        .chain(wayland.then_some("foot"))
        .chain(TERMINALS.iter().copied());
    for terminal in candidates {
        if is_program_in(terminal, path) {
            tracing::debug!("Using terminal {}", terminal);
            return terminal.to_owned();
        }
    }
    tracing::error!("No terminal found in PATH, falling back to {}", FALLBACK);
    FALLBACK.to_owned()
}
