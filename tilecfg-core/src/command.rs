use serde::{Deserialize, Serialize};
use std::fmt;

/// A deferred command. Nothing runs when a binding is built; the host executes the
/// command once the binding is triggered.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    /// Launch an external process. With `shell` set the command line is handed to
    /// `sh -c`, otherwise it is split into argv.
    Spawn {
        cmd: String,
        #[serde(default)]
        shell: bool,
    },
    Layout(LayoutCommand),
    Window(WindowCommand),
    GroupToScreen(String),
    NextLayout,
    PreviousLayout,
    ReloadConfig,
    Shutdown,
    ChangeVt(u8),
    /// Call a method exposed by a bar widget, addressed by the widget's name.
    Widget {
        widget: String,
        method: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum LayoutCommand {
    Left,
    Right,
    Up,
    Down,
    Next,
    ShuffleLeft,
    ShuffleRight,
    ShuffleUp,
    ShuffleDown,
    GrowLeft,
    GrowRight,
    GrowUp,
    GrowDown,
    Normalize,
    ToggleSplit,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum WindowCommand {
    Kill,
    ToggleFullscreen,
    ToggleFloating,
    SetPositionFloating,
    SetSizeFloating,
    GetPosition,
    GetSize,
    BringToFront,
    ToGroup { group: String, switch_group: bool },
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Backend {
    X11,
    Wayland,
}

/// Condition checked by the dispatcher right before the guarded command runs.
///
/// Some facts (the active backend) only exist once the host is running, so a guard
/// is never evaluated while the configuration is assembled.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Guard {
    Backend(Backend),
}

impl Guard {
    /// A host that cannot answer yet makes the guard fail closed.
    pub fn evaluate(self, backend: Option<Backend>) -> bool {
        match self {
            Self::Backend(expected) => backend == Some(expected),
        }
    }
}

/// A command together with its optional guard.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct LazyCall {
    pub command: Command,
    #[serde(default)]
    pub guard: Option<Guard>,
}

impl Command {
    pub fn spawn(cmd: impl Into<String>) -> Self {
        Self::Spawn {
            cmd: cmd.into(),
            shell: false,
        }
    }

    pub fn spawn_shell(cmd: impl Into<String>) -> Self {
        Self::Spawn {
            cmd: cmd.into(),
            shell: true,
        }
    }

    pub fn widget(widget: impl Into<String>, method: impl Into<String>) -> Self {
        Self::Widget {
            widget: widget.into(),
            method: method.into(),
            args: vec![],
        }
    }

    pub fn when(self, guard: Guard) -> LazyCall {
        LazyCall {
            command: self,
            guard: Some(guard),
        }
    }

    /// The group this command refers to, if any.
    pub fn group(&self) -> Option<&str> {
        match self {
            Self::GroupToScreen(group) | Self::Window(WindowCommand::ToGroup { group, .. }) => {
                Some(group)
            }
            _ => None,
        }
    }
}

impl From<Command> for LazyCall {
    fn from(command: Command) -> Self {
        Self {
            command,
            guard: None,
        }
    }
}

impl LazyCall {
    pub fn allowed(&self, backend: Option<Backend>) -> bool {
        self.guard.map_or(true, |guard| guard.evaluate(backend))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn { cmd, shell: true } => write!(f, "spawn (shell) `{cmd}`"),
            Self::Spawn { cmd, shell: false } => write!(f, "spawn `{cmd}`"),
            Self::Layout(cmd) => write!(f, "layout.{cmd:?}"),
            Self::Window(WindowCommand::ToGroup {
                group,
                switch_group,
            }) => write!(f, "window.togroup({group}, switch_group={switch_group})"),
            Self::Window(cmd) => write!(f, "window.{cmd:?}"),
            Self::GroupToScreen(group) => write!(f, "group[{group}].toscreen"),
            Self::ChangeVt(vt) => write!(f, "core.change_vt({vt})"),
            Self::Widget {
                widget,
                method,
                args,
            } => write!(f, "widget[{widget}].{method}({})", args.join(", ")),
            other => write!(f, "{other:?}"),
        }
    }
}
