use super::keybind::ModifierSet;
use crate::Command;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Main button (left click for right-handed)
    Button1,
    /// Middle button (pressing the scroll wheel)
    Button2,
    /// Secondary button (right click for right-handed)
    Button3,
    /// Scroll wheel up
    Button4,
    /// Scroll wheel down
    Button5,
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Pointer bindings. Drags are what move and resize floating windows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum MouseBinding {
    /// `start` runs when the button goes down, `command` on every motion event.
    Drag {
        modifiers: ModifierSet,
        button: Button,
        command: Command,
        start: Option<Command>,
    },
    Click {
        modifiers: ModifierSet,
        button: Button,
        command: Command,
    },
}

impl MouseBinding {
    pub fn drag(
        modifiers: impl Into<ModifierSet>,
        button: Button,
        command: Command,
        start: Command,
    ) -> Self {
        Self::Drag {
            modifiers: modifiers.into(),
            button,
            command,
            start: Some(start),
        }
    }

    pub fn click(modifiers: impl Into<ModifierSet>, button: Button, command: Command) -> Self {
        Self::Click {
            modifiers: modifiers.into(),
            button,
            command,
        }
    }

    pub fn modifiers(&self) -> &ModifierSet {
        match self {
            Self::Drag { modifiers, .. } | Self::Click { modifiers, .. } => modifiers,
        }
    }

    pub fn button(&self) -> Button {
        match self {
            Self::Drag { button, .. } | Self::Click { button, .. } => *button,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::Modifier;
    use crate::WindowCommand;

    #[test]
    fn accessors_cover_both_kinds() {
        let drag = MouseBinding::drag(
            [Modifier::Mod4],
            Button::Button1,
            Command::Window(WindowCommand::SetPositionFloating),
            Command::Window(WindowCommand::GetPosition),
        );
        let click = MouseBinding::click(
            [Modifier::Mod4],
            Button::Button2,
            Command::Window(WindowCommand::BringToFront),
        );
        assert_eq!(drag.button(), Button::Button1);
        assert_eq!(click.button(), Button::Button2);
        assert_eq!(drag.modifiers(), click.modifiers());
        assert_eq!(Button::Button3.to_string(), "Button3");
    }
}
