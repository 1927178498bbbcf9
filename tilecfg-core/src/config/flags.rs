use serde::{Deserialize, Serialize};

/// What happens when a window asks to be activated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusOnActivation {
    /// Focus if the window is on the current group, otherwise mark it urgent.
    #[default]
    Smart,
    Focus,
    Urgent,
    Never,
}

/// Whether clicking a window raises it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BringFrontClick {
    #[default]
    Never,
    Always,
    FloatingOnly,
}

/// Independent global behaviour switches.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Flags {
    pub follow_mouse_focus: bool,
    pub bring_front_click: BringFrontClick,
    pub floats_kept_above: bool,
    pub cursor_warp: bool,
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnActivation,
    pub reconfigure_screens: bool,
    /// Let clients such as games minimize themselves when they lose focus.
    pub auto_minimize: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            follow_mouse_focus: true,
            bring_front_click: BringFrontClick::Never,
            floats_kept_above: true,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: FocusOnActivation::Smart,
            reconfigure_screens: true,
            auto_minimize: true,
        }
    }
}
