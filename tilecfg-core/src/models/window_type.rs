use serde::{Deserialize, Serialize};

/// `_NET_WM_WINDOW_TYPE` as seen by float rules.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    Desktop,
    Dock,
    Toolbar,
    Menu,
    Utility,
    Splash,
    Dialog,
    Notification,
    Normal,
}
