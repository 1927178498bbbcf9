mod bar;
mod flags;
mod floating;
mod group;
mod keybind;
mod layout;
mod mouse;
mod widget;

pub use bar::{Bar, Screen, WidgetDefaults};
pub use flags::{BringFrontClick, Flags, FocusOnActivation};
pub use floating::{default_float_rules, FloatingLayout, Match, Matcher, WindowPredicate};
pub use group::{groups_from_chars, Group};
pub use keybind::{KeyBinding, Modifier, ModifierSet};
pub use layout::{Layout, LayoutKind, LayoutStyle, ParseLayoutError, LAYOUT_KINDS};
pub use mouse::{Button, MouseBinding};
pub use widget::{OptionValue, Widget, WidgetKind, COMMON_OPTIONS};

use crate::models::Palette;

/// Everything the host reads from a configuration, once per start or reload.
pub trait Config {
    fn keys(&self) -> &[KeyBinding];
    fn mouse(&self) -> &[MouseBinding];
    fn groups(&self) -> &[Group];
    fn layouts(&self) -> &[Layout];
    fn floating_layout(&self) -> &FloatingLayout;
    fn screens(&self) -> &[Screen];
    fn palette(&self) -> &Palette;
    fn widget_defaults(&self) -> &WidgetDefaults;
    fn extension_defaults(&self) -> &WidgetDefaults;
    fn flags(&self) -> &Flags;
    /// Name announced to clients through `_NET_WM_NAME` on the supporting window.
    fn wmname(&self) -> &str;

    fn dgroups_key_binder(&self) -> Option<&str> {
        None
    }

    fn dgroups_app_rules(&self) -> &[Match] {
        &[]
    }

    /// The widget called `name` on any bar of any screen.
    fn find_widget(&self, name: &str) -> Option<&Widget> {
        self.screens()
            .iter()
            .flat_map(Screen::bars)
            .find_map(|bar| bar.widget(name))
    }

    fn has_group(&self, name: &str) -> bool {
        self.groups().iter().any(|g| g.name == name)
    }
}
