use crate::models::ColorRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Options every widget accepts.
pub const COMMON_OPTIONS: &[&str] = &[
    "foreground",
    "background",
    "font",
    "fontsize",
    "padding",
    "fmt",
    "name",
];

/// Status bar elements known to the host.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    GroupBox,
    CurrentLayoutIcon,
    CurrentLayout,
    WindowName,
    Prompt,
    TextBox,
    Backlight,
    Sep,
    Battery,
    Cpu,
    Memory,
    Df,
    KeyboardLayout,
    PulseVolume,
    Wlan,
    Clock,
    Systray,
    StatusNotifier,
    Spacer,
}

impl WidgetKind {
    /// The default name a widget is addressed by from key bindings.
    pub fn name(self) -> &'static str {
        match self {
            Self::GroupBox => "groupbox",
            Self::CurrentLayoutIcon => "currentlayouticon",
            Self::CurrentLayout => "currentlayout",
            Self::WindowName => "windowname",
            Self::Prompt => "prompt",
            Self::TextBox => "textbox",
            Self::Backlight => "backlight",
            Self::Sep => "sep",
            Self::Battery => "battery",
            Self::Cpu => "cpu",
            Self::Memory => "memory",
            Self::Df => "df",
            Self::KeyboardLayout => "keyboardlayout",
            Self::PulseVolume => "pulsevolume",
            Self::Wlan => "wlan",
            Self::Clock => "clock",
            Self::Systray => "systray",
            Self::StatusNotifier => "statusnotifier",
            Self::Spacer => "spacer",
        }
    }

    /// Options specific to this kind, on top of [`COMMON_OPTIONS`].
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Self::GroupBox => &[
                "active",
                "inactive",
                "highlight_method",
                "highlight_color",
                "this_current_screen_border",
                "this_screen_border",
                "other_current_screen_border",
                "other_screen_border",
                "urgent_border",
                "block_highlight_text_color",
                "borderwidth",
                "rounded",
                "disable_drag",
                "hide_unused",
                "visible_groups",
                "margin_x",
                "margin_y",
            ],
            Self::CurrentLayoutIcon => &["scale", "custom_icon_paths"],
            Self::CurrentLayout => &[],
            Self::Systray | Self::StatusNotifier => &["icon_size"],
            Self::WindowName => &[
                "format",
                "empty_group_string",
                "for_current_screen",
                "max_chars",
            ],
            Self::Prompt => &["prompt", "cursor", "cursor_color"],
            Self::TextBox => &["text"],
            Self::Backlight => &[
                "backlight_name",
                "brightness_file",
                "max_brightness_file",
                "change_command",
                "step",
                "min_brightness",
                "format",
                "update_interval",
            ],
            Self::Sep => &["linewidth", "size_percent"],
            Self::Battery => &[
                "battery",
                "low_background",
                "low_foreground",
                "low_percentage",
                "empty_char",
                "full_char",
                "charge_char",
                "discharge_char",
                "not_charging_char",
                "unknown_char",
                "show_short_text",
                "notify_below",
                "hide_threshold",
                "format",
                "update_interval",
            ],
            Self::Cpu => &["format", "update_interval"],
            Self::Memory => &["measure_mem", "measure_swap", "format", "update_interval"],
            Self::Df => &[
                "partition",
                "visible_on_warn",
                "warn_space",
                "warn_color",
                "measure",
                "format",
                "update_interval",
            ],
            Self::KeyboardLayout => &["configured_keyboards", "display_map", "option"],
            Self::PulseVolume => &[
                "mute_command",
                "volume_up_command",
                "volume_down_command",
                "get_volume_command",
                "step",
                "volume_app",
                "emoji",
                "limit_max_volume",
                "update_interval",
            ],
            Self::Wlan => &[
                "interface",
                "disconnected_message",
                "format",
                "update_interval",
            ],
            Self::Clock => &["format", "timezone", "update_interval"],
            Self::Spacer => &["length"],
        }
    }

    /// Methods key bindings may call through [`crate::Command::Widget`].
    pub fn methods(self) -> &'static [&'static str] {
        match self {
            Self::KeyboardLayout => &["next_keyboard"],
            Self::PulseVolume => &["mute", "increase_vol", "decrease_vol", "run_app"],
            Self::Backlight => &["change_backlight"],
            Self::TextBox => &["update"],
            Self::Prompt => &["exec_general"],
            Self::Battery | Self::Cpu | Self::Memory | Self::Df | Self::Wlan | Self::Clock => {
                &["force_update"]
            }
            _ => &[],
        }
    }

    pub fn accepts(self, option: &str) -> bool {
        COMMON_OPTIONS.contains(&option) || self.options().contains(&option)
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value passed to a widget option.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum OptionValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Color(ColorRef),
    List(Vec<String>),
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for OptionValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<ColorRef> for OptionValue {
    fn from(c: ColorRef) -> Self {
        Self::Color(c)
    }
}

impl From<&[&str]> for OptionValue {
    fn from(items: &[&str]) -> Self {
        Self::List(items.iter().map(|s| (*s).to_owned()).collect())
    }
}

/// A widget and the options it was given. The host instantiates and drives it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Widget {
    pub kind: WidgetKind,
    #[serde(default)]
    pub options: BTreeMap<String, OptionValue>,
}

impl Widget {
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            options: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, option: &str, value: impl Into<OptionValue>) -> Self {
        self.options.insert(option.to_owned(), value.into());
        self
    }

    /// The `name` option when given, otherwise the kind's default name.
    pub fn name(&self) -> &str {
        match self.options.get("name") {
            Some(OptionValue::Str(name)) => name,
            _ => self.kind.name(),
        }
    }

    pub fn option(&self, option: &str) -> Option<&OptionValue> {
        self.options.get(option)
    }

    pub fn colors(&self) -> impl Iterator<Item = (&str, &ColorRef)> {
        self.options.iter().filter_map(|(k, v)| match v {
            OptionValue::Color(c) => Some((k.as_str(), c)),
            _ => None,
        })
    }

    /// Options this widget's kind does not know about.
    pub fn unknown_options(&self) -> impl Iterator<Item = &str> {
        self.options
            .keys()
            .map(String::as_str)
            .filter(|k| !self.kind.accepts(k))
    }

    pub fn exposes(&self, method: &str) -> bool {
        self.kind.methods().contains(&method)
    }
}
