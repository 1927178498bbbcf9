use super::Config;
use crate::palette::PALETTE_SIZE;
use std::collections::HashMap;
use std::fmt;
use tilecfg_core::{
    config::{KeyBinding, ModifierSet},
    errors::ConfigError,
    models::ColorRef,
    utils::keysym_lookup,
    Command,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// The host tolerates it, but it is probably a mistake.
    Warning,
    /// The host would refuse to start.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "ERROR: {}", self.message),
            Severity::Warning => write!(f, "WARN: {}", self.message),
        }
    }
}

impl Config {
    /// Runs every check and returns what they found, errors and warnings mixed,
    /// in check order.
    pub fn check(&self) -> Vec<Issue> {
        let mut issues = Vec::new();
        issues.extend(self.check_palette());
        issues.extend(self.check_colors());
        issues.extend(self.check_groups());
        issues.extend(self.check_keybinds());
        issues.extend(self.check_mouse());
        issues.extend(self.check_layouts());
        issues.extend(self.check_screens());
        issues.extend(self.check_log_level());
        issues
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when any check reports an error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let issues = self.check();
        for warning in issues.iter().filter(|i| !i.is_error()) {
            tracing::warn!("{}", warning.message);
        }
        let errors: Vec<&Issue> = issues.iter().filter(|i| i.is_error()).collect();
        match errors.first() {
            None => Ok(()),
            Some(first) => {
                for error in &errors {
                    tracing::error!("{}", error.message);
                }
                Err(ConfigError::Invalid {
                    count: errors.len(),
                    first: first.message.clone(),
                })
            }
        }
    }

    pub fn check_palette(&self) -> Vec<Issue> {
        if self.palette.len() == PALETTE_SIZE {
            vec![]
        } else {
            vec![Issue::error(format!(
                "Palette has {} colors, expected {PALETTE_SIZE}",
                self.palette.len()
            ))]
        }
    }

    /// Every palette reference must point inside the palette.
    pub fn check_colors(&self) -> Vec<Issue> {
        let mut refs: Vec<(String, &ColorRef)> = Vec::new();
        for (name, color) in ["border_focus", "border_normal"]
            .into_iter()
            .zip(self.layout_theme.colors())
        {
            refs.push((format!("layout_theme.{name}"), color));
        }
        for layout in &self.layouts {
            for color in layout.style.colors() {
                refs.push((format!("layout {}", layout.kind), color));
            }
        }
        if let Some(style) = &self.floating_layout.style {
            for color in style.colors() {
                refs.push(("floating layout".to_owned(), color));
            }
        }
        for (i, screen) in self.screens.iter().enumerate() {
            for bar in screen.bars() {
                if let Some(background) = &bar.background {
                    refs.push((format!("screen {i} bar background"), background));
                }
                for widget in &bar.widgets {
                    for (option, color) in widget.colors() {
                        refs.push((format!("widget {} option {option}", widget.name()), color));
                    }
                }
            }
        }

        refs.into_iter()
            .filter_map(|(place, color)| {
                self.palette
                    .resolve(color)
                    .err()
                    .map(|err| Issue::error(format!("{place}: {err}")))
            })
            .collect()
    }

    pub fn check_groups(&self) -> Vec<Issue> {
        let mut issues = Vec::new();
        let mut seen = Vec::new();
        for group in &self.groups {
            if group.name.is_empty() {
                issues.push(Issue::error("Group with an empty name"));
            } else if seen.contains(&group.name.as_str()) {
                issues.push(Issue::error(format!("Group `{}` is defined twice", group.name)));
            } else {
                seen.push(group.name.as_str());
            }
        }
        issues
    }

    /// Checks that every binding has a valid key and something to do, and that the
    /// groups and widgets its commands refer to exist.
    pub fn check_keybinds(&self) -> Vec<Issue> {
        let mut issues = Vec::new();
        // Known keys are compared by keysym so `return` and `Return` collide.
        let mut bindings: HashMap<(ModifierSet, Result<u32, &str>), &KeyBinding> = HashMap::new();
        for keybind in &self.keys {
            if keybind.key.is_empty() {
                issues.push(Issue::error(format!("Binding on `{keybind}` has no key")));
            } else if keysym_lookup::into_keysym(&keybind.key).is_none() {
                issues.push(Issue::warning(format!(
                    "Key `{}` is not a known keysym",
                    keybind.key
                )));
            }
            if keybind.commands.is_empty() {
                issues.push(Issue::error(format!("Binding `{keybind}` has no commands")));
            }
            for call in &keybind.commands {
                issues.extend(self.check_command(keybind, &call.command));
            }

            let key = keybind.keysym().ok_or(keybind.key.as_str());
            let combination = (keybind.modifiers.normalized(), key);
            if let Some(previous) = bindings.insert(combination, keybind) {
                issues.push(Issue::warning(format!(
                    "Multiple commands bound to key combination {keybind}: {:?} is replaced by {:?}",
                    previous.desc, keybind.desc,
                )));
            }
        }
        issues
    }

    fn check_command(&self, keybind: &KeyBinding, command: &Command) -> Option<Issue> {
        use tilecfg_core::Config as _;

        if let Some(group) = command.group() {
            if !self.has_group(group) {
                return Some(Issue::error(format!(
                    "Binding `{keybind}` refers to unknown group `{group}`"
                )));
            }
        }
        match command {
            Command::Widget { widget, method, .. } => match self.find_widget(widget) {
                None => Some(Issue::error(format!(
                    "Binding `{keybind}` refers to widget `{widget}` which is on no bar"
                ))),
                Some(w) if !w.exposes(method) => Some(Issue::error(format!(
                    "Binding `{keybind}`: widget `{widget}` has no method `{method}`"
                ))),
                Some(_) => None,
            },
            Command::Spawn { cmd, .. } if cmd.trim().is_empty() => Some(Issue::error(format!(
                "Binding `{keybind}` spawns an empty command"
            ))),
            _ => None,
        }
    }

    pub fn check_mouse(&self) -> Vec<Issue> {
        let mut issues = Vec::new();
        let mut seen = Vec::new();
        for binding in &self.mouse {
            let combination = (binding.modifiers().normalized(), binding.button());
            if seen.contains(&combination) {
                issues.push(Issue::warning(format!(
                    "Mouse button {} with `{}` is bound twice",
                    combination.1, combination.0
                )));
            } else {
                seen.push(combination);
            }
        }
        issues
    }

    pub fn check_layouts(&self) -> Vec<Issue> {
        if self.layouts.is_empty() {
            return vec![Issue::error("No layouts defined")];
        }
        self.layouts
            .iter()
            .filter(|layout| layout.style != self.layout_theme)
            .map(|layout| {
                Issue::warning(format!(
                    "Layout {} does not use the shared layout theme",
                    layout.kind
                ))
            })
            .collect()
    }

    pub fn check_screens(&self) -> Vec<Issue> {
        if self.screens.is_empty() {
            return vec![Issue::error("No screens defined")];
        }
        let mut issues = Vec::new();
        for (i, screen) in self.screens.iter().enumerate() {
            for bar in screen.bars() {
                if !(0.0..=1.0).contains(&bar.opacity) {
                    issues.push(Issue::error(format!(
                        "Screen {i}: bar opacity {} is outside 0..=1",
                        bar.opacity
                    )));
                }
                for widget in &bar.widgets {
                    for option in widget.unknown_options() {
                        issues.push(Issue::error(format!(
                            "Screen {i}: widget {} has no option `{option}`",
                            widget.kind
                        )));
                    }
                }
            }
        }
        issues
    }

    pub fn check_log_level(&self) -> Vec<Issue> {
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) => vec![],
            Err(err) => vec![Issue::error(format!("Log level is invalid: {err}"))],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilecfg_core::config::{Modifier, OptionValue, Widget, WidgetKind};
    use tilecfg_core::models::Palette;

    fn config() -> Config {
        Config::assemble("xterm")
    }

    #[test]
    fn assembled_config_has_no_errors() {
        let issues = config().check();
        assert!(issues.iter().all(|i| !i.is_error()), "{issues:?}");
        assert!(config().validate().is_ok());
    }

    #[test]
    fn assembled_config_has_no_duplicate_bindings() {
        let warnings: Vec<_> = config()
            .check_keybinds()
            .into_iter()
            .filter(|i| i.message.starts_with("Multiple commands"))
            .collect();
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn duplicates_differing_only_in_key_case() {
        let mut config = config();
        config.keys.push(KeyBinding::new(
            [Modifier::Mod4],
            "return",
            Command::spawn("xterm -e htop"),
        ));
        let warnings: Vec<_> = config
            .check_keybinds()
            .into_iter()
            .filter(|i| i.message.starts_with("Multiple commands"))
            .collect();
        assert_eq!(warnings.len(), 1, "{warnings:?}");
    }

    #[test]
    fn palette_must_have_sixteen_colors() {
        let mut config = config();
        config.palette = Palette::from_hex(&["#000000"]).unwrap();
        assert_eq!(config.check_palette().len(), 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn color_index_out_of_bounds() {
        let mut config = config();
        config.layout_theme.border_focus = ColorRef::Palette(16);
        config.layouts[1].style.border_normal = ColorRef::Palette(99);
        let issues = config.check_colors();
        assert_eq!(issues.len(), 2, "{issues:?}");
        assert!(issues[1].message.starts_with("layout max"));
    }

    #[test]
    fn widget_color_out_of_bounds() {
        let mut config = config();
        let bar = config.screens[0].top.as_mut().unwrap();
        bar.widgets
            .push(Widget::new(WidgetKind::TextBox).with("foreground", ColorRef::Palette(20)));
        assert_eq!(config.check_colors().len(), 1);
    }

    #[test]
    fn duplicate_binding_is_a_warning() {
        let mut config = config();
        config.keys.push(
            KeyBinding::new([Modifier::Mod4], "Return", Command::spawn("foot")).desc("Other"),
        );
        let issues = config.check_keybinds();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn duplicate_detection_ignores_modifier_order() {
        let mut config = config();
        config.keys.push(KeyBinding::new(
            [Modifier::Shift, Modifier::Mod4],
            "h",
            Command::NextLayout,
        ));
        assert_eq!(config.check_keybinds().len(), 1);
    }

    #[test]
    fn unknown_group_is_an_error() {
        let mut config = config();
        config.groups.pop();
        let issues: Vec<_> = config
            .check_keybinds()
            .into_iter()
            .filter(Issue::is_error)
            .collect();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.message.contains("unknown group `9`")));
    }

    #[test]
    fn widget_calls_must_resolve() {
        let mut config = config();
        config.keys.push(KeyBinding::new(
            [Modifier::Mod4],
            "v",
            Command::widget("pulsevolume", "explode"),
        ));
        config.keys.push(KeyBinding::new(
            [Modifier::Mod4],
            "b",
            Command::widget("backlight_missing", "change_backlight"),
        ));
        let errors: Vec<_> = config
            .check_keybinds()
            .into_iter()
            .filter(Issue::is_error)
            .collect();
        assert_eq!(errors.len(), 2, "{errors:?}");
    }

    #[test]
    fn removing_a_widget_breaks_its_bindings() {
        let mut config = config();
        let bar = config.screens[0].top.as_mut().unwrap();
        bar.widgets.retain(|w| w.kind != WidgetKind::PulseVolume);
        let errors = config
            .check()
            .into_iter()
            .filter(Issue::is_error)
            .count();
        assert_eq!(errors, 3);
    }

    #[test]
    fn unknown_key_is_a_warning() {
        let mut config = config();
        config
            .keys
            .push(KeyBinding::new([Modifier::Mod4], "Hyper_Q", Command::NextLayout));
        let issues = config.check_keybinds();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn binding_without_commands_is_an_error() {
        let mut config = config();
        let mut binding = KeyBinding::new([Modifier::Mod4], "x", Command::NextLayout);
        binding.commands.clear();
        config.keys.push(binding);
        assert!(config.validate().is_err());
    }

    #[test]
    fn misspelled_widget_option_is_an_error() {
        let mut config = config();
        let bar = config.screens[0].top.as_mut().unwrap();
        bar.widgets
            .push(Widget::new(WidgetKind::Df).with("partiotion", OptionValue::from("/")));
        let issues = config.check_screens();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("partiotion"));
    }

    #[test]
    fn bar_opacity_range() {
        let mut config = config();
        config.screens[0].top.as_mut().unwrap().opacity = 1.5;
        assert_eq!(config.check_screens().len(), 1);
    }

    #[test]
    fn diverging_layout_style_is_a_warning() {
        let mut config = config();
        config.layouts[2].style.margin = 0;
        let issues = config.check_layouts();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        config.layouts.clear();
        assert!(config.check_layouts()[0].is_error());
    }

    #[test]
    fn duplicate_group_is_an_error() {
        let mut config = config();
        let first = config.groups[0].clone();
        config.groups.push(first);
        assert_eq!(config.check_groups().len(), 1);
    }

    #[test]
    fn invalid_log_level() {
        let mut config = config();
        config.log_level = "info,tilecfg=loud".to_owned();
        assert_eq!(config.check_log_level().len(), 1);
    }

    #[test]
    fn duplicate_mouse_binding_is_a_warning() {
        let mut config = config();
        let first = config.mouse[0].clone();
        config.mouse.push(first);
        let issues = config.check_mouse();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }
}
