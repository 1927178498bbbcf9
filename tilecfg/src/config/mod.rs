//! The assembled configuration and how it is loaded.

mod checks;
mod default;
mod groups;
mod screens;

pub use checks::{Issue, Severity};
pub use groups::group_bindings;

use crate::utils::file_handler::load_config_file;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tilecfg_core::{
    config::{
        Flags, FloatingLayout, Group, KeyBinding, Layout, LayoutKind, LayoutStyle, Match,
        MouseBinding, OptionValue, Screen, WidgetDefaults,
    },
    models::Palette,
};

/// Per-device input settings for the Wayland backend, keyed by device matcher.
pub type InputRules = BTreeMap<String, BTreeMap<String, OptionValue>>;

/// Every top-level value the window manager reads.
///
/// Built once by [`Config::assemble`]. A `config.ron` file may replace any field;
/// missing fields keep their assembled value. Files name the layouts only, and
/// every layout gets its own copy of `layout_theme` when read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "ConfigFile", into = "ConfigFile")]
pub struct Config {
    pub palette: Palette,
    pub keys: Vec<KeyBinding>,
    pub groups: Vec<Group>,
    /// Style copied into every tiled layout.
    pub layout_theme: LayoutStyle,
    pub layouts: Vec<Layout>,
    pub floating_layout: FloatingLayout,
    pub widget_defaults: WidgetDefaults,
    pub extension_defaults: WidgetDefaults,
    pub screens: Vec<Screen>,
    pub mouse: Vec<MouseBinding>,
    pub dgroups_key_binder: Option<String>,
    pub dgroups_app_rules: Vec<Match>,
    pub flags: Flags,
    pub wl_input_rules: Option<InputRules>,
    /// Name reported to clients. Some toolkits only work with window managers they
    /// know, hence a well known name instead of our own.
    pub wmname: String,
    pub log_level: String,
}

/// On-disk shape of [`Config`].
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
    palette: Palette,
    keys: Vec<KeyBinding>,
    groups: Vec<Group>,
    layout_theme: LayoutStyle,
    layouts: Vec<LayoutKind>,
    floating_layout: FloatingLayout,
    widget_defaults: WidgetDefaults,
    extension_defaults: WidgetDefaults,
    screens: Vec<Screen>,
    mouse: Vec<MouseBinding>,
    dgroups_key_binder: Option<String>,
    dgroups_app_rules: Vec<Match>,
    flags: Flags,
    wl_input_rules: Option<InputRules>,
    wmname: String,
    log_level: String,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Config::default().into()
    }
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let layouts = file
            .layouts
            .into_iter()
            .map(|kind| Layout::new(kind, &file.layout_theme))
            .collect();
        Self {
            palette: file.palette,
            keys: file.keys,
            groups: file.groups,
            layout_theme: file.layout_theme,
            layouts,
            floating_layout: file.floating_layout,
            widget_defaults: file.widget_defaults,
            extension_defaults: file.extension_defaults,
            screens: file.screens,
            mouse: file.mouse,
            dgroups_key_binder: file.dgroups_key_binder,
            dgroups_app_rules: file.dgroups_app_rules,
            flags: file.flags,
            wl_input_rules: file.wl_input_rules,
            wmname: file.wmname,
            log_level: file.log_level,
        }
    }
}

impl From<Config> for ConfigFile {
    fn from(config: Config) -> Self {
        Self {
            palette: config.palette,
            keys: config.keys,
            groups: config.groups,
            layout_theme: config.layout_theme,
            layouts: config.layouts.into_iter().map(|l| l.kind).collect(),
            floating_layout: config.floating_layout,
            widget_defaults: config.widget_defaults,
            extension_defaults: config.extension_defaults,
            screens: config.screens,
            mouse: config.mouse,
            dgroups_key_binder: config.dgroups_key_binder,
            dgroups_app_rules: config.dgroups_app_rules,
            flags: config.flags,
            wl_input_rules: config.wl_input_rules,
            wmname: config.wmname,
            log_level: config.log_level,
        }
    }
}

/// Loads the user's configuration and validates it.
///
/// # Errors
///
/// Fails when the file cannot be read or parsed, or when [`Config::validate`]
/// finds an error. The host must not start with a partial configuration.
pub fn load() -> Result<Config> {
    load_with(|_| ())
}

/// Like [`load`], but hands the parsed configuration to `setup` before it is
/// validated, so logging can be set up from `log_level` and the warnings of
/// [`Config::validate`] are not lost.
///
/// # Errors
///
/// Same as [`load`].
pub fn load_with(setup: impl FnOnce(&Config)) -> Result<Config> {
    prepare(load_config_file()?, setup)
}

fn prepare(config: Config, setup: impl FnOnce(&Config)) -> Result<Config> {
    setup(&config);
    config.validate()?;
    Ok(config)
}

impl tilecfg_core::Config for Config {
    fn keys(&self) -> &[KeyBinding] {
        &self.keys
    }

    fn mouse(&self) -> &[MouseBinding] {
        &self.mouse
    }

    fn groups(&self) -> &[Group] {
        &self.groups
    }

    fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    fn floating_layout(&self) -> &FloatingLayout {
        &self.floating_layout
    }

    fn screens(&self) -> &[Screen] {
        &self.screens
    }

    fn palette(&self) -> &Palette {
        &self.palette
    }

    fn widget_defaults(&self) -> &WidgetDefaults {
        &self.widget_defaults
    }

    fn extension_defaults(&self) -> &WidgetDefaults {
        &self.extension_defaults
    }

    fn flags(&self) -> &Flags {
        &self.flags
    }

    fn wmname(&self) -> &str {
        &self.wmname
    }

    fn dgroups_key_binder(&self) -> Option<&str> {
        self.dgroups_key_binder.as_deref()
    }

    fn dgroups_app_rules(&self) -> &[Match] {
        &self.dgroups_app_rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ron::extensions::Extensions;
    use ron::ser::PrettyConfig;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn config_serializes_to_valid_ron_test() {
        let config = Config::assemble("alacritty");

        let ron_pretty_conf = PrettyConfig::new()
            .depth_limit(4)
            .extensions(Extensions::IMPLICIT_SOME);
        let ron = ron::ser::to_string_pretty(&config, ron_pretty_conf);
        assert!(ron.is_ok(), "Could not serialize default config");

        let ron_config = ron::from_str::<'_, Config>(ron.unwrap().as_str());
        assert!(ron_config.is_ok(), "Could not deserialize default config");
        assert_eq!(ron_config.unwrap(), config);
    }

    #[test]
    fn layout_theme_reaches_every_layout() {
        let config: Config = ron::from_str(
            "(layout_theme: (border_width: 5, margin: 0, border_focus: Palette(13), \
             border_normal: Palette(2), single_border_width: 1))",
        )
        .unwrap();
        assert_eq!(config.layout_theme.margin, 0);
        assert_eq!(config.layouts.len(), 3);
        assert!(config.layouts.iter().all(|l| l.style == config.layout_theme));
        assert!(config.check_layouts().is_empty());
    }

    #[test]
    fn layouts_are_listed_by_name() {
        let config: Config = ron::from_str("(layouts: [\"max\", \"Columns\"])").unwrap();
        let kinds: Vec<LayoutKind> = config.layouts.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, [LayoutKind::Max, LayoutKind::Columns]);
        assert!(config.layouts.iter().all(|l| l.style == config.layout_theme));
        assert!(ron::from_str::<Config>("(layouts: [\"spiral\"])").is_err());
    }

    #[test]
    fn warnings_reach_the_logger_set_up_before_validation() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_ansi(false)
            .finish();
        let mut config = Config::assemble("foot");
        let duplicate = config.keys[0].clone();
        config.keys.push(duplicate);

        let mut guard = None;
        let mut level = String::new();
        let loaded = prepare(config, |config| {
            level = config.log_level.clone();
            guard = Some(tracing::subscriber::set_default(subscriber));
        });
        drop(guard);

        assert!(loaded.is_ok());
        assert_eq!(level, "warn");
        assert!(captured.contents().contains("Multiple commands bound"));
    }

    #[test]
    fn setup_runs_even_when_validation_fails() {
        let mut config = Config::assemble("foot");
        config.layouts.clear();
        let mut called = false;
        assert!(prepare(config, |_| called = true).is_err());
        assert!(called);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn partial_file_keeps_assembled_values() {
        let config: Config = ron::from_str("(wmname: \"tilewm\", log_level: \"debug\")").unwrap();
        assert_eq!(config.wmname, "tilewm");
        assert_eq!(config.groups.len(), 9);
        assert_eq!(config.layouts.len(), 3);
    }
}
