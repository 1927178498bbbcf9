use super::{group_bindings, screens, Config};
use crate::{palette, terminal};
use tilecfg_core::{
    config::{
        groups_from_chars, Button, FloatingLayout, Flags, KeyBinding, Layout, LayoutKind,
        LayoutStyle, Match, Modifier, ModifierSet, MouseBinding, WidgetDefaults,
    },
    models::ColorRef,
    Backend, Command, Guard,
    LayoutCommand::{
        Down, GrowDown, GrowLeft, GrowRight, GrowUp, Left, Next, Normalize, Right,
        ShuffleDown, ShuffleLeft, ShuffleRight, ShuffleUp, ToggleSplit, Up,
    },
    WindowCommand,
};

const MOD: Modifier = Modifier::Mod4;
const ALT: Modifier = Modifier::Mod1;
const SHIFT: Modifier = Modifier::Shift;
const CONTROL: Modifier = Modifier::Control;

const GROUP_NAMES: &str = "123456789";
const VIRTUAL_TERMINALS: std::ops::RangeInclusive<u8> = 1..=7;

impl Default for Config {
    fn default() -> Self {
        Self::assemble(&terminal::guess_terminal())
    }
}

impl Config {
    /// Builds the whole configuration. Pure: the only input from the machine is
    /// `terminal`, so two calls with the same terminal give equal values.
    // One list per top-level value, in the order the host reads them.
    #[allow(clippy::too_many_lines)]
    pub fn assemble(terminal: &str) -> Self {
        let layout = Command::Layout;
        let window = Command::Window;

        let mut keys = vec![
            // Switch between windows
            KeyBinding::new([MOD], "h", layout(Left)).desc("Move focus to left"),
            KeyBinding::new([MOD], "l", layout(Right)).desc("Move focus to right"),
            KeyBinding::new([MOD], "j", layout(Down)).desc("Move focus down"),
            KeyBinding::new([MOD], "k", layout(Up)).desc("Move focus up"),
            KeyBinding::new([MOD], "space", layout(Next))
                .desc("Move window focus to other window"),
            // Moving out of range in the columns layout creates a new column.
            KeyBinding::new([MOD, SHIFT], "h", layout(ShuffleLeft))
                .desc("Move window to the left"),
            KeyBinding::new([MOD, SHIFT], "l", layout(ShuffleRight))
                .desc("Move window to the right"),
            KeyBinding::new([MOD, SHIFT], "j", layout(ShuffleDown)).desc("Move window down"),
            KeyBinding::new([MOD, SHIFT], "k", layout(ShuffleUp)).desc("Move window up"),
            // Growing towards a screen edge shrinks the window instead.
            KeyBinding::new([MOD, CONTROL], "h", layout(GrowLeft))
                .desc("Grow window to the left"),
            KeyBinding::new([MOD, CONTROL], "l", layout(GrowRight))
                .desc("Grow window to the right"),
            KeyBinding::new([MOD, CONTROL], "j", layout(GrowDown)).desc("Grow window down"),
            KeyBinding::new([MOD, CONTROL], "k", layout(GrowUp)).desc("Grow window up"),
            KeyBinding::new([MOD], "n", layout(Normalize)).desc("Reset all window sizes"),
            KeyBinding::new([MOD, SHIFT], "Return", layout(ToggleSplit))
                .desc("Toggle between split and unsplit sides of stack"),
            KeyBinding::new([MOD], "Return", Command::spawn(terminal)).desc("Launch terminal"),
            KeyBinding::new([MOD], "Tab", Command::NextLayout).desc("Toggle between layouts"),
            KeyBinding::new([MOD], "w", window(WindowCommand::Kill)).desc("Kill focused window"),
            KeyBinding::new([MOD], "f", window(WindowCommand::ToggleFullscreen))
                .desc("Toggle fullscreen on the focused window"),
            KeyBinding::new([MOD], "t", window(WindowCommand::ToggleFloating))
                .desc("Toggle floating on the focused window"),
            KeyBinding::new([MOD, CONTROL], "r", Command::ReloadConfig).desc("Reload the config"),
            KeyBinding::new([MOD, CONTROL], "q", Command::Shutdown).desc("Shutdown"),
            KeyBinding::new([MOD], "r", Command::spawn("rofi -show drun"))
                .desc("Run Rofi launcher"),
            KeyBinding::new([ALT], "Shift_L", Command::widget("keyboardlayout", "next_keyboard"))
                .desc("Next keyboard layout"),
            KeyBinding::new(
                ModifierSet::none(),
                "XF86AudioMute",
                Command::widget("pulsevolume", "mute"),
            ),
            KeyBinding::new(
                ModifierSet::none(),
                "XF86AudioRaiseVolume",
                Command::widget("pulsevolume", "increase_vol"),
            ),
            KeyBinding::new(
                ModifierSet::none(),
                "XF86AudioLowerVolume",
                Command::widget("pulsevolume", "decrease_vol"),
            ),
            KeyBinding::new(
                ModifierSet::none(),
                "XF86MonBrightnessUp",
                Command::spawn("brillo -q -u 1000000 -A 10"),
            )
            .desc("Increase brightness with exp scale"),
            KeyBinding::new(
                ModifierSet::none(),
                "XF86MonBrightnessDown",
                Command::spawn("brillo -q -u 1000000 -U 10"),
            )
            .desc("Decrease brightness with exp scale"),
            KeyBinding::new(
                ModifierSet::none(),
                "Print",
                Command::spawn_shell("maim -s | xclip -selection clipboard -t image/png"),
            )
            .desc("Send the screenshot to clipboard"),
            KeyBinding::new(
                [ALT, CONTROL],
                "Delete",
                Command::spawn_shell("show ~/fav_menus/power_menu | run"),
            )
            .desc("Power menu"),
        ];

        // The backend is only known once the host runs, so the guard is checked
        // when the key is pressed.
        keys.extend(VIRTUAL_TERMINALS.map(|vt| {
            KeyBinding::new(
                [CONTROL, ALT],
                format!("f{vt}"),
                Command::ChangeVt(vt).when(Guard::Backend(Backend::Wayland)),
            )
            .desc(format!("Switch to VT{vt}"))
        }));

        let groups = groups_from_chars(GROUP_NAMES);
        keys.extend(group_bindings(MOD, &groups));

        let palette = palette::solarized_dark();

        let layout_theme = LayoutStyle {
            border_width: 2,
            margin: 8,
            border_focus: ColorRef::Palette(12),
            border_normal: ColorRef::Palette(1),
            single_border_width: 0,
        };
        let layouts = [LayoutKind::MonadTall, LayoutKind::Max, LayoutKind::MonadWide]
            .into_iter()
            .map(|kind| Layout::new(kind, &layout_theme))
            .collect();

        let widget_defaults = WidgetDefaults {
            font: "CaskaydiaMono Nerd Font".to_owned(),
            fontsize: 19,
            padding: 3,
        };

        let mouse = vec![
            MouseBinding::drag(
                [MOD],
                Button::Button1,
                window(WindowCommand::SetPositionFloating),
                window(WindowCommand::GetPosition),
            ),
            MouseBinding::drag(
                [MOD],
                Button::Button3,
                window(WindowCommand::SetSizeFloating),
                window(WindowCommand::GetSize),
            ),
            MouseBinding::click([MOD], Button::Button2, window(WindowCommand::BringToFront)),
        ];

        // Use `xprop` to see the class and title of an X client.
        let floating_layout = FloatingLayout::with_defaults(vec![
            Match::wm_class("confirmreset"), // gitk
            Match::wm_class("makebranch"),   // gitk
            Match::wm_class("maketag"),      // gitk
            Match::wm_class("ssh-askpass"),
            Match::title("branchdialog"), // gitk
            Match::title("pinentry"),     // GPG key password entry
        ]);

        Self {
            palette,
            keys,
            groups,
            layout_theme,
            layouts,
            floating_layout,
            extension_defaults: widget_defaults.clone(),
            widget_defaults,
            screens: screens::screens(),
            mouse,
            dgroups_key_binder: None,
            dgroups_app_rules: vec![],
            flags: Flags {
                follow_mouse_focus: false,
                cursor_warp: false,
                ..Flags::default()
            },
            wl_input_rules: None,
            wmname: "LG3D".to_owned(),
            log_level: "warn".to_owned(),
        }
    }
}
