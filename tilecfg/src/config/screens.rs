use tilecfg_core::{
    config::{Bar, Screen, Widget, WidgetKind},
    models::ColorRef,
};

const BAR_SIZE: u32 = 30;
const BAR_OPACITY: f32 = 0.9;

const fn color(index: usize) -> ColorRef {
    ColorRef::Palette(index)
}

fn sep() -> Widget {
    Widget::new(WidgetKind::Sep)
        .with("padding", 10_i64)
        .with("linewidth", 2_i64)
}

/// Widgets of the top bar, left to right.
fn widgets() -> Vec<Widget> {
    vec![
        Widget::new(WidgetKind::GroupBox)
            .with("active", color(6))
            .with("inactive", color(4))
            .with("highlight_method", "")
            .with("this_current_screen_border", color(13)),
        Widget::new(WidgetKind::CurrentLayoutIcon).with("foreground", color(4)),
        Widget::new(WidgetKind::WindowName)
            .with("background", color(8))
            .with("foreground", color(7)),
        Widget::new(WidgetKind::Backlight)
            .with("foreground", color(4))
            .with("backlight_name", "intel_backlight")
            .with("format", "eDP: {percent:2.0%}"),
        sep(),
        Widget::new(WidgetKind::Battery)
            .with("low_background", color(10))
            .with("low_foreground", color(6))
            .with("empty_char", "X")
            .with("full_char", "=")
            .with("charge_char", "\u{f140b}")
            .with("discharge_char", "")
            .with("not_charging_char", "!")
            .with("battery", 0_i64)
            .with("foreground", color(4))
            .with("format", "{char}{percent:2.1%}")
            .with("fmt", "BAT0: {}"),
        sep(),
        Widget::new(WidgetKind::Cpu)
            .with("foreground", color(4))
            .with("format", "CPU: {load_percent}%"),
        sep(),
        Widget::new(WidgetKind::Memory)
            .with("foreground", color(4))
            .with("measure_mem", "G")
            .with("format", "{MemFree:.1f}{mm}")
            .with("fmt", "RAM: {}"),
        sep(),
        Widget::new(WidgetKind::Df)
            .with("foreground", color(4))
            .with("partition", "/")
            .with("visible_on_warn", false)
            .with("format", "{uf}{m}")
            .with("fmt", "SSD: {}"),
        sep(),
        Widget::new(WidgetKind::KeyboardLayout)
            .with("foreground", color(6))
            .with("configured_keyboards", &["us", "ru"][..]),
        sep(),
        Widget::new(WidgetKind::PulseVolume)
            .with("foreground", color(4))
            .with("fmt", "Vol: {}")
            .with("mute_command", "wpctl set-mute @DEFAULT_AUDIO_SINK@ toggle")
            .with("volume_down_command", "wpctl set-volume @DEFAULT_AUDIO_SINK@ 10%-")
            .with("volume_up_command", "wpctl set-volume @DEFAULT_AUDIO_SINK@ 10%+"),
        sep(),
        Widget::new(WidgetKind::Wlan)
            .with("foreground", color(4))
            .with("format", "WiFi: {percent:2.0%}"),
        sep(),
        Widget::new(WidgetKind::Clock)
            .with("foreground", color(6))
            .with("format", "%b %d (%a) %H:%M"),
        sep(),
        // Not drawn on Wayland, where StatusNotifier takes its place.
        Widget::new(WidgetKind::Systray),
        Widget::new(WidgetKind::Spacer).with("length", 10_i64),
    ]
}

/// A single screen template with the bar on top.
pub fn screens() -> Vec<Screen> {
    let mut bar = Bar::new(widgets(), BAR_SIZE);
    bar.background = Some(color(0));
    bar.opacity = BAR_OPACITY;
    vec![Screen::top(bar)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilecfg_core::config::OptionValue;

    #[test]
    fn one_screen_with_a_top_bar() {
        let screens = screens();
        assert_eq!(screens.len(), 1);
        let bar = screens[0].top.as_ref().unwrap();
        assert!(screens[0].bottom.is_none());
        assert_eq!(bar.size, 30);
        assert_eq!(bar.background, Some(ColorRef::Palette(0)));
    }

    #[test]
    fn widget_order() {
        let screens = screens();
        let bar = screens[0].top.as_ref().unwrap();
        let kinds: Vec<WidgetKind> = bar
            .widgets
            .iter()
            .map(|w| w.kind)
            .filter(|k| *k != WidgetKind::Sep)
            .collect();
        assert_eq!(
            kinds,
            [
                WidgetKind::GroupBox,
                WidgetKind::CurrentLayoutIcon,
                WidgetKind::WindowName,
                WidgetKind::Backlight,
                WidgetKind::Battery,
                WidgetKind::Cpu,
                WidgetKind::Memory,
                WidgetKind::Df,
                WidgetKind::KeyboardLayout,
                WidgetKind::PulseVolume,
                WidgetKind::Wlan,
                WidgetKind::Clock,
                WidgetKind::Systray,
                WidgetKind::Spacer,
            ]
        );
    }

    #[test]
    fn keyboard_layouts_are_listed() {
        let screens = screens();
        let bar = screens[0].top.as_ref().unwrap();
        let keyboard = bar.widget("keyboardlayout").unwrap();
        assert_eq!(
            keyboard.option("configured_keyboards"),
            Some(&OptionValue::List(vec!["us".to_owned(), "ru".to_owned()]))
        );
    }

    #[test]
    fn every_option_is_recognised() {
        for widget in &screens()[0].top.as_ref().unwrap().widgets {
            assert_eq!(widget.unknown_options().count(), 0, "{:?}", widget.kind);
        }
    }
}
