use super::widget::Widget;
use crate::models::ColorRef;
use serde::{Deserialize, Serialize};

/// A row of widgets drawn along one screen edge.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bar {
    pub widgets: Vec<Widget>,
    /// Height of a horizontal bar in pixels.
    pub size: u32,
    #[serde(default)]
    pub background: Option<ColorRef>,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    /// `[top, right, bottom, left]`
    #[serde(default)]
    pub margin: Option<[u32; 4]>,
}

const fn default_opacity() -> f32 {
    1.0
}

impl Bar {
    pub fn new(widgets: Vec<Widget>, size: u32) -> Self {
        Self {
            widgets,
            size,
            background: None,
            opacity: default_opacity(),
            margin: None,
        }
    }

    pub fn widget(&self, name: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.name() == name)
    }

    /// Every color this bar references, including its widgets'.
    pub fn colors(&self) -> impl Iterator<Item = &ColorRef> {
        self.background
            .iter()
            .chain(self.widgets.iter().flat_map(|w| w.colors().map(|(_, c)| c)))
    }
}

/// Template for a physical display. The host copies it onto every connected output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Screen {
    #[serde(default)]
    pub top: Option<Bar>,
    #[serde(default)]
    pub bottom: Option<Bar>,
    /// Caps motion events handled per second while dragging on X11.
    #[serde(default)]
    pub x11_drag_polling_rate: Option<u32>,
}

impl Screen {
    pub fn top(bar: Bar) -> Self {
        Self {
            top: Some(bar),
            ..Self::default()
        }
    }

    pub fn bars(&self) -> impl Iterator<Item = &Bar> {
        self.top.iter().chain(self.bottom.iter())
    }
}

/// Font settings applied to every widget unless it overrides them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WidgetDefaults {
    pub font: String,
    pub fontsize: u32,
    pub padding: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetKind;

    #[test]
    fn widgets_found_by_name() {
        let bar = Bar::new(
            vec![
                Widget::new(WidgetKind::Clock),
                Widget::new(WidgetKind::TextBox).with("name", "greeting"),
            ],
            30,
        );
        assert!(bar.widget("clock").is_some());
        assert!(bar.widget("greeting").is_some());
        assert!(bar.widget("textbox").is_none());
    }

    #[test]
    fn bar_colors_include_background_and_widgets() {
        let mut bar = Bar::new(
            vec![Widget::new(WidgetKind::Clock).with("foreground", ColorRef::Palette(6))],
            30,
        );
        bar.background = Some(ColorRef::Palette(0));
        let colors: Vec<_> = bar.colors().collect();
        assert_eq!(colors, [&ColorRef::Palette(0), &ColorRef::Palette(6)]);
    }

    #[test]
    fn screen_lists_both_bars() {
        let screen = Screen {
            top: Some(Bar::new(vec![], 30)),
            bottom: Some(Bar::new(vec![], 24)),
            x11_drag_polling_rate: None,
        };
        assert_eq!(screen.bars().count(), 2);
        assert_eq!(Screen::top(Bar::new(vec![], 30)).bars().count(), 1);
    }
}
