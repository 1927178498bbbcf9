//! Keysym names accepted in key bindings.
//!
//! Names are compared case-insensitively, so `f1` and `F1` are the same key.

const NAMED: &[(&str, u32)] = &[
    ("space", 0x0020),
    ("apostrophe", 0x0027),
    ("comma", 0x002c),
    ("minus", 0x002d),
    ("period", 0x002e),
    ("slash", 0x002f),
    ("semicolon", 0x003b),
    ("equal", 0x003d),
    ("bracketleft", 0x005b),
    ("backslash", 0x005c),
    ("bracketright", 0x005d),
    ("grave", 0x0060),
    ("BackSpace", 0xff08),
    ("Tab", 0xff09),
    ("Return", 0xff0d),
    ("Pause", 0xff13),
    ("Scroll_Lock", 0xff14),
    ("Escape", 0xff1b),
    ("Home", 0xff50),
    ("Left", 0xff51),
    ("Up", 0xff52),
    ("Right", 0xff53),
    ("Down", 0xff54),
    ("Page_Up", 0xff55),
    ("Page_Down", 0xff56),
    ("End", 0xff57),
    ("Print", 0xff61),
    ("Insert", 0xff63),
    ("Menu", 0xff67),
    ("Num_Lock", 0xff7f),
    ("Shift_L", 0xffe1),
    ("Shift_R", 0xffe2),
    ("Control_L", 0xffe3),
    ("Control_R", 0xffe4),
    ("Caps_Lock", 0xffe5),
    ("Alt_L", 0xffe9),
    ("Alt_R", 0xffea),
    ("Super_L", 0xffeb),
    ("Super_R", 0xffec),
    ("Delete", 0xffff),
    ("XF86MonBrightnessUp", 0x1008_ff02),
    ("XF86MonBrightnessDown", 0x1008_ff03),
    ("XF86AudioLowerVolume", 0x1008_ff11),
    ("XF86AudioMute", 0x1008_ff12),
    ("XF86AudioRaiseVolume", 0x1008_ff13),
    ("XF86AudioPlay", 0x1008_ff14),
    ("XF86AudioStop", 0x1008_ff15),
    ("XF86AudioPrev", 0x1008_ff16),
    ("XF86AudioNext", 0x1008_ff17),
    ("XF86AudioMicMute", 0x1008_ffb2),
];

const F1: u32 = 0xffbe;
const MAX_FUNCTION_KEY: u32 = 35;

/// Returns the keysym for a key name, or `None` if the name is unknown.
#[must_use]
pub fn into_keysym(name: &str) -> Option<u32> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return (c.is_ascii_graphic()).then(|| u32::from(c.to_ascii_lowercase()));
    }
    if let Some(n) = function_key(name) {
        return Some(F1 + n - 1);
    }
    NAMED
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, sym)| *sym)
}

fn function_key(name: &str) -> Option<u32> {
    let digits = name.strip_prefix('F').or_else(|| name.strip_prefix('f'))?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: u32 = digits.parse().ok()?;
    (1..=MAX_FUNCTION_KEY).contains(&n).then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_characters() {
        assert_eq!(into_keysym("h"), Some(0x68));
        assert_eq!(into_keysym("H"), Some(0x68));
        assert_eq!(into_keysym("1"), Some(0x31));
    }

    #[test]
    fn function_keys_ignore_case() {
        assert_eq!(into_keysym("f1"), Some(0xffbe));
        assert_eq!(into_keysym("F7"), Some(0xffc4));
        assert_eq!(into_keysym("f36"), None);
        assert_eq!(into_keysym("f0"), None);
        assert_eq!(into_keysym("F+1"), None);
    }

    #[test]
    fn named_keys() {
        assert_eq!(into_keysym("Return"), Some(0xff0d));
        assert_eq!(into_keysym("return"), Some(0xff0d));
        assert_eq!(into_keysym("XF86AudioMute"), Some(0x1008_ff12));
        assert_eq!(into_keysym("Shift_L"), Some(0xffe1));
        assert_eq!(into_keysym("Hyper_Q"), None);
    }
}
