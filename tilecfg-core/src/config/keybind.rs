use crate::errors::ConfigError;
use crate::utils::keysym_lookup::into_keysym;
use crate::LazyCall;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Modifier {
    /// Usually Alt.
    Mod1,
    /// Usually `NumLock`.
    Mod2,
    Mod3,
    /// Usually Super.
    Mod4,
    Mod5,
    Shift,
    Control,
    Lock,
}

impl FromStr for Modifier {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mod1" | "alt" => Ok(Self::Mod1),
            "mod2" | "numlock" => Ok(Self::Mod2),
            "mod3" => Ok(Self::Mod3),
            "mod4" | "super" => Ok(Self::Mod4),
            "mod5" => Ok(Self::Mod5),
            "shift" => Ok(Self::Shift),
            "control" | "ctrl" => Ok(Self::Control),
            "lock" => Ok(Self::Lock),
            _ => Err(ConfigError::UnknownModifier(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Modifier {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Modifier> for String {
    fn from(m: Modifier) -> Self {
        m.to_string()
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mod1 => "mod1",
            Self::Mod2 => "mod2",
            Self::Mod3 => "mod3",
            Self::Mod4 => "mod4",
            Self::Mod5 => "mod5",
            Self::Shift => "shift",
            Self::Control => "control",
            Self::Lock => "lock",
        };
        f.write_str(name)
    }
}

/// Modifiers that must be held, in the order they were written.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(transparent)]
pub struct ModifierSet(pub Vec<Modifier>);

impl ModifierSet {
    pub fn none() -> Self {
        Self(vec![])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sorted and deduplicated copy, so `[shift, mod4]` and `[mod4, shift]` compare equal.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut mods = self.0.clone();
        mods.sort_unstable();
        mods.dedup();
        Self(mods)
    }
}

impl From<Vec<Modifier>> for ModifierSet {
    fn from(mods: Vec<Modifier>) -> Self {
        Self(mods)
    }
}

impl<const N: usize> From<[Modifier; N]> for ModifierSet {
    fn from(mods: [Modifier; N]) -> Self {
        Self(mods.to_vec())
    }
}

impl FromStr for ModifierSet {
    type Err = ConfigError;

    /// Parses `mod4+shift` style strings. An empty string or `none` means no modifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(Self::none());
        }
        s.split('+')
            .map(|m| m.trim().parse())
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", names.join("+"))
    }
}

/// A key combination bound to one or more commands.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub modifiers: ModifierSet,
    /// Keysym name, either a literal character (`"h"`, `"1"`) or a symbolic
    /// name (`"Return"`, `"XF86AudioMute"`).
    pub key: String,
    pub commands: Vec<LazyCall>,
    #[serde(default)]
    pub desc: Option<String>,
}

impl KeyBinding {
    pub fn new(
        modifiers: impl Into<ModifierSet>,
        key: impl Into<String>,
        command: impl Into<LazyCall>,
    ) -> Self {
        Self {
            modifiers: modifiers.into(),
            key: key.into(),
            commands: vec![command.into()],
            desc: None,
        }
    }

    #[must_use]
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// The keysym of `key`, `None` when the name is unknown.
    pub fn keysym(&self) -> Option<u32> {
        into_keysym(&self.key)
    }

    /// Whether this binding fires for the given combination, ignoring modifier order.
    /// Known key names compare by keysym, so `return` finds a `Return` binding.
    pub fn matches(&self, modifiers: &ModifierSet, key: &str) -> bool {
        let same_key = match (self.keysym(), into_keysym(key)) {
            (Some(bound), Some(pressed)) => bound == pressed,
            _ => self.key == key,
        };
        same_key && self.modifiers.normalized() == modifiers.normalized()
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifiers, self.key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Command;

    #[test]
    fn parse_modifier_aliases() {
        assert_eq!("Mod4".parse::<Modifier>().unwrap(), Modifier::Mod4);
        assert_eq!("super".parse::<Modifier>().unwrap(), Modifier::Mod4);
        assert_eq!("ctrl".parse::<Modifier>().unwrap(), Modifier::Control);
        assert_eq!("alt".parse::<Modifier>().unwrap(), Modifier::Mod1);
        assert!("hyper".parse::<Modifier>().is_err());
    }

    #[test]
    fn parse_modifier_set() {
        let set: ModifierSet = "mod4+shift".parse().unwrap();
        assert_eq!(set, ModifierSet::from([Modifier::Mod4, Modifier::Shift]));
        assert!("none".parse::<ModifierSet>().unwrap().is_empty());
        assert!("mod4+bogus".parse::<ModifierSet>().is_err());
    }

    #[test]
    fn binding_matches_regardless_of_modifier_order() {
        let binding = KeyBinding::new([Modifier::Mod4, Modifier::Shift], "h", Command::NextLayout);
        let reversed = ModifierSet::from([Modifier::Shift, Modifier::Mod4]);
        assert!(binding.matches(&reversed, "h"));
        assert!(!binding.matches(&reversed, "l"));
        assert!(!binding.matches(&ModifierSet::from([Modifier::Mod4]), "h"));
    }

    #[test]
    fn key_names_match_by_keysym() {
        let binding = KeyBinding::new([Modifier::Mod4], "Return", Command::spawn("foot"));
        let mods = ModifierSet::from([Modifier::Mod4]);
        assert!(binding.matches(&mods, "return"));
        assert!(binding.matches(&mods, "RETURN"));
        assert!(!binding.matches(&mods, "Tab"));

        let unknown = KeyBinding::new([Modifier::Mod4], "Hyper_Q", Command::NextLayout);
        assert!(unknown.matches(&mods, "Hyper_Q"));
        assert!(!unknown.matches(&mods, "hyper_q"));
    }

    #[test]
    fn display_binding() {
        let binding = KeyBinding::new([Modifier::Mod4, Modifier::Control], "r", Command::ReloadConfig);
        assert_eq!(binding.to_string(), "mod4+control+r");
        let bare = KeyBinding::new(ModifierSet::none(), "Print", Command::spawn("maim"));
        assert_eq!(bare.to_string(), "Print");
    }
}
