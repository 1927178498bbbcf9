use super::layout::LayoutStyle;
use crate::errors::ConfigError;
use crate::models::{WindowInfo, WindowType};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How a single window property is compared.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(try_from = "MatcherRepr", into = "MatcherRepr")]
pub enum Matcher {
    Exact(String),
    /// Regex anchored at the start of the property, like `re.match`.
    Pattern(Regex),
}

#[derive(Serialize, Deserialize)]
enum MatcherRepr {
    Exact(String),
    Pattern(String),
}

impl TryFrom<MatcherRepr> for Matcher {
    type Error = ConfigError;

    fn try_from(repr: MatcherRepr) -> Result<Self, Self::Error> {
        match repr {
            MatcherRepr::Exact(s) => Ok(Self::Exact(s)),
            MatcherRepr::Pattern(s) => Self::pattern(&s),
        }
    }
}

impl From<Matcher> for MatcherRepr {
    fn from(m: Matcher) -> Self {
        match m {
            Matcher::Exact(s) => Self::Exact(s),
            Matcher::Pattern(re) => Self::Pattern(re.as_str().to_owned()),
        }
    }
}

impl PartialEq for Matcher {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Exact(a), Self::Exact(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl Eq for Matcher {}

impl Matcher {
    pub fn pattern(pattern: &str) -> Result<Self, ConfigError> {
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })
    }

    pub fn is_match(&self, value: &str) -> bool {
        match self {
            Self::Exact(s) => s == value,
            Self::Pattern(re) => re.find(value).is_some_and(|m| m.start() == 0),
        }
    }

    fn matches_any(&self, values: &[&Option<String>]) -> bool {
        values
            .iter()
            .any(|v| v.as_deref().is_some_and(|v| self.is_match(v)))
    }
}

impl From<&str> for Matcher {
    fn from(s: &str) -> Self {
        Self::Exact(s.to_owned())
    }
}

/// Properties that cannot be expressed as a string comparison.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPredicate {
    FixedSize,
    FixedRatio,
    Transient,
}

impl WindowPredicate {
    fn holds(self, window: &WindowInfo) -> bool {
        match self {
            Self::FixedSize => window.fixed_size,
            Self::FixedRatio => window.fixed_ratio,
            Self::Transient => window.transient,
        }
    }
}

/// Selects windows by their properties. Every criterion that is set must hold.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Match {
    pub title: Option<Matcher>,
    /// Compared against both the instance and the class part of `WM_CLASS`.
    pub wm_class: Option<Matcher>,
    pub role: Option<Matcher>,
    pub wm_type: Option<WindowType>,
    pub func: Option<WindowPredicate>,
}

impl Match {
    pub fn wm_class(class: impl Into<Matcher>) -> Self {
        Self {
            wm_class: Some(class.into()),
            ..Self::default()
        }
    }

    pub fn title(title: impl Into<Matcher>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn wm_type(wm_type: WindowType) -> Self {
        Self {
            wm_type: Some(wm_type),
            ..Self::default()
        }
    }

    pub fn func(predicate: WindowPredicate) -> Self {
        Self {
            func: Some(predicate),
            ..Self::default()
        }
    }

    pub fn is_match(&self, window: &WindowInfo) -> bool {
        let title = self
            .title
            .as_ref()
            .map_or(true, |m| m.matches_any(&[&window.title]));
        let class = self
            .wm_class
            .as_ref()
            .map_or(true, |m| m.matches_any(&[&window.res_name, &window.res_class]));
        let role = self
            .role
            .as_ref()
            .map_or(true, |m| m.matches_any(&[&window.role]));
        let wm_type = self.wm_type.map_or(true, |t| window.r#type == Some(t));
        let func = self.func.map_or(true, |p| p.holds(window));
        title && class && role && wm_type && func
    }
}

/// Float rules shipped by the host. Dialogs, splash screens and windows that refuse
/// to be resized never tile.
pub fn default_float_rules() -> Vec<Match> {
    let mut rules: Vec<Match> = [
        WindowType::Utility,
        WindowType::Notification,
        WindowType::Toolbar,
        WindowType::Splash,
        WindowType::Dialog,
    ]
    .into_iter()
    .map(Match::wm_type)
    .collect();
    rules.extend(
        [
            "file_progress",
            "confirm",
            "dialog",
            "download",
            "error",
            "notification",
            "splash",
            "toolbar",
        ]
        .into_iter()
        .map(Match::wm_class),
    );
    rules.push(Match::func(WindowPredicate::FixedSize));
    rules.push(Match::func(WindowPredicate::FixedRatio));
    rules
}

/// The layout used for floating windows, with the rules that force a window to float.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FloatingLayout {
    pub float_rules: Vec<Match>,
    #[serde(default)]
    pub style: Option<LayoutStyle>,
}

impl FloatingLayout {
    /// Host defaults first, then `explicit` in order. Only exact duplicates are
    /// dropped, keeping the first occurrence.
    pub fn with_defaults(explicit: Vec<Match>) -> Self {
        let mut float_rules: Vec<Match> = Vec::new();
        for rule in default_float_rules().into_iter().chain(explicit) {
            if float_rules.contains(&rule) {
                tracing::debug!("Dropping duplicate float rule {:?}", rule);
            } else {
                float_rules.push(rule);
            }
        }
        Self {
            float_rules,
            style: None,
        }
    }

    /// Rules are tried in order; the first one that matches wins.
    pub fn first_match(&self, window: &WindowInfo) -> Option<&Match> {
        self.float_rules.iter().find(|rule| rule.is_match(window))
    }

    pub fn should_float(&self, window: &WindowInfo) -> bool {
        self.first_match(window).is_some()
    }
}
