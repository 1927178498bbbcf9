use super::WindowType;

/// What the host knows about a window when it decides whether it should float.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowInfo {
    /// `_NET_WM_NAME`, or `WM_NAME` when the former is missing.
    pub title: Option<String>,
    /// Instance part of `WM_CLASS`.
    pub res_name: Option<String>,
    /// Class part of `WM_CLASS`.
    pub res_class: Option<String>,
    pub role: Option<String>,
    pub r#type: Option<WindowType>,
    pub fixed_size: bool,
    pub fixed_ratio: bool,
    pub transient: bool,
}

impl WindowInfo {
    pub fn with_class(class: &str) -> Self {
        Self {
            res_name: Some(class.to_owned()),
            res_class: Some(class.to_owned()),
            ..Self::default()
        }
    }

    pub fn with_title(title: &str) -> Self {
        Self {
            title: Some(title.to_owned()),
            ..Self::default()
        }
    }
}
