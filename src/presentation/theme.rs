// Theme context passed down to the page renderer
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Theme named by a request parameter. Anything unrecognised, blank
    /// included, falls back to the default theme.
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("dark") => Theme::Dark,
            _ => Theme::default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Theme state for one rendered page. Not persisted across reloads; a
/// cookie or stored preference would plug in where the handlers build it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeContext {
    pub theme: Theme,
}

impl ThemeContext {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn toggle(self) -> Self {
        Self::new(self.theme.toggled())
    }

    /// Class set on the document root
    pub fn document_class(self) -> &'static str {
        match self.theme {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    /// Label of the toggle control, naming the theme it switches to
    pub fn toggle_label(self) -> &'static str {
        match self.theme {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }
}
