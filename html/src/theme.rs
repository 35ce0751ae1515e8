//! Named color schemes, rendered as CSS custom properties.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    /// Backgrounds
    pub primary: String,
    /// Accents
    pub secondary: String,
    /// Text
    pub tertiary: String,
}

impl ColorScheme {
    pub fn new(
        primary: impl Into<String>,
        secondary: impl Into<String>,
        tertiary: impl Into<String>,
    ) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            tertiary: tertiary.into(),
        }
    }
}

/// An ordered set of color schemes. The first one is the default and is bound to
/// `:root`; the others apply under a class of their own name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Theme {
    schemes: IndexMap<String, ColorScheme>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: impl Into<String>, scheme: ColorScheme) {
        self.schemes.insert(key.into(), scheme);
    }

    pub fn with(mut self, key: impl Into<String>, scheme: ColorScheme) -> Self {
        self.add(key, scheme);
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.schemes.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&ColorScheme> {
        self.schemes.get(key)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, scheme)) in self.schemes.iter().enumerate() {
            if i == 0 {
                writeln!(f, "\n:root {{")?;
            } else {
                writeln!(f, "\n.{} {{", key)?;
            }
            writeln!(f, "    --color-primary: {};", scheme.primary)?;
            writeln!(f, "    --color-secondary: {};", scheme.secondary)?;
            writeln!(f, "    --color-tertiary: {};", scheme.tertiary)?;
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}

lazy_static! {
    pub static ref THEME: Theme = Theme::new()
        .with("light", ColorScheme::new("#fdfdfd", "#1e90ff", "#1f1f1f"))
        .with("dark", ColorScheme::new("#1f1f1f", "#1e90ff", "#fdfdfd"))
        .with("yellow-gray", ColorScheme::new("#242423", "#FFB703", "#E0FBFC"))
        .with("cream", ColorScheme::new("#FFF7E6", "#EE6C4D", "#2A2A2A"));
}

#[cfg(test)]
#[test]
fn test_theme_css() {
    let theme = Theme::new()
        .with("light", ColorScheme::new("#fff", "#00f", "#000"))
        .with("dark", ColorScheme::new("#000", "#00f", "#fff"));
    let target = r#"
:root {
    --color-primary: #fff;
    --color-secondary: #00f;
    --color-tertiary: #000;
}

.dark {
    --color-primary: #000;
    --color-secondary: #00f;
    --color-tertiary: #fff;
}
"#;
    assert_eq!(theme.to_string(), target);
    assert_eq!(theme.keys().collect::<Vec<_>>(), vec!["light", "dark"]);
}

#[cfg(test)]
#[test]
fn test_default_theme() {
    let keys: Vec<&str> = THEME.keys().collect();
    assert_eq!(keys, vec!["light", "dark", "yellow-gray", "cream"]);
    assert_eq!(THEME.get("dark").map(|s| s.primary.as_str()), Some("#1f1f1f"));
}
