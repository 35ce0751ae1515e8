use indexmap::IndexSet;
use std::fmt;
use tracing::trace;

/// An ordered set of utility class tokens. The first insertion of a token fixes its
/// position; inserting it again is a no-op.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct ClassBuilder {
    tokens: IndexSet<String>,
}

impl ClassBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        if self.tokens.contains(&token) {
            trace!(%token, "class already present");
        } else {
            self.tokens.insert(token);
        }
        self
    }

    fn prefixed(self, prefix: &str, value: &str) -> Self {
        self.insert(format!("{}-{}", prefix, value))
    }

    /// Like [`ClassBuilder::prefixed`], but a value starting with `-` selects the
    /// negative form `-<prefix>-<rest>`
    fn signed(self, prefix: &str, value: &str) -> Self {
        match value.strip_prefix('-') {
            Some(rest) => self.insert(format!("-{}-{}", prefix, rest)),
            None => self.prefixed(prefix, value),
        }
    }

    // Display

    pub fn block(self) -> Self {
        self.insert("block")
    }
    /// Adds `flex` along with `flex-<cfg>`
    pub fn flex(self, cfg: &str) -> Self {
        self.insert("flex").prefixed("flex", cfg)
    }
    pub fn inline_flex(self) -> Self {
        self.insert("inline-flex")
    }
    /// Adds `grid` along with `grid-<cfg>`
    pub fn grid(self, cfg: &str) -> Self {
        self.insert("grid").prefixed("grid", cfg)
    }
    pub fn hidden(self) -> Self {
        self.insert("hidden")
    }
    pub fn opacity(self, cfg: &str) -> Self {
        self.prefixed("opacity", cfg)
    }

    // Position

    pub fn top(self, size: &str) -> Self {
        self.signed("top", size)
    }
    pub fn right(self, size: &str) -> Self {
        self.signed("right", size)
    }
    pub fn bottom(self, size: &str) -> Self {
        self.signed("bottom", size)
    }
    pub fn left(self, size: &str) -> Self {
        self.signed("left", size)
    }
    pub fn inset(self, size: &str) -> Self {
        self.signed("inset", size)
    }
    pub fn translate(self, size: &str) -> Self {
        self.signed("translate", size)
    }
    pub fn static_(self) -> Self {
        self.insert("static")
    }
    pub fn fixed(self) -> Self {
        self.insert("fixed")
    }
    pub fn absolute(self) -> Self {
        self.insert("absolute")
    }
    pub fn relative(self) -> Self {
        self.insert("relative")
    }
    pub fn sticky(self) -> Self {
        self.insert("sticky")
    }
    /// Z-index. Negative values produce `-z-<n>`
    pub fn z(self, size: &str) -> Self {
        self.signed("z", size)
    }

    // Overflow and visibility

    pub fn overflow(self, cfg: &str) -> Self {
        self.prefixed("overflow", cfg)
    }
    pub fn visible(self) -> Self {
        self.insert("visible")
    }
    pub fn invisible(self) -> Self {
        self.insert("invisible")
    }

    // Sizing

    pub fn gap(self, size: &str) -> Self {
        self.prefixed("gap", size)
    }
    pub fn w(self, size: &str) -> Self {
        self.prefixed("w", size)
    }
    pub fn h(self, size: &str) -> Self {
        self.prefixed("h", size)
    }
    pub fn min_w(self, size: &str) -> Self {
        self.prefixed("min-w", size)
    }
    pub fn min_h(self, size: &str) -> Self {
        self.prefixed("min-h", size)
    }
    pub fn max_w(self, size: &str) -> Self {
        self.prefixed("max-w", size)
    }
    pub fn max_h(self, size: &str) -> Self {
        self.prefixed("max-h", size)
    }

    // Alignment

    pub fn place(self, cfg: &str) -> Self {
        self.prefixed("place", cfg)
    }
    pub fn justify(self, cfg: &str) -> Self {
        self.prefixed("justify", cfg)
    }
    pub fn items(self, cfg: &str) -> Self {
        self.prefixed("items", cfg)
    }
    pub fn content(self, cfg: &str) -> Self {
        self.prefixed("content", cfg)
    }

    // Borders, backgrounds and text

    /// Border radius, e.g. `sm`, `lg` or `full`
    pub fn rounded(self, size: &str) -> Self {
        self.prefixed("rounded", size)
    }
    pub fn border(self, cfg: &str) -> Self {
        self.prefixed("border", cfg)
    }
    pub fn shadow(self, cfg: &str) -> Self {
        self.prefixed("shadow", cfg)
    }
    pub fn bg(self, cfg: &str) -> Self {
        self.prefixed("bg", cfg)
    }
    pub fn text(self, cfg: &str) -> Self {
        self.prefixed("text", cfg)
    }
    pub fn font(self, cfg: &str) -> Self {
        self.prefixed("font", cfg)
    }
    pub fn underline(self) -> Self {
        self.insert("underline")
    }

    // Interaction

    pub fn sr_only(self) -> Self {
        self.insert("sr-only")
    }
    pub fn peer(self) -> Self {
        self.insert("peer")
    }
    pub fn cursor(self, cfg: &str) -> Self {
        self.prefixed("cursor", cfg)
    }
    /// Adds the `hover:` variant of a class, e.g. `hover("opacity-75")`
    pub fn hover(self, cfg: &str) -> Self {
        self.insert(format!("hover:{}", cfg))
    }
    pub fn focus(self, cfg: &str) -> Self {
        self.insert(format!("focus:{}", cfg))
    }
    /// Inserts `token` verbatim
    pub fn other(self, token: &str) -> Self {
        self.insert(token)
    }

    // Extraction

    /// Returns a snapshot of the tokens in insertion order
    pub fn to_list(&self) -> Vec<String> {
        self.tokens.iter().cloned().collect()
    }
    pub fn into_list(self) -> Vec<String> {
        self.tokens.into_iter().collect()
    }
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }
    pub fn len(&self) -> usize {
        self.tokens.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in &self.tokens {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
            first = false;
        }
        Ok(())
    }
}

impl IntoIterator for ClassBuilder {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl From<ClassBuilder> for Vec<String> {
    fn from(builder: ClassBuilder) -> Self {
        builder.into_list()
    }
}

mod responsive;
mod spacing;
#[cfg(test)]
mod tests;

pub use responsive::{Breakpoint, Responsive};
pub use spacing::{Sides, ZERO};
