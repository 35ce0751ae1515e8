use super::ClassBuilder;

/// The size that stands for "no spacing on this side". An explicit zero is
/// indistinguishable from an unset side and produces no class.
pub const ZERO: &str = "0";

/// Per-side and per-axis overrides for [`ClassBuilder::p_sides`] and
/// [`ClassBuilder::m_sides`]. A side override beats its axis override, which beats
/// the positional size.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct Sides<'a> {
    pub l: Option<&'a str>,
    pub r: Option<&'a str>,
    pub t: Option<&'a str>,
    pub b: Option<&'a str>,
    pub x: Option<&'a str>,
    pub y: Option<&'a str>,
}

impl<'a> Sides<'a> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn l(mut self, size: &'a str) -> Self {
        self.l = Some(size);
        self
    }
    pub fn r(mut self, size: &'a str) -> Self {
        self.r = Some(size);
        self
    }
    pub fn t(mut self, size: &'a str) -> Self {
        self.t = Some(size);
        self
    }
    pub fn b(mut self, size: &'a str) -> Self {
        self.b = Some(size);
        self
    }
    pub fn x(mut self, size: &'a str) -> Self {
        self.x = Some(size);
        self
    }
    pub fn y(mut self, size: &'a str) -> Self {
        self.y = Some(size);
        self
    }

    /// Resolves to (`left`, `right`, `top`, `bottom`)
    fn resolve(&self, size: &'a str) -> (&'a str, &'a str, &'a str, &'a str) {
        let x = self.x.unwrap_or(size);
        let y = self.y.unwrap_or(size);
        (
            self.l.unwrap_or(x),
            self.r.unwrap_or(x),
            self.t.unwrap_or(y),
            self.b.unwrap_or(y),
        )
    }
}

impl ClassBuilder {
    /// Padding on all four sides
    pub fn p(self, size: &str) -> Self {
        self.box_model("p", size, Sides::default())
    }
    pub fn p_sides<'a>(self, size: &'a str, sides: Sides<'a>) -> Self {
        self.box_model("p", size, sides)
    }
    /// Margin on all four sides
    pub fn m(self, size: &str) -> Self {
        self.box_model("m", size, Sides::default())
    }
    pub fn m_sides<'a>(self, size: &'a str, sides: Sides<'a>) -> Self {
        self.box_model("m", size, sides)
    }

    /// Collapses four side values into as few classes as possible: one uniform
    /// class, otherwise one class per uniform axis, otherwise one class per side
    fn box_model<'a>(self, prefix: &str, size: &'a str, sides: Sides<'a>) -> Self {
        let (left, right, top, bottom) = sides.resolve(size);
        if left != ZERO && [right, top, bottom].iter().all(|&v| v == left) {
            return self.prefixed(prefix, left);
        }
        self.axis(prefix, ('x', 'l', 'r'), left, right)
            .axis(prefix, ('y', 't', 'b'), top, bottom)
    }

    fn axis(self, prefix: &str, names: (char, char, char), first: &str, second: &str) -> Self {
        let (axis, first_side, second_side) = names;
        if first == second {
            return if first == ZERO {
                self
            } else {
                self.prefixed(&format!("{}{}", prefix, axis), first)
            };
        }
        let mut builder = self;
        if first != ZERO {
            builder = builder.prefixed(&format!("{}{}", prefix, first_side), first);
        }
        if second != ZERO {
            builder = builder.prefixed(&format!("{}{}", prefix, second_side), second);
        }
        builder
    }
}

#[cfg(test)]
#[test]
fn test_resolve_precedence() {
    let sides = Sides::new().x("4").l("1");
    assert_eq!(sides.resolve("2"), ("1", "4", "2", "2"));
    assert_eq!(Sides::new().resolve("3"), ("3", "3", "3", "3"));
}
