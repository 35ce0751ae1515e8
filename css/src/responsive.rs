use super::ClassBuilder;
use std::fmt;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A base set of classes plus per-breakpoint sets, which are emitted with their
/// breakpoint as a variant prefix (`md:flex-row`)
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Responsive {
    base: ClassBuilder,
    breakpoints: [Option<ClassBuilder>; 5],
}

impl Responsive {
    pub fn new(base: ClassBuilder) -> Self {
        Self {
            base,
            breakpoints: Default::default(),
        }
    }

    pub fn at(mut self, breakpoint: Breakpoint, classes: ClassBuilder) -> Self {
        self.breakpoints[breakpoint.index()] = Some(classes);
        self
    }

    pub fn to_list(&self) -> Vec<String> {
        let mut list = self.base.to_list();
        for bp in Breakpoint::ALL {
            if let Some(classes) = &self.breakpoints[bp.index()] {
                list.extend(classes.iter().map(|c| format!("{}:{}", bp.prefix(), c)));
            }
        }
        list
    }
}

impl fmt::Display for Responsive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_list().join(" "))
    }
}

impl From<Responsive> for Vec<String> {
    fn from(responsive: Responsive) -> Self {
        responsive.to_list()
    }
}
