//! Element matching rules
//!
//! Listing cards and their fields are recognized purely by tag name and
//! class attribute. Each rule is a plain value so that rule tables can be
//! declared as constants and tested on their own.

use scraper::ElementRef;

/// How an element's class attribute is tested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassMatch {
    /// Some class token equals one of the names exactly
    AnyOf(&'static [&'static str]),

    /// The lowercased class attribute contains one of the needles
    ContainsIgnoreCase(&'static [&'static str]),
}

/// Tag name plus class test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementMatcher {
    tag: &'static str,
    class: ClassMatch,
}

impl ElementMatcher {
    /// Matches `tag` elements carrying any of `classes`
    pub const fn any_class(tag: &'static str, classes: &'static [&'static str]) -> Self {
        Self {
            tag,
            class: ClassMatch::AnyOf(classes),
        }
    }

    /// Matches `tag` elements whose class attribute contains any of `needles`
    ///
    /// Needles must be lowercase.
    pub const fn class_contains(tag: &'static str, needles: &'static [&'static str]) -> Self {
        Self {
            tag,
            class: ClassMatch::ContainsIgnoreCase(needles),
        }
    }

    /// Tests a single element against this rule
    pub fn matches(&self, element: &ElementRef<'_>) -> bool {
        let value = element.value();
        if value.name() != self.tag {
            return false;
        }

        match self.class {
            ClassMatch::AnyOf(names) => value
                .classes()
                .any(|class| names.iter().any(|name| *name == class)),
            ClassMatch::ContainsIgnoreCase(needles) => match value.attr("class") {
                Some(class) => {
                    let class = class.to_lowercase();
                    needles.iter().any(|needle| class.contains(*needle))
                }
                None => false,
            },
        }
    }
}
