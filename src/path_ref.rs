//! Borrowed view of a validated model path.

use crate::part::Part;
use crate::scanner;
use crate::scheme::strip_scheme;

/// A validated model path borrowing its components from the input string.
///
/// Produced by a single scan with no heap allocation. Components keep their
/// input casing, including `build`; convert to [`ModelPath`](crate::ModelPath)
/// for the canonical form.
///
/// # Examples
///
/// ```
/// use model_path::{ModelPath, ModelPathRef};
///
/// let r = ModelPathRef::parse("https://example.com/x/mistral:7b+q4_0").unwrap();
/// assert_eq!(r.namespace(), "x");
/// assert_eq!(r.build(), "q4_0");
///
/// let owned = ModelPath::from(r);
/// assert_eq!(owned.build(), "Q4_0");
///
/// assert!(ModelPathRef::parse("x/y/z/foo").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModelPathRef<'a> {
    pub(crate) domain: &'a str,
    pub(crate) namespace: &'a str,
    pub(crate) name: &'a str,
    pub(crate) tag: &'a str,
    pub(crate) build: &'a str,
}

impl<'a> ModelPathRef<'a> {
    /// Scans `input` into borrowed components.
    ///
    /// Leading `http://` / `https://` prefixes are ignored. Returns `None` if
    /// the reference is malformed.
    #[must_use]
    pub fn parse(input: &'a str) -> Option<Self> {
        scanner::scan(strip_scheme(input))
    }

    /// Returns the domain, or `""` if absent.
    #[must_use]
    pub const fn domain(&self) -> &'a str {
        self.domain
    }

    /// Returns the namespace, or `""` if absent.
    #[must_use]
    pub const fn namespace(&self) -> &'a str {
        self.namespace
    }

    /// Returns the name. Never empty for a scanned path.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the tag, or `""` if absent.
    #[must_use]
    pub const fn tag(&self) -> &'a str {
        self.tag
    }

    /// Returns the build as written in the input, or `""` if absent.
    #[must_use]
    pub const fn build(&self) -> &'a str {
        self.build
    }

    /// Returns one component by kind.
    #[must_use]
    pub const fn get(&self, part: Part) -> &'a str {
        match part {
            Part::Domain => self.domain,
            Part::Namespace => self.namespace,
            Part::Name => self.name,
            Part::Tag => self.tag,
            Part::Build => self.build,
        }
    }

    /// Returns all five components in [`Part::ALL`] order.
    #[must_use]
    pub const fn parts(&self) -> [&'a str; 5] {
        [self.domain, self.namespace, self.name, self.tag, self.build]
    }
}
