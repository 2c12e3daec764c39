//! Main model path type.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::constants::MISSING_PREFIX;
use crate::error::ParseError;
use crate::part::Part;
use crate::path_ref::ModelPathRef;

/// A parsed and validated model reference.
///
/// # Structure
///
/// ```text
/// [[domain/]namespace/]name[:tag][+build]
/// ```
///
/// A reference with one `/` fills `namespace` and `name`; two fill
/// `domain`, `namespace` and `name`. The `build` component is stored
/// upper-cased, every other component keeps its input casing.
///
/// Parsing never fails loudly: malformed input yields the zero value
/// (`ModelPath::default()`), for which [`is_valid`](Self::is_valid) is
/// false. Use [`try_parse`](Self::try_parse) or [`FromStr`] when an error is
/// more convenient.
///
/// # Examples
///
/// ```
/// use model_path::ModelPath;
///
/// let p = ModelPath::parse("mistral:7b+q4_0");
/// assert_eq!(p.name(), "mistral");
/// assert_eq!(p.tag(), "7b");
/// assert_eq!(p.build(), "Q4_0");
/// assert_eq!(p.to_string(), "mistral:7b+Q4_0");
///
/// let bad = ModelPath::parse("mistral:7b+Q4_0:latest");
/// assert!(!bad.is_valid());
/// assert_eq!(bad, ModelPath::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModelPath {
    domain: String,
    namespace: String,
    name: String,
    tag: String,
    build: String,
}

impl ModelPath {
    /// Parses a model reference, returning the zero value if it is malformed.
    ///
    /// Leading `http://` and `https://` prefixes are ignored.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        ModelPathRef::parse(input)
            .map(Self::from)
            .unwrap_or_default()
    }

    /// Parses a model reference.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the reference is malformed. See
    /// [`ModelPath::parse`] for the grammar.
    pub fn try_parse(input: &str) -> Result<Self, ParseError> {
        ModelPathRef::parse(input)
            .map(Self::from)
            .ok_or_else(|| ParseError::new(input))
    }

    /// Returns the domain, or `""` if absent.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the namespace, or `""` if absent.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the name, or `""` for the zero value.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tag, or `""` if absent.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the upper-cased build, or `""` if absent.
    #[must_use]
    pub fn build(&self) -> &str {
        &self.build
    }

    /// Returns one component by kind.
    #[must_use]
    pub fn get(&self, part: Part) -> &str {
        match part {
            Part::Domain => &self.domain,
            Part::Namespace => &self.namespace,
            Part::Name => &self.name,
            Part::Tag => &self.tag,
            Part::Build => &self.build,
        }
    }

    /// Returns all five components in [`Part::ALL`] order.
    ///
    /// The zero value yields five empty strings.
    #[must_use]
    pub fn parts(&self) -> [&str; 5] {
        [
            &self.domain,
            &self.namespace,
            &self.name,
            &self.tag,
            &self.build,
        ]
    }

    /// Returns true if the name is present.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
    }

    /// Returns true if all five components are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.parts().iter().all(|p| !p.is_empty())
    }

    /// Returns true if every component except the build is present.
    #[must_use]
    pub fn is_complete_without_build(&self) -> bool {
        self.parts()[..Part::Build.index()]
            .iter()
            .all(|p| !p.is_empty())
    }

    /// Renders all five slots, writing `!(MISSING <PART>)` for empty ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use model_path::ModelPath;
    ///
    /// assert_eq!(
    ///     ModelPath::parse("mistral").full(),
    ///     "!(MISSING DOMAIN)/!(MISSING NAMESPACE)/mistral:!(MISSING TAG)+!(MISSING BUILD)"
    /// );
    /// ```
    #[must_use]
    pub fn full(&self) -> String {
        let mut out = String::new();
        for part in Part::ALL {
            if let Some(sep) = part.separator() {
                out.push(sep);
            }
            let value = self.get(part);
            if value.is_empty() {
                out.push_str(MISSING_PREFIX);
                out.push_str(part.label());
                out.push(')');
            } else {
                out.push_str(value);
            }
        }
        out
    }

    /// Returns `name`, or `name:tag` if a tag is present.
    #[must_use]
    pub fn name_and_tag(&self) -> String {
        let mut out = self.name.clone();
        if !self.tag.is_empty() {
            out.push(':');
            out.push_str(&self.tag);
        }
        out
    }

    /// Returns [`name_and_tag`](Self::name_and_tag) followed by `+build` if a
    /// build is present.
    #[must_use]
    pub fn name_tag_and_build(&self) -> String {
        let mut out = self.name_and_tag();
        if !self.build.is_empty() {
            out.push('+');
            out.push_str(&self.build);
        }
        out
    }

    /// Fills every empty component of `self` from `fallback`.
    ///
    /// Components are taken independently; the result is not re-validated.
    ///
    /// # Examples
    ///
    /// ```
    /// use model_path::ModelPath;
    ///
    /// let merged = ModelPath::parse("mistral")
    ///     .merge(&ModelPath::parse("registry.example.com/XXXXX:latest+Q4_0"));
    /// assert_eq!(merged.to_string(), "registry.example.com/mistral:latest+Q4_0");
    /// ```
    #[must_use]
    pub fn merge(&self, fallback: &Self) -> Self {
        let pick = |part: Part| {
            let primary = self.get(part);
            if primary.is_empty() {
                fallback.get(part).to_string()
            } else {
                primary.to_string()
            }
        };

        Self {
            domain: pick(Part::Domain),
            namespace: pick(Part::Namespace),
            name: pick(Part::Name),
            tag: pick(Part::Tag),
            build: pick(Part::Build),
        }
    }
}

/// Fills every empty component of `primary` from `fallback`.
///
/// Equivalent to [`ModelPath::merge`].
#[must_use]
pub fn merge(primary: &ModelPath, fallback: &ModelPath) -> ModelPath {
    primary.merge(fallback)
}

impl From<ModelPathRef<'_>> for ModelPath {
    fn from(r: ModelPathRef<'_>) -> Self {
        Self {
            domain: r.domain().to_string(),
            namespace: r.namespace().to_string(),
            name: r.name().to_string(),
            tag: r.tag().to_string(),
            build: r.build().to_ascii_uppercase(),
        }
    }
}

impl fmt::Display for ModelPath {
    /// Writes the minimal form: present components only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in [Part::Domain, Part::Namespace] {
            let value = self.get(part);
            if !value.is_empty() {
                f.write_str(value)?;
                f.write_char('/')?;
            }
        }
        f.write_str(&self.name)?;
        if !self.tag.is_empty() {
            f.write_char(':')?;
            f.write_str(&self.tag)?;
        }
        if !self.build.is_empty() {
            f.write_char('+')?;
            f.write_str(&self.build)?;
        }
        Ok(())
    }
}

impl FromStr for ModelPath {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl TryFrom<&str> for ModelPath {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ModelPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ModelPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_parse(&s).map_err(serde::de::Error::custom)
    }
}
