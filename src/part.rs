//! Component kinds of a model path.

use std::fmt;

use crate::constants::MAX_COMPONENT_LENGTH;

/// One of the five components of a model path.
///
/// Variants are declared in rendering order, so `Part::Domain < Part::Build`.
///
/// # Examples
///
/// ```
/// use model_path::Part;
///
/// assert_eq!(Part::Build.label(), "BUILD");
/// assert_eq!(Part::Tag.separator(), Some(':'));
/// assert_eq!(Part::ALL.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    /// Registry host.
    Domain,
    /// Owning group or organisation.
    Namespace,
    /// Model name. The only required component.
    Name,
    /// Version label.
    Tag,
    /// Quantization or variant label.
    Build,
}

impl Part {
    /// Every part, in rendering order.
    pub const ALL: [Self; 5] = [
        Self::Domain,
        Self::Namespace,
        Self::Name,
        Self::Tag,
        Self::Build,
    ];

    /// Returns the upper-case label used in missing-component placeholders.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Domain => "DOMAIN",
            Self::Namespace => "NAMESPACE",
            Self::Name => "NAME",
            Self::Tag => "TAG",
            Self::Build => "BUILD",
        }
    }

    /// Returns the separator written before this part, if any.
    #[must_use]
    pub const fn separator(self) -> Option<char> {
        match self {
            Self::Domain => None,
            Self::Namespace | Self::Name => Some('/'),
            Self::Tag => Some(':'),
            Self::Build => Some('+'),
        }
    }

    /// Returns the position of this part in [`Part::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true if the byte may appear inside any component.
    ///
    /// Components are made of ASCII letters, digits, `.`, `-` and `_`.
    #[must_use]
    pub const fn is_valid_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_')
    }

    /// Returns true if `s` is acceptable as a present component.
    ///
    /// The component must be non-empty, at most
    /// [`MAX_COMPONENT_LENGTH`](crate::MAX_COMPONENT_LENGTH) bytes, and made
    /// only of [valid bytes](Self::is_valid_byte).
    #[must_use]
    pub fn is_valid_component(s: &str) -> bool {
        !s.is_empty() && s.len() <= MAX_COMPONENT_LENGTH && s.bytes().all(Self::is_valid_byte)
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
