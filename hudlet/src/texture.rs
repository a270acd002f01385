//! Namespaced texture identifiers.
//!
//! A [`TextureLocation`] names the texture a sprite samples from, in the
//! familiar `namespace:path` form. The layout engine treats it as
//! opaque; it is attached at construction and handed through unchanged
//! to the host's blit routine.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced when constructing or parsing a [`TextureLocation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextureLocationError {
    /// The namespace was empty or contained a character outside
    /// `a-z 0-9 _ - .`.
    #[error("invalid texture namespace `{0}`")]
    InvalidNamespace(String),
    /// The path was empty or contained a character outside
    /// `a-z 0-9 _ - . /`.
    #[error("invalid texture path `{0}`")]
    InvalidPath(String),
    /// A parsed string had no `:` separator.
    #[error("missing `:` separator in texture location `{0}`")]
    MissingSeparator(String),
}

/// A namespaced, path-like texture identifier.
///
/// # Examples
///
/// ```
/// use hudlet::TextureLocation;
///
/// let icons: TextureLocation = "game:gui/icons.png".parse().unwrap();
/// assert_eq!(icons.namespace(), "game");
/// assert_eq!(icons.path(), "gui/icons.png");
/// assert_eq!(icons.to_string(), "game:gui/icons.png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureLocation {
    namespace: String,
    path: String,
}

impl TextureLocation {
    /// Creates a location from a namespace and a path, validating both.
    pub fn new(
        namespace: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<Self, TextureLocationError> {
        let namespace = namespace.into();
        let path = path.into();

        if namespace.is_empty() || !namespace.chars().all(valid_namespace_char) {
            return Err(TextureLocationError::InvalidNamespace(namespace));
        }
        if path.is_empty() || !path.chars().all(valid_path_char) {
            return Err(TextureLocationError::InvalidPath(path));
        }
        Ok(Self { namespace, path })
    }

    /// Creates a location under the conventional `textures/` directory
    /// of the given namespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use hudlet::TextureLocation;
    ///
    /// let overlay = TextureLocation::texture("mymod", "gui/overlay.png").unwrap();
    /// assert_eq!(overlay.path(), "textures/gui/overlay.png");
    /// ```
    pub fn texture(
        namespace: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<Self, TextureLocationError> {
        Self::new(namespace, format!("textures/{}", path.into()))
    }

    /// The namespace component.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The path component within the namespace.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for TextureLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for TextureLocation {
    type Err = TextureLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Err(TextureLocationError::MissingSeparator(s.to_owned())),
        }
    }
}

fn valid_namespace_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.')
}

fn valid_path_char(c: char) -> bool {
    valid_namespace_char(c) || c == '/'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_conventional_names() {
        let location = TextureLocation::new("game", "textures/gui/icons.png").unwrap();
        assert_eq!(location.namespace(), "game");
        assert_eq!(location.path(), "textures/gui/icons.png");
    }

    #[test]
    fn test_texture_prefixes_directory() {
        let location = TextureLocation::texture("mymod", "gui/mapped_test.png").unwrap();
        assert_eq!(location.path(), "textures/gui/mapped_test.png");
        assert_eq!(location.to_string(), "mymod:textures/gui/mapped_test.png");
    }

    #[test]
    fn test_parse_round_trip() {
        let location: TextureLocation = "game:gui/icons.png".parse().unwrap();
        assert_eq!(
            location.to_string().parse::<TextureLocation>().unwrap(),
            location
        );
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert_eq!(
            "no-separator".parse::<TextureLocation>(),
            Err(TextureLocationError::MissingSeparator(
                "no-separator".to_owned()
            ))
        );
        assert!(matches!(
            TextureLocation::new("Upper", "path"),
            Err(TextureLocationError::InvalidNamespace(_))
        ));
        assert!(matches!(
            TextureLocation::new("game", "spaced path"),
            Err(TextureLocationError::InvalidPath(_))
        ));
        assert!(matches!(
            TextureLocation::new("", "path"),
            Err(TextureLocationError::InvalidNamespace(_))
        ));
        assert!(matches!(
            TextureLocation::new("game", ""),
            Err(TextureLocationError::InvalidPath(_))
        ));
    }
}
