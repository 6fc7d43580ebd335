// SPDX-License-Identifier: MPL-2.0
//! Crate error type.
//!
//! Only the application shell can fail: reading or writing `settings.toml`
//! and loading the embedded translations. The picker itself is total.

use std::fmt;
use unic_langid::LanguageIdentifierError;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Filesystem access to the settings file failed.
    Io(String),
    /// `settings.toml` could not be parsed or serialized.
    Config(String),
    /// A translation file or locale tag was rejected.
    I18n(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Config(e) => write!(f, "invalid settings: {e}"),
            Error::I18n(e) => write!(f, "translation error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<LanguageIdentifierError> for Error {
    fn from(err: LanguageIdentifierError) -> Self {
        Error::I18n(format!("invalid locale tag ({err})"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use unic_langid::LanguageIdentifier;

    #[test]
    fn io_failure_keeps_its_message() {
        let err = Error::from(std::io::Error::other("disk full"));
        assert_eq!(err, Error::Io("disk full".to_string()));
        assert_eq!(err.to_string(), "I/O error: disk full");
    }

    #[test]
    fn broken_toml_is_a_settings_error() {
        let parse = toml::from_str::<toml::Table>("time_scale = = 2").unwrap_err();
        let err = Error::from(parse);
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("invalid settings: "));
    }

    #[test]
    fn bad_locale_tag_is_a_translation_error() {
        let parse = "!!".parse::<LanguageIdentifier>().unwrap_err();
        let err = Error::from(parse);
        assert!(matches!(&err, Error::I18n(message) if message.starts_with("invalid locale tag")));
        assert!(err.to_string().starts_with("translation error: "));
    }
}
