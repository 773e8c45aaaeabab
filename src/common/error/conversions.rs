//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from the
//! errors of the crates deckbook builds on to the unified Error type.

use super::types::Error;

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Zip(err.to_string())
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl Error {
    /// Wrap an error raised while saving to `path`.
    pub(crate) fn saving(path: impl Into<std::path::PathBuf>, source: Error) -> Self {
        Error::Save {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_error_mentions_path() {
        let inner = Error::Io(std::io::Error::other("disk full"));
        let err = Error::saving("out/report.xlsx", inner);
        let msg = err.to_string();
        assert!(msg.contains("out/report.xlsx"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn test_layout_not_found_lists_names() {
        let err = Error::LayoutNotFound {
            name: "Fancy".to_string(),
            available: vec!["Blank".to_string(), "Title Only".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'Fancy'"));
        assert!(msg.contains("Title Only"));
    }
}
