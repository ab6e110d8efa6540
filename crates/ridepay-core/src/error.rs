#![forbid(unsafe_code)]

//! Errors raised while setting up a render surface.
//!
//! Dialog operations themselves are total; only acquiring a host environment
//! can fail.

use std::fmt;

/// Errors from surface construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// No global window object (not running in a browser main thread).
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// A required element of the page is missing.
    MissingElement(&'static str),
    /// The host raised an exception.
    Host(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "no global window available"),
            Self::NoDocument => write!(f, "window has no document"),
            Self::MissingElement(name) => write!(f, "document has no <{name}> element"),
            Self::Host(msg) => write!(f, "host error: {msg}"),
        }
    }
}

impl std::error::Error for SurfaceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(SurfaceError::NoWindow.to_string(), "no global window available");
        assert_eq!(
            SurfaceError::MissingElement("head").to_string(),
            "document has no <head> element"
        );
        assert_eq!(
            SurfaceError::Host("boom".into()).to_string(),
            "host error: boom"
        );
    }
}
