// src/packages/registry.rs

//! Backend registry and detection
//!
//! Picks the package manager to query, either by name or by probing `PATH`
//! for the tools each backend needs.

use crate::error::{Error, Result};
use crate::packages::apt_query::AptBackend;
use crate::packages::runner::CommandRunner;
use crate::packages::traits::PackageBackend;
use crate::packages::xbps_query::XbpsBackend;
use tracing::debug;

/// Supported package manager backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Debian-family systems (apt-mark, apt-cache)
    Apt,
    /// Void Linux and other XBPS systems (xbps-query)
    Xbps,
}

impl BackendKind {
    /// All backends, in detection order
    pub const ALL: [BackendKind; 2] = [Self::Apt, Self::Xbps];

    /// Parse from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "apt" | "deb" | "debian" => Some(Self::Apt),
            "xbps" | "void" => Some(Self::Xbps),
            _ => None,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apt => "apt",
            Self::Xbps => "xbps",
        }
    }

    /// Executable whose presence marks this backend as usable
    pub fn program(&self) -> &'static str {
        match self {
            Self::Apt => "apt-mark",
            Self::Xbps => "xbps-query",
        }
    }

    /// Whether this backend's query tool is on `PATH`
    pub fn is_available(&self) -> bool {
        which::which(self.program()).is_ok()
    }

    /// Find the first backend whose tools are installed
    pub fn detect() -> Result<Self> {
        Self::detect_with(|kind| kind.is_available())
    }

    /// Detection with a custom availability probe
    pub fn detect_with<F>(available: F) -> Result<Self>
    where
        F: Fn(BackendKind) -> bool,
    {
        for kind in Self::ALL {
            if available(kind) {
                debug!("Detected {} backend ({} found)", kind, kind.program());
                return Ok(kind);
            }
        }

        let tried: Vec<&str> = Self::ALL.iter().map(|k| k.program()).collect();
        Err(Error::NoBackend(format!("none of {} found in PATH", tried.join(", "))))
    }

    /// Build a backend of this kind on top of `runner`
    pub fn build<R>(&self, runner: R) -> Box<dyn PackageBackend>
    where
        R: CommandRunner + 'static,
    {
        match self {
            Self::Apt => Box::new(AptBackend::new(runner)),
            Self::Xbps => Box::new(XbpsBackend::new(runner)),
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Backend selection as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendChoice {
    Auto,
    Kind(BackendKind),
}

impl BackendChoice {
    pub fn parse(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        BackendKind::parse(s).map(Self::Kind).ok_or_else(|| {
            Error::ConfigError(format!(
                "unknown backend '{}' (expected auto, apt or xbps)",
                s
            ))
        })
    }

    /// Resolve to a concrete backend, probing the system for `Auto`
    pub fn resolve(&self) -> Result<BackendKind> {
        match self {
            Self::Auto => BackendKind::detect(),
            Self::Kind(kind) => Ok(*kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packages::runner::SystemRunner;

    #[test]
    fn test_parse_backend() {
        assert_eq!(BackendKind::parse("apt"), Some(BackendKind::Apt));
        assert_eq!(BackendKind::parse("APT"), Some(BackendKind::Apt));
        assert_eq!(BackendKind::parse("xbps"), Some(BackendKind::Xbps));
        assert_eq!(BackendKind::parse("pacman"), None);
    }

    #[test]
    fn test_display_roundtrip() {
        for kind in BackendKind::ALL {
            assert_eq!(BackendKind::parse(&kind.to_string()), Some(kind));
        }
    }

    #[test]
    fn test_detect_prefers_apt() {
        assert_eq!(BackendKind::detect_with(|_| true).unwrap(), BackendKind::Apt);
        assert_eq!(
            BackendKind::detect_with(|k| k == BackendKind::Xbps).unwrap(),
            BackendKind::Xbps
        );
    }

    #[test]
    fn test_detect_none() {
        let err = BackendKind::detect_with(|_| false).unwrap_err();
        assert!(matches!(err, Error::NoBackend(_)));
        assert!(err.to_string().contains("apt-mark"));
    }

    #[test]
    fn test_backend_choice() {
        assert_eq!(BackendChoice::parse("auto").unwrap(), BackendChoice::Auto);
        assert_eq!(
            BackendChoice::parse("xbps").unwrap().resolve().unwrap(),
            BackendKind::Xbps
        );
        assert!(matches!(
            BackendChoice::parse("yum"),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_build_names() {
        for kind in BackendKind::ALL {
            let backend = kind.build(SystemRunner::new());
            assert_eq!(backend.name(), kind.as_str());
        }
    }
}
