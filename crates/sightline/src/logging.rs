//! Tracing setup.
//!
//! The session driver and the geocoder log through `tracing`; everything the
//! simulation prints for the user goes to stdout instead, so the subscriber
//! here only carries diagnostics. The default filter scopes to this crate at
//! a verbosity-derived level and `RUST_LOG` overrides it wholesale.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Diagnostic verbosity, derived from the `-v`/`-q` CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Info and above.
    #[default]
    Normal,
    /// Debug and above. Session lifecycle transitions log at this level.
    Verbose,
    /// Everything.
    Trace,
}

impl Verbosity {
    /// The most detailed [`Level`] this verbosity lets through.
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

fn default_filter(verbosity: Verbosity) -> String {
    format!("sightline={}", verbosity.to_level_filter())
}

/// Install the global tracing subscriber.
///
/// Call once at startup. A `RUST_LOG` value takes precedence over the
/// verbosity-derived filter; repeated calls are harmless no-ops.
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_to_level() {
        assert_eq!(Verbosity::Quiet.to_level_filter(), Level::ERROR);
        assert_eq!(Verbosity::Normal.to_level_filter(), Level::INFO);
        assert_eq!(Verbosity::Verbose.to_level_filter(), Level::DEBUG);
        assert_eq!(Verbosity::Trace.to_level_filter(), Level::TRACE);
    }

    #[test]
    fn test_default_verbosity_is_normal() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    #[test]
    fn test_default_filter_scopes_to_crate() {
        assert_eq!(default_filter(Verbosity::Normal), "sightline=INFO");
        assert_eq!(default_filter(Verbosity::Verbose), "sightline=DEBUG");
    }

    #[test]
    fn test_init_is_idempotent() {
        init_logging(Verbosity::Normal);
        // The second call hits the already-installed subscriber path.
        init_logging(Verbosity::Trace);
    }
}
