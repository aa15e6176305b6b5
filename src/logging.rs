use std::io;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

const DEFAULT_DIRECTIVE: &str = "nbstats=warn";
const VERBOSE_DIRECTIVE: &str = "nbstats=debug";

/// Installs the stderr subscriber. An unparseable directive falls back to
/// `nbstats=warn`.
pub fn init(verbose: bool, config: Option<&Config>) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(
        rust_log.as_deref(),
        verbose,
        config.and_then(|c| c.log_level.as_deref()),
    );

    let env_filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

/// `RUST_LOG` wins, then `--verbose`, then the configured level.
///
/// A configured bare level (`info`) applies to this crate only; anything that
/// already looks like a directive (`info,reqwest=debug`) is used verbatim.
pub fn filter_directive(
    rust_log: Option<&str>,
    verbose: bool,
    configured: Option<&str>,
) -> String {
    if let Some(rust_log) = rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        return rust_log.to_string();
    }

    if verbose {
        return VERBOSE_DIRECTIVE.to_string();
    }

    match configured.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directive) if directive.contains(['=', ',']) => directive.to_string(),
        Some(level) => format!("nbstats={level}"),
        None => DEFAULT_DIRECTIVE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_wins() {
        assert_eq!(
            filter_directive(Some("reqwest=trace"), true, Some("info")),
            "reqwest=trace"
        );
    }

    #[test]
    fn test_verbose_beats_config() {
        assert_eq!(filter_directive(None, true, Some("error")), "nbstats=debug");
    }

    #[test]
    fn test_configured_level_scoped_to_crate() {
        assert_eq!(filter_directive(None, false, Some("info")), "nbstats=info");
    }

    #[test]
    fn test_default_level() {
        assert_eq!(filter_directive(None, false, None), "nbstats=warn");
    }

    #[test]
    fn test_empty_values_are_ignored() {
        assert_eq!(filter_directive(Some(""), false, Some("  ")), "nbstats=warn");
    }

    #[test]
    fn test_configured_directive_used_verbatim() {
        let directive = filter_directive(None, false, Some("info,reqwest=debug"));
        assert_eq!(directive, "info,reqwest=debug");
        assert!(EnvFilter::try_new(&directive).is_ok());

        assert_eq!(
            filter_directive(None, false, Some("nbstats=trace")),
            "nbstats=trace"
        );
    }

    #[test]
    fn test_directives_parse() {
        for directive in [
            filter_directive(None, false, None),
            filter_directive(None, true, None),
            filter_directive(None, false, Some("debug")),
        ] {
            assert!(EnvFilter::try_new(&directive).is_ok(), "{directive}");
        }
    }
}
