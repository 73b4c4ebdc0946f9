use tracing_subscriber::{
    EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

const VERBOSE_DIRECTIVES: &str = "lookthrough=debug,tower_http=debug";

/// Without `--verbose` only `RUST_LOG` decides what is shown, defaulting to
/// `info`. Verbose mode adds debug output for this crate and the HTTP trace
/// layer on top of it.
pub fn init_logging(verbose: bool) {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time())
        .with(build_filter(env_directives.as_deref(), verbose))
        .init();
}

fn build_filter(env_directives: Option<&str>, verbose: bool) -> EnvFilter {
    let base = env_directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or("info");
    let directives = if verbose {
        format!("{base},{VERBOSE_DIRECTIVES}")
    } else {
        base.to_string()
    };

    EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log directives {directives:?}: {e}");
        if verbose {
            EnvFilter::new(format!("info,{VERBOSE_DIRECTIVES}"))
        } else {
            EnvFilter::new("info")
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_default_filter_is_info() {
        assert_eq!(build_filter(None, false).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(build_filter(Some("  "), false).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_env_directives_raise_level() {
        let filter = build_filter(Some("lookthrough=debug,hyper=debug"), false);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = build_filter(Some("warn"), false);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_verbose_adds_debug() {
        assert_eq!(build_filter(None, true).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(
            build_filter(Some("warn"), true).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_invalid_directives_fall_back() {
        let filter = build_filter(Some("lookthrough=notalevel"), false);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
