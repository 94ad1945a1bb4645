use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Log filter from `RUST_LOG`-style directives. Falls back to `info` when none are given.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Install the global fmt subscriber, filtered by `RUST_LOG`.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn bare_level_is_not_overridden() {
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn target_directives_are_kept() {
        let hint = log_filter(Some("carousel=trace")).max_level_hint();
        assert_eq!(hint, Some(LevelFilter::TRACE));
    }
}
