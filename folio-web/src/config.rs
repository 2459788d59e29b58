//! Build-time configuration
//!
//! The page is static, so the only knob is how chatty logging is. Set
//! `FOLIO_LOG` (trace, debug, info, warn, error) when building; anything
//! unset or unrecognized falls back to info.

use tracing::Level;

const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Document language for the `<html lang>` attribute
pub const DOCUMENT_LANG: &str = "pt-BR";

pub fn log_level() -> Level {
    parse_log_level(option_env!("FOLIO_LOG"))
}

fn parse_log_level(value: Option<&str>) -> Level {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(Some("debug")), Level::DEBUG);
        assert_eq!(parse_log_level(Some("WARN")), Level::WARN);
        assert_eq!(parse_log_level(Some(" trace ")), Level::TRACE);
    }

    #[test]
    fn test_parse_log_level_falls_back_to_info() {
        assert_eq!(parse_log_level(None), Level::INFO);
        assert_eq!(parse_log_level(Some("loud")), Level::INFO);
        assert_eq!(parse_log_level(Some("")), Level::INFO);
    }
}
