use std::{env, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_PER_PAGE: usize = 20;
const DEFAULT_WINDOW: usize = 4;
const DEFAULT_ORPHANS: usize = 0;

/// What to do when the requested page does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidPagePolicy {
    /// Render an empty item list and flag the page as invalid.
    #[default]
    Empty,
    /// Return the error so the caller can answer "not found".
    Propagate,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown invalid page policy: {0}")]
pub struct UnknownPolicy(String);

impl FromStr for InvalidPagePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "empty" => Ok(Self::Empty),
            "propagate" => Ok(Self::Propagate),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for InvalidPagePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Propagate => write!(f, "propagate"),
        }
    }
}

/// Pagination defaults shared by the paginator and the display window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Number of items on a page.
    pub per_page: usize,
    /// Number of page links shown on each side of the current page.
    pub window: usize,
    /// Trailing items folded into the last page instead of getting their own.
    pub orphans: usize,
    /// Whether an empty collection still has a (blank) first page.
    pub allow_empty_first_page: bool,
    /// What to do when the requested page does not exist.
    pub invalid_page_policy: InvalidPagePolicy,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            window: DEFAULT_WINDOW,
            orphans: DEFAULT_ORPHANS,
            allow_empty_first_page: true,
            invalid_page_policy: InvalidPagePolicy::Empty,
        }
    }
}

impl PaginationConfig {
    /// Creates a new `PaginationConfig` from environment variables.
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let invalid_page_policy = if env::var("PAGINATION_INVALID_PAGE_RAISES_404")
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(false)
        {
            InvalidPagePolicy::Propagate
        } else {
            InvalidPagePolicy::Empty
        };

        Self {
            per_page: env::var("PAGINATION_DEFAULT_PAGINATION")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|per_page| *per_page > 0)
                .unwrap_or(DEFAULT_PER_PAGE),
            window: env::var("PAGINATION_DEFAULT_WINDOW")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_WINDOW),
            orphans: env::var("PAGINATION_DEFAULT_ORPHANS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_ORPHANS),
            allow_empty_first_page: env::var("PAGINATION_ALLOW_EMPTY_FIRST_PAGE")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
            invalid_page_policy,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use temp_env::with_vars;

    use super::*;

    #[test]
    fn test_from_env() {
        with_vars(
            [
                ("PAGINATION_DEFAULT_PAGINATION", Some("50")),
                ("PAGINATION_DEFAULT_WINDOW", Some("2")),
                ("PAGINATION_DEFAULT_ORPHANS", Some("5")),
                ("PAGINATION_ALLOW_EMPTY_FIRST_PAGE", Some("false")),
                ("PAGINATION_INVALID_PAGE_RAISES_404", Some("true")),
            ],
            || {
                let config = PaginationConfig::from_env();
                assert_eq!(config.per_page, 50);
                assert_eq!(config.window, 2);
                assert_eq!(config.orphans, 5);
                assert!(!config.allow_empty_first_page);
                assert_eq!(config.invalid_page_policy, InvalidPagePolicy::Propagate);
            },
        );
    }

    #[test]
    fn test_missing_values_default() {
        with_vars(
            [
                ("PAGINATION_DEFAULT_PAGINATION", None::<&str>),
                ("PAGINATION_DEFAULT_WINDOW", None),
                ("PAGINATION_DEFAULT_ORPHANS", None),
                ("PAGINATION_ALLOW_EMPTY_FIRST_PAGE", None),
                ("PAGINATION_INVALID_PAGE_RAISES_404", None),
            ],
            || {
                let config = PaginationConfig::from_env();
                assert_eq!(config, PaginationConfig::default());
            },
        );
    }

    #[test]
    fn test_invalid_values_default() {
        with_vars(
            [
                ("PAGINATION_DEFAULT_PAGINATION", Some("0")),
                ("PAGINATION_DEFAULT_WINDOW", Some("wide")),
                ("PAGINATION_DEFAULT_ORPHANS", Some("-3")),
                ("PAGINATION_ALLOW_EMPTY_FIRST_PAGE", Some("maybe")),
                ("PAGINATION_INVALID_PAGE_RAISES_404", Some("0")),
            ],
            || {
                let config = PaginationConfig::from_env();
                assert_eq!(config.per_page, DEFAULT_PER_PAGE);
                assert_eq!(config.window, DEFAULT_WINDOW);
                assert_eq!(config.orphans, DEFAULT_ORPHANS);
                assert!(config.allow_empty_first_page);
                assert_eq!(config.invalid_page_policy, InvalidPagePolicy::Empty);
            },
        );
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("empty".parse::<InvalidPagePolicy>(), Ok(InvalidPagePolicy::Empty));
        assert_eq!(" Propagate ".parse::<InvalidPagePolicy>(), Ok(InvalidPagePolicy::Propagate));
        assert_eq!(
            "raise".parse::<InvalidPagePolicy>(),
            Err(UnknownPolicy("raise".to_string()))
        );
        assert_eq!(InvalidPagePolicy::Propagate.to_string(), "propagate");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: PaginationConfig =
            serde_json::from_str(r#"{"per_page": 10, "invalid_page_policy": "propagate"}"#)
                .unwrap();

        assert_eq!(config.per_page, 10);
        assert_eq!(config.window, DEFAULT_WINDOW);
        assert_eq!(config.invalid_page_policy, InvalidPagePolicy::Propagate);
    }
}
