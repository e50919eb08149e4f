//! Environment-driven configuration.
//!
//! Loading fails fast when the access token is absent, before any network
//! activity. The budget id is optional; without it the exporter falls back
//! to the first budget the list call returns.

use tracing::debug;

use crate::error::ClientError;

/// Environment variable holding the YNAB personal access token.
pub const ACCESS_TOKEN_VAR: &str = "YNAB_ACCESS_TOKEN";

/// Environment variable holding an optional budget id.
pub const BUDGET_ID_VAR: &str = "YNAB_BUDGET_ID";

/// Environment variable overriding the display currency.
pub const CURRENCY_VAR: &str = "YNAB_CURRENCY";

/// Resolved run configuration. Read-only after construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Personal access token for the YNAB API.
    pub access_token: String,
    /// Budget to export; `None` auto-selects the first listed budget.
    pub budget_id: Option<String>,
    /// ISO currency code used for display formatting.
    pub currency: String,
    /// Client-side request rate limits.
    pub rate_limit: RateLimit,
}

/// Request rate limits enforced by [`crate::Throttle`].
///
/// Defaults match the YNAB API's documented 200 requests/hour allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Maximum requests in any rolling hour.
    pub requests_per_hour: u32,
    /// Maximum requests in any rolling minute.
    pub requests_per_minute: u32,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            requests_per_hour: 200,
            requests_per_minute: 20,
        }
    }
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCredential`] when `YNAB_ACCESS_TOKEN`
    /// is unset or empty.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through a variable lookup function.
    ///
    /// The indirection keeps tests off the process-global environment.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCredential`] when the access token is
    /// absent or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_token = lookup(ACCESS_TOKEN_VAR)
            .filter(|t| !t.is_empty())
            .ok_or(ClientError::MissingCredential(ACCESS_TOKEN_VAR))?;

        let budget_id = lookup(BUDGET_ID_VAR).filter(|id| !id.is_empty());
        let currency = lookup(CURRENCY_VAR)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| "USD".to_string());

        debug!(
            budget_id = budget_id.as_deref().unwrap_or("<auto>"),
            %currency,
            "Loaded configuration"
        );

        Ok(Self {
            access_token,
            budget_id,
            currency,
            rate_limit: RateLimit::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |name| map.get(name).map(|v| (*v).to_string())
    }

    #[test]
    fn test_missing_token_fails() {
        let result = Config::from_lookup(lookup_from(&[]));
        assert!(matches!(
            result,
            Err(ClientError::MissingCredential(ACCESS_TOKEN_VAR))
        ));
    }

    #[test]
    fn test_empty_token_fails() {
        let result = Config::from_lookup(lookup_from(&[(ACCESS_TOKEN_VAR, "")]));
        assert!(matches!(result, Err(ClientError::MissingCredential(_))));
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[(ACCESS_TOKEN_VAR, "tok")])).unwrap();
        assert_eq!(config.access_token, "tok");
        assert!(config.budget_id.is_none());
        assert_eq!(config.currency, "USD");
        assert_eq!(config.rate_limit.requests_per_hour, 200);
        assert_eq!(config.rate_limit.requests_per_minute, 20);
    }

    #[test]
    fn test_overrides_respected() {
        let config = Config::from_lookup(lookup_from(&[
            (ACCESS_TOKEN_VAR, "tok"),
            (BUDGET_ID_VAR, "budget-42"),
            (CURRENCY_VAR, "EUR"),
        ]))
        .unwrap();
        assert_eq!(config.budget_id.as_deref(), Some("budget-42"));
        assert_eq!(config.currency, "EUR");
    }
}
