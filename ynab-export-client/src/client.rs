//! YNAB HTTP client.
//!
//! # API Endpoints
//!
//! ```text
//! GET https://api.ynab.com/v1/budgets
//! GET https://api.ynab.com/v1/budgets/{budget_id}
//! GET https://api.ynab.com/v1/budgets/{budget_id}/accounts
//! GET https://api.ynab.com/v1/budgets/{budget_id}/categories
//! Authorization: Bearer <access_token>
//! ```
//!
//! Every response nests its payload under a `data` key, e.g.
//! `{"data":{"budgets":[...]}}`.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use ynab_export_core::{Account, BudgetDetail, BudgetSummary, CategoryGroup};

use crate::api::BudgetApi;
use crate::config::Config;
use crate::error::ClientError;
use crate::throttle::Throttle;

/// Base URL for the YNAB API.
pub const API_BASE_URL: &str = "https://api.ynab.com/v1";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent string for ynab-export.
const USER_AGENT: &str = concat!("ynab-export/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Response Envelopes
// ============================================================================

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct BudgetsData {
    budgets: Vec<BudgetSummary>,
}

#[derive(Debug, Deserialize)]
struct BudgetData {
    budget: BudgetDetail,
}

#[derive(Debug, Deserialize)]
struct AccountsData {
    accounts: Vec<Account>,
}

#[derive(Debug, Deserialize)]
struct CategoryGroupsData {
    category_groups: Vec<CategoryGroup>,
}

// ============================================================================
// Client
// ============================================================================

/// Typed client for the YNAB API read operations.
///
/// Calls are sequential; the embedded [`Throttle`] delays a request that
/// would exceed the configured rate limits. There is no retry: any failure
/// surfaces as [`ClientError::Api`] and ends the run.
#[derive(Debug)]
pub struct YnabClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
    throttle: Mutex<Throttle>,
}

impl YnabClient {
    /// Creates a client from the run configuration.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built, which only happens when
    /// the system TLS configuration is fundamentally broken.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| panic!("Failed to create HTTP client: {e}"));

        Self {
            http,
            base_url: API_BASE_URL.to_string(),
            access_token: config.access_token.clone(),
            throttle: Mutex::new(Throttle::new(config.rate_limit)),
        }
    }

    /// Replaces the base URL. Intended for tests against a local server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Performs an authenticated GET and decodes the `data` envelope.
    #[instrument(skip(self))]
    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> Result<T, ClientError> {
        self.throttle.lock().await.acquire().await;

        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET request");

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .send()
            .await
            .map_err(|e| ClientError::api(operation, e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "API request failed");
            return Err(status_error(operation, status, body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::api(operation, e.to_string()))?;

        debug!(len = body.len(), "Received API response");

        let envelope: Envelope<T> = serde_json::from_str(&body)
            .map_err(|e| ClientError::api(operation, format!("failed to parse response: {e}")))?;

        Ok(envelope.data)
    }
}

/// Maps a non-success HTTP status to the error for this operation.
///
/// Auth, not-found, and rate-limit statuses get a pointed message; anything
/// else carries the status and response body through.
fn status_error(
    operation: &'static str,
    status: reqwest::StatusCode,
    body: String,
) -> ClientError {
    match status {
        reqwest::StatusCode::UNAUTHORIZED => {
            ClientError::api_status(operation, status.as_u16(), "access token rejected")
        }
        reqwest::StatusCode::NOT_FOUND => ClientError::api_status(
            operation,
            status.as_u16(),
            "resource not found (is the budget id correct?)",
        ),
        reqwest::StatusCode::TOO_MANY_REQUESTS => {
            ClientError::api_status(operation, status.as_u16(), "rate limited by the API")
        }
        _ => ClientError::api_status(operation, status.as_u16(), body),
    }
}

impl BudgetApi for YnabClient {
    async fn list_budgets(&self) -> Result<Vec<BudgetSummary>, ClientError> {
        let data: BudgetsData = self.get_json("list budgets", "/budgets").await?;
        Ok(data.budgets)
    }

    async fn get_budget(&self, budget_id: &str) -> Result<BudgetDetail, ClientError> {
        let data: BudgetData = self
            .get_json("get budget", &format!("/budgets/{budget_id}"))
            .await?;
        Ok(data.budget)
    }

    async fn list_accounts(&self, budget_id: &str) -> Result<Vec<Account>, ClientError> {
        let data: AccountsData = self
            .get_json("list accounts", &format!("/budgets/{budget_id}/accounts"))
            .await?;
        Ok(data.accounts)
    }

    async fn list_category_groups(&self, budget_id: &str) -> Result<Vec<CategoryGroup>, ClientError> {
        let data: CategoryGroupsData = self
            .get_json(
                "list category groups",
                &format!("/budgets/{budget_id}/categories"),
            )
            .await?;
        Ok(data.category_groups)
    }
}
