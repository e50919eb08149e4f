//! The export pipeline.
//!
//! Runs the four read calls strictly in sequence: list budgets, resolve the
//! target, then (if a target exists) budget detail, accounts, and category
//! groups. The target is computed once as a local value; nothing mutates the
//! configuration mid-run. Any API failure aborts the remaining steps.

use tracing::{debug, info};

use ynab_export_client::{BudgetApi, ClientError, Config};
use ynab_export_core::{
    symbol_for, Account, BudgetDetail, BudgetSummary, CategoryGroup, ExportDocument,
};

/// Everything one run fetched, prior to rendering.
#[derive(Debug)]
pub struct BudgetReport {
    /// All budgets visible to the credential.
    pub budgets: Vec<BudgetSummary>,
    /// Detail for the target budget, if one was resolved.
    pub budget: Option<BudgetDetail>,
    /// Accounts of the target budget.
    pub accounts: Option<Vec<Account>>,
    /// Category groups of the target budget.
    pub category_groups: Option<Vec<CategoryGroup>>,
    /// Display currency symbol for this run.
    pub symbol: String,
}

impl BudgetReport {
    /// Converts the report into the file-mode export document.
    pub fn into_document(self) -> ExportDocument {
        ExportDocument::assemble(
            self.budgets,
            self.budget,
            self.accounts,
            self.category_groups,
            &self.symbol,
        )
    }
}

/// Picks the budget to fetch detail for: the configured id when present,
/// otherwise the first listed budget, otherwise none.
pub fn resolve_target(configured: Option<&str>, budgets: &[BudgetSummary]) -> Option<String> {
    configured
        .map(str::to_string)
        .or_else(|| budgets.first().map(|b| b.id.clone()))
}

/// Fetches the full report for one run.
///
/// # Errors
///
/// Propagates the first [`ClientError`] from any of the sequential calls;
/// later steps are not attempted.
pub async fn fetch_report(
    api: &impl BudgetApi,
    config: &Config,
) -> Result<BudgetReport, ClientError> {
    let budgets = api.list_budgets().await?;
    info!(count = budgets.len(), "Fetched budgets");

    let target = resolve_target(config.budget_id.as_deref(), &budgets);
    let symbol = symbol_for(&config.currency);

    let Some(budget_id) = target else {
        debug!("No budgets available, skipping detail steps");
        return Ok(BudgetReport {
            budgets,
            budget: None,
            accounts: None,
            category_groups: None,
            symbol,
        });
    };

    debug!(%budget_id, "Resolved target budget");

    let budget = api.get_budget(&budget_id).await?;
    let accounts = api.list_accounts(&budget_id).await?;
    let category_groups = api.list_category_groups(&budget_id).await?;

    Ok(BudgetReport {
        budgets,
        budget: Some(budget),
        accounts: Some(accounts),
        category_groups: Some(category_groups),
        symbol,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock API that serves canned data and records requested budget ids.
    pub struct MockApi {
        pub budgets: Vec<BudgetSummary>,
        pub requested: Mutex<Vec<String>>,
        pub fail_detail: bool,
    }

    impl MockApi {
        pub fn with_budgets(ids: &[(&str, &str)]) -> Self {
            Self {
                budgets: ids
                    .iter()
                    .map(|(id, name)| BudgetSummary {
                        id: (*id).to_string(),
                        name: (*name).to_string(),
                        last_modified_on: None,
                        first_month: None,
                        last_month: None,
                    })
                    .collect(),
                requested: Mutex::new(Vec::new()),
                fail_detail: false,
            }
        }
    }

    impl BudgetApi for MockApi {
        async fn list_budgets(&self) -> Result<Vec<BudgetSummary>, ClientError> {
            Ok(self.budgets.clone())
        }

        async fn get_budget(&self, budget_id: &str) -> Result<BudgetDetail, ClientError> {
            self.requested.lock().unwrap().push(budget_id.to_string());
            if self.fail_detail {
                return Err(ClientError::api_status("get budget", 404, "not found"));
            }
            Ok(BudgetDetail {
                id: budget_id.to_string(),
                name: "Mock".to_string(),
                last_modified_on: None,
                first_month: None,
                last_month: None,
                date_format: None,
                currency_format: None,
            })
        }

        async fn list_accounts(&self, budget_id: &str) -> Result<Vec<Account>, ClientError> {
            self.requested.lock().unwrap().push(budget_id.to_string());
            Ok(vec![])
        }

        async fn list_category_groups(
            &self,
            budget_id: &str,
        ) -> Result<Vec<CategoryGroup>, ClientError> {
            self.requested.lock().unwrap().push(budget_id.to_string());
            Ok(vec![])
        }
    }

    pub fn test_config(budget_id: Option<&str>) -> Config {
        Config::from_lookup(|name| match name {
            "YNAB_ACCESS_TOKEN" => Some("test-token".to_string()),
            "YNAB_BUDGET_ID" => budget_id.map(str::to_string),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn test_resolve_prefers_configured_id() {
        let budgets = vec![BudgetSummary {
            id: "A".to_string(),
            name: "Main".to_string(),
            last_modified_on: None,
            first_month: None,
            last_month: None,
        }];
        assert_eq!(
            resolve_target(Some("B"), &budgets),
            Some("B".to_string())
        );
        assert_eq!(resolve_target(None, &budgets), Some("A".to_string()));
        assert_eq!(resolve_target(None, &[]), None);
    }

    #[tokio::test]
    async fn test_auto_selects_first_budget() {
        let api = MockApi::with_budgets(&[("A", "Main")]);
        let config = test_config(None);

        let report = fetch_report(&api, &config).await.unwrap();

        assert_eq!(report.budgets.len(), 1);
        assert!(report.budget.is_some());
        // Every detail call went to the auto-selected budget.
        let requested = api.requested.lock().unwrap();
        assert_eq!(requested.as_slice(), ["A", "A", "A"]);
    }

    #[tokio::test]
    async fn test_configured_budget_wins() {
        let api = MockApi::with_budgets(&[("A", "Main"), ("B", "Side")]);
        let config = test_config(Some("B"));

        fetch_report(&api, &config).await.unwrap();

        let requested = api.requested.lock().unwrap();
        assert!(requested.iter().all(|id| id == "B"));
    }

    #[tokio::test]
    async fn test_no_budgets_skips_detail_steps() {
        let api = MockApi::with_budgets(&[]);
        let config = test_config(None);

        let report = fetch_report(&api, &config).await.unwrap();

        assert!(report.budgets.is_empty());
        assert!(report.budget.is_none());
        assert!(report.accounts.is_none());
        assert!(report.category_groups.is_none());
        assert!(api.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_detail_failure_aborts_run() {
        let mut api = MockApi::with_budgets(&[("A", "Main")]);
        api.fail_detail = true;
        let config = test_config(None);

        let err = fetch_report(&api, &config).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: Some(404), .. }));
        // Only the failing call was made; accounts/categories were skipped.
        assert_eq!(api.requested.lock().unwrap().len(), 1);
    }
}
