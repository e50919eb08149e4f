//! The read-only budget API surface.
//!
//! The exporter is written against this trait rather than the concrete HTTP
//! client so tests can drive it with canned responses.

use ynab_export_core::{Account, BudgetDetail, BudgetSummary, CategoryGroup};

use crate::error::ClientError;

/// The four read operations the exporter performs.
///
/// Implementors are responsible for authentication and deserializing the
/// wire envelopes; callers issue these strictly sequentially and treat any
/// error as fatal for the run.
pub trait BudgetApi: Send + Sync {
    /// Lists every budget visible to the credential.
    fn list_budgets(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<BudgetSummary>, ClientError>> + Send;

    /// Fetches one budget with its date/currency format metadata.
    fn get_budget(
        &self,
        budget_id: &str,
    ) -> impl std::future::Future<Output = Result<BudgetDetail, ClientError>> + Send;

    /// Lists the accounts of a budget.
    fn list_accounts(
        &self,
        budget_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Account>, ClientError>> + Send;

    /// Lists the category groups of a budget, categories included.
    fn list_category_groups(
        &self,
        budget_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<CategoryGroup>, ClientError>> + Send;
}
