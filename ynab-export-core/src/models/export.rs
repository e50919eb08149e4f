//! The serialized export artifact.
//!
//! File mode writes an [`ExportDocument`]: the raw entities normalized into
//! stable shapes where every milliunit field keeps a `*_formatted` sibling
//! string. The raw value is never dropped, so downstream consumers can pick
//! either representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::budget::{BudgetDetail, BudgetSummary};
use super::category::{Category, CategoryGroup};
use crate::currency::format_currency;

/// The document written in file mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    /// When the export was produced.
    pub exported_at: DateTime<Utc>,
    /// All budgets visible to the credential.
    pub budgets: Vec<BudgetSummary>,
    /// Detail for the target budget, if one was resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetDetail>,
    /// Normalized accounts of the target budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<AccountExport>>,
    /// Normalized category groups of the target budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_groups: Option<Vec<CategoryGroupExport>>,
}

impl ExportDocument {
    /// Assembles an export document, normalizing accounts and categories
    /// with the given currency symbol.
    pub fn assemble(
        budgets: Vec<BudgetSummary>,
        budget: Option<BudgetDetail>,
        accounts: Option<Vec<Account>>,
        category_groups: Option<Vec<CategoryGroup>>,
        symbol: &str,
    ) -> Self {
        Self {
            exported_at: Utc::now(),
            budgets,
            budget,
            accounts: accounts
                .map(|list| list.iter().map(|a| AccountExport::new(a, symbol)).collect()),
            category_groups: category_groups.map(|list| {
                list.iter()
                    .map(|g| CategoryGroupExport::new(g, symbol))
                    .collect()
            }),
        }
    }
}

/// An account with formatted-currency siblings for each balance field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountExport {
    /// Account identifier.
    pub id: String,
    /// Account display name.
    pub name: String,
    /// Account type.
    #[serde(rename = "type")]
    pub account_type: String,
    /// Whether this account counts toward the budget.
    pub on_budget: bool,
    /// Whether the account has been closed.
    pub closed: bool,
    /// Working balance in milliunits.
    pub balance: i64,
    /// Working balance, formatted for display.
    pub balance_formatted: String,
    /// Cleared balance in milliunits.
    pub cleared_balance: i64,
    /// Cleared balance, formatted for display.
    pub cleared_balance_formatted: String,
    /// Uncleared balance in milliunits.
    pub uncleared_balance: i64,
    /// Uncleared balance, formatted for display.
    pub uncleared_balance_formatted: String,
    /// Whether the account is linked for direct import.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_import_linked: Option<bool>,
    /// Whether the direct import link is in an error state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_import_in_error: Option<bool>,
}

impl AccountExport {
    /// Normalizes an account, formatting each milliunit balance.
    pub fn new(account: &Account, symbol: &str) -> Self {
        Self {
            id: account.id.clone(),
            name: account.name.clone(),
            account_type: account.account_type.clone(),
            on_budget: account.on_budget,
            closed: account.closed,
            balance: account.balance,
            balance_formatted: format_currency(account.balance, symbol),
            cleared_balance: account.cleared_balance,
            cleared_balance_formatted: format_currency(account.cleared_balance, symbol),
            uncleared_balance: account.uncleared_balance,
            uncleared_balance_formatted: format_currency(account.uncleared_balance, symbol),
            direct_import_linked: account.direct_import_linked,
            direct_import_in_error: account.direct_import_in_error,
        }
    }
}

/// A category group with normalized categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroupExport {
    /// Group identifier.
    pub id: String,
    /// Group display name.
    pub name: String,
    /// Whether the group is hidden.
    pub hidden: bool,
    /// Whether the group has been deleted.
    pub deleted: bool,
    /// Normalized categories, in display order.
    pub categories: Vec<CategoryExport>,
}

impl CategoryGroupExport {
    /// Normalizes a group and every category it contains.
    pub fn new(group: &CategoryGroup, symbol: &str) -> Self {
        Self {
            id: group.id.clone(),
            name: group.name.clone(),
            hidden: group.hidden,
            deleted: group.deleted,
            categories: group
                .categories
                .iter()
                .map(|c| CategoryExport::new(c, symbol))
                .collect(),
        }
    }
}

/// A category with formatted-currency siblings for each milliunit field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryExport {
    /// Category identifier.
    pub id: String,
    /// Identifier of the parent group.
    pub category_group_id: String,
    /// Category display name.
    pub name: String,
    /// Whether the category is hidden.
    pub hidden: bool,
    /// Whether the category has been deleted.
    pub deleted: bool,
    /// Amount budgeted this month, in milliunits.
    pub budgeted: i64,
    /// Budgeted amount, formatted for display.
    pub budgeted_formatted: String,
    /// Activity this month, in milliunits.
    pub activity: i64,
    /// Activity, formatted for display.
    pub activity_formatted: String,
    /// Remaining balance, in milliunits.
    pub balance: i64,
    /// Balance, formatted for display.
    pub balance_formatted: String,
    /// Goal type, if a goal is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<String>,
    /// Goal target amount in milliunits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_target: Option<i64>,
    /// Goal completion percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_percentage_complete: Option<i32>,
}

impl CategoryExport {
    /// Normalizes a category, formatting each milliunit amount.
    pub fn new(category: &Category, symbol: &str) -> Self {
        Self {
            id: category.id.clone(),
            category_group_id: category.category_group_id.clone(),
            name: category.name.clone(),
            hidden: category.hidden,
            deleted: category.deleted,
            budgeted: category.budgeted,
            budgeted_formatted: format_currency(category.budgeted, symbol),
            activity: category.activity,
            activity_formatted: format_currency(category.activity, symbol),
            balance: category.balance,
            balance_formatted: format_currency(category.balance, symbol),
            goal_type: category.goal_type.clone(),
            goal_target: category.goal_target,
            goal_percentage_complete: category.goal_percentage_complete,
        }
    }
}
