// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `ynab-export` Core
//!
//! Domain models and helpers for the `ynab-export` tool.
//!
//! This crate provides the types shared across the other `ynab-export`
//! crates, including:
//!
//! - YNAB API entity models (budgets, accounts, category groups)
//! - The normalized [`ExportDocument`] written in file mode
//! - Milliunit/currency conversion helpers
//! - Category analysis helpers (active, overspent, underfunded)
//!
//! ## Key Types
//!
//! ### Budget Types
//! - [`BudgetSummary`] - A budget as returned by the list call
//! - [`BudgetDetail`] - Budget plus date/currency format metadata
//! - [`CurrencyFormat`] - Per-budget currency display settings
//!
//! ### Account & Category Types
//! - [`Account`] - A budget or tracking account with milliunit balances
//! - [`CategoryGroup`] - A named collection of categories
//! - [`Category`] - A single category with budgeted/activity/balance
//!
//! ### Export Types
//! - [`ExportDocument`] - The serialized output artifact
//! - [`AccountExport`] / [`CategoryGroupExport`] / [`CategoryExport`] -
//!   normalized shapes carrying raw milliunits plus formatted siblings

pub mod analysis;
pub mod currency;
pub mod models;

// Re-export all model types
pub use models::{
    // Budget types
    BudgetDetail,
    BudgetSummary,
    CurrencyFormat,
    DateFormat,
    // Account & category types
    Account,
    Category,
    CategoryGroup,
    // Export types
    AccountExport,
    CategoryExport,
    CategoryGroupExport,
    ExportDocument,
};

// Re-export helpers used throughout the workspace
pub use analysis::{
    active_categories, is_budget_account, overspent_categories, total_activity, total_budgeted,
    underfunded_categories,
};
pub use currency::{format_currency, format_date, milliunits_to_amount, symbol_for, to_milliunits};
