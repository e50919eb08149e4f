//! Domain models for ynab-export.
//!
//! These types mirror the YNAB API v1 entities this tool reads, plus the
//! normalized export shapes it writes. All entities are read-only snapshots
//! built fresh from API responses on each run.
//!
//! ## Submodules
//!
//! - [`budget`] - Budget types (`BudgetSummary`, `BudgetDetail`, formats)
//! - [`account`] - Account type with milliunit balances
//! - [`category`] - Category groups and categories
//! - [`export`] - The `ExportDocument` output artifact

mod account;
mod budget;
mod category;
mod export;

// Re-export everything at the models level
pub use account::Account;
pub use budget::{BudgetDetail, BudgetSummary, CurrencyFormat, DateFormat};
pub use category::{Category, CategoryGroup};
pub use export::{AccountExport, CategoryExport, CategoryGroupExport, ExportDocument};
