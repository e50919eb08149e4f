//! Console report formatting with colors.

use ynab_export_core::{
    format_currency, format_date, overspent_categories, total_activity, total_budgeted,
    underfunded_categories, Account, BudgetDetail, BudgetSummary, CategoryGroup,
};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats the budget list, e.g. after the list call succeeds.
    pub fn format_budgets(&self, budgets: &[BudgetSummary]) -> String {
        let mut lines = vec![format!(
            "{} budget(s) found:",
            self.bold(&budgets.len().to_string())
        )];
        for budget in budgets {
            let mut line = format!("  - {} ({})", budget.name, self.dim(&budget.id));
            if let Some(modified) = &budget.last_modified_on {
                line.push_str(&format!(
                    " {}",
                    self.dim(&format!("modified {}", format_date(modified)))
                ));
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    /// Formats the target budget header.
    pub fn format_budget_header(&self, budget: &BudgetDetail) -> String {
        let mut lines = vec![format!("Budget: {}", self.bold(&budget.name))];
        if let Some(modified) = &budget.last_modified_on {
            lines.push(format!("Last modified: {}", format_date(modified)));
        }
        if let Some(code) = budget.currency_code() {
            lines.push(format!("Currency: {}", self.cyan(code)));
        }
        lines.join("\n")
    }

    /// Formats the account list with display balances.
    pub fn format_accounts(&self, accounts: &[Account], symbol: &str) -> String {
        let mut lines = vec![format!(
            "Accounts ({}):",
            accounts.len()
        )];
        for account in accounts {
            let balance = self.amount(account.balance, symbol);
            let mut line = format!("  - {}: {}", account.name, balance);
            if !account.on_budget {
                line.push_str(&format!(" {}", self.dim("(tracking)")));
            }
            if account.closed {
                line.push_str(&format!(" {}", self.dim("(closed)")));
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    /// Formats the nested category-group/category breakdown.
    pub fn format_category_groups(&self, groups: &[CategoryGroup], symbol: &str) -> String {
        let mut lines = vec![format!("Category groups ({}):", groups.len())];
        for group in groups {
            lines.push(format!("  {}:", self.bold(&group.name)));
            for category in &group.categories {
                lines.push(format!(
                    "    - {}: budgeted {}, activity {}, balance {}",
                    category.name,
                    self.amount(category.budgeted, symbol),
                    self.amount(category.activity, symbol),
                    self.amount(category.balance, symbol),
                ));
            }
        }
        lines.join("\n")
    }

    /// Formats the totals block over active categories.
    pub fn format_totals(&self, groups: &[CategoryGroup], symbol: &str) -> String {
        let overspent = overspent_categories(groups).len();
        let underfunded = underfunded_categories(groups).len();
        let mut lines = vec![
            format!(
                "Total budgeted: {}",
                self.amount(total_budgeted(groups), symbol)
            ),
            format!(
                "Total activity: {}",
                self.amount(total_activity(groups), symbol)
            ),
        ];
        if overspent > 0 {
            lines.push(self.red(&format!("Overspent categories: {overspent}")));
        }
        if underfunded > 0 {
            lines.push(format!("Underfunded categories: {underfunded}"));
        }
        lines.join("\n")
    }

    /// Formats a milliunit amount, red when negative.
    fn amount(&self, milliunits: i64, symbol: &str) -> String {
        let text = format_currency(milliunits, symbol);
        if milliunits < 0 {
            self.red(&text)
        } else {
            self.green(&text)
        }
    }

    fn bold(&self, text: &str) -> String {
        self.wrap(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.wrap(DIM, text)
    }

    fn red(&self, text: &str) -> String {
        self.wrap(RED, text)
    }

    fn green(&self, text: &str) -> String {
        self.wrap(GREEN, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.wrap(CYAN, text)
    }

    fn wrap(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}
