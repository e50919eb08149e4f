//! Budget types.
//!
//! [`BudgetSummary`] is the shape returned by the list-budgets call;
//! [`BudgetDetail`] adds the per-budget date and currency format metadata
//! returned by the single-budget call.

use serde::{Deserialize, Serialize};

/// A budget as returned by the list-budgets call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Budget identifier.
    pub id: String,
    /// Budget display name.
    pub name: String,
    /// When the budget was last modified (RFC 3339).
    pub last_modified_on: Option<String>,
    /// First month with budget data (`YYYY-MM-01`).
    pub first_month: Option<String>,
    /// Last month with budget data (`YYYY-MM-01`).
    pub last_month: Option<String>,
}

/// A budget with date-format and currency-format metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetDetail {
    /// Budget identifier.
    pub id: String,
    /// Budget display name.
    pub name: String,
    /// When the budget was last modified (RFC 3339).
    pub last_modified_on: Option<String>,
    /// First month with budget data.
    pub first_month: Option<String>,
    /// Last month with budget data.
    pub last_month: Option<String>,
    /// Date display format.
    #[serde(default)]
    pub date_format: Option<DateFormat>,
    /// Currency display format.
    #[serde(default)]
    pub currency_format: Option<CurrencyFormat>,
}

impl BudgetDetail {
    /// Returns the budget's ISO currency code, if the API supplied one.
    pub fn currency_code(&self) -> Option<&str> {
        self.currency_format.as_ref().map(|f| f.iso_code.as_str())
    }
}

/// Date display format metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateFormat {
    /// Format string, e.g. `"MM/DD/YYYY"`.
    pub format: String,
}

/// Currency display format metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// ISO 4217 currency code, e.g. `"USD"`.
    pub iso_code: String,
    /// Number of decimal digits for display.
    #[serde(default)]
    pub decimal_digits: Option<u8>,
    /// Decimal separator character.
    #[serde(default)]
    pub decimal_separator: Option<String>,
    /// Thousands separator character.
    #[serde(default)]
    pub group_separator: Option<String>,
    /// Currency symbol, e.g. `"$"`.
    #[serde(default)]
    pub currency_symbol: Option<String>,
    /// Whether the symbol precedes the amount.
    #[serde(default)]
    pub symbol_first: Option<bool>,
    /// Whether to display the symbol at all.
    #[serde(default)]
    pub display_symbol: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code() {
        let detail = BudgetDetail {
            id: "b1".to_string(),
            name: "Main".to_string(),
            last_modified_on: None,
            first_month: None,
            last_month: None,
            date_format: None,
            currency_format: Some(CurrencyFormat {
                iso_code: "EUR".to_string(),
                decimal_digits: Some(2),
                decimal_separator: None,
                group_separator: None,
                currency_symbol: Some("€".to_string()),
                symbol_first: Some(true),
                display_symbol: Some(true),
            }),
        };
        assert_eq!(detail.currency_code(), Some("EUR"));
    }
}
