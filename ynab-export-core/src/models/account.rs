//! Account type.

use serde::{Deserialize, Serialize};

/// A budget or tracking account.
///
/// All balances are integer milliunits (1000 milliunits = one currency
/// unit). The `type` wire field is kept as a plain string because YNAB adds
/// account types over time and this tool only displays them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account identifier.
    pub id: String,
    /// Account display name.
    pub name: String,
    /// Account type, e.g. `"checking"`, `"savings"`, `"creditCard"`.
    #[serde(rename = "type")]
    pub account_type: String,
    /// Whether this account counts toward the budget's available balance.
    pub on_budget: bool,
    /// Whether the account has been closed.
    pub closed: bool,
    /// Whether the account has been deleted.
    #[serde(default)]
    pub deleted: bool,
    /// Free-form note.
    #[serde(default)]
    pub note: Option<String>,
    /// Working balance in milliunits.
    pub balance: i64,
    /// Cleared balance in milliunits.
    #[serde(default)]
    pub cleared_balance: i64,
    /// Uncleared balance in milliunits.
    #[serde(default)]
    pub uncleared_balance: i64,
    /// Whether the account is linked for direct import.
    #[serde(default)]
    pub direct_import_linked: Option<bool>,
    /// Whether the direct import link is in an error state.
    #[serde(default)]
    pub direct_import_in_error: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_rename() {
        let json = r#"{
            "id": "a1",
            "name": "Checking",
            "type": "checking",
            "on_budget": true,
            "closed": false,
            "balance": 150000
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_type, "checking");
        assert_eq!(account.balance, 150_000);
        assert_eq!(account.cleared_balance, 0);
        assert!(account.direct_import_linked.is_none());
    }
}
