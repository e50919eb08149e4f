//! Category groups and categories.

use serde::{Deserialize, Serialize};

/// A named collection of budget categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Group identifier.
    pub id: String,
    /// Group display name.
    pub name: String,
    /// Whether the group is hidden in the budget UI.
    pub hidden: bool,
    /// Whether the group has been deleted.
    #[serde(default)]
    pub deleted: bool,
    /// Categories in this group, in display order.
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl CategoryGroup {
    /// Returns true if this group and its categories should be reported.
    pub fn is_active(&self) -> bool {
        !self.hidden && !self.deleted
    }
}

/// A single budget category with milliunit amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier.
    pub id: String,
    /// Identifier of the parent group.
    pub category_group_id: String,
    /// Category display name.
    pub name: String,
    /// Whether the category is hidden in the budget UI.
    pub hidden: bool,
    /// Whether the category has been deleted.
    #[serde(default)]
    pub deleted: bool,
    /// Free-form note.
    #[serde(default)]
    pub note: Option<String>,
    /// Amount budgeted this month, in milliunits.
    pub budgeted: i64,
    /// Activity this month, in milliunits (spending is negative).
    pub activity: i64,
    /// Remaining balance, in milliunits.
    pub balance: i64,
    /// Goal type, e.g. `"TB"`, `"TBD"`, `"MF"`, `"NEED"`.
    #[serde(default)]
    pub goal_type: Option<String>,
    /// Goal target amount in milliunits.
    #[serde(default)]
    pub goal_target: Option<i64>,
    /// Goal completion percentage (0-100).
    #[serde(default)]
    pub goal_percentage_complete: Option<i32>,
}

impl Category {
    /// Returns true if this category should be reported.
    pub fn is_active(&self) -> bool {
        !self.hidden && !self.deleted
    }

    /// Returns true if spending has exceeded the budgeted amount.
    pub fn is_overspent(&self) -> bool {
        self.balance < 0
    }

    /// Returns true if money remains but nothing was budgeted this month.
    pub fn is_underfunded(&self) -> bool {
        self.balance > 0 && self.budgeted == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(hidden: bool, deleted: bool, budgeted: i64, balance: i64) -> Category {
        Category {
            id: "c1".to_string(),
            category_group_id: "g1".to_string(),
            name: "Groceries".to_string(),
            hidden,
            deleted,
            note: None,
            budgeted,
            activity: 0,
            balance,
            goal_type: None,
            goal_target: None,
            goal_percentage_complete: None,
        }
    }

    #[test]
    fn test_is_active() {
        assert!(category(false, false, 0, 0).is_active());
        assert!(!category(true, false, 0, 0).is_active());
        assert!(!category(false, true, 0, 0).is_active());
        assert!(!category(true, true, 0, 0).is_active());
    }

    #[test]
    fn test_overspent_and_underfunded() {
        assert!(category(false, false, 10_000, -5000).is_overspent());
        assert!(!category(false, false, 10_000, 0).is_overspent());

        assert!(category(false, false, 0, 5000).is_underfunded());
        assert!(!category(false, false, 10_000, 5000).is_underfunded());
        assert!(!category(false, false, 0, 0).is_underfunded());
    }
}
