//! Category analysis helpers.
//!
//! A category is *active* when neither it nor its parent group is hidden or
//! deleted; every helper in this module operates on exactly that set.

use crate::models::{Account, Category, CategoryGroup};

/// Returns references to every active category across the given groups.
///
/// Excludes categories whose own `hidden`/`deleted` flags are set, and every
/// category belonging to a hidden or deleted group. Order follows the input.
pub fn active_categories(groups: &[CategoryGroup]) -> Vec<&Category> {
    groups
        .iter()
        .filter(|g| g.is_active())
        .flat_map(|g| g.categories.iter().filter(|c| c.is_active()))
        .collect()
}

/// Total budgeted milliunits across active categories. Empty input is 0.
pub fn total_budgeted(groups: &[CategoryGroup]) -> i64 {
    active_categories(groups).iter().map(|c| c.budgeted).sum()
}

/// Total activity milliunits across active categories. Empty input is 0.
pub fn total_activity(groups: &[CategoryGroup]) -> i64 {
    active_categories(groups).iter().map(|c| c.activity).sum()
}

/// Active categories whose balance has gone negative.
pub fn overspent_categories(groups: &[CategoryGroup]) -> Vec<&Category> {
    active_categories(groups)
        .into_iter()
        .filter(|c| c.is_overspent())
        .collect()
}

/// Active categories holding money with nothing budgeted this month.
pub fn underfunded_categories(groups: &[CategoryGroup]) -> Vec<&Category> {
    active_categories(groups)
        .into_iter()
        .filter(|c| c.is_underfunded())
        .collect()
}

/// Returns true for on-budget accounts (as opposed to tracking accounts).
pub fn is_budget_account(account: &Account) -> bool {
    account.on_budget
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, hidden: bool, deleted: bool) -> Category {
        Category {
            id: id.to_string(),
            category_group_id: "g".to_string(),
            name: id.to_string(),
            hidden,
            deleted,
            note: None,
            budgeted: 0,
            activity: 0,
            balance: 0,
            goal_type: None,
            goal_target: None,
            goal_percentage_complete: None,
        }
    }

    fn group(hidden: bool, deleted: bool, categories: Vec<Category>) -> CategoryGroup {
        CategoryGroup {
            id: "g".to_string(),
            name: "Group".to_string(),
            hidden,
            deleted,
            categories,
        }
    }

    #[test]
    fn test_active_excludes_hidden_and_deleted_categories() {
        let groups = vec![group(
            false,
            false,
            vec![
                category("visible", false, false),
                category("hidden", true, false),
                category("deleted", false, true),
                category("both", true, true),
            ],
        )];

        let active = active_categories(&groups);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "visible");
    }

    #[test]
    fn test_active_excludes_categories_of_inactive_groups() {
        let groups = vec![
            group(true, false, vec![category("in-hidden-group", false, false)]),
            group(false, true, vec![category("in-deleted-group", false, false)]),
            group(false, false, vec![category("kept", false, false)]),
        ];

        let active = active_categories(&groups);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "kept");
    }

    #[test]
    fn test_totals_cover_exactly_the_active_set() {
        let mut visible = category("visible", false, false);
        visible.budgeted = 100_000;
        visible.activity = -40_000;
        let mut hidden = category("hidden", true, false);
        hidden.budgeted = 999_000;
        hidden.activity = -999_000;

        let groups = vec![group(false, false, vec![visible, hidden])];
        assert_eq!(total_budgeted(&groups), 100_000);
        assert_eq!(total_activity(&groups), -40_000);
    }

    #[test]
    fn test_totals_empty_input_is_zero() {
        assert_eq!(total_budgeted(&[]), 0);
        assert_eq!(total_activity(&[]), 0);

        let empty_group = vec![group(false, false, vec![])];
        assert_eq!(total_budgeted(&empty_group), 0);
    }

    #[test]
    fn test_overspent_categories() {
        let mut over = category("over", false, false);
        over.balance = -5000;
        let mut fine = category("fine", false, false);
        fine.balance = 5000;
        let mut hidden_over = category("hidden-over", true, false);
        hidden_over.balance = -5000;

        let groups = vec![group(false, false, vec![over, fine, hidden_over])];
        let overspent = overspent_categories(&groups);
        assert_eq!(overspent.len(), 1);
        assert_eq!(overspent[0].id, "over");
    }

    #[test]
    fn test_underfunded_categories() {
        let mut unfunded = category("unfunded", false, false);
        unfunded.balance = 2000;
        unfunded.budgeted = 0;
        let mut funded = category("funded", false, false);
        funded.balance = 2000;
        funded.budgeted = 2000;
        let mut zero = category("zero", false, false);
        zero.balance = 0;
        zero.budgeted = 0;

        let groups = vec![group(false, false, vec![unfunded, funded, zero])];
        let underfunded = underfunded_categories(&groups);
        assert_eq!(underfunded.len(), 1);
        assert_eq!(underfunded[0].id, "unfunded");
    }

    #[test]
    fn test_is_budget_account() {
        let account = Account {
            id: "a".to_string(),
            name: "Checking".to_string(),
            account_type: "checking".to_string(),
            on_budget: true,
            closed: false,
            deleted: false,
            note: None,
            balance: 0,
            cleared_balance: 0,
            uncleared_balance: 0,
            direct_import_linked: None,
            direct_import_in_error: None,
        };
        assert!(is_budget_account(&account));

        let tracking = Account {
            on_budget: false,
            ..account
        };
        assert!(!is_budget_account(&tracking));
    }
}
