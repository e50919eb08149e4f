//! Summary command - console report of budgets, accounts, and categories.
//!
//! Output is printed as each call completes, so a failure partway through
//! still leaves everything fetched so far on the console.

use anyhow::Result;
use tracing::info;

use ynab_export_client::{BudgetApi, Config, YnabClient};
use ynab_export_core::symbol_for;

use crate::output::TextFormatter;
use crate::{exporter, Cli};

/// Runs the summary command.
pub async fn run(config: &Config, cli: &Cli) -> Result<()> {
    info!("Running summary");

    let client = YnabClient::new(config);
    let formatter = TextFormatter::new(!cli.no_color);
    let symbol = symbol_for(&config.currency);

    let budgets = client.list_budgets().await?;
    println!("{}", formatter.format_budgets(&budgets));

    let Some(budget_id) = exporter::resolve_target(config.budget_id.as_deref(), &budgets) else {
        return Ok(());
    };

    let budget = client.get_budget(&budget_id).await?;
    println!();
    println!("{}", formatter.format_budget_header(&budget));

    let accounts = client.list_accounts(&budget_id).await?;
    println!();
    println!("{}", formatter.format_accounts(&accounts, &symbol));

    let groups = client.list_category_groups(&budget_id).await?;
    println!();
    println!("{}", formatter.format_category_groups(&groups, &symbol));
    println!();
    println!("{}", formatter.format_totals(&groups, &symbol));

    Ok(())
}
