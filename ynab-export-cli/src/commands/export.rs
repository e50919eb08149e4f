//! Export command - write a timestamped JSON export file.
//!
//! File mode is all-or-nothing: any API failure aborts the run before the
//! file is written, so no partial document ever lands on disk.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use ynab_export_client::{BudgetApi, Config, YnabClient};

use crate::exporter;
use crate::output::write_export;
use crate::Cli;

/// Arguments for the export command.
#[derive(clap::Args)]
pub struct ExportArgs {
    /// Directory to write the export into (created if missing).
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Filename prefix for the export.
    #[arg(long, default_value = "ynab-budget-summary")]
    pub prefix: String,
}

/// Runs the export command.
pub async fn run(args: &ExportArgs, config: &Config, cli: &Cli) -> Result<()> {
    info!("Running export");

    let client = YnabClient::new(config);
    let path = export_to_dir(&client, config, &args.output_dir, &args.prefix).await?;

    if !cli.quiet {
        println!("Export written to {}", path.display());
    }
    Ok(())
}

/// Fetches a full report and writes it to `dir`. Returns the file path.
pub async fn export_to_dir(
    api: &impl BudgetApi,
    config: &Config,
    dir: &Path,
    prefix: &str,
) -> Result<PathBuf> {
    let report = exporter::fetch_report(api, config).await?;
    let document = report.into_document();
    write_export(dir, prefix, &document).await
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::exporter::tests::{test_config, MockApi};

    #[tokio::test]
    async fn test_file_mode_writes_one_matching_file() {
        let api = MockApi::with_budgets(&[("A", "Main"), ("B", "Side")]);
        let config = test_config(None);
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("output");

        let path = export_to_dir(&api, &config, &out_dir, "ynab-budget-summary")
            .await
            .unwrap();

        assert!(out_dir.is_dir());

        let matching: Vec<_> = std::fs::read_dir(&out_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .filter(|n| n.starts_with("ynab-budget-summary-") && n.ends_with(".json"))
            .collect();
        assert_eq!(matching.len(), 1);

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        // The budgets array mirrors the mocked list call.
        assert_eq!(parsed["budgets"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_file_mode_aborts_without_partial_output() {
        let mut api = MockApi::with_budgets(&[("A", "Main")]);
        api.fail_detail = true;
        let config = test_config(None);
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("output");

        let result = export_to_dir(&api, &config, &out_dir, "ynab-budget-summary").await;

        assert!(result.is_err());
        // The directory was never created; nothing partial hit the disk.
        assert!(!out_dir.exists());
    }
}
