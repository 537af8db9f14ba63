// ABOUTME: Deploy command implementation.
// ABOUTME: Runs the deployment and reports backup, node changes, install path, and warnings.

use crxdeploy::config::Config;
use crxdeploy::deploy::{DeployReport, Outcome};
use crxdeploy::error::Result;
use crxdeploy::output::Output;

pub async fn deploy(config: &Config, output: &Output) -> Result<()> {
    output.progress(&format!(
        "Deploying {} to {}",
        config.package, config.server
    ));

    let report = crxdeploy::deploy::deploy(config).await?;
    print_report(&report, output);
    Ok(())
}

fn print_report(report: &DeployReport, output: &Output) {
    if let Some(ref backup) = report.backup {
        output.item("backup", &backup.display().to_string());
    }
    for path in &report.deleted {
        output.item("deleted", path.as_str());
    }
    for path in &report.checked_out {
        output.item("checked-out", path.as_str());
    }
    for path in &report.checked_in {
        output.item("checked-in", path.as_str());
    }
    for warning in &report.warnings {
        output.warning(&warning.message);
    }

    match report.outcome {
        Outcome::Skipped => output.success("Deployment skipped (skip is set)"),
        Outcome::BackupOnly => output.success("Backup-only run, install not requested"),
        Outcome::InstallSkipped => output.success("Install skipped (skip_install is set)"),
        Outcome::Installed { ref install_path } => {
            output.success(&format!("Package installed from {install_path}"))
        }
    }
}
