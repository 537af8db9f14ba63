// ABOUTME: Runs a deployment: login, backup, delete, upload, install, checkin.
// ABOUTME: Each step is awaited in order; the first fail-fast error ends the run.

use chrono::Local;

use super::error::DeployError;
use super::report::{DeployReport, Outcome};
use crate::config::Config;
use crate::console::{Console, ConsoleError, Credentials, Failure};
use crate::diagnostics::Diagnostics;
use crate::http::{HttpTransport, Transport};

/// Deploy using a fresh HTTP client built from the configuration.
pub async fn deploy(config: &Config) -> Result<DeployReport, DeployError> {
    let credentials = config
        .credentials()
        .map_err(|e| DeployError::Configuration(e.to_string()))?;
    let transport = HttpTransport::new(&config.server, config.connect_timeout)
        .map_err(|e| DeployError::Configuration(format!("cannot build HTTP client: {e}")))?;
    run_deployment(config, &credentials, transport).await
}

/// Run every configured step against `transport`.
///
/// Deletion always precedes upload, and checkin runs only after a
/// successful install. Checkin failures become warnings in the report.
pub async fn run_deployment<T: Transport>(
    config: &Config,
    credentials: &Credentials,
    transport: T,
) -> Result<DeployReport, DeployError> {
    if config.skip {
        tracing::info!("Deployment skipped by configuration");
        return Ok(DeployReport::new(Outcome::Skipped));
    }

    let installs = !config.skip_install && !config.backup.only;
    if installs && !config.package.path().is_file() {
        return Err(DeployError::Configuration(format!(
            "package {} does not exist",
            config.package
        )));
    }

    let console = Console::new(transport, config.server.clone());
    let session = console.authenticate(credentials).await?;
    let mut report = DeployReport::new(Outcome::InstallSkipped);

    if config.backup.enabled {
        let taken_at = Local::now().naive_local();
        let written = console
            .backup(&session, &config.package, &config.backup.folder, taken_at)
            .await
            .map_err(|e| match e {
                ConsoleError::Backup(Failure::Folder { .. }) => {
                    DeployError::Configuration(e.to_string())
                }
                other => other.into(),
            })?;
        report.backup = Some(written);
    }

    if config.backup.only {
        tracing::info!("Backup-only run, stopping before deletion");
        report.outcome = Outcome::BackupOnly;
        return Ok(report);
    }

    if let Some(ref paths) = config.delete_paths {
        let summary = console
            .delete_all(&session, paths, config.versioned_nodes)
            .await?;
        report.deleted = summary.deleted;
        report.checked_out = summary.checked_out;
        console.save_all(&session).await?;
    }

    if config.skip_install {
        tracing::info!("Install skipped by configuration");
        return Ok(report);
    }

    console.upload(&session, &config.package).await?;
    let install_path = console
        .install(
            &session,
            &config.package,
            config.install_path.as_deref(),
            config.acl_ignore,
        )
        .await?;
    report.outcome = Outcome::Installed { install_path };

    if let Some(ref paths) = config.delete_paths {
        let mut diag = Diagnostics::default();
        report.checked_in = console
            .checkin_all(&session, paths, &report.deleted, &mut diag)
            .await;
        report.warnings = diag.into_warnings();
        console.save_all(&session).await?;
    }

    Ok(report)
}
