// ABOUTME: Config scaffolding for new projects.
// ABOUTME: Creates crxdeploy.yml template files.

use std::path::Path;

use crate::error::{Error, Result};
use crate::http::BaseUrl;
use crate::types::PackageArtifact;

use super::{CONFIG_FILENAME, DEFAULT_BACKUP_FOLDER, DEFAULT_WORKSPACE};

const DEFAULT_SERVER: &str = "http://localhost:4502/crx";
const DEFAULT_PACKAGE: &str = "target/package.zip";

pub fn init_config(
    dir: &Path,
    server: Option<&str>,
    package: Option<&str>,
    force: bool,
) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let server = BaseUrl::parse(server.unwrap_or(DEFAULT_SERVER))
        .map_err(|e| Error::InvalidConfig(e.to_string()))?;
    let package = PackageArtifact::new(package.unwrap_or(DEFAULT_PACKAGE))
        .map_err(|e| Error::InvalidConfig(e.to_string()))?;

    let yaml = generate_template_yaml(&server, &package);
    std::fs::write(&config_path, yaml)?;

    Ok(())
}

fn generate_template_yaml(server: &BaseUrl, package: &PackageArtifact) -> String {
    format!(
        r#"server: {server}
workspace: {DEFAULT_WORKSPACE}
login: admin
password:
  env: CRX_PASSWORD
package: {package}

# Repository paths removed before install: ',' separates paths, ';' separates groups.
# delete_paths: "/apps/site/components,/apps/site/templates;/etc/designs/site"

# backup:
#   enabled: true
#   folder: {DEFAULT_BACKUP_FOLDER}
"#,
        package = package.path().display(),
    )
}
