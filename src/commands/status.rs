// ABOUTME: Status command implementation.
// ABOUTME: Prints the resolved configuration without contacting the server.

use crxdeploy::config::Config;
use crxdeploy::output::Output;

pub fn status(config: &Config, output: &Output) {
    let install_path = config.package.install_path(config.install_path.as_deref());
    let delete_paths = config
        .delete_paths
        .as_ref()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "(none)".to_string());

    output.item("server", &config.server.to_string());
    output.item("workspace", &config.workspace);
    output.item("package", &config.package.to_string());
    output.item("install-path", &install_path);
    output.item("delete-paths", &delete_paths);
    if config.backup.enabled {
        output.item("backup-folder", &config.backup.folder.display().to_string());
    }
    output.success("Configuration OK");
}
