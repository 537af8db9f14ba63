// ABOUTME: Clean command implementation.
// ABOUTME: Sweeps .vlt files and reports anything that could not be removed.

use crxdeploy::error::Result;
use crxdeploy::output::Output;
use crxdeploy::sweep::sweep_vlt_files;
use std::path::Path;

pub fn clean(dir: &Path, output: &Output) -> Result<()> {
    let report = sweep_vlt_files(dir);

    for path in &report.removed {
        output.item("removed", &path.display().to_string());
    }
    for (path, e) in &report.failed {
        output.warning(&format!("could not clean {}: {e}", path.display()));
    }

    output.success(&format!(
        "Removed {} .vlt file(s) under {}",
        report.removed.len(),
        dir.display()
    ));
    Ok(())
}
