// ABOUTME: Deployment orchestration over the admin console.
// ABOUTME: Runs the fixed step order and reports what each step did.

mod error;
mod orchestrator;
mod report;

pub use error::{DeployError, DeployErrorKind};
pub use orchestrator::{deploy, run_deployment};
pub use report::{DeployReport, Outcome};
