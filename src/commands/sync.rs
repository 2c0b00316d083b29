use crate::core::{error::Result, print_success, print_warning, workspace::Workspace};

/// Reconcile every file that exists upstream, keeping local edits.
///
/// Files never loaded simply take the upstream content.
pub async fn execute_sync(workspace: &Workspace) -> Result<()> {
    workspace.require_configured()?;

    let report = workspace.engine.sync_all_files().await?;
    print_success(&format!(
        "Reconciled {} files: {} updated, {} unchanged, {} skipped",
        report.total(),
        report.adopted,
        report.unchanged,
        report.skipped
    ));
    if report.diverged > 0 {
        print_warning(&format!(
            "{} locally edited files changed upstream; your edits were kept",
            report.diverged
        ));
    }
    if report.unreachable > 0 {
        print_warning(&format!(
            "{} files could not be fetched and were left as they are",
            report.unreachable
        ));
    }
    Ok(())
}
