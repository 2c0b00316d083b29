use crate::core::{
    error::{EditorError, Result},
    print_info, print_success,
    workspace::Workspace,
};

/// Replace the working set with the upstream tree of the configured branch.
///
/// Refuses to drop local work unless `force` is set.
pub async fn execute_pull(workspace: &Workspace, force: bool) -> Result<()> {
    workspace.require_configured()?;

    let dirty = workspace.store().read(|s| s.get_dirty_files().len());
    if dirty > 0 && !force {
        return Err(EditorError::DirtyWorkingSet { count: dirty });
    }

    let count = workspace.engine.load_tree().await?;
    print_success(&format!(
        "Loaded {count} entries from {}",
        workspace.config.repository.identity()
    ));

    let current = workspace
        .store()
        .read(|s| s.current_file().map(|f| f.path.clone()));
    if let Some(path) = current {
        print_info(&format!("Current file: {path}"));
    }
    Ok(())
}
