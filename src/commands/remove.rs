use crate::core::{error::Result, print_success, workspace::Workspace};

/// Mark an entry deleted; unsaved new entries are dropped outright
pub fn execute_remove(workspace: &Workspace, path: &str) -> Result<()> {
    let id = workspace.resolve(path)?;
    workspace.store().write(|s| s.delete_file(id))?;
    print_success(&format!("Marked {path} for deletion"));
    Ok(())
}
