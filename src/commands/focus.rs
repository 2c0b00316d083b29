use crate::core::{error::Result, print_success, workspace::Workspace};

pub fn execute_focus(workspace: &Workspace, path: &str) -> Result<()> {
    let id = workspace.resolve(path)?;
    workspace.store().write(|s| s.set_focused_item(id))?;
    print_success(&format!("Focused {path}"));
    Ok(())
}
