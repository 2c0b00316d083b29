use crate::core::{
    error::{EditorError, Result},
    language::language_for_path,
    print_section_header, print_warning,
    workspace::Workspace,
};

/// Print a file's content, fetching it on first view, and make it current
pub async fn execute_show(workspace: &Workspace, path: &str) -> Result<()> {
    let id = workspace.resolve(path)?;
    let content = workspace
        .engine
        .fetch_file_content(id)
        .await?
        .ok_or_else(|| EditorError::not_a_blob(path))?;

    let entry = workspace.store().write(|s| {
        s.select_file(id)?;
        s.get(id).cloned().ok_or_else(|| EditorError::entry_not_found(id))
    })?;

    print_section_header(&format!("{} ({})", entry.path, language_for_path(&entry.path)));
    println!("{content}");

    if entry.is_deleted() {
        print_warning("This file is marked for deletion");
    } else if entry.status.is_changed() {
        print_warning(&format!("Local changes ({})", entry.status.description()));
    }
    Ok(())
}
