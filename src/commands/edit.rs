use crate::core::{
    error::{EditorError, Result},
    print_info, print_success,
    workspace::Workspace,
};
use std::io::Read;
use std::path::Path;

/// Replace a file's content with `from` or, without it, standard input
pub async fn execute_edit(workspace: &Workspace, path: &str, from: Option<&Path>) -> Result<()> {
    let id = workspace.resolve(path)?;
    // Edits only apply on top of loaded content
    workspace
        .engine
        .fetch_file_content(id)
        .await?
        .ok_or_else(|| EditorError::not_a_blob(path))?;

    let content = read_input(from)?;
    let changed = workspace.store().write(|s| {
        let changed = s.update_file_content(id, &content)?;
        s.select_file(id)?;
        Ok::<_, EditorError>(changed)
    })?;

    if !changed {
        print_info(&format!("{path} is unchanged"));
        return Ok(());
    }

    let status = workspace
        .store()
        .read(|s| s.get(id).map(|f| f.status.description()))
        .unwrap_or("modified");
    print_success(&format!("Updated {path} ({status})"));
    Ok(())
}

pub(crate) fn read_input(from: Option<&Path>) -> Result<String> {
    match from {
        Some(file) => Ok(std::fs::read_to_string(file)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
