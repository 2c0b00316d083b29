use crate::commands::edit::read_input;
use crate::core::{
    error::{EditorError, Result},
    file_status::EntryKind,
    print_success,
    workspace::Workspace,
};
use std::path::Path;

/// Add a new file (empty unless `from` is given) or directory to the working set
pub fn execute_new(workspace: &Workspace, path: &str, dir: bool, from: Option<&Path>) -> Result<()> {
    let (kind, content) = if dir {
        (EntryKind::Tree, String::new())
    } else {
        let content = match from {
            Some(_) => read_input(from)?,
            None => String::new(),
        };
        (EntryKind::Blob, content)
    };

    let created = workspace.store().write(|s| {
        let id = s.create_file(path, &content, kind)?;
        if kind == EntryKind::Blob {
            s.select_file(id)?;
        }
        Ok::<_, EditorError>(s.get(id).map(|f| f.path.clone()))
    })?;

    print_success(&format!(
        "Created {} {}",
        kind.as_str(),
        created.as_deref().unwrap_or(path)
    ));
    Ok(())
}
