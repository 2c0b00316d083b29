use crate::core::{error::Result, print_info, print_success, workspace::Workspace};

/// Discard local work on the given paths, or on every dirty entry with `all`
pub fn execute_revert(workspace: &Workspace, paths: &[String], all: bool) -> Result<()> {
    if all {
        let count = workspace.store().write(|s| {
            let count = s.get_dirty_files().len();
            s.revert_all_files();
            count
        });
        if count == 0 {
            print_info("Nothing to revert");
        } else {
            print_success(&format!("Reverted {count} entries"));
        }
        return Ok(());
    }

    // Resolve everything first so a typo reverts nothing
    let ids = paths
        .iter()
        .map(|path| workspace.resolve(path))
        .collect::<Result<Vec<_>>>()?;
    workspace.store().write(|s| {
        ids.iter().try_for_each(|&id| s.revert_file(id))
    })?;
    print_success(&format!("Reverted {}", paths.join(", ")));
    Ok(())
}
