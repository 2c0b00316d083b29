use crate::core::{colors::get_colored_path, colors::get_status_badge, error::Result, workspace::Workspace};
use colored::*;

/// Print the working set; `>` marks the current file and `*` the focused item
pub fn execute_list(workspace: &Workspace, dirty_only: bool) -> Result<()> {
    workspace.store().read(|store| {
        let current = store.current_file().map(|f| f.id);
        let focused = store.focused_item().map(|f| f.id);

        let mut shown = 0;
        for entry in store.files().iter().filter(|f| !dirty_only || f.is_dirty) {
            let marker = if Some(entry.id) == current {
                ">".cyan().bold()
            } else if Some(entry.id) == focused {
                "*".cyan()
            } else {
                " ".normal()
            };
            println!(
                "{marker} {} {}",
                get_status_badge(entry.status),
                get_colored_path(entry)
            );
            shown += 1;
        }

        if shown == 0 {
            if dirty_only {
                println!("No local changes");
            } else {
                println!("Working set is empty, run `ghedit pull` first");
            }
        }
    });
    Ok(())
}
