use crate::core::{
    colors::format_file_status, error::Result, print_info, print_section_header, print_warning,
    workspace::Workspace,
};

/// Show the changes that the next commit would publish
pub fn execute_status(workspace: &Workspace) -> Result<()> {
    let changes = workspace.store().read(|s| s.get_modified_files());

    if changes.is_empty() {
        print_info("Nothing to publish, working set clean");
        return Ok(());
    }

    print_section_header("Changes to publish");
    for (i, entry) in changes.iter().enumerate() {
        println!("{}", format_file_status(i + 1, entry));
    }

    if workspace.config.is_readonly() {
        print_warning("No token configured, `ghedit commit` is disabled");
    }
    Ok(())
}
