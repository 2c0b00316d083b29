use crate::core::{
    error::{EditorError, Result},
    print_info, print_success, print_warning,
    workspace::Workspace,
};

/// Publish every local change as one commit on the configured branch
pub async fn execute_commit(workspace: &Workspace, message: &str) -> Result<()> {
    workspace.require_configured()?;
    if workspace.config.is_readonly() {
        return Err(EditorError::ReadOnly);
    }
    if message.trim().is_empty() {
        return Err(EditorError::config_error("Commit message cannot be empty"));
    }

    let changes = workspace.store().read(|s| s.get_modified_files());
    if changes.is_empty() {
        print_info("Nothing to commit, working set clean");
        return Ok(());
    }

    let receipt = workspace.engine.commit_and_push(message, &changes).await?;
    workspace.store().write(|s| {
        s.record_remote_hashes(&receipt.blobs);
        s.update_file_original_content();
    });

    if receipt.retried {
        print_warning("Upstream moved during the commit; synced and retried");
    }
    print_success(&format!(
        "Committed {} change(s) as {}",
        changes.len(),
        short_sha(&receipt.commit_sha)
    ));
    Ok(())
}

fn short_sha(sha: &str) -> &str {
    sha.get(..7).unwrap_or(sha)
}
