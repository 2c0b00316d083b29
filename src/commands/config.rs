use crate::core::{
    config::EditorConfig,
    error::{EditorError, Result},
    print_info, print_section_header, print_success,
};
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the active configuration (environment overrides applied)
    Show,
    /// Point the editor at a repository
    SetRepo {
        /// Repository as "owner/name"
        repository: String,
        /// Branch to edit
        #[arg(short, long)]
        branch: Option<String>,
    },
    /// Store an access token and enable publishing
    SetToken { token: String },
    /// Forget the stored token; the editor becomes read-only
    ClearToken,
}

pub fn execute_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => show_config(&EditorConfig::load_or_create()?),
        ConfigAction::SetRepo { repository, branch } => {
            let (owner, name) = split_repository(&repository)?;
            let mut config = EditorConfig::load_file()?;
            config.set_repository(owner, name, branch.as_deref())?;
            print_success(&format!(
                "Editing {}",
                config.repository.identity()
            ));
            Ok(())
        }
        ConfigAction::SetToken { token } => {
            if token.trim().is_empty() {
                return Err(EditorError::config_error("Token cannot be empty"));
            }
            EditorConfig::load_file()?.set_token(token.trim())?;
            print_success("Token saved, publishing enabled");
            Ok(())
        }
        ConfigAction::ClearToken => {
            EditorConfig::load_file()?.clear_token()?;
            print_success("Token cleared, editor is read-only");
            Ok(())
        }
    }
}

fn show_config(config: &EditorConfig) -> Result<()> {
    print_section_header("Configuration");
    if config.is_configured() {
        println!("  repository  {}", config.repository.identity());
    } else {
        println!("  repository  (not set)");
    }
    println!(
        "  access      {}",
        if config.is_readonly() { "read-only" } else { "read-write" }
    );
    println!("  api         {}", config.api_base_url);
    println!(
        "  author      {} <{}>",
        config.author.name, config.author.email
    );
    if !config.is_configured() {
        print_info("Run `ghedit config set-repo <owner>/<name>` to get started");
    }
    Ok(())
}

fn split_repository(repository: &str) -> Result<(&str, &str)> {
    match repository.trim().split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner, name))
        }
        _ => Err(EditorError::config_error(format!(
            "Expected <owner>/<name>, got '{repository}'"
        ))),
    }
}
