use crate::core::{
    commit::Commit,
    commit_list::{format_commit_list, CommitListContext},
    config::FormatterConfig,
    error::{CommitRowsError, Result},
    output::write_rows,
};
use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Input path that reads the commit snapshot from stdin
pub const STDIN_INPUT: &str = "-";

/// Options of the `render` command
#[derive(Debug, Default)]
pub struct RenderOptions {
    pub input: PathBuf,
    /// Layout override: `Some(true)` for full description, `Some(false)`
    /// for the template layout, `None` to use the configured layout
    pub full_description: Option<bool>,
    /// Template overriding the configured one
    pub template: Option<String>,
    pub diff_target: Option<String>,
    pub cherry_picked: Vec<String>,
    pub plain: bool,
    /// Config file overriding the default location
    pub config_path: Option<PathBuf>,
}

pub fn execute_render(options: RenderOptions) -> Result<()> {
    let config = match &options.config_path {
        Some(path) => FormatterConfig::load_from(path)?,
        None => FormatterConfig::load()?,
    };
    let commits = load_commits(&options.input)?;

    let cherry_picked: HashSet<String> = options.cherry_picked.iter().cloned().collect();
    let commit_template = options
        .template
        .as_deref()
        .unwrap_or(config.commit_template.as_str());

    let context = CommitListContext {
        full_description: options.full_description.unwrap_or(config.full_description),
        cherry_picked: Some(&cherry_picked),
        diff_target: options.diff_target.as_deref().filter(|t| !t.is_empty()),
        commit_template,
    };
    let rows = format_commit_list(&commits, &context);

    let stdout = std::io::stdout();
    write_rows(&mut stdout.lock(), &rows, !options.plain)?;
    Ok(())
}

/// Read a JSON array of commits from a file, or from stdin for `-`
pub fn load_commits(input: &Path) -> Result<Vec<Commit>> {
    let content = if input == Path::new(STDIN_INPUT) {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| CommitRowsError::input_read_failed(input, e))?;
        buffer
    } else {
        std::fs::read_to_string(input).map_err(|e| CommitRowsError::input_read_failed(input, e))?
    };

    let commits: Vec<Commit> = serde_json::from_str(&content)
        .map_err(|e| CommitRowsError::input_parse_failed(input, e))?;
    log::debug!("Loaded {} commits from {}", commits.len(), input.display());
    Ok(commits)
}
