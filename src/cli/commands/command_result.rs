use crate::core::MessageId;
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug, Default)]
pub struct CheckSummary {
    /// Upper bound of the verified id range.
    pub max_id: MessageId,
    /// Number of locales each id was checked against.
    pub locale_count: usize,
    /// Number of locale message files (JSON) that were loaded.
    pub locale_files_checked: usize,
    /// Number of declared signatures.
    pub signature_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running catalint commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of files or entries that failed to parse.
    pub parse_error_count: usize,
}
