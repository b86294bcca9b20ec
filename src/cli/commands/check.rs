use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CheckSummary, CommandResult, CommandSummary},
};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        format::check_format_issues, out_of_range::check_out_of_range_issues,
        undeclared::check_undeclared_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Format,
    Undeclared,
    OutOfRange,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Format,
            CheckRule::Undeclared,
            CheckRule::OutOfRange,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::Format => {
                let issues = check_format_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::FormatMismatch));
            }
            CheckRule::Undeclared => {
                let issues = check_undeclared_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Undeclared));
            }
            CheckRule::OutOfRange => {
                let issues = check_out_of_range_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::OutOfRange));
            }
        }
    }

    all_issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));

    let summary = CheckSummary {
        max_id: ctx.max_id(),
        locale_count: ctx.max_locale(),
        locale_files_checked: ctx.catalog().loaded_file_count(),
        signature_count: ctx.signatures().len(),
    };

    Ok(finish(CommandSummary::Check(summary), all_issues))
}
