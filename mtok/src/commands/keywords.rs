//! Keywords command implementation.

use mfmt_lex::KEYWORDS;

use crate::commands::traits::{Command, CommandDescription, CommandResult, NoOutput};
use crate::error::Result;

/// Keywords command handler. Prints one reserved word per line with its
/// token kind.
pub struct KeywordsCommand;

/// Render the keyword table as `word<TAB>KIND` rows.
pub fn render_keywords() -> String {
    KEYWORDS
        .iter()
        .map(|(word, kind)| format!("{}\t{}\n", word, kind.name()))
        .collect()
}

impl Command for KeywordsCommand {
    type Args = NoOutput;
    type Output = CommandResult<usize>;

    fn new(_args: Self::Args) -> Self {
        Self
    }

    fn execute(&self) -> Result<Self::Output> {
        print!("{}", render_keywords());
        Ok(CommandResult::success(KEYWORDS.len()))
    }

    fn name() -> &'static str {
        "keywords"
    }
}

impl CommandDescription for KeywordsCommand {
    fn description() -> &'static str {
        "List the reserved words"
    }
}
