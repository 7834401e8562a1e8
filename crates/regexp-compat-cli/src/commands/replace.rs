use std::io::Write;

use crate::{
    input_output::{InputArgs, OutputArgs},
    pattern_args::PatternArgs,
};

/// Args for the replace command.
#[derive(clap::Args, Debug)]
pub struct ReplaceArgs {
    #[command(flatten)]
    pattern: PatternArgs,

    /// Replacement template (`$1`, `${name}`, `$$`).
    replacement: String,

    /// Insert the replacement verbatim, without expanding `$` references.
    #[arg(long)]
    literal: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl ReplaceArgs {
    /// Run the replace command.
    ///
    /// On a matching error the input is written back unchanged.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let re = self.pattern.compile()?;
        let src = self.input.read_all()?;
        let repl = self.replacement.as_bytes();

        let replaced = if self.literal {
            re.replace_all_literal(&src, repl)
        } else {
            re.replace_all(&src, repl)
        };

        let mut writer = self.output.open_writer()?;
        writer.write_all(&replaced)?;
        writer.flush()?;
        Ok(())
    }
}
