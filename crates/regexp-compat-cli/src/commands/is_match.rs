use std::io::Write;

use regexp_compat::view::bytes_as_text;

use crate::{
    input_output::{InputArgs, OutputArgs},
    pattern_args::PatternArgs,
};

/// Args for the match command.
#[derive(clap::Args, Debug)]
pub struct MatchArgs {
    #[command(flatten)]
    pattern: PatternArgs,

    /// Fail on a matching error (or non UTF-8 input) instead of printing `false`.
    #[arg(long)]
    strict: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl MatchArgs {
    /// Run the match command.
    ///
    /// Prints `true` or `false`; a matching error prints `false`
    /// unless `--strict` is given.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let re = self.pattern.compile()?;
        let src = self.input.read_all()?;

        let matched = if self.strict {
            re.try_match_string(bytes_as_text(&src)?)?
        } else {
            re.match_bytes(&src)
        };

        let mut writer = self.output.open_writer()?;
        writeln!(writer, "{matched}")?;
        writer.flush()?;
        Ok(())
    }
}
