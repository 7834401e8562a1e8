use std::{io::Write, ops::Range};

use crate::{
    commands::write_record,
    input_output::{InputArgs, OutputArgs},
    pattern_args::PatternArgs,
};

/// Args for the find command.
#[derive(clap::Args, Debug)]
pub struct FindArgs {
    #[command(flatten)]
    pattern: PatternArgs,

    /// Maximum number of matches; negative for all.
    #[arg(short = 'n', long, default_value_t = -1, allow_negative_numbers = true)]
    count: isize,

    /// Print byte ranges (`start..end`) instead of text.
    #[arg(long)]
    index: bool,

    /// Print every capture group, tab separated, whole match first.
    #[arg(long)]
    submatch: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl FindArgs {
    /// Run the find command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let re = self.pattern.compile()?;
        let src = self.input.read_all()?;
        let n = self.count;

        let mut writer = self.output.open_writer()?;
        match (self.submatch, self.index) {
            (false, false) => {
                for m in re.find_all(&src, n) {
                    write_record(&mut writer, [m])?;
                }
            }
            (false, true) => {
                for range in re.find_all_index(&src, n) {
                    write_record(&mut writer, [format_range(Some(range))])?;
                }
            }
            (true, false) => {
                for groups in re.find_all_submatch(&src, n) {
                    write_record(&mut writer, groups)?;
                }
            }
            (true, true) => {
                for groups in re.find_all_submatch_index(&src, n) {
                    write_record(&mut writer, groups.into_iter().map(format_range))?;
                }
            }
        }
        writer.flush()?;
        Ok(())
    }
}

/// `start..end`, or `-` for an unmatched group.
fn format_range(range: Option<Range<usize>>) -> String {
    match range {
        Some(range) => format!("{}..{}", range.start, range.end),
        None => "-".to_string(),
    }
}
