use std::io::Write;

use crate::{
    commands::write_record,
    input_output::{InputArgs, OutputArgs},
    pattern_args::PatternArgs,
};

/// Args for the split command.
#[derive(clap::Args, Debug)]
pub struct SplitArgs {
    #[command(flatten)]
    pattern: PatternArgs,

    /// Maximum number of pieces; negative for all.
    #[arg(short = 'n', long, default_value_t = -1, allow_negative_numbers = true)]
    count: isize,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl SplitArgs {
    /// Run the split command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let re = self.pattern.compile()?;
        let src = self.input.read_all()?;

        let pieces = re.split_bytes(&src, self.count);
        log::debug!("{} pieces", pieces.len());

        let mut writer = self.output.open_writer()?;
        for piece in pieces {
            write_record(&mut writer, [piece])?;
        }
        writer.flush()?;
        Ok(())
    }
}
