use std::io::Write;

use crate::{commands::write_record, input_output::OutputArgs, pattern_args::PatternArgs};

/// Args for the names command.
#[derive(clap::Args, Debug)]
pub struct NamesArgs {
    #[command(flatten)]
    pattern: PatternArgs,

    /// Also print the literal prefix every match starts with.
    #[arg(long)]
    prefix: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl NamesArgs {
    /// Run the names command.
    ///
    /// Prints `index<TAB>name` per group; index 0 is the whole match.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let re = self.pattern.compile()?;

        let mut writer = self.output.open_writer()?;
        for (idx, name) in re.subexp_names().iter().enumerate() {
            write_record(&mut writer, [idx.to_string().as_str(), name.as_str()])?;
        }
        if self.prefix {
            let prefix = re.literal_prefix();
            writeln!(
                writer,
                "prefix\t{}\t{}",
                prefix.prefix,
                if prefix.complete { "complete" } else { "partial" }
            )?;
        }
        writer.flush()?;
        Ok(())
    }
}
