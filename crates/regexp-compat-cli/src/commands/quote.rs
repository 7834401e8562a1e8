use std::io::Write;

use regexp_compat::quote_meta;

use crate::input_output::OutputArgs;

/// Args for the quote command.
#[derive(clap::Args, Debug)]
pub struct QuoteArgs {
    /// Text to escape.
    text: String,

    #[command(flatten)]
    output: OutputArgs,
}

impl QuoteArgs {
    /// Run the quote command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = self.output.open_writer()?;
        writeln!(writer, "{}", quote_meta(&self.text))?;
        writer.flush()?;
        Ok(())
    }
}
