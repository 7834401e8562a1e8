use std::io::Write;

mod find;
mod is_match;
mod names;
mod quote;
mod replace;
mod split;

/// Subcommands for rxc
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Report whether the input contains a match.
    Match(is_match::MatchArgs),

    /// Print matches, one per line.
    Find(find::FindArgs),

    /// Replace every match.
    Replace(replace::ReplaceArgs),

    /// Print the pieces between matches, one per line.
    Split(split::SplitArgs),

    /// Escape text so it matches literally.
    Quote(quote::QuoteArgs),

    /// List the capture groups of a pattern.
    Names(names::NamesArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Match(cmd) => cmd.run(),
            Commands::Find(cmd) => cmd.run(),
            Commands::Replace(cmd) => cmd.run(),
            Commands::Split(cmd) => cmd.run(),
            Commands::Quote(cmd) => cmd.run(),
            Commands::Names(cmd) => cmd.run(),
        }
    }
}

/// Write one tab separated line.
fn write_record<I, F>(
    writer: &mut dyn Write,
    fields: I,
) -> std::io::Result<()>
where
    I: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    for (idx, field) in fields.into_iter().enumerate() {
        if idx > 0 {
            writer.write_all(b"\t")?;
        }
        writer.write_all(field.as_ref())?;
    }
    writeln!(writer)
}
