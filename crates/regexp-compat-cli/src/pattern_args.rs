use regexp_compat::{CompileOptions, RegexPattern, Regexp};

/// The syntax dialect to compile under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Dialect {
    /// `regex` syntax only.
    Basic,

    /// `fancy_regex` syntax (look-around, back-references).
    Fancy,

    /// Basic when possible, fancy otherwise.
    Adaptive,
}

/// Pattern and compile options arg group.
#[derive(clap::Args, Debug)]
pub struct PatternArgs {
    /// The regular expression.
    pub pattern: String,

    /// Syntax dialect.
    #[arg(long, value_enum, default_value_t = Dialect::Adaptive)]
    pub dialect: Dialect,

    /// Fancy dialect backtracking step limit.
    #[arg(long, default_value = None)]
    pub backtrack_limit: Option<usize>,

    /// Compiled program size limit, in bytes.
    #[arg(long, default_value = None)]
    pub size_limit: Option<usize>,
}

impl PatternArgs {
    /// The labeled pattern.
    pub fn to_pattern(&self) -> RegexPattern {
        let pattern = self.pattern.clone();
        match self.dialect {
            Dialect::Basic => RegexPattern::Basic(pattern),
            Dialect::Fancy => RegexPattern::Fancy(pattern),
            Dialect::Adaptive => RegexPattern::Adaptive(pattern),
        }
    }

    /// The compile options.
    pub fn options(&self) -> CompileOptions {
        CompileOptions::default()
            .with_backtrack_limit(self.backtrack_limit)
            .with_size_limit(self.size_limit)
    }

    /// Compile the pattern.
    pub fn compile(&self) -> Result<Regexp, Box<dyn std::error::Error>> {
        let re = Regexp::compile_with(self.to_pattern(), &self.options())?;
        log::info!(
            "compiled `{}` with the {} engine",
            re,
            if re.engine().is_fancy() { "fancy" } else { "basic" }
        );
        Ok(re)
    }
}
