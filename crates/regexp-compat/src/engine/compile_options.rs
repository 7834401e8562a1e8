//! # Compile Options

/// Options for compiling a [`RegexPattern`](super::RegexPattern).
///
/// Unset limits keep the engine defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompileOptions {
    /// Backtracking step limit for the fancy engine.
    pub backtrack_limit: Option<usize>,

    /// Compiled program size limit, in bytes.
    pub size_limit: Option<usize>,
}

impl CompileOptions {
    /// Gets the configured backtrack limit.
    ///
    /// Only the fancy engine backtracks; when the limit is exceeded
    /// a search fails with a runtime error rather than "no match".
    pub fn backtrack_limit(&self) -> Option<usize> {
        self.backtrack_limit
    }

    /// Sets the configured backtrack limit.
    pub fn set_backtrack_limit(
        &mut self,
        limit: Option<usize>,
    ) {
        self.backtrack_limit = limit;
    }

    /// Sets the configured backtrack limit.
    pub fn with_backtrack_limit(
        mut self,
        limit: Option<usize>,
    ) -> Self {
        self.set_backtrack_limit(limit);
        self
    }

    /// Gets the configured program size limit.
    pub fn size_limit(&self) -> Option<usize> {
        self.size_limit
    }

    /// Sets the configured program size limit.
    ///
    /// For the fancy engine this bounds the size of the
    /// sub-expressions it delegates to the basic engine.
    pub fn set_size_limit(
        &mut self,
        limit: Option<usize>,
    ) {
        self.size_limit = limit;
    }

    /// Sets the configured program size limit.
    pub fn with_size_limit(
        mut self,
        limit: Option<usize>,
    ) -> Self {
        self.set_size_limit(limit);
        self
    }

    pub(crate) fn build_basic(
        &self,
        pattern: &str,
    ) -> Result<regex::Regex, regex::Error> {
        let mut builder = regex::RegexBuilder::new(pattern);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }
        builder.build()
    }

    pub(crate) fn build_fancy(
        &self,
        pattern: &str,
    ) -> Result<fancy_regex::Regex, fancy_regex::Error> {
        let mut builder = fancy_regex::RegexBuilder::new(pattern);
        if let Some(limit) = self.backtrack_limit {
            builder.backtrack_limit(limit);
        }
        if let Some(limit) = self.size_limit {
            builder.delegate_size_limit(limit);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let options = CompileOptions::default();
        assert_eq!(options.backtrack_limit(), None);
        assert_eq!(options.size_limit(), None);

        let options = options
            .with_backtrack_limit(Some(1000))
            .with_size_limit(Some(1 << 20));
        assert_eq!(options.backtrack_limit(), Some(1000));
        assert_eq!(options.size_limit(), Some(1 << 20));

        let mut options = options;
        options.set_backtrack_limit(None);
        assert_eq!(options.backtrack_limit(), None);
    }

    #[test]
    fn test_size_limit_rejects_large_program() {
        let options = CompileOptions::default().with_size_limit(Some(16));
        assert!(options.build_basic(r"\w{100}").is_err());
        assert!(CompileOptions::default().build_basic(r"\w{100}").is_ok());
    }
}
