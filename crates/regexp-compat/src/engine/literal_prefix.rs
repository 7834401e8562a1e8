//! # Literal Prefix Extraction

use fancy_regex::Expr;

use crate::alloc::string::String;

/// A literal string that must begin every match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LiteralPrefix {
    /// The required prefix; may be empty.
    pub prefix: String,

    /// True if the prefix is the entire pattern.
    pub complete: bool,

    /// True if the prefix is matched case-insensitively.
    pub case_insensitive: bool,
}

impl LiteralPrefix {
    /// Extract the literal prefix of `pattern`.
    ///
    /// Patterns the expression parser rejects report an empty,
    /// incomplete prefix.
    pub fn of_pattern(pattern: &str) -> Self {
        match Expr::parse_tree(pattern) {
            Ok(tree) => Self::of_expr(&tree.expr),
            Err(err) => {
                log::debug!("no literal prefix for `{pattern}`: {err}");
                Self::default()
            }
        }
    }

    fn of_expr(expr: &Expr) -> Self {
        let mut acc = Self::default();
        let complete = match expr {
            Expr::Concat(children) => children.iter().all(|child| acc.push(child)),
            expr => acc.push(expr),
        };
        acc.complete = complete;
        acc
    }

    /// Append one expression; false when it is not a compatible literal.
    fn push(
        &mut self,
        expr: &Expr,
    ) -> bool {
        match expr {
            Expr::Empty => true,
            Expr::Literal { val, casei } => {
                if self.prefix.is_empty() {
                    self.case_insensitive = *casei;
                } else if self.case_insensitive != *casei {
                    return false;
                }
                self.prefix.push_str(val);
                true
            }
            _ => false,
        }
    }
}
