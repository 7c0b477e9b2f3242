// src/args.rs
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "sumsort",
    version = crate::VERSION,
    about = "Sorts the addends of a single-digit sum into non-decreasing order"
)]
pub struct Args {
    /// Sum expression such as `3+2+1`; read from standard input when omitted
    pub expression: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn expression_is_optional() {
        let args = Args::try_parse_from(["sumsort"]).unwrap();
        assert!(args.expression.is_none());

        let args = Args::try_parse_from(["sumsort", "3+2+1"]).unwrap();
        assert_eq!(args.expression.as_deref(), Some("3+2+1"));
    }

    #[test]
    fn no_flags_are_accepted() {
        assert!(Args::try_parse_from(["sumsort", "--format", "json"]).is_err());
    }
}
