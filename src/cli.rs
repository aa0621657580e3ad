// third-party imports
use clap::Parser;

/// Evaluate one line of integer arithmetic with `+ - * /` and parentheses.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Expression to evaluate instead of reading a line from standard input.
    #[arg(short, long, env = "CALCOMB_EXPR")]
    pub expr: Option<String>,

    /// Print the input line before the result.
    #[arg(long, env = "CALCOMB_ECHO")]
    pub echo: bool,

    /// Reject input left over after the expression.
    #[arg(long, env = "CALCOMB_STRICT")]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opt = Opt::try_parse_from(["calcomb"]).unwrap();
        assert_eq!(opt.expr, None);
        assert!(!opt.echo);
        assert!(!opt.strict);
    }

    #[test]
    fn test_flags() {
        let opt = Opt::try_parse_from(["calcomb", "-e", "1+2", "--echo", "--strict"]).unwrap();
        assert_eq!(opt.expr.as_deref(), Some("1+2"));
        assert!(opt.echo);
        assert!(opt.strict);
    }
}
