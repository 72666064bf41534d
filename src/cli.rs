use clap::Parser;
use std::path::PathBuf;

/// Quote `$0` and `$DIR` in a generated shell launcher script
#[derive(Parser, Debug)]
#[command(name = "launcher-patch", author, version, about)]
pub struct Cli {
    /// Launcher script to patch in place
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the patched script to stdout instead of writing it back
    #[arg(long = "dry-run", conflicts_with = "json")]
    pub dry_run: bool,

    /// Print a JSON summary of the replacements
    #[arg(long = "json")]
    pub json: bool,

    /// Log each step to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn file_argument_is_required() {
        assert!(Cli::try_parse_from(["launcher-patch"]).is_err());
    }

    #[test]
    fn dry_run_conflicts_with_json() {
        assert!(Cli::try_parse_from(["launcher-patch", "--dry-run", "--json", "run.sh"]).is_err());
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["launcher-patch", "-v", "--json", "run.sh"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("run.sh"));
        assert!(cli.json);
        assert!(cli.verbose);
        assert!(!cli.dry_run);
    }
}
