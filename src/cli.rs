use clap::Parser;
use std::path::PathBuf;

/// Terminal timeline client over an in-memory mock feed.
#[derive(Debug, Parser)]
#[command(name = "chirp", version, about)]
pub struct Args {
    /// Path to a TOML config file (defaults to the platform config dir).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to a JSON seed fixture replacing the bundled sample data.
    #[arg(long, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Write logs to this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "chirp=debug".
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_without_flags() {
        let args = Args::parse_from(["chirp"]);
        assert!(args.config.is_none());
        assert!(args.seed.is_none());
    }

    #[test]
    fn parses_paths() {
        let args = Args::parse_from(["chirp", "--seed", "fixture.json", "--log-level", "debug"]);
        assert_eq!(args.seed, Some(PathBuf::from("fixture.json")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
