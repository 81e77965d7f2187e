//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use emoji_importer_core::{DEFAULT_DELAY_MS, DEFAULT_TIMEOUT_SECS};

const EXAMPLES: &str = "\
Examples:
  emoji-importer --server https://mattermost.example.com --token TOKEN --file emoji.json
  emoji-importer -s https://mattermost.example.com -t TOKEN -f emoji.json

Manifest format (a flat JSON object, e.g. a Slack emoji export):
  {\"party parrot\": \"https://emoji.example.com/parrot.gif\", \"squirrel\": \"alias:shipit\"}";

/// Upload custom emojis to Mattermost from a JSON file.
///
/// Names are transliterated and reduced to Mattermost's emoji name alphabet,
/// images are fetched from their URLs and uploaded one by one. Alias entries
/// are skipped.
#[derive(Parser, Debug)]
#[command(name = "emoji-importer")]
#[command(author, version, about, after_help = EXAMPLES)]
pub struct Args {
    /// Mattermost server URL, e.g. `https://mattermost.example.com`
    #[arg(short, long)]
    pub server: String,

    /// Personal access token
    #[arg(short, long)]
    pub token: String,

    /// Path to the source JSON file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Pause between emojis in milliseconds (0 to disable, max 60000)
    #[arg(short, long, default_value_t = DEFAULT_DELAY_MS, value_parser = clap::value_parser!(u64).range(0..=60000))]
    pub delay_ms: u64,

    /// Per-request timeout in seconds (1-600)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=600))]
    pub timeout_secs: u64,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [&str; 7] = [
        "emoji-importer",
        "-s",
        "https://chat.example.com",
        "-t",
        "TOKEN",
        "-f",
        "emoji.json",
    ];

    #[test]
    fn test_cli_short_flags_parse() {
        let args = Args::try_parse_from(REQUIRED).unwrap();
        assert_eq!(args.server, "https://chat.example.com");
        assert_eq!(args.token, "TOKEN");
        assert_eq!(args.file, PathBuf::from("emoji.json"));
        assert_eq!(args.delay_ms, 200);
        assert_eq!(args.timeout_secs, 30);
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_cli_long_flags_parse() {
        let args = Args::try_parse_from([
            "emoji-importer",
            "--server",
            "https://chat.example.com",
            "--token",
            "TOKEN",
            "--file",
            "emoji.json",
        ])
        .unwrap();
        assert_eq!(args.server, "https://chat.example.com");
        assert_eq!(args.token, "TOKEN");
        assert_eq!(args.file, PathBuf::from("emoji.json"));
    }

    #[test]
    fn test_cli_missing_server_rejected() {
        let err = Args::try_parse_from(["emoji-importer", "-t", "TOKEN", "-f", "emoji.json"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_cli_missing_token_rejected() {
        let err = Args::try_parse_from([
            "emoji-importer",
            "-s",
            "https://chat.example.com",
            "-f",
            "emoji.json",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_cli_missing_file_rejected() {
        let err = Args::try_parse_from([
            "emoji-importer",
            "-s",
            "https://chat.example.com",
            "-t",
            "TOKEN",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_cli_delay_override_and_zero() {
        let mut argv = REQUIRED.to_vec();
        argv.extend(["-d", "0"]);
        assert_eq!(Args::try_parse_from(&argv).unwrap().delay_ms, 0);

        let mut argv = REQUIRED.to_vec();
        argv.extend(["--delay-ms", "1500"]);
        assert_eq!(Args::try_parse_from(&argv).unwrap().delay_ms, 1500);
    }

    #[test]
    fn test_cli_delay_over_max_rejected() {
        let mut argv = REQUIRED.to_vec();
        argv.extend(["-d", "60001"]);
        let err = Args::try_parse_from(&argv).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_timeout_zero_rejected() {
        let mut argv = REQUIRED.to_vec();
        argv.extend(["--timeout-secs", "0"]);
        let err = Args::try_parse_from(&argv).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_verbose_and_quiet() {
        let mut argv = REQUIRED.to_vec();
        argv.push("-vv");
        assert_eq!(Args::try_parse_from(&argv).unwrap().verbose, 2);

        let mut argv = REQUIRED.to_vec();
        argv.push("--quiet");
        assert!(Args::try_parse_from(&argv).unwrap().quiet);
    }

    #[test]
    fn test_cli_help_shows_examples() {
        let err = Args::try_parse_from(["emoji-importer", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("Examples:"));
    }

    #[test]
    fn test_cli_version_flag() {
        let err = Args::try_parse_from(["emoji-importer", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
