use clap::Parser;
use sensor_config_inspect::{
    error_report, init_tracing, inspect_fixtures, ConfigResult, InspectOptions, Shape,
};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

/// Process status when every file inspected cleanly
const STATUS_OK: u8 = 0;
/// Process status after any load, decode or output failure
const STATUS_FAILED: u8 = 1;

/// Decode sensor configuration files and print them for inspection
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Directory holding the fixture files inspected when no --file is given
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// Inspect a single file instead of the fixtures
    #[arg(long)]
    file: Option<PathBuf>,

    /// Shape to decode --file into: array, subtables, sections or dynamic
    #[arg(long, default_value = "array", requires = "file")]
    shape: String,

    /// Also print the shape-agnostic decoded value
    #[arg(long)]
    dump: bool,

    /// Render keyed sensors and channels in key order
    #[arg(long)]
    sorted: bool,
}

impl Cli {
    fn options(&self) -> InspectOptions {
        InspectOptions {
            dump: self.dump,
            sorted: self.sorted,
        }
    }
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> ConfigResult<()> {
    match &cli.file {
        Some(file) => {
            let shape: Shape = cli.shape.parse()?;
            info!("[main] inspecting '{}' as {}", file.display(), shape);
            shape.inspect(file, out, cli.options())?;
        }
        None => {
            info!(
                "[main] inspecting fixtures in '{}'",
                cli.config_dir.display()
            );
            inspect_fixtures(&cli.config_dir, out, cli.options())?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Reports a failed run on `err` and maps the outcome to a process status.
/// There is no recovery: any error ends the run.
fn report_outcome<E: Write>(result: ConfigResult<()>, err: &mut E) -> u8 {
    match result {
        Ok(()) => STATUS_OK,
        Err(e) => {
            debug!("[main] aborting after {} failure", e.phase());
            // a failed write to stderr has nowhere left to go
            let _ = writeln!(err, "{}", error_report(&e));
            STATUS_FAILED
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let result = run(&cli, &mut stdout.lock());
    let status = report_outcome(result, &mut std::io::stderr().lock());
    ExitCode::from(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_fixtures() {
        let cli = Cli::try_parse_from(["sensor-config-inspect"]).unwrap();
        assert_eq!(cli.config_dir, PathBuf::from("config"));
        assert!(cli.file.is_none());
        assert_eq!(cli.options(), InspectOptions::default());
    }

    #[test]
    fn test_single_file_flags() {
        let cli = Cli::try_parse_from([
            "sensor-config-inspect",
            "--file",
            "plant.toml",
            "--shape",
            "subtables",
            "--sorted",
            "--dump",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("plant.toml")));
        assert_eq!(cli.shape.parse::<Shape>().unwrap(), Shape::Subtables);
        let expected = InspectOptions {
            dump: true,
            sorted: true,
        };
        assert_eq!(cli.options(), expected);
    }

    #[test]
    fn test_missing_file_reports_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let missing = missing.to_str().unwrap();
        let cli = Cli::try_parse_from(["sensor-config-inspect", "--file", missing]).unwrap();

        let mut out: Vec<u8> = Vec::new();
        let result = run(&cli, &mut out);
        assert!(out.is_empty());

        let mut err = Vec::new();
        assert_eq!(report_outcome(result, &mut err), STATUS_FAILED);
        let text = String::from_utf8(err).unwrap();
        assert!(
            text.starts_with("error during open: Failed to open configuration file"),
            "{text}"
        );
        assert!(text.contains("nope.toml"));
    }

    #[test]
    fn test_unknown_shape_reports_shape_failure() {
        let cli = Cli::try_parse_from([
            "sensor-config-inspect",
            "--file",
            "plant.toml",
            "--shape",
            "yaml",
        ])
        .unwrap();

        let mut err = Vec::new();
        let mut out: Vec<u8> = Vec::new();
        let status = report_outcome(run(&cli, &mut out), &mut err);
        assert_eq!(status, STATUS_FAILED);
        let text = String::from_utf8(err).unwrap();
        assert_eq!(
            text,
            "error during shape: Unsupported configuration shape: 'yaml'\n"
        );
    }

    #[test]
    fn test_fixtures_report_success() {
        let cli = Cli::try_parse_from([
            "sensor-config-inspect",
            "--config-dir",
            concat!(env!("CARGO_MANIFEST_DIR"), "/config"),
        ])
        .unwrap();

        let mut out = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        assert_eq!(report_outcome(run(&cli, &mut out), &mut err), STATUS_OK);
        assert!(err.is_empty());
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("struct content:").count(), 3);
    }

    #[test]
    fn test_shape_requires_file() {
        let parsed = Cli::try_parse_from(["sensor-config-inspect", "--shape", "sections"]);
        assert!(parsed.is_err());
    }
}
