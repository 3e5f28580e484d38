mod cli;
mod config;
mod error;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use directions_core::prelude::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Query, USAGE};
use config::{OutputFormat, RouteConfig};
use error::CliError;

/// Report settings after applying command line overrides
#[derive(Debug, Clone, Copy)]
struct Settings {
    format: OutputFormat,
    width: usize,
}

impl Settings {
    fn resolve(cli: &Cli, config: &RouteConfig) -> Self {
        Self {
            format: cli.format.unwrap_or(config.report.format),
            width: cli.width.unwrap_or(config.report.column_width),
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = parse_failure_code(&err);
            if code == 0 {
                let _ = err.print();
            } else {
                eprintln!("Error: invalid command line argument");
            }
            return ExitCode::from(code);
        }
    };

    let config = match cli.config.as_deref().map(RouteConfig::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => return fail(&err),
    };
    init_tracing(&config.log.filter);

    let settings = Settings::resolve(&cli, &config);
    match run(&cli, settings) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err),
    }
}

/// Exit code for a failed argument parse, 0 for help and version output
fn parse_failure_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 2,
    }
}

fn fail(err: &CliError) -> ExitCode {
    eprintln!("Error: {err}");
    ExitCode::from(err.exit_code())
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli, settings: Settings) -> Result<String, CliError> {
    let query = cli.query();
    debug!(?query, ?settings, "running query");

    let output = match query {
        Query::Usage => USAGE.to_string(),
        Query::Vertices(file) => {
            let graph = RouteGraph::load(file)?;
            match settings.format {
                OutputFormat::Text => to_text::render_vertices(&graph),
                OutputFormat::Json => json_output(&to_json::vertices(&graph)),
            }
        }
        Query::Graph(file) => {
            let graph = RouteGraph::load(file)?;
            match settings.format {
                OutputFormat::Text => to_text::render_graph(&graph),
                OutputFormat::Json => json_output(&to_json::graph(&graph)),
            }
        }
        Query::AllRoutes { file, source } => {
            let graph = RouteGraph::load(file)?;
            let routes = report_all(&graph, source)?;
            match settings.format {
                OutputFormat::Text => to_text::render_all(source, &routes, settings.width),
                OutputFormat::Json => json_output(&to_json::routes(source, &routes)),
            }
        }
        Query::OneRoute {
            file,
            source,
            destination,
        } => {
            let graph = RouteGraph::load(file)?;
            let route = report_one(&graph, source, destination)?;
            match settings.format {
                OutputFormat::Text => to_text::render_one(&route, settings.width),
                OutputFormat::Json => json_output(&to_json::route(&route)),
            }
        }
    };

    Ok(output)
}

fn json_output(value: &serde_json::Value) -> String {
    format!("{value:#}\n")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const TEXT: Settings = Settings {
        format: OutputFormat::Text,
        width: 30,
    };

    fn map() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Athens 50 Cleveland 90 London\nCleveland\n").unwrap();
        file
    }

    fn run_args(args: &[&str], settings: Settings) -> Result<String, CliError> {
        let cli =
            Cli::try_parse_from(std::iter::once("route").chain(args.iter().copied())).unwrap();
        run(&cli, settings)
    }

    #[test]
    fn usage_without_arguments() {
        assert_eq!(run_args(&[], TEXT).unwrap(), USAGE);
    }

    #[test]
    fn lists_vertices() {
        let file = map();
        let path = file.path().to_str().unwrap();
        assert_eq!(
            run_args(&[path], TEXT).unwrap(),
            "Vertices:\n1. Athens\n2. Cleveland\n"
        );
    }

    #[test]
    fn prints_single_route() {
        let file = map();
        let path = file.path().to_str().unwrap();
        assert_eq!(
            run_args(&[path, "Athens", "Cleveland"], TEXT).unwrap(),
            format!(
                "Shortest path from Athens to Cleveland:\n{:<30}Total: 50\n",
                "Athens (50) -> Cleveland"
            )
        );
    }

    #[test]
    fn prints_all_routes_as_json() {
        let file = map();
        let path = file.path().to_str().unwrap();
        let settings = Settings {
            format: OutputFormat::Json,
            ..TEXT
        };
        let output = run_args(&[path, "Athens"], settings).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["source"], "Athens");
        assert_eq!(value["routes"][0]["destination"], "Cleveland");
        assert_eq!(value["routes"][0]["total"], 50);
    }

    #[test]
    fn errors_map_to_exit_codes() {
        let file = map();
        let path = file.path().to_str().unwrap();
        let code = |args: &[&str]| run_args(args, TEXT).unwrap_err().exit_code();

        assert_eq!(code(&["/no/such/map.txt"]), 3);
        assert_eq!(code(&[path, "London"]), 4);
        assert_eq!(code(&[path, "Athens", "London"]), 5);
        assert_eq!(code(&[path, "Cleveland", "Athens"]), 6);
    }

    #[test]
    fn error_messages_name_the_failure() {
        let file = map();
        let path = file.path().to_str().unwrap();
        let err = run_args(&[path, "Cleveland", "Athens"], TEXT).unwrap_err();
        assert!(err.to_string().starts_with("no route exists, destination unreachable"));
        let err = run_args(&[path, "London", "Athens"], TEXT).unwrap_err();
        assert!(err.to_string().starts_with("no route exists, source location does not exist"));
        let err = run_args(&[path, "Athens", "London"], TEXT).unwrap_err();
        assert!(err.to_string().starts_with("no route exists, destination unreachable"));
    }

    #[test]
    fn bad_arguments_exit_with_two() {
        let code = |args: &[&str]| {
            let err = Cli::try_parse_from(std::iter::once("route").chain(args.iter().copied()))
                .unwrap_err();
            parse_failure_code(&err)
        };

        assert_eq!(code(&["map.txt", "Athens", "Cleveland", "Dayton"]), 2);
        assert_eq!(code(&["--bogus"]), 2);
        assert_eq!(code(&["--width", "wide", "map.txt"]), 2);
        assert_eq!(code(&["--help"]), 0);
        assert_eq!(code(&["--version"]), 0);
    }

    #[test]
    fn cli_overrides_config() {
        let cli = Cli::try_parse_from(["route", "--width", "12", "map.txt"]).unwrap();
        let mut config = RouteConfig::default();
        config.report.format = OutputFormat::Json;
        let settings = Settings::resolve(&cli, &config);
        assert_eq!(settings.width, 12);
        assert_eq!(settings.format, OutputFormat::Json);
    }
}
