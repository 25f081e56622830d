//! Main CLI application

use crate::config::{parse_config_auto, parse_config_file, validate_config, Config};
use crate::error::{ConfigError, GitaskError};
use crate::runner::{TaskArgs, TaskRegistry};
use crate::tasks::CommitTask;
use crate::ui::{self, Verbosity};
use clap::{Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use std::path::PathBuf;

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
    /// Parsed configuration
    config: Config,
}

impl App {
    /// Create a new app from configuration file
    pub fn new() -> Result<Self, GitaskError> {
        let (config, _config_path) = parse_config_auto()?;
        validate_config(&config)?;

        let command = build_command(&config);

        Ok(App { command, config })
    }

    /// Create app with a specific config file
    pub fn with_config_file(path: PathBuf) -> Result<Self, GitaskError> {
        let config = parse_config_file(&path)?;
        validate_config(&config)?;

        let command = build_command(&config);

        Ok(App { command, config })
    }

    /// Run the application with command line arguments
    pub fn run(mut self) -> Result<(), GitaskError> {
        let matches = self.command.clone().get_matches();

        ui::set_verbosity(get_verbosity(&matches));

        // Check if a task was specified
        let (task_name, task_matches) = match matches.subcommand() {
            Some((name, sub_matches)) => (name.to_string(), sub_matches),
            None => {
                // No task specified, show help
                self.command.print_help()?;
                println!();
                return Ok(());
            }
        };

        if task_name == "completions" {
            return print_completions(&mut self.command, task_matches);
        }

        // Register every declared task, then invoke the selected one
        let registry = build_registry(&self.config)?;
        if !registry.contains(&task_name) {
            return Err(ConfigError::TaskNotFound(task_name).into());
        }

        let args = parse_task_args(task_matches);
        registry.invoke(&task_name, &args)?;

        ui::info(&format!("Task '{}' completed", task_name));

        Ok(())
    }
}

/// Register one commit task per configured namespace
pub fn build_registry(config: &Config) -> Result<TaskRegistry, GitaskError> {
    let mut registry = TaskRegistry::new();

    for (namespace, task_config) in &config.tasks {
        // A message passed on the command line overrides the configured one
        CommitTask::with_config(task_config.clone()).define_with(
            &mut registry,
            namespace,
            |cfg, args| {
                if let Some(message) = args.get("message") {
                    cfg.message = Some(message.to_string());
                }
            },
        )?;
    }

    Ok(registry)
}

/// Build the clap command from configuration
fn build_command(config: &Config) -> Command {
    let mut cmd = Command::new(config.name.clone().unwrap_or_else(|| "gitask".to_string()))
        .version(env!("CARGO_PKG_VERSION"))
        .about(config.usage.clone().unwrap_or_else(|| {
            "A namespaced git commit task runner".to_string()
        }))
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Path to gitask.yml config file")
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        );

    // Add a subcommand for each declared task
    for (namespace, task) in &config.tasks {
        let full_name = format!("{}:{}", namespace, task.name);

        let task_cmd = Command::new(full_name)
            .about(task.description.clone())
            .arg(
                Arg::new("message")
                    .value_name("MESSAGE")
                    .help("Commit message (overrides the configured one)"),
            );

        cmd = cmd.subcommand(task_cmd);
    }

    cmd = cmd.subcommand(
        Command::new("completions")
            .about("Generate shell completions")
            .arg(
                Arg::new("shell")
                    .value_name("SHELL")
                    .required(true)
                    .value_parser(clap::value_parser!(Shell)),
            ),
    );

    cmd
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Build invocation arguments from CLI matches
fn parse_task_args(matches: &ArgMatches) -> TaskArgs {
    let mut args = TaskArgs::new();

    if let Some(message) = matches.get_one::<String>("message") {
        args = args
            .with_positional(message.clone())
            .with_named("message", message.clone());
    }

    args
}

/// Write completions for the requested shell to stdout
fn print_completions(cmd: &mut Command, matches: &ArgMatches) -> Result<(), GitaskError> {
    let shell = *matches
        .get_one::<Shell>("shell")
        .expect("shell argument is required");
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, &mut std::io::stdout());
    Ok(())
}

/// Run the CLI application with provided arguments
pub fn run() -> Result<(), GitaskError> {
    // Check if --file flag is provided first
    let args: Vec<String> = std::env::args().collect();
    let file_path = extract_file_arg(&args);

    let app = if let Some(path) = file_path {
        App::with_config_file(path)?
    } else {
        App::new()?
    };

    app.run()
}

/// Extract --file argument before clap parsing
fn extract_file_arg(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if (args[i] == "--file" || args[i] == "-f") && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    #[test]
    fn test_get_verbosity_normal() {
        let cmd = Command::new("test")
            .arg(Arg::new("quiet").long("quiet").action(ArgAction::SetTrue))
            .arg(Arg::new("silent").long("silent").action(ArgAction::SetTrue))
            .arg(Arg::new("verbose").long("verbose").action(ArgAction::SetTrue));
        let matches = cmd.get_matches_from(vec!["test"]);
        assert_eq!(get_verbosity(&matches), Verbosity::Normal);
    }

    #[test]
    fn test_extract_file_arg() {
        let args = vec![
            "gitask".to_string(),
            "--file".to_string(),
            "test.yml".to_string(),
        ];
        let path = extract_file_arg(&args);
        assert_eq!(path, Some(PathBuf::from("test.yml")));
    }

    #[test]
    fn test_extract_file_arg_short() {
        let args = vec![
            "gitask".to_string(),
            "-f".to_string(),
            "test.yml".to_string(),
        ];
        let path = extract_file_arg(&args);
        assert_eq!(path, Some(PathBuf::from("test.yml")));
    }

    #[test]
    fn test_build_registry_from_config() {
        let config = parse_config(
            r#"
tasks:
  git1:
    message: "First"
  git2:
    message: "Second"
"#,
        )
        .unwrap();

        let registry = build_registry(&config).unwrap();
        assert!(registry.contains("git1:commit"));
        assert!(registry.contains("git2:commit"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_build_command_has_task_subcommands() {
        let config = parse_config("tasks:\n  git: {}\n").unwrap();
        let cmd = build_command(&config);

        let names: Vec<&str> = cmd.get_subcommands().map(|c| c.get_name()).collect();
        assert!(names.contains(&"git:commit"));
        assert!(names.contains(&"completions"));
    }
}
