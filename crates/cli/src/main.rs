mod skills_commands;

use {
    clap::{Parser, Subcommand},
    skillhub_config::{GLOBAL_SKILLS_PATH_ENV, PROJECT_SKILLS_PATH_ENV},
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "skillhub", about = "skillhub — SKILL.md skills for agents")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    /// Comma-separated global skill roots (default `~/.skills/`).
    #[arg(long, global = true, env = GLOBAL_SKILLS_PATH_ENV)]
    global_paths: Option<String>,

    /// Comma-separated project skill roots (default `.skills/`). The first
    /// one marks skills as project-local.
    #[arg(long, global = true, env = PROJECT_SKILLS_PATH_ENV)]
    project_paths: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all discovered skills (default when no subcommand is provided).
    List {
        /// Print skills as a JSON array.
        #[arg(long)]
        json: bool,
    },
    /// Invoke the `skills` tool with a skill name and print the result.
    Invoke {
        /// Skill name (e.g. `pdf`).
        command: String,
    },
    /// Print the `skills` tool definition (name, description, parameters).
    Describe,
    /// Print the resolved skill roots.
    Paths,
}

/// Logs go to stderr so command output on stdout stays clean.
fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_telemetry(&cli);

    info!(version = env!("CARGO_PKG_VERSION"), "skillhub starting");

    let paths = skillhub_config::SkillsPaths::resolve(
        cli.global_paths.as_deref(),
        cli.project_paths.as_deref(),
    )?;

    match cli.command {
        None => skills_commands::list(&paths, false).await,
        Some(Commands::List { json }) => skills_commands::list(&paths, json).await,
        Some(Commands::Invoke { command }) => skills_commands::invoke(&paths, &command).await,
        Some(Commands::Describe) => skills_commands::describe(&paths).await,
        Some(Commands::Paths) => {
            skills_commands::print_paths(&paths);
            Ok(())
        },
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, clap::CommandFactory};

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_invoke_with_path_overrides() {
        let cli = Cli::try_parse_from([
            "skillhub",
            "--global-paths",
            "/g",
            "--project-paths",
            ".skills,/p",
            "invoke",
            "pdf",
        ])
        .unwrap();
        assert_eq!(cli.global_paths.as_deref(), Some("/g"));
        assert_eq!(cli.project_paths.as_deref(), Some(".skills,/p"));
        assert!(matches!(cli.command, Some(Commands::Invoke { ref command }) if command == "pdf"));
    }

    #[test]
    fn no_subcommand_defaults_to_listing() {
        let cli = Cli::try_parse_from(["skillhub", "--json-logs"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.json_logs);
        assert_eq!(cli.log_level, "info");
    }
}
