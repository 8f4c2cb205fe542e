//! pickapp CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pickapp::cli::{Cli, CommandContext, CommandDispatcher, Commands};
use pickapp::config::find_project_root;
use pickapp::ui::{create_renderer, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pickapp=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pickapp=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pickapp starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine project root
    let project_root = cli.project.clone().unwrap_or_else(|| {
        let cwd = std::env::current_dir().unwrap_or_default();
        find_project_root(&cwd).unwrap_or(cwd)
    });

    let is_interactive = match &cli.command {
        Some(Commands::Run(args)) => !args.non_interactive,
        None => true,
        _ => false,
    };

    // Create renderer
    let mut renderer = create_renderer(is_interactive, output_mode);

    // Dispatch command
    let dispatcher = CommandDispatcher::new(CommandContext::from_cli(&cli, &project_root));

    match dispatcher.dispatch(&cli, renderer.as_mut()).await {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            renderer.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
