use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use saveit::cli::shell::render_result;
use saveit::cli::{run_shell, LogicManager, ShellMode};
use saveit::config::paths::DATA_DIR_ENV;
use saveit::config::{SaveItPaths, Settings};
use saveit::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "saveit",
    version,
    about = "Terminal expense tracker",
    long_about = "SaveIt keeps track of what you spend across named accounts. \
                  Record one-off expenditures and recurring repeats, set a \
                  budget per month, and view spending reports by tag or by \
                  month from the command line."
)]
struct Cli {
    /// Directory holding settings, data and exported reports
    #[arg(long, env = DATA_DIR_ENV, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive command shell (default)
    Shell {
        /// Read commands from stdin without line editing
        #[arg(long)]
        script: bool,
    },

    /// Run a single command line and exit
    #[command(alias = "x")]
    Exec {
        /// The command line, e.g. `exp add i/Lunch a/4.50`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        line: Vec<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = SaveItPaths::resolve(cli.data_dir)?;

    match cli.command.unwrap_or(Commands::Shell { script: false }) {
        Commands::Shell { script } => {
            let mut logic = LogicManager::open(&paths)?;
            let mode = if script || !std::io::stdin().is_terminal() {
                ShellMode::Script
            } else {
                ShellMode::Interactive
            };
            run_shell(&mut logic, mode)?;
        }
        Commands::Exec { line } => {
            let mut logic = LogicManager::open(&paths)?;
            let result = logic.execute(&line.join(" "))?;
            println!("{}", render_result(&logic, &result));
        }
        Commands::Config => {
            let settings = Settings::load_or_create(&paths)?;
            println!("SaveIt Configuration");
            println!("====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Data file:        {}", settings.ledger_path(&paths).display());
            println!("Report directory: {}", settings.report_dir(&paths).display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Default tag:     {}", settings.default_tag);
        }
    }

    Ok(())
}
