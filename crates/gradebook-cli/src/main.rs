mod menu;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::menu::Menu;

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Interactive student marks analyzer", version)]
struct Args {
    /// Minimum number of students required for manual entry
    #[arg(long, default_value_t = 5)]
    min_students: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Default to warn so log lines don't interleave with the prompts.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gradebook_cli=warn,gradebook_core=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), args.min_students);
    menu.run()
}
