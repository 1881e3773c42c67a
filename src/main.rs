//! taxidi-conf - Taxidi configuration bootstrap
//!
//! Command line front end over the `taxidi_conf` library.

use clap::Parser;

use taxidi_conf::cli::{Cli, Commands};
use taxidi_conf::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let share_dir = cli.share_dir;
    let result = match cli.command {
        Commands::Init => commands::init::run(share_dir),
        Commands::Get(args) => commands::config::get(share_dir, &args),
        Commands::GetBool(args) => commands::config::get_bool(share_dir, &args),
        Commands::Set(args) => commands::config::set(share_dir, &args),
        Commands::Themes => commands::themes::run(share_dir),
        Commands::Paths => commands::paths::run(share_dir),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
