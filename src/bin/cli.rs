// src/bin/cli.rs
use dh_scrape::{ cli::{ self, Command }, Error };

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = match cli::parse_args(std::env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", cli::USAGE);
            return Ok(());
        }
        Command::Run(opts) => opts,
    };

    match cli::run(&opts) {
        Ok(_) => Ok(()),
        // One plain line, no report decoration.
        Err(e @ Error::Status(_)) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
