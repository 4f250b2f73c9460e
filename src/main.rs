use clap::Parser;

mod cli;
mod config;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = cli::Args::parse();
    let config = config::Config::try_load_from_file_or_default(args.config.as_deref())?;
    cli::run(args.command, &config)
}
