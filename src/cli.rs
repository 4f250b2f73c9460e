use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use cepmap_core::{
    entities::AddressRecord,
    gateways::locate::DeviceLocator,
    resolve::{CancelToken, ResolutionChain, ResolutionOutcome},
    usecases,
};
use cepmap_gateways::{FixedDeviceLocator, JsonFileRecordStore, NoDeviceLocator, Nominatim, ViaCep};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "cepmap",
    version,
    about = "Register a postal address and pin it on the map"
)]
pub struct Args {
    /// Path to the configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a user with a postal address, replacing any previous registration
    Register(RegisterArgs),
    /// Log in with the registered name and password
    Login {
        #[arg(long)]
        name: String,
        #[arg(long)]
        password: String,
    },
    /// Resolve the registered address to a map coordinate
    Locate,
}

#[derive(Debug, clap::Args)]
pub struct RegisterArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    password: String,
    /// Postal code (CEP), e.g. 01310-100
    #[arg(long)]
    postal_code: String,
    #[arg(long)]
    street: String,
    #[arg(long)]
    neighborhood: String,
    /// House number
    #[arg(long)]
    number: String,
    #[arg(long)]
    city: String,
    /// Two-letter state code
    #[arg(long)]
    state: Option<String>,
}

pub fn run(command: Command, config: &Config) -> Result<()> {
    let store = JsonFileRecordStore::try_new(&config.storage.dir).with_context(|| {
        format!(
            "Unable to open the record store in {}",
            config.storage.dir.display()
        )
    })?;
    match command {
        Command::Register(args) => register(&store, args),
        Command::Login { name, password } => login(&store, &name, &password),
        Command::Locate => locate(&store, config),
    }
}

fn register(store: &JsonFileRecordStore, args: RegisterArgs) -> Result<()> {
    let RegisterArgs {
        name,
        password,
        postal_code,
        street,
        neighborhood,
        number,
        city,
        state,
    } = args;
    let registration = usecases::Registration {
        name,
        password,
        postal_code,
        street,
        neighborhood,
        number,
        city,
        state,
    };
    let user = usecases::register(store, registration)?;
    println!("Registered user '{}'.", user.address.name);
    Ok(())
}

fn login(store: &JsonFileRecordStore, name: &str, password: &str) -> Result<()> {
    let user = usecases::login(store, &usecases::Credentials { name, password })?;
    println!("Welcome back, {}!", user.address.name);
    Ok(())
}

fn locate(store: &JsonFileRecordStore, config: &Config) -> Result<()> {
    let directory = ViaCep::new(config.directory.base_url.as_str());
    let geocoder = Nominatim::new(
        config.geocoder.base_url.as_str(),
        &config.geocoder.user_agent,
    )?
    .with_result_limit(config.geocoder.result_limit);
    let locator: Box<dyn DeviceLocator> = match config.device.position {
        Some(pos) => Box::new(FixedDeviceLocator::new(pos)),
        None => Box::new(NoDeviceLocator),
    };
    let chain = ResolutionChain::new(&directory, &geocoder);
    let cancel = CancelToken::new();
    let Some(located) = usecases::locate_registered_user(store, &chain, locator.as_ref(), &cancel)?
    else {
        // A CLI invocation never cancels its own token.
        return Ok(());
    };
    print_outcome(&located);
    Ok(())
}

fn print_outcome(located: &usecases::LocatedUser) {
    match &located.outcome {
        ResolutionOutcome::Resolved { pos, source } => {
            println!("Pin: {:.6}, {:.6} (via {source})", pos.lat, pos.lng);
        }
        ResolutionOutcome::PartiallyResolved { pos, source, note } => {
            println!(
                "Approximate pin: {:.6}, {:.6} (via {source}: {note})",
                pos.lat, pos.lng
            );
        }
        ResolutionOutcome::Unresolved { reason } => {
            println!("Could not obtain a coordinate for the registered address ({reason}).");
            println!("Try editing the registration to include street and city.");
        }
    }
    print_address(&located.address);
}

fn print_address(address: &AddressRecord) {
    println!("Registered address:");
    match &address.street {
        Some(street) => println!("  {street}, {}", address.number),
        None => println!("  No. {}", address.number),
    }
    let mut line = String::new();
    if let Some(neighborhood) = &address.neighborhood {
        line.push_str(neighborhood);
        line.push_str(" - ");
    }
    if let Some(city) = &address.city {
        line.push_str(city);
    }
    if let Some(state) = &address.state {
        line.push(' ');
        line.push_str(state);
    }
    if !line.trim().is_empty() {
        println!("  {}", line.trim());
    }
    println!("  CEP: {}", address.postal_code);
}
