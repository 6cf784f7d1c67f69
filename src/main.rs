// Entry point for the wallet-core operator CLI
use clap::Parser;
use log::{error, LevelFilter};
use std::process;
use wallet_core::{check_store, AddressType, Command, Opt, SledEngine, GLOBAL_CONFIG};

fn main() {
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let opt = Opt::parse();

    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::AddressType { tag } => {
            let address_type = AddressType::from(tag);
            if !address_type.is_valid() {
                return Err(format!("Unrecognized address type: {address_type:?}").into());
            }
            println!("{address_type} is a recognized address type");
        }
        Command::Classify { address } => {
            let address_type = AddressType::from_address(&address);
            if address_type.is_valid() {
                println!("{address}: {address_type}");
            } else {
                return Err(format!("Unrecognized address prefix in {address}").into());
            }
        }
        Command::CheckStore { path } => {
            if let Some(path) = path {
                GLOBAL_CONFIG.set_db_path(path);
            }
            let db_path = GLOBAL_CONFIG.get_db_path();

            println!("{}", check_store(&SledEngine, &db_path)?);
        }
    }
    Ok(())
}
