use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "wallet-core")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        name = "addresstype",
        about = "Check whether an address type tag is recognized"
    )]
    AddressType {
        #[arg(help = "The address type tag (f1, f4 or 0x)")]
        tag: String,
    },
    #[command(name = "classify", about = "Print the address type of an address")]
    Classify {
        #[arg(help = "The full address")]
        address: String,
    },
    #[command(
        name = "checkstore",
        about = "Open the wallet store and close it again"
    )]
    CheckStore {
        #[arg(long = "path", help = "Store directory (defaults to WALLET_DB_PATH)")]
        path: Option<String>,
    },
}
