//! Address tool
//!
//! Encode, decode and derive pubkey-hash addresses from the command line.

use std::process::ExitCode;

use versioned_address::crypto::Hash160;
use versioned_address::network::KNOWN_NETWORKS;
use versioned_address::{Address, MAINNET, TESTNET};

const USAGE: &str = "\
Usage:
  addr-tool encode <hash160-hex> [--testnet]
  addr-tool pubkey <pubkey-hex> [--testnet]
  addr-tool decode <address>";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let testnet = args.iter().any(|a| a == "--testnet");
    let positional: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|a| !a.starts_with("--"))
        .collect();
    let network = if testnet { &TESTNET } else { &MAINNET };

    match positional.as_slice() {
        ["encode", input] => match Hash160::from_hex(input) {
            Ok(hash) => {
                println!("{}", Address::new(network, hash, false));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Invalid hash: {}", e);
                ExitCode::FAILURE
            }
        },
        ["pubkey", input] => match hex::decode(input) {
            Ok(pubkey) => {
                let address = Address::from_public_key(network, &pubkey, false);
                println!("Hash160: {}", address.hash());
                println!("Address: {}", address);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Invalid public key: {}", e);
                ExitCode::FAILURE
            }
        },
        ["decode", text] => match Address::from_string(text, true, &KNOWN_NETWORKS) {
            Ok(address) => {
                println!("Network: {}", address.network());
                println!("Hash160: {}", address.hash());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}: {}", e.user_message(), e);
                ExitCode::FAILURE
            }
        },
        _ => {
            eprintln!("{}", USAGE);
            ExitCode::FAILURE
        }
    }
}
