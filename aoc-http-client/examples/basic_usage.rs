//! Download one puzzle input and print a short summary of it
//!
//! Usage: `AOC_SESSION=<cookie> cargo run --example basic_usage -- 2024 1`
//!
//! The session cookie is the `session` value stored by your browser after
//! logging in to adventofcode.com.

use aoc_http_client::{AocClient, AocError};
use std::time::Duration;
use zeroize::Zeroizing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let session = Zeroizing::new(std::env::var("AOC_SESSION")?);

    let mut args = std::env::args().skip(1);
    let year: u16 = args.next().as_deref().unwrap_or("2024").parse()?;
    let day: u8 = args.next().as_deref().unwrap_or("1").parse()?;

    let client = AocClient::builder()
        .client_builder(reqwest::blocking::Client::builder().timeout(Duration::from_secs(10)))
        .build()?;

    println!("GET {}", client.input_url(year, day)?);

    match client.get_input(year, day, &session) {
        Ok(bytes) => {
            let input = String::from_utf8_lossy(&bytes);
            let first = input.lines().next().unwrap_or_default();
            println!("{} lines, first: {:?}", input.lines().count(), first);
        }
        Err(AocError::InvalidStatus { status }) => {
            eprintln!("server answered {}", status);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
