// SPDX-License-Identifier: MPL-2.0

//! Prints the current status of a hackerpet hub.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example print_status -- [host]
//! ```
//!
//! # Example
//!
//! ```bash
//! cargo run --example print_status -- 192.168.1.40
//! ```

use std::env;

use hackerpet::{Hub, HttpConfig, ParseMode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let host = env::args()
        .nth(1)
        .unwrap_or_else(|| HttpConfig::DEFAULT_HOST.to_string());

    println!("Querying hub at {host}...");

    let hub = Hub::http(host)
        .with_parse_mode(ParseMode::Lenient)
        .build()?;
    let status = hub.status().await?;

    println!("  Time:      {}", status.time());
    println!("  Timezone:  UTC{:+}", status.timezone_offset());
    println!("  Mode:      {}", status.hub_mode());
    println!("  State:     {}", status.hub_state());
    println!("  Game:      {}", status.game());
    println!("  Kibbles:   {}", status.max_kibbles());

    if let Some(eaten) = status.kibbles_eaten_today() {
        println!("  Eaten:     {eaten}");
    }
    if let Some(schedule) = status.schedule() {
        println!("  {schedule}");
    }
    match status.hub_status() {
        Some(condition) if condition.is_fault() => println!("  FAULT:     {condition}"),
        Some(condition) => println!("  Status:    {condition}"),
        None => {}
    }

    Ok(())
}
