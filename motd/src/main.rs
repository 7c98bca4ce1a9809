//! motd
//!
//! Prints the login report to stdout. Logs go to stderr and stay silent
//! unless `RUST_LOG` asks for more.

use motd::{generate_motd, init::init_tracing, LiveHost, MotdConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing("motd")?;

    let config = MotdConfig::default();
    let host = LiveHost::new();

    let report = generate_motd(&host, &config).await?;
    println!("{report}");

    Ok(())
}
