//! CLI binary for pads.
//!
//! Usage: pads -a "doe, j" -b apj -y 2000-2001 --print-row

#[cfg(feature = "cli")]
#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = pads::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This binary requires the 'cli' feature. Build with: cargo build --features cli");
    std::process::exit(1);
}
