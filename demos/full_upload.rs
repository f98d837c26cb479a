//! Full upload example: classify a file and extract its capabilities and
//! metadata in one call.
//!
//! This example shows how to:
//! - Build a client from the environment
//! - Run the composite full upload
//! - Poll job status afterwards
//!
//! Run with: TRACEIX_API_KEY=... cargo run --example full_upload -- <file>

use traceix::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample.bin".to_string());

    // Reads TRACEIX_API_KEY; fails with NoApiKey if it is unset
    let client = TraceixClient::from_env()?;

    println!("=== Traceix Full Upload Example ===\n");
    println!("Uploading: {path}");

    // One file, three sequential requests: AI prediction, CAPA, EXIF.
    // Fail-fast: any failure aborts the rest, no partial results.
    let result = client.full_upload(&path).await?;

    println!("\n=== Results ===");
    println!("AI prediction: {}", result.ai_prediction);
    println!("CAPA status:   {}", result.capa_status);
    println!("EXIF status:   {}", result.exif_status);

    // Extraction jobs are asynchronous server-side; poll them by UUID
    if let Some(uuid) = result.capa_status.get("uuid").and_then(|u| u.as_str()) {
        let status = client.check_status(uuid).await?;
        println!("\nCAPA job {uuid}: {status}");
    }

    Ok(())
}
