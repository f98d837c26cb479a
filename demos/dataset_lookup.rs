//! Public dataset example: list the IPFS dataset store and look entries up
//! by CID and by file hash.
//!
//! Run with: TRACEIX_API_KEY=... cargo run --example dataset_lookup

use traceix::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let client = TraceixClient::from_env()?;

    println!("=== Traceix Public Dataset Example ===\n");

    let datasets = client.list_all_ipfs_datasets().await?;
    println!("Available datasets: {datasets}");

    // Fetch the first dataset by CID, if the listing carries one
    if let Some(cid) = datasets
        .as_array()
        .and_then(|list| list.first())
        .and_then(|entry| entry.get("cid"))
        .and_then(|cid| cid.as_str())
    {
        let dataset = client.get_public_ipfs_dataset(cid).await?;
        println!("\nDataset {cid}: {dataset}");
    }

    // Check whether a known sample has been published
    let eicar_sha256 = "275a021bbfb6489e54d471899f7db9d1663fc695ec2fe2a2c4538aabf651fd0f";
    let found = client.search_ipfs_dataset_by_hash(eicar_sha256).await?;
    println!("\nEICAR in public store: {found}");

    Ok(())
}
