//! Basic example demonstrating the Zanox API client.
//!
//! Run with:
//! ```
//! ZANOX_CONNECT_ID=your-id ZANOX_SECRET_KEY=your-key cargo run --example basic
//! ```

use chrono::{Duration, Utc};
use zanoxapi::{
    AdSpaces, Fetch, FetchByDate, Profiles, Programs, QueryParams, Sales, ZanoxClient,
};

#[tokio::main]
async fn main() -> zanoxapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Zanox client...");
    let client = ZanoxClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    println!("\n--- Profile ---");
    let profile = Profiles::fetch(&client, &QueryParams::new()).await?;
    if !profile.is_success() {
        println!("Request rejected (HTTP {}): {}", profile.status, profile.body);
        return Ok(());
    }
    let login = &profile.body["profileItem"][0]["loginName"];
    println!("Logged in as {login}");

    println!("\n--- Ad Spaces ---");
    let adspaces = AdSpaces::fetch(&client, &QueryParams::new().with("items", 10)).await?;
    println!("Total: {}", adspaces.body["total"]);
    if let Some(items) = adspaces.body["adspaceItems"]["adspaceItem"].as_array() {
        for item in items {
            println!("  - {} ({})", item["name"], item["@id"]);
        }
    }

    println!("\n--- Programs in DE ---");
    let params = QueryParams::new().with("region", "DE").with("items", 5);
    let programs = Programs::fetch(&client, &params).await?;
    if let Some(items) = programs.body["programItems"]["programItem"].as_array() {
        for item in items {
            println!("  - {}", item["name"]);
        }
    }

    let yesterday = (Utc::now() - Duration::days(1)).date_naive();
    println!("\n--- Sales on {yesterday} ---");
    let sales = Sales::fetch_for_date(&client, yesterday, &QueryParams::new()).await?;
    println!("Total: {}", sales.body["total"]);

    println!("\nDone!");
    Ok(())
}
