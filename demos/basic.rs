//! Basic example demonstrating the Cisco Support API client.
//!
//! Run with:
//! ```
//! CS_API_KEY=your-id CS_API_SECRET=your-secret cargo run --example basic
//! ```

use ciscosupport::{BugListQuery, CiscoSupport};

#[tokio::main]
async fn main() -> ciscosupport::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create a session from environment variables
    println!("Creating Cisco Support session...");
    let api = CiscoSupport::from_env().await?;

    // Look up a bug by ID
    println!("\n--- Bug Details ---");
    let mut bugs = api.bug.get_bug_details(&["CSCvc57217"])?;
    while let Some(bug) = bugs.try_next().await? {
        println!("{}: {} (severity {})", bug.bug_id, bug.headline, bug.severity);
    }

    // Search bugs by keyword, stopping after the first few
    println!("\n--- Keyword Search ---");
    let mut results = api
        .bug
        .get_bugs_by_keyword("IOS SSH PKI", &BugListQuery::default())?;
    let mut shown = 0;
    while let Some(bug) = results.try_next().await? {
        println!("  - {} [{}]", bug.bug_id, bug.status);
        shown += 1;
        if shown == 5 {
            break;
        }
    }

    // Coverage status for a serial number
    println!("\n--- Coverage Status ---");
    let statuses = api
        .serial_information
        .get_coverage_status(&["FXS2130Q286"])?
        .collect()
        .await?;
    for status in &statuses {
        println!(
            "  {} covered={} until {}",
            status.serial_number, status.is_covered, status.coverage_end_date
        );
    }

    // End-of-life records by product ID
    println!("\n--- EoX Records ---");
    let mut records = api.eox.get_by_product_ids(&["WS-C3850-48XS-E"])?;
    while let Some(record) = records.try_next().await? {
        println!(
            "  {}: last support {}",
            record.eol_product_id, record.last_date_of_support.value
        );
    }

    Ok(())
}
