use std::collections::HashMap;
use std::env;
use std::error::Error;

use chrono::{Duration, Utc};
use toggl::TogglClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    let api_token = env::var("TOGGL_API_TOKEN").expect("TOGGL_API_TOKEN must be set");

    let client = TogglClient::new(&api_token);

    println!("Workspaces:");
    for workspace in client.workspaces().list().await? {
        println!(
            "  {:>10}  {}",
            workspace.id.unwrap_or_default(),
            workspace.name.unwrap_or_default()
        );
    }

    let now = Utc::now();
    let entries = client
        .time_entries()
        .list(Some(now - Duration::days(7)), Some(now))
        .await?;

    let mut seconds_per_project: HashMap<i64, i64> = HashMap::new();
    for entry in &entries {
        // Running entries carry a negative duration; skip them.
        let seconds = entry.duration.unwrap_or(0);
        if seconds > 0 {
            *seconds_per_project
                .entry(entry.project_id.unwrap_or(0))
                .or_insert(0) += seconds;
        }
    }

    println!("Tracked over the last 7 days:");
    for (project_id, seconds) in seconds_per_project {
        println!(
            "  project {:>10}  {:>3}h {:02}m",
            project_id,
            seconds / 3600,
            (seconds % 3600) / 60
        );
    }

    Ok(())
}
