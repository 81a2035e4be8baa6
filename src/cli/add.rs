use chrono::Utc;
use tracing::debug;

use crate::cli::{parse_minutes, Context};
use crate::error::Result;
use crate::store;

/// Record a new task
pub fn run(ctx: &Context, text: String, minutes: Option<String>) -> Result<()> {
    // Validate before touching the data file
    let est_minutes = parse_minutes(minutes.as_deref())?;

    let mut dataset = store::load(&ctx.data_file)?;
    let task = dataset.add_task(text, est_minutes, Utc::now())?.clone();
    store::save(&dataset, &ctx.data_file)?;

    debug!(id = task.id, "task added");
    println!(
        "Added task #{}: {} ({} min)",
        task.id, task.text, task.est_minutes
    );

    Ok(())
}
