use chrono::Utc;
use tracing::debug;

use crate::cli::{parse_id, Context};
use crate::error::{DaybookError, Result};
use crate::models::CompleteOutcome;
use crate::store;

/// Mark a task complete
pub fn run(ctx: &Context, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    let mut dataset = store::load(&ctx.data_file)?;

    match dataset.complete(id, Utc::now()) {
        Ok(CompleteOutcome::Completed(task)) => {
            store::save(&dataset, &ctx.data_file)?;
            debug!(id = task.id, "task completed");
            println!("Task #{} marked as done.", task.id);
        }
        Ok(CompleteOutcome::AlreadyCompleted(task)) => {
            println!("Task #{} is already completed.", task.id);
        }
        Err(DaybookError::NotFound(id)) => {
            println!("Task #{} not found.", id);
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
