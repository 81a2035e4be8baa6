use chrono::Utc;

use crate::cli::Context;
use crate::error::Result;
use crate::models::Task;
use crate::store;

/// Show today's tasks, or every task with `all`
pub fn run(ctx: &Context, all: bool) -> Result<()> {
    let dataset = store::load(&ctx.data_file)?;

    let tasks: Vec<&Task> = if all {
        dataset.tasks.iter().collect()
    } else {
        dataset.created_on(Utc::now().date_naive()).collect()
    };

    if tasks.is_empty() {
        if all {
            println!("No tasks.");
        } else {
            println!("No tasks for today.");
        }
        return Ok(());
    }

    for task in tasks {
        println!("{}", ctx.palette.task_line(task));
    }

    Ok(())
}
