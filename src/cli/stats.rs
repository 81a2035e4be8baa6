use chrono::Utc;

use crate::cli::Context;
use crate::error::Result;
use crate::stats;
use crate::store;

/// Print the per-day summary of the trailing window
pub fn run(ctx: &Context) -> Result<()> {
    let dataset = store::load(&ctx.data_file)?;

    let buckets = stats::summarize(&dataset, Utc::now().date_naive(), ctx.config.stats_days);
    println!("{}", stats::render(&buckets));

    Ok(())
}
