//! Print the list context a paginated view would render, as JSON.
//!
//! Usage: `pagelinks <record_count> [page]`

use anyhow::{anyhow, Context};
use common::{types::PageQuery, utils::logging::init_logging_default};
use configs::AppConfig;
use dotenvy::dotenv;
use service::ListContext;
use tracing::info;

fn parse_args() -> anyhow::Result<(usize, PageQuery)> {
    let mut args = std::env::args().skip(1);
    let count = args
        .next()
        .ok_or_else(|| anyhow!("usage: pagelinks <record_count> [page]"))?
        .parse::<usize>()
        .context("record_count must be a non-negative integer")?;
    let query = args.next().map(PageQuery::new).unwrap_or_default();
    Ok((count, query))
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    let cfg = AppConfig::load_and_validate()?;
    let (count, query) = parse_args()?;
    info!(count, page = ?query.page(), per_page = cfg.pagination.per_page, "building list context");

    // only the selected page's record ids are materialized
    let ctx = ListContext::build_with(count, &query, &cfg.pagination, |range| {
        range.map(|i| i as u64 + 1).collect::<Vec<u64>>()
    })?;
    // record ids are noise for this report
    let mut json = serde_json::to_value(&ctx)?;
    if let Some(page) = json.get_mut("page").and_then(|p| p.as_object_mut()) {
        page.remove("items");
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
