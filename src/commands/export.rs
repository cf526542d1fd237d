use std::fs;
use std::path::Path;

use serde::Serialize;

use studbook_core::to_csv;

use crate::cli::{Cli, FilterArgs, SortArgs};
use crate::errors::{map_dataset_save_error, report_failure};
use crate::services::print_one;
use crate::state::Session;

use super::{apply_filter_args, sort_selection};

#[derive(Serialize)]
struct ExportReport {
    rows: usize,
    path: String,
}

/// Run the browse pipeline and serialize the result as CSV, either to
/// stdout or to `--out`.
pub fn handle_export(
    cli: &Cli,
    session: &mut Session,
    filters: &FilterArgs,
    order: &SortArgs,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    apply_filter_args(&mut session.filters, filters);
    let (key, direction) = sort_selection(order);
    session.sort_key = key;
    session.direction = direction;

    let visible = session.visible();
    let csv = to_csv(&visible);

    match out {
        Some(path) => {
            if let Err(error) = fs::write(path, &csv) {
                let (headline, message, details) = map_dataset_save_error(&error, path);
                report_failure(&headline, &message, &details);
                std::process::exit(1);
            }
            let report = ExportReport {
                rows: visible.len(),
                path: path.display().to_string(),
            };
            print_one(cli.json, report, |r| {
                format!("wrote {} rows to {}", r.rows, r.path)
            })?;
        }
        None => {
            print_one(cli.json, csv, |c| c.clone())?;
        }
    }
    Ok(())
}
