use crate::cli::{Cli, FilterArgs, SortArgs, ViewMode};
use crate::render::{breed_card, breed_table};
use crate::services::JsonOut;
use crate::state::Session;

use super::{apply_filter_args, sort_selection};

/// Filter, sort, and render the loaded dataset as a table or card stack.
pub fn handle_browse(
    cli: &Cli,
    session: &mut Session,
    filters: &FilterArgs,
    order: &SortArgs,
    view: ViewMode,
) -> anyhow::Result<()> {
    apply_filter_args(&mut session.filters, filters);
    let (key, direction) = sort_selection(order);
    session.sort_key = key;
    session.direction = direction;

    let visible = session.visible();

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data: &visible })?
        );
        return Ok(());
    }

    if visible.is_empty() {
        println!("No breeds match the current filters.");
        return Ok(());
    }

    match view {
        ViewMode::Table => println!("{}", breed_table(&visible)),
        ViewMode::Cards => {
            for (idx, row) in visible.iter().enumerate() {
                if idx > 0 {
                    println!();
                }
                print!("{}", breed_card(row));
            }
        }
    }
    println!("\n{} of {} breeds", visible.len(), session.breeds.len());
    Ok(())
}
