use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use table_selection::prelude::*;

fn print_cells(label: &str, selection: &TableSelection) {
    println!("{label}: {:?}", selection.selected_cells());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("walkthrough.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)?;

    let mut selection = TableSelection::new();

    selection.select_cell(2, 1, false, false);
    print_cells("click (2, 1)", &selection);

    selection.select_cell(4, 0, true, false);
    print_cells("ctrl+click (4, 0)", &selection);

    selection.select_cell(4, 0, true, false);
    print_cells("ctrl+click (4, 0) again", &selection);

    selection.select_range(0, 2, &[0, 1], false);
    print_cells("shift+click rows 0..=2, columns 0..=1", &selection);

    selection.select_range(2, 0, &[0, 1], true);
    print_cells("same range again", &selection);

    selection.select_range(0, 1, &[3], true);
    let rows: Vec<RowSelection> = selection.selected_rows().into_iter().cloned().collect();
    let restored = TableSelection::from_rows(rows)?;
    print_cells("restored", &restored);
    println!("exported columns: {:?}", restored.selected_columns());

    Ok(())
}
