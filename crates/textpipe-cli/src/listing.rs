//! Stage listing for the `stages` subcommand.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use textpipe_stages::StageRegistry;

/// Build the stage listing table in registry (chain) order.
pub fn stage_table(registry: &StageRegistry) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Stage").add_attribute(Attribute::Bold),
            Cell::new("Description").add_attribute(Attribute::Bold),
        ]);
    for entry in registry.entries() {
        table.add_row(vec![entry.name, entry.description]);
    }
    table
}

pub fn print_stages(registry: &StageRegistry) {
    println!("{}", stage_table(registry));
}
