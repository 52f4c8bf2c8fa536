mod formatters;

use crate::toolkit::figures::Figure;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use formatters::{format_resolution, format_source, format_time_point};

pub fn figure_table<'a>(figures: impl IntoIterator<Item = &'a Figure>) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Figure").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
            Cell::new("Resolution").add_attribute(Attribute::Bold),
            Cell::new("Time").add_attribute(Attribute::Bold),
        ]);

    for figure in figures {
        table.add_row(vec![
            Cell::new(figure.kind),
            Cell::new(format_source(&figure.source)),
            Cell::new(format_resolution(figure.resolution)),
            Cell::new(format_time_point(figure.time_point)),
        ]);
    }

    table
}

pub fn print_figures<'a>(figures: impl IntoIterator<Item = &'a Figure>) {
    println!("{}", figure_table(figures));
}
