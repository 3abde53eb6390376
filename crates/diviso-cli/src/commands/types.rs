use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use diviso_dice::{GroupContext, allowed_types, suggest_type};

pub fn run(ctx: &GroupContext) -> Result<(), String> {
    let suggested = suggest_type(ctx);
    let options = allowed_types(ctx);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Type", "Name", ""]);

    for option in &options {
        let marker = if option.id == suggested {
            "suggested"
        } else {
            ""
        };
        table.add_row(vec![option.id.id(), option.name, marker]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} dice available, suggested: {}",
        options.len(),
        suggested.id().bold()
    );

    Ok(())
}
