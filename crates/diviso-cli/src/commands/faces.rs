use comfy_table::{ContentArrangement, Table};
use diviso_dice::{GroupContext, dice_name, faces_for};

pub fn run(ctx: &GroupContext, dice_type: &str) -> Result<(), String> {
    let dice_type = super::parse_dice_type(dice_type)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Value", "Glyph", "Slug", "Label"]);

    for face in faces_for(dice_type) {
        table.add_row(vec![
            face.value.to_string(),
            face.glyph.to_string(),
            face.slug.to_string(),
            face.label.get(ctx.locale()).to_string(),
        ]);
    }

    println!("  {}", dice_name(ctx.locale(), dice_type));
    println!("{table}");

    Ok(())
}
