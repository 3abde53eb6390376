use colored::Colorize;
use diviso_dice::{GroupContext, dice_name, suggest_type};

pub fn run(ctx: &GroupContext) -> Result<(), String> {
    let suggested = suggest_type(ctx);
    println!(
        "  {} {}",
        suggested.id().bold(),
        format!("({})", dice_name(ctx.locale(), suggested)).dimmed()
    );
    Ok(())
}
