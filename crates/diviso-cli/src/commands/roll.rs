use colored::Colorize;
use diviso_dice::{DiceConfig, GroupContext, GroupDiceAction, GroupDiceEngine};

pub fn run(
    ctx: &GroupContext,
    dice_type: Option<&str>,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let locale = ctx.locale();
    let mut config = DiceConfig::default().with_locale(locale);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut engine = GroupDiceEngine::new(config);

    let dice_type = match dice_type {
        Some(tag) => super::parse_dice_type(tag)?,
        None => engine.suggest_type(ctx),
    };
    let (outcome, action) = engine
        .roll_and_map(ctx, dice_type)
        .map_err(|e| e.to_string())?;

    if json {
        let body = serde_json::json!({ "outcome": outcome, "action": action });
        let text = serde_json::to_string_pretty(&body).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    for result in outcome.results() {
        println!(
            "  {:<16} {} {} {}",
            result.dice_name.bold(),
            result.face.glyph,
            result.label(locale).green(),
            format!("({})", result.face.value).dimmed()
        );
    }
    if outcome.is_combo() {
        println!("  {}", "combo roll".yellow());
    }
    println!();

    let label = action.to_string();
    let action_text = match action {
        GroupDiceAction::None => label.dimmed(),
        _ => label.cyan().bold(),
    };
    println!("  Action: {action_text}");

    Ok(())
}
