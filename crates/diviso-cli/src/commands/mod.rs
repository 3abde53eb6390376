pub mod faces;
pub mod roll;
pub mod suggest;
pub mod types;

use diviso_dice::{DiceError, DiceType, GroupContext, Locale};

use crate::ContextArgs;

/// Assemble the group context from an optional JSON file and the flags.
pub fn build_context(args: &ContextArgs) -> Result<GroupContext, String> {
    let mut ctx = match &args.context_file {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            GroupContext::from_json(&json).map_err(|e| e.to_string())?
        }
        None => GroupContext::default(),
    };

    if let Some(tag) = &args.locale {
        let locale =
            Locale::parse(tag).ok_or_else(|| DiceError::UnknownLocale(tag.clone()).to_string())?;
        ctx.locale = Some(locale);
    }
    if let Some(group_type) = &args.group_type {
        ctx.group_type = group_type.clone();
    }
    if !args.members.is_empty() {
        ctx.members = args.members.clone();
    }
    if let Some(open) = args.open_debts {
        ctx.has_open_debts = open;
    }
    if let Some(has) = args.has_expenses {
        ctx.has_expenses = has;
    }

    tracing::debug!(?ctx, "group context");
    Ok(ctx)
}

fn parse_dice_type(tag: &str) -> Result<DiceType, String> {
    DiceType::parse(tag).map_err(|e| e.to_string())
}
