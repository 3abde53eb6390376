//! Dice type selection: which die to suggest and which ones to offer.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{DiceType, dice_name};
use crate::context::GroupContext;

/// Smallest group for which the payer die makes sense.
pub const PAYER_MIN_MEMBERS: usize = 3;

/// A dice type offered to the user, with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiceTypeOption {
    /// The dice type.
    pub id: DiceType,
    /// Localized name.
    pub name: &'static str,
}

/// Suggest a default dice type for the group.
///
/// Open debts in a group of at least three win over "no expenses yet",
/// which wins over the activity default.
pub fn suggest_type(ctx: &GroupContext) -> DiceType {
    let suggested = if ctx.has_open_debts && ctx.members.len() >= PAYER_MIN_MEMBERS {
        DiceType::Payer
    } else if !ctx.has_expenses {
        DiceType::Task
    } else {
        DiceType::Activity
    };
    debug!(group_type = %ctx.group_type, %suggested, "suggested dice type");
    suggested
}

/// Whether a dice type can be offered for this group.
pub fn is_allowed(ctx: &GroupContext, dice_type: DiceType) -> bool {
    match dice_type {
        DiceType::Payer => ctx.members.len() >= PAYER_MIN_MEMBERS,
        DiceType::Cuisine => !ctx.is_work(),
        DiceType::Activity | DiceType::Budget | DiceType::Task => true,
    }
}

/// The dice types admissible for this group, in catalog order.
pub fn allowed_types(ctx: &GroupContext) -> Vec<DiceTypeOption> {
    let options: Vec<DiceTypeOption> = DiceType::ALL
        .into_iter()
        .filter(|t| is_allowed(ctx, *t))
        .map(|id| DiceTypeOption {
            id,
            name: dice_name(ctx.locale(), id),
        })
        .collect();
    debug!(count = options.len(), "computed allowed dice types");
    options
}
