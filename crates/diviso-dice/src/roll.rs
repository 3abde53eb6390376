//! Roll evaluation: turning a chosen dice type into an outcome.
//!
//! Catalog dice pick one of their six faces uniformly. Landing on
//! "Restaurant" with the activity die in a non-work group chains a cuisine
//! roll, producing a combo outcome. The payer die is different: it picks a
//! member uniformly and synthesizes the face label from the member's name.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{DiceFace, DiceType, FACE_COUNT, dice_name, faces_for};
use crate::context::GroupContext;
use crate::error::{DiceError, DiceResult};
use crate::locale::{Locale, LocalizedText};

/// Activity face that chains a cuisine roll.
pub const COMBO_TRIGGER_SLUG: &str = "restaurant";

/// Glyph shown on synthesized payer faces.
pub const PAYER_GLYPH: &str = "💸";

/// One evaluated roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRollResult {
    /// The die that was rolled.
    #[serde(rename = "type")]
    pub dice_type: DiceType,
    /// Localized name of the die.
    pub dice_name: Cow<'static, str>,
    /// The face that came up.
    pub face: DiceFace,
    /// The member picked by a payer roll.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    /// When the roll was evaluated.
    pub rolled_at: DateTime<Utc>,
}

impl DiceRollResult {
    fn new(ctx: &GroupContext, dice_type: DiceType, face: DiceFace) -> Self {
        Self {
            dice_type,
            dice_name: Cow::Borrowed(dice_name(ctx.locale(), dice_type)),
            face,
            member_id: None,
            rolled_at: Utc::now(),
        }
    }

    /// The face label in a locale.
    pub fn label(&self, locale: Locale) -> &str {
        self.face.label.get(locale)
    }
}

/// What a roll produced: one result, or an activity/cuisine pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DiceOutcome {
    /// A single die result.
    Single {
        /// The result.
        result: DiceRollResult,
    },
    /// Two linked results, activity first and cuisine second.
    Combo {
        /// The results in roll order.
        results: Vec<DiceRollResult>,
    },
}

impl DiceOutcome {
    /// All results in roll order.
    pub fn results(&self) -> &[DiceRollResult] {
        match self {
            Self::Single { result } => std::slice::from_ref(result),
            Self::Combo { results } => results,
        }
    }

    /// Whether this is a combo outcome.
    pub fn is_combo(&self) -> bool {
        matches!(self, Self::Combo { .. })
    }
}

/// Roll a die for the group.
///
/// Fails only for a payer roll in a group without members.
pub fn roll(ctx: &GroupContext, dice_type: DiceType, rng: &mut StdRng) -> DiceResult<DiceOutcome> {
    if dice_type == DiceType::Payer {
        return roll_payer(ctx, rng);
    }
    let faces = faces_for(dice_type);
    let face = &faces[rng.random_range(0..faces.len())];
    Ok(outcome_for_face(ctx, dice_type, face, rng))
}

/// Build the outcome for a face that has already come up.
///
/// Applies the restaurant combo rule; `rng` is only drawn from for the
/// chained cuisine roll.
pub fn outcome_for_face(
    ctx: &GroupContext,
    dice_type: DiceType,
    face: &DiceFace,
    rng: &mut StdRng,
) -> DiceOutcome {
    let first = DiceRollResult::new(ctx, dice_type, face.clone());
    debug!(%dice_type, face = %face.slug, value = face.value, "rolled face");

    if dice_type == DiceType::Activity && face.slug == COMBO_TRIGGER_SLUG && !ctx.is_work() {
        let cuisines = faces_for(DiceType::Cuisine);
        let cuisine = &cuisines[rng.random_range(0..cuisines.len())];
        debug!(cuisine = %cuisine.slug, "restaurant combo triggered");
        let second = DiceRollResult::new(ctx, DiceType::Cuisine, cuisine.clone());
        return DiceOutcome::Combo {
            results: vec![first, second],
        };
    }

    DiceOutcome::Single { result: first }
}

/// Pick a payer uniformly from the group's members.
pub fn roll_payer(ctx: &GroupContext, rng: &mut StdRng) -> DiceResult<DiceOutcome> {
    if ctx.members.is_empty() {
        return Err(DiceError::EmptyMemberList);
    }
    let index = rng.random_range(0..ctx.members.len());
    let member = &ctx.members[index];
    debug!(member = %member.id, of = ctx.members.len(), "picked payer");

    let slot = &faces_for(DiceType::Payer)[index % FACE_COUNT];
    let face = DiceFace {
        value: slot.value,
        glyph: Cow::Borrowed(PAYER_GLYPH),
        slug: Cow::Borrowed("payer"),
        label: LocalizedText::owned(
            format!("يدفع: {}", member.name),
            format!("Pays: {}", member.name),
        ),
    };
    let mut result = DiceRollResult::new(ctx, DiceType::Payer, face);
    result.member_id = Some(member.id.clone());
    Ok(DiceOutcome::Single { result })
}
