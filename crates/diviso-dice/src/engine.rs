//! A dice engine session owning its RNG.

use std::borrow::Cow;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::action::{GroupDiceAction, map_to_action};
use crate::catalog::DiceType;
use crate::config::DiceConfig;
use crate::context::GroupContext;
use crate::error::{DiceError, DiceResult};
use crate::roll::{DiceOutcome, roll};
use crate::selector::{self, DiceTypeOption};

/// Front door to the decision engine for a caller that rolls repeatedly.
///
/// Unlike the free [`roll`](crate::roll::roll) function, the engine refuses
/// dice types that [`allowed_types`](Self::allowed_types) would not offer.
pub struct GroupDiceEngine {
    config: DiceConfig,
    rng: StdRng,
}

impl GroupDiceEngine {
    /// Create an engine. Seeded configs produce reproducible rolls.
    pub fn new(config: DiceConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng }
    }

    /// Get the configuration.
    pub fn config(&self) -> &DiceConfig {
        &self.config
    }

    /// Suggest a dice type for the group.
    pub fn suggest_type(&self, ctx: &GroupContext) -> DiceType {
        selector::suggest_type(ctx)
    }

    /// The dice types admissible for the group.
    pub fn allowed_types(&self, ctx: &GroupContext) -> Vec<DiceTypeOption> {
        selector::allowed_types(&self.localized(ctx))
    }

    /// The context with the configured locale filled in when it names none.
    fn localized<'a>(&self, ctx: &'a GroupContext) -> Cow<'a, GroupContext> {
        match ctx.locale {
            Some(_) => Cow::Borrowed(ctx),
            None => Cow::Owned(ctx.clone().with_locale(self.config.locale)),
        }
    }

    /// Roll an admissible die.
    pub fn roll(&mut self, ctx: &GroupContext, dice_type: DiceType) -> DiceResult<DiceOutcome> {
        if !selector::is_allowed(ctx, dice_type) {
            debug!(%dice_type, group_type = %ctx.group_type, "refused dice type");
            return Err(DiceError::TypeNotAllowed(dice_type));
        }
        roll(&self.localized(ctx), dice_type, &mut self.rng)
    }

    /// Roll the suggested die.
    pub fn roll_suggested(&mut self, ctx: &GroupContext) -> DiceResult<DiceOutcome> {
        let dice_type = self.suggest_type(ctx);
        self.roll(ctx, dice_type)
    }

    /// Roll and map the outcome to an action in one step.
    pub fn roll_and_map(
        &mut self,
        ctx: &GroupContext,
        dice_type: DiceType,
    ) -> DiceResult<(DiceOutcome, GroupDiceAction)> {
        let outcome = self.roll(ctx, dice_type)?;
        let action = map_to_action(&outcome);
        Ok((outcome, action))
    }
}

impl Default for GroupDiceEngine {
    fn default() -> Self {
        Self::new(DiceConfig::default())
    }
}
