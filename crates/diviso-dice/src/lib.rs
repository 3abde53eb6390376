//! Group dice decision engine for Diviso.
//!
//! Turns a group's situation into a playful prompt: a dice type is suggested
//! from the group context, a roll picks one of six faces (or a payer among
//! the members), and the outcome is mapped to an application action such as
//! "add an expense in the restaurant category" or "settle up".

pub mod action;
pub mod catalog;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod locale;
pub mod roll;
pub mod selector;

pub use action::{GroupDiceAction, map_to_action};
pub use catalog::{DiceFace, DiceType, dice_name, faces_for};
pub use config::DiceConfig;
pub use context::{GroupContext, Member};
pub use engine::GroupDiceEngine;
pub use error::{DiceError, DiceResult};
pub use locale::{Locale, LocalizedText};
pub use roll::{DiceOutcome, DiceRollResult, roll};
pub use selector::{DiceTypeOption, allowed_types, suggest_type};
