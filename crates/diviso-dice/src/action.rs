//! Action mapping: what the app should do after a roll.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::DiceType;
use crate::roll::{DiceOutcome, DiceRollResult};

/// An application action triggered by a roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GroupDiceAction {
    /// Open the add-expense screen.
    AddExpense {
        /// Expense category to preselect.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        category_key: Option<String>,
        /// Member to preselect as payer.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payer_id: Option<String>,
    },
    /// Open the settle-up flow.
    SettleUp,
    /// Open the invite dialog.
    Invite,
    /// Show the weekly report.
    WeeklyReport,
    /// Open the rename dialog.
    RenameGroup,
    /// Open the budget settings.
    BudgetSettings,
    /// Nothing to do.
    None,
}

impl GroupDiceAction {
    /// The snake_case tag of the action.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::AddExpense { .. } => "add_expense",
            Self::SettleUp => "settle_up",
            Self::Invite => "invite",
            Self::WeeklyReport => "weekly_report",
            Self::RenameGroup => "rename_group",
            Self::BudgetSettings => "budget_settings",
            Self::None => "none",
        }
    }

    fn add_expense(category_key: Option<&str>) -> Self {
        Self::AddExpense {
            category_key: category_key.map(str::to_string),
            payer_id: None,
        }
    }
}

impl std::fmt::Display for GroupDiceAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AddExpense {
                category_key: Some(category),
                ..
            } => write!(f, "add_expense ({category})"),
            other => write!(f, "{}", other.tag()),
        }
    }
}

/// Expense category for an activity face.
fn activity_category(slug: &str) -> Option<&'static str> {
    match slug {
        "restaurant" => Some("restaurant"),
        "cafe" => Some("cafe"),
        "entertainment" => Some("entertainment"),
        "outdoors" => Some("outdoors"),
        "home" => Some("home"),
        "drive" => Some("drive"),
        _ => None,
    }
}

fn task_action(slug: &str) -> GroupDiceAction {
    match slug {
        "add_expense" => GroupDiceAction::add_expense(None),
        "settle_up" => GroupDiceAction::SettleUp,
        "invite" => GroupDiceAction::Invite,
        "weekly_report" => GroupDiceAction::WeeklyReport,
        "rename_group" => GroupDiceAction::RenameGroup,
        _ => GroupDiceAction::None,
    }
}

fn find(results: &[DiceRollResult], dice_type: DiceType) -> Option<&DiceRollResult> {
    results.iter().find(|r| r.dice_type == dice_type)
}

/// Translate an outcome into exactly one action.
///
/// Precedence is payer, activity, budget, task. Payer rolls do not bind
/// the chosen member as `payer_id`; callers that want it read
/// [`DiceRollResult::member_id`].
pub fn map_to_action(outcome: &DiceOutcome) -> GroupDiceAction {
    let results = outcome.results();

    let action = if find(results, DiceType::Payer).is_some() {
        GroupDiceAction::add_expense(None)
    } else if let Some(activity) = find(results, DiceType::Activity) {
        GroupDiceAction::add_expense(activity_category(&activity.face.slug))
    } else if find(results, DiceType::Budget).is_some() {
        GroupDiceAction::BudgetSettings
    } else if let Some(task) = find(results, DiceType::Task) {
        task_action(&task.face.slug)
    } else {
        GroupDiceAction::None
    };

    debug!(%action, "mapped roll to action");
    action
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::catalog::{DiceFace, face_by_label, face_by_slug, faces_for};
    use crate::context::{GroupContext, Member};
    use crate::locale::LocalizedText;
    use crate::roll::{outcome_for_face, roll};
    use crate::selector::suggest_type;

    fn result(dice_type: DiceType, face: &DiceFace) -> DiceRollResult {
        let ctx = GroupContext::new("work");
        let mut rng = StdRng::seed_from_u64(0);
        outcome_for_face(&ctx, dice_type, face, &mut rng).results()[0].clone()
    }

    fn single(dice_type: DiceType, label: &str) -> DiceOutcome {
        DiceOutcome::Single {
            result: result(dice_type, face_by_label(dice_type, label).unwrap()),
        }
    }

    fn expense(category: &str) -> GroupDiceAction {
        GroupDiceAction::AddExpense {
            category_key: Some(category.to_string()),
            payer_id: None,
        }
    }

    #[test]
    fn activity_labels_map_to_categories() {
        let cases = [
            ("Restaurant", "restaurant"),
            ("Café", "cafe"),
            ("Entertainment", "entertainment"),
            ("Outdoors", "outdoors"),
            ("Stay Home", "home"),
            ("Quick Drive", "drive"),
        ];
        for (label, category) in cases {
            assert_eq!(
                map_to_action(&single(DiceType::Activity, label)),
                expense(category),
                "{label}"
            );
        }
    }

    #[test]
    fn task_labels_map_to_actions() {
        let cases = [
            ("Add one expense", GroupDiceAction::add_expense(None)),
            ("Settle up", GroupDiceAction::SettleUp),
            ("Invite a member", GroupDiceAction::Invite),
            ("Weekly report", GroupDiceAction::WeeklyReport),
            ("Rename group", GroupDiceAction::RenameGroup),
            ("Free pass", GroupDiceAction::None),
        ];
        for (label, action) in cases {
            assert_eq!(map_to_action(&single(DiceType::Task, label)), action, "{label}");
        }
    }

    #[test]
    fn unknown_task_face_maps_to_none() {
        let face = DiceFace {
            value: 3,
            glyph: "❓".into(),
            slug: "water_plants".into(),
            label: LocalizedText::fixed("اسقِ النباتات", "Water the plants"),
        };
        let outcome = DiceOutcome::Single {
            result: result(DiceType::Task, &face),
        };
        assert_eq!(map_to_action(&outcome), GroupDiceAction::None);
    }

    #[test]
    fn budget_and_cuisine() {
        for face in faces_for(DiceType::Budget) {
            let outcome = DiceOutcome::Single {
                result: result(DiceType::Budget, face),
            };
            assert_eq!(map_to_action(&outcome), GroupDiceAction::BudgetSettings);
        }
        for face in faces_for(DiceType::Cuisine) {
            let outcome = DiceOutcome::Single {
                result: result(DiceType::Cuisine, face),
            };
            assert_eq!(map_to_action(&outcome), GroupDiceAction::None);
        }
    }

    #[test]
    fn payer_beats_budget() {
        let ctx = GroupContext::new("friends")
            .with_member(Member::new("u1", "Sara"))
            .with_member(Member::new("u2", "Omar"))
            .with_member(Member::new("u3", "Lina"));
        let mut rng = StdRng::seed_from_u64(4);
        let payer = roll(&ctx, DiceType::Payer, &mut rng).unwrap().results()[0].clone();
        let budget = single(DiceType::Budget, "Surprise").results()[0].clone();

        let outcome = DiceOutcome::Combo {
            results: vec![budget, payer],
        };
        assert_eq!(map_to_action(&outcome), GroupDiceAction::add_expense(None));
        assert_eq!(
            map_to_action(&single(DiceType::Budget, "Surprise")),
            GroupDiceAction::BudgetSettings
        );
    }

    #[test]
    fn payer_beats_activity() {
        let ctx = GroupContext::new("friends")
            .with_member(Member::new("u1", "Sara"))
            .with_member(Member::new("u2", "Omar"))
            .with_member(Member::new("u3", "Lina"));
        let mut rng = StdRng::seed_from_u64(6);
        let payer = roll(&ctx, DiceType::Payer, &mut rng).unwrap().results()[0].clone();
        let activity = single(DiceType::Activity, "Restaurant").results()[0].clone();

        let outcome = DiceOutcome::Combo {
            results: vec![activity, payer],
        };
        assert_eq!(map_to_action(&outcome), GroupDiceAction::add_expense(None));
    }

    #[test]
    fn budget_beats_task() {
        for task in ["Settle up", "Invite a member", "Add one expense"] {
            let outcome = DiceOutcome::Combo {
                results: vec![
                    single(DiceType::Task, task).results()[0].clone(),
                    single(DiceType::Budget, "Under 50").results()[0].clone(),
                ],
            };
            assert_eq!(map_to_action(&outcome), GroupDiceAction::BudgetSettings, "{task}");
        }
    }

    #[test]
    fn activity_beats_budget_and_task() {
        let outcome = DiceOutcome::Combo {
            results: vec![
                single(DiceType::Task, "Settle up").results()[0].clone(),
                single(DiceType::Budget, "Free").results()[0].clone(),
                single(DiceType::Activity, "Café").results()[0].clone(),
            ],
        };
        assert_eq!(map_to_action(&outcome), expense("cafe"));
    }

    #[test]
    fn payer_id_is_not_forwarded() {
        let ctx = GroupContext::new("trip")
            .with_member(Member::new("u1", "Sara"))
            .with_member(Member::new("u2", "Omar"))
            .with_member(Member::new("u3", "Lina"));
        let mut rng = StdRng::seed_from_u64(8);
        let outcome = roll(&ctx, DiceType::Payer, &mut rng).unwrap();
        assert!(outcome.results()[0].member_id.is_some());
        assert_eq!(
            map_to_action(&outcome),
            GroupDiceAction::AddExpense {
                category_key: None,
                payer_id: None,
            }
        );
    }

    #[test]
    fn friends_restaurant_round_trip() {
        let ctx = GroupContext::new("friends")
            .with_member(Member::new("u1", "Sara"))
            .with_member(Member::new("u2", "Omar"))
            .with_member(Member::new("u3", "Lina"))
            .with_expenses(true);
        assert_eq!(suggest_type(&ctx), DiceType::Activity);

        let mut rng = StdRng::seed_from_u64(12);
        let restaurant = face_by_slug(DiceType::Activity, "restaurant").unwrap();
        let outcome = outcome_for_face(&ctx, DiceType::Activity, restaurant, &mut rng);
        assert!(outcome.is_combo());
        assert_eq!(map_to_action(&outcome), expense("restaurant"));
    }

    #[test]
    fn action_wire_format() {
        insta::assert_snapshot!(
            serde_json::to_string(&expense("restaurant")).unwrap(),
            @r#"{"type":"add_expense","category_key":"restaurant"}"#
        );
        insta::assert_snapshot!(
            serde_json::to_string(&GroupDiceAction::BudgetSettings).unwrap(),
            @r#"{"type":"budget_settings"}"#
        );
        insta::assert_snapshot!(
            serde_json::to_string(&GroupDiceAction::None).unwrap(),
            @r#"{"type":"none"}"#
        );
    }

    #[test]
    fn display_and_tag() {
        assert_eq!(expense("cafe").to_string(), "add_expense (cafe)");
        assert_eq!(GroupDiceAction::add_expense(None).to_string(), "add_expense");
        assert_eq!(GroupDiceAction::WeeklyReport.tag(), "weekly_report");
    }
}
