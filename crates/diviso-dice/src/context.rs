//! The caller-supplied situation a roll is made in.

use serde::{Deserialize, Serialize};

use crate::error::DiceResult;
use crate::locale::Locale;

/// Group type for which cuisine prompts are suppressed.
pub const WORK_GROUP: &str = "work";

/// A group member who can be picked as payer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Backend identifier of the member.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Member {
    /// Create a member.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Everything the engine needs to know about a group.
///
/// Built fresh by the caller for each roll, usually from backend data:
/// membership, whether any expense exists, and outstanding balances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupContext {
    /// Display locale for names and labels. `None` defers to the engine's
    /// configured locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    /// Free-form group type, e.g. `work`, `friends`, `trip`.
    #[serde(alias = "groupType")]
    pub group_type: String,
    /// Group members.
    pub members: Vec<Member>,
    /// Whether the group has unsettled debts.
    #[serde(alias = "hasOpenDebts")]
    pub has_open_debts: bool,
    /// Whether the group has recorded any expense.
    #[serde(alias = "hasExpenses")]
    pub has_expenses: bool,
}

impl GroupContext {
    /// Create an empty context for a group type.
    pub fn new(group_type: impl Into<String>) -> Self {
        Self {
            group_type: group_type.into(),
            ..Self::default()
        }
    }

    /// Parse a context from JSON. Both snake_case and camelCase keys are accepted.
    pub fn from_json(json: &str) -> DiceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// The display locale, English when none was named.
    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    /// Set the group type.
    pub fn with_group_type(mut self, group_type: impl Into<String>) -> Self {
        self.group_type = group_type.into();
        self
    }

    /// Add a member.
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Set whether the group has open debts.
    pub fn with_open_debts(mut self, open: bool) -> Self {
        self.has_open_debts = open;
        self
    }

    /// Set whether the group has recorded expenses.
    pub fn with_expenses(mut self, has: bool) -> Self {
        self.has_expenses = has;
        self
    }

    /// Whether this is a work group. Matching is exact.
    pub fn is_work(&self) -> bool {
        self.group_type == WORK_GROUP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_methods() {
        let ctx = GroupContext::new("trip")
            .with_locale(Locale::Ar)
            .with_member(Member::new("u1", "Sara"))
            .with_member(Member::new("u2", "Omar"))
            .with_open_debts(true)
            .with_expenses(true);
        assert_eq!(ctx.group_type, "trip");
        assert_eq!(ctx.locale, Some(Locale::Ar));
        assert_eq!(ctx.locale(), Locale::Ar);
        assert_eq!(ctx.members.len(), 2);
        assert!(ctx.has_open_debts);
        assert!(ctx.has_expenses);
        assert!(!ctx.is_work());
    }

    #[test]
    fn work_match_is_exact() {
        assert!(GroupContext::new("work").is_work());
        assert!(!GroupContext::new("Work").is_work());
        assert!(!GroupContext::new("workplace").is_work());
    }

    #[test]
    fn from_json_accepts_camel_case() {
        let ctx = GroupContext::from_json(
            r#"{
                "locale": "ar",
                "groupType": "friends",
                "members": [{"id": "a", "name": "Lina"}],
                "hasOpenDebts": true,
                "hasExpenses": false
            }"#,
        )
        .unwrap();
        assert_eq!(ctx.locale, Some(Locale::Ar));
        assert_eq!(ctx.group_type, "friends");
        assert_eq!(ctx.members, vec![Member::new("a", "Lina")]);
        assert!(ctx.has_open_debts);
        assert!(!ctx.has_expenses);
    }

    #[test]
    fn from_json_fills_defaults() {
        let ctx = GroupContext::from_json(r#"{"group_type": "work"}"#).unwrap();
        assert_eq!(ctx.locale, None);
        assert_eq!(ctx.locale(), Locale::En);
        assert!(ctx.members.is_empty());
        assert!(ctx.is_work());
    }

    #[test]
    fn from_json_rejects_garbage() {
        let err = GroupContext::from_json("not json").unwrap_err();
        assert!(err.to_string().starts_with("invalid group context"));
    }
}
