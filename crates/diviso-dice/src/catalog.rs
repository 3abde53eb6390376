//! Face catalog: the five dice types and their six faces each.
//!
//! The catalog is static data. Every face carries a stable `slug` that the
//! action mapper matches on, so translated labels can change freely without
//! affecting which action a roll triggers.

use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};
use crate::locale::{Locale, LocalizedText};

/// Number of faces on every group die.
pub const FACE_COUNT: usize = 6;

/// The kind of decision a die helps the group make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiceType {
    /// What to do together.
    Activity,
    /// What to eat.
    Cuisine,
    /// How much to spend.
    Budget,
    /// Who pays this time.
    Payer,
    /// A bookkeeping chore for the group.
    Task,
}

impl DiceType {
    /// All dice types in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Activity,
        Self::Cuisine,
        Self::Budget,
        Self::Payer,
        Self::Task,
    ];

    /// The stable lowercase identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Cuisine => "cuisine",
            Self::Budget => "budget",
            Self::Payer => "payer",
            Self::Task => "task",
        }
    }

    /// Parse a dice type from its identifier (case-insensitive).
    pub fn parse(s: &str) -> DiceResult<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.id() == lower)
            .ok_or_else(|| DiceError::UnknownDiceType(s.to_string()))
    }
}

impl FromStr for DiceType {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for DiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// One face of a group die.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceFace {
    /// Pip value (1-6 for catalog faces).
    pub value: u8,
    /// Emoji shown on the face.
    pub glyph: Cow<'static, str>,
    /// Machine-readable key, independent of the display label.
    pub slug: Cow<'static, str>,
    /// Display label in both locales.
    pub label: LocalizedText,
}

impl DiceFace {
    const fn fixed(
        value: u8,
        glyph: &'static str,
        slug: &'static str,
        ar: &'static str,
        en: &'static str,
    ) -> Self {
        Self {
            value,
            glyph: Cow::Borrowed(glyph),
            slug: Cow::Borrowed(slug),
            label: LocalizedText::fixed(ar, en),
        }
    }
}

static ACTIVITY_FACES: [DiceFace; FACE_COUNT] = [
    DiceFace::fixed(1, "🍽️", "restaurant", "مطعم", "Restaurant"),
    DiceFace::fixed(2, "☕", "cafe", "كافيه", "Café"),
    DiceFace::fixed(3, "🎬", "entertainment", "ترفيه", "Entertainment"),
    DiceFace::fixed(4, "🏕️", "outdoors", "طلعة برية", "Outdoors"),
    DiceFace::fixed(5, "🏠", "home", "جلسة بيت", "Stay Home"),
    DiceFace::fixed(6, "🚗", "drive", "مشوار سريع", "Quick Drive"),
];

static CUISINE_FACES: [DiceFace; FACE_COUNT] = [
    DiceFace::fixed(1, "🍛", "saudi", "سعودي", "Saudi"),
    DiceFace::fixed(2, "🍕", "italian", "إيطالي", "Italian"),
    DiceFace::fixed(3, "🍜", "asian", "آسيوي", "Asian"),
    DiceFace::fixed(4, "🍔", "burgers", "برجر", "Burgers"),
    DiceFace::fixed(5, "🦐", "seafood", "مأكولات بحرية", "Seafood"),
    DiceFace::fixed(6, "🥙", "shawarma", "شاورما", "Shawarma"),
];

static BUDGET_FACES: [DiceFace; FACE_COUNT] = [
    DiceFace::fixed(1, "🪙", "free", "مجاني", "Free"),
    DiceFace::fixed(2, "💵", "under_50", "أقل من 50", "Under 50"),
    DiceFace::fixed(3, "💰", "50_100", "50 - 100", "50 - 100"),
    DiceFace::fixed(4, "💳", "100_200", "100 - 200", "100 - 200"),
    DiceFace::fixed(5, "💎", "treat", "دلّع نفسك", "Treat Yourselves"),
    DiceFace::fixed(6, "🎁", "surprise", "مفاجأة", "Surprise"),
];

// Placeholders: payer rolls pick a member and build the face at roll time.
static PAYER_FACES: [DiceFace; FACE_COUNT] = [
    DiceFace::fixed(1, "👤", "payer", "الدافع 1", "Payer 1"),
    DiceFace::fixed(2, "👤", "payer", "الدافع 2", "Payer 2"),
    DiceFace::fixed(3, "👤", "payer", "الدافع 3", "Payer 3"),
    DiceFace::fixed(4, "👤", "payer", "الدافع 4", "Payer 4"),
    DiceFace::fixed(5, "👤", "payer", "الدافع 5", "Payer 5"),
    DiceFace::fixed(6, "👤", "payer", "الدافع 6", "Payer 6"),
];

static TASK_FACES: [DiceFace; FACE_COUNT] = [
    DiceFace::fixed(1, "🧾", "add_expense", "أضف مصروفًا", "Add one expense"),
    DiceFace::fixed(2, "🤝", "settle_up", "سدّدوا الحساب", "Settle up"),
    DiceFace::fixed(3, "📨", "invite", "ادعُ عضوًا", "Invite a member"),
    DiceFace::fixed(4, "📊", "weekly_report", "التقرير الأسبوعي", "Weekly report"),
    DiceFace::fixed(5, "✏️", "rename_group", "غيّر اسم المجموعة", "Rename group"),
    DiceFace::fixed(6, "🎟️", "free_pass", "إعفاء", "Free pass"),
];

/// The six faces of a dice type.
pub fn faces_for(dice_type: DiceType) -> &'static [DiceFace; FACE_COUNT] {
    match dice_type {
        DiceType::Activity => &ACTIVITY_FACES,
        DiceType::Cuisine => &CUISINE_FACES,
        DiceType::Budget => &BUDGET_FACES,
        DiceType::Payer => &PAYER_FACES,
        DiceType::Task => &TASK_FACES,
    }
}

/// Find a face by its slug.
pub fn face_by_slug(dice_type: DiceType, slug: &str) -> Option<&'static DiceFace> {
    faces_for(dice_type).iter().find(|f| f.slug == slug)
}

/// Find a face by its English label.
pub fn face_by_label(dice_type: DiceType, english: &str) -> Option<&'static DiceFace> {
    faces_for(dice_type).iter().find(|f| f.label.en == english)
}

/// The display name of a dice type.
pub fn dice_name(locale: Locale, dice_type: DiceType) -> &'static str {
    match (locale, dice_type) {
        (Locale::Ar, DiceType::Activity) => "نرد النشاط",
        (Locale::Ar, DiceType::Cuisine) => "نرد المطبخ",
        (Locale::Ar, DiceType::Budget) => "نرد الميزانية",
        (Locale::Ar, DiceType::Payer) => "نرد مين يدفع",
        (Locale::Ar, DiceType::Task) => "نرد المهام",
        (Locale::En, DiceType::Activity) => "Activity Dice",
        (Locale::En, DiceType::Cuisine) => "Cuisine Dice",
        (Locale::En, DiceType::Budget) => "Budget Dice",
        (Locale::En, DiceType::Payer) => "Who Pays Dice",
        (Locale::En, DiceType::Task) => "Task Dice",
    }
}
