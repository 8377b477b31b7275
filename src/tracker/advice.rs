use std::fmt;

use serde::Serialize;

use crate::models::{DailyTotals, Goals, Nutrient};
use crate::tracker::constants::{PRAISE_MIN_POSITIVE, REMEDIAL_TIP_PERCENT};
use crate::tracker::progress::percent_of_goal;

/// How a piece of advice reads to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// On target; counts toward the praise line.
    Positive,
    /// Off target in either direction.
    Caution,
    /// The closing encouragement line.
    Closing,
}

/// Every message the engine can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceKind {
    CaloriesTooLow,
    CaloriesTooHigh,
    CaloriesBalanced,
    ProteinTooLow,
    ProteinTooHigh,
    ProteinGreat,
    FatTooHigh,
    FatTooLow,
    FatBalanced,
    SugarOverload,
    SugarHigh,
    SugarExcellent,
    CarbsTooHigh,
    CarbsTooLow,
    Praise,
    RemedialTip,
}

/// A single line of advice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advice {
    pub kind: AdviceKind,
    pub tone: Tone,
    pub nutrient: Option<Nutrient>,
    pub icon: &'static str,
    pub headline: &'static str,
    pub detail: &'static str,
}

impl Advice {
    pub fn is_positive(&self) -> bool {
        self.tone == Tone::Positive
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.icon, self.headline, self.detail)
    }
}

/// Percent-of-goal condition for a band.
#[derive(Debug, Clone, Copy)]
enum Threshold {
    Below(f64),
    Above(f64),
    AtLeast(f64),
    Within(f64, f64),
}

impl Threshold {
    fn matches(self, percent: f64) -> bool {
        match self {
            Threshold::Below(limit) => percent < limit,
            Threshold::Above(limit) => percent > limit,
            Threshold::AtLeast(limit) => percent >= limit,
            Threshold::Within(lo, hi) => (lo..=hi).contains(&percent),
        }
    }
}

struct Message {
    kind: AdviceKind,
    tone: Tone,
    icon: &'static str,
    headline: &'static str,
    detail: &'static str,
}

impl Message {
    fn advice(&self, nutrient: Option<Nutrient>) -> Advice {
        Advice {
            kind: self.kind,
            tone: self.tone,
            nutrient,
            icon: self.icon,
            headline: self.headline,
            detail: self.detail,
        }
    }
}

struct Band {
    threshold: Threshold,
    message: Message,
}

const CALORIE_BANDS: &[Band] = &[
    Band {
        threshold: Threshold::Below(80.0),
        message: Message {
            kind: AdviceKind::CaloriesTooLow,
            tone: Tone::Caution,
            icon: "🍽️",
            headline: "Too few calories!",
            detail: "You might not be eating enough to fuel your body properly. Try adding healthy snacks like nuts or fruits.",
        },
    },
    Band {
        threshold: Threshold::Above(120.0),
        message: Message {
            kind: AdviceKind::CaloriesTooHigh,
            tone: Tone::Caution,
            icon: "⚠️",
            headline: "High calorie intake!",
            detail: "Consider smaller portions or choosing lower-calorie options like more vegetables and lean proteins.",
        },
    },
    Band {
        threshold: Threshold::Within(90.0, 110.0),
        message: Message {
            kind: AdviceKind::CaloriesBalanced,
            tone: Tone::Positive,
            icon: "✅",
            headline: "Perfect calorie balance!",
            detail: "You're right on track with your daily calorie goals.",
        },
    },
];

const PROTEIN_BANDS: &[Band] = &[
    Band {
        threshold: Threshold::Below(70.0),
        message: Message {
            kind: AdviceKind::ProteinTooLow,
            tone: Tone::Caution,
            icon: "💪",
            headline: "Need more protein!",
            detail: "Add eggs, chicken, fish, or tofu. Try some satay or grilled chicken breast!",
        },
    },
    Band {
        threshold: Threshold::Above(150.0),
        message: Message {
            kind: AdviceKind::ProteinTooHigh,
            tone: Tone::Caution,
            icon: "🥩",
            headline: "Lots of protein today!",
            detail: "That's okay occasionally, but balance with more carbs and vegetables tomorrow.",
        },
    },
    Band {
        threshold: Threshold::AtLeast(90.0),
        message: Message {
            kind: AdviceKind::ProteinGreat,
            tone: Tone::Positive,
            icon: "💪",
            headline: "Great protein intake!",
            detail: "Perfect for muscle maintenance and feeling full.",
        },
    },
];

const FAT_BANDS: &[Band] = &[
    Band {
        threshold: Threshold::Above(140.0),
        message: Message {
            kind: AdviceKind::FatTooHigh,
            tone: Tone::Caution,
            icon: "🧈",
            headline: "High fat intake today!",
            detail: "Try grilling instead of frying, and choose lean meats. Avoid too much coconut milk and fried foods.",
        },
    },
    Band {
        threshold: Threshold::Below(50.0),
        message: Message {
            kind: AdviceKind::FatTooLow,
            tone: Tone::Caution,
            icon: "🥑",
            headline: "Too little healthy fat!",
            detail: "Add some nuts, avocado, or olive oil for better nutrient absorption.",
        },
    },
    Band {
        threshold: Threshold::Within(80.0, 120.0),
        message: Message {
            kind: AdviceKind::FatBalanced,
            tone: Tone::Positive,
            icon: "✅",
            headline: "Good fat balance!",
            detail: "You're getting healthy fats without overdoing it.",
        },
    },
];

const SUGAR_BANDS: &[Band] = &[
    Band {
        threshold: Threshold::Above(150.0),
        message: Message {
            kind: AdviceKind::SugarOverload,
            tone: Tone::Caution,
            icon: "🍭",
            headline: "Sugar overload!",
            detail: "You've had way too much sugar today. Cut back on sweet drinks, desserts, and processed foods tomorrow.",
        },
    },
    Band {
        threshold: Threshold::Above(100.0),
        message: Message {
            kind: AdviceKind::SugarHigh,
            tone: Tone::Caution,
            icon: "🍰",
            headline: "High sugar intake!",
            detail: "Watch out for hidden sugars in drinks and snacks. Try water instead of sweet beverages.",
        },
    },
    Band {
        threshold: Threshold::Below(50.0),
        message: Message {
            kind: AdviceKind::SugarExcellent,
            tone: Tone::Positive,
            icon: "🌟",
            headline: "Excellent sugar control!",
            detail: "You're keeping sugar low - great for your health!",
        },
    },
];

const CARB_BANDS: &[Band] = &[
    Band {
        threshold: Threshold::Above(130.0),
        message: Message {
            kind: AdviceKind::CarbsTooHigh,
            tone: Tone::Caution,
            icon: "🍚",
            headline: "Carb-heavy day!",
            detail: "Try adding more protein and vegetables. Maybe less rice/noodles and more ulam next time!",
        },
    },
    Band {
        threshold: Threshold::Below(60.0),
        message: Message {
            kind: AdviceKind::CarbsTooLow,
            tone: Tone::Caution,
            icon: "🍞",
            headline: "Low carbs today!",
            detail: "Add some healthy carbs like brown rice or oats for sustained energy.",
        },
    },
];

/// Nutrient evaluation order.
const RULES: [(Nutrient, &[Band]); 5] = [
    (Nutrient::Calories, CALORIE_BANDS),
    (Nutrient::Protein, PROTEIN_BANDS),
    (Nutrient::Fat, FAT_BANDS),
    (Nutrient::Sugar, SUGAR_BANDS),
    (Nutrient::Carbs, CARB_BANDS),
];

const PRAISE: Message = Message {
    kind: AdviceKind::Praise,
    tone: Tone::Closing,
    icon: "🎉",
    headline: "You're doing awesome!",
    detail: "Keep up the great eating habits!",
};

const REMEDIAL_TIP: Message = Message {
    kind: AdviceKind::RemedialTip,
    tone: Tone::Closing,
    icon: "🥗",
    headline: "Tomorrow's tip:",
    detail: "Focus on fresh foods - more ulam, grilled fish, and plain water!",
};

/// Advice for a single nutrient at the given percent of goal.
///
/// The first matching band wins; bands are not exhaustive, so this may
/// return `None`.
pub fn nutrient_advice(nutrient: Nutrient, percent: f64) -> Option<Advice> {
    RULES
        .iter()
        .find(|(n, _)| *n == nutrient)
        .and_then(|(_, bands)| bands.iter().find(|band| band.threshold.matches(percent)))
        .map(|band| band.message.advice(Some(nutrient)))
}

/// Pick the closing line from the collected advice.
///
/// Praise when at least two positive items were emitted; otherwise a
/// remedial tip when both sugar and fat are over the tip threshold.
pub fn closing_advice(collected: &[Advice], sugar_percent: f64, fat_percent: f64) -> Option<Advice> {
    let positive = collected.iter().filter(|a| a.is_positive()).count();

    if positive >= PRAISE_MIN_POSITIVE {
        Some(PRAISE.advice(None))
    } else if sugar_percent > REMEDIAL_TIP_PERCENT && fat_percent > REMEDIAL_TIP_PERCENT {
        Some(REMEDIAL_TIP.advice(None))
    } else {
        None
    }
}

/// Generate the ordered advice list for the current totals.
///
/// Order: calories, protein, fat, sugar, carbs, then the closing line.
pub fn generate_advice(totals: &DailyTotals, goals: &Goals) -> Vec<Advice> {
    let percent = |n: Nutrient| percent_of_goal(totals.get(n), goals.get(n));

    let mut advice: Vec<Advice> = RULES
        .iter()
        .filter_map(|(nutrient, _)| nutrient_advice(*nutrient, percent(*nutrient)))
        .collect();

    if let Some(closing) = closing_advice(&advice, percent(Nutrient::Sugar), percent(Nutrient::Fat)) {
        advice.push(closing);
    }

    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(advice: &[Advice]) -> Vec<AdviceKind> {
        advice.iter().map(|a| a.kind).collect()
    }

    fn totals_at(goals: &Goals, pct: [f64; 5]) -> DailyTotals {
        DailyTotals {
            calories: goals.calorie_goal as f64 * pct[0] / 100.0,
            protein: goals.protein_goal as f64 * pct[1] / 100.0,
            carbs: goals.carb_goal as f64 * pct[2] / 100.0,
            fat: goals.fat_goal as f64 * pct[3] / 100.0,
            sugar: goals.sugar_goal as f64 * pct[4] / 100.0,
        }
    }

    #[test]
    fn test_calorie_bands() {
        let c = Nutrient::Calories;
        assert_eq!(nutrient_advice(c, 79.9).map(|a| a.kind), Some(AdviceKind::CaloriesTooLow));
        assert_eq!(nutrient_advice(c, 80.0), None);
        assert_eq!(nutrient_advice(c, 89.9), None);
        assert_eq!(nutrient_advice(c, 90.0).map(|a| a.kind), Some(AdviceKind::CaloriesBalanced));
        assert_eq!(nutrient_advice(c, 110.0).map(|a| a.kind), Some(AdviceKind::CaloriesBalanced));
        assert_eq!(nutrient_advice(c, 115.0), None);
        assert_eq!(nutrient_advice(c, 120.0), None);
        assert_eq!(nutrient_advice(c, 120.1).map(|a| a.kind), Some(AdviceKind::CaloriesTooHigh));
    }

    #[test]
    fn test_protein_bands() {
        let p = Nutrient::Protein;
        assert_eq!(nutrient_advice(p, 69.0).map(|a| a.kind), Some(AdviceKind::ProteinTooLow));
        assert_eq!(nutrient_advice(p, 85.0), None);
        assert_eq!(nutrient_advice(p, 90.0).map(|a| a.kind), Some(AdviceKind::ProteinGreat));
        assert_eq!(nutrient_advice(p, 150.0).map(|a| a.kind), Some(AdviceKind::ProteinGreat));
        assert_eq!(nutrient_advice(p, 151.0).map(|a| a.kind), Some(AdviceKind::ProteinTooHigh));
    }

    #[test]
    fn test_fat_bands() {
        let f = Nutrient::Fat;
        assert_eq!(nutrient_advice(f, 10.0).map(|a| a.kind), Some(AdviceKind::FatTooLow));
        assert_eq!(nutrient_advice(f, 60.0), None);
        assert_eq!(nutrient_advice(f, 100.0).map(|a| a.kind), Some(AdviceKind::FatBalanced));
        assert_eq!(nutrient_advice(f, 130.0), None);
        assert_eq!(nutrient_advice(f, 141.0).map(|a| a.kind), Some(AdviceKind::FatTooHigh));
    }

    #[test]
    fn test_sugar_bands_strict_boundaries() {
        let s = Nutrient::Sugar;
        assert_eq!(nutrient_advice(s, 49.9).map(|a| a.kind), Some(AdviceKind::SugarExcellent));
        // Strictly less than 50.
        assert_eq!(nutrient_advice(s, 50.0), None);
        assert_eq!(nutrient_advice(s, 100.0), None);
        assert_eq!(nutrient_advice(s, 100.5).map(|a| a.kind), Some(AdviceKind::SugarHigh));
        assert_eq!(nutrient_advice(s, 150.0).map(|a| a.kind), Some(AdviceKind::SugarHigh));
        assert_eq!(nutrient_advice(s, 150.5).map(|a| a.kind), Some(AdviceKind::SugarOverload));
    }

    #[test]
    fn test_carb_bands() {
        let c = Nutrient::Carbs;
        assert_eq!(nutrient_advice(c, 59.0).map(|a| a.kind), Some(AdviceKind::CarbsTooLow));
        assert_eq!(nutrient_advice(c, 100.0), None);
        assert_eq!(nutrient_advice(c, 131.0).map(|a| a.kind), Some(AdviceKind::CarbsTooHigh));
    }

    #[test]
    fn test_everything_on_goal() {
        let goals = Goals::default();
        let totals = totals_at(&goals, [100.0; 5]);
        let advice = generate_advice(&totals, &goals);
        assert_eq!(
            kinds(&advice),
            vec![
                AdviceKind::CaloriesBalanced,
                AdviceKind::ProteinGreat,
                AdviceKind::FatBalanced,
                AdviceKind::Praise,
            ]
        );
    }

    #[test]
    fn test_evaluation_order() {
        let goals = Goals::default();
        let totals = totals_at(&goals, [50.0, 50.0, 200.0, 200.0, 200.0]);
        let advice = generate_advice(&totals, &goals);
        assert_eq!(
            kinds(&advice),
            vec![
                AdviceKind::CaloriesTooLow,
                AdviceKind::ProteinTooLow,
                AdviceKind::FatTooHigh,
                AdviceKind::SugarOverload,
                AdviceKind::CarbsTooHigh,
                AdviceKind::RemedialTip,
            ]
        );
    }

    #[test]
    fn test_need_more_protein_is_not_positive() {
        let goals = Goals::default();
        // Calories balanced, protein low, sugar excellent: two positives.
        let totals = totals_at(&goals, [100.0, 10.0, 100.0, 60.0, 10.0]);
        let advice = generate_advice(&totals, &goals);
        assert_eq!(advice.iter().filter(|a| a.is_positive()).count(), 2);
        assert_eq!(advice.last().map(|a| a.kind), Some(AdviceKind::Praise));

        // Only one positive: no praise.
        let totals = totals_at(&goals, [100.0, 10.0, 100.0, 60.0, 75.0]);
        let advice = generate_advice(&totals, &goals);
        assert!(advice.iter().all(|a| a.tone != Tone::Closing));
    }

    #[test]
    fn test_praise_takes_priority_over_tip() {
        let goals = Goals::default();
        let totals = totals_at(&goals, [100.0, 100.0, 100.0, 130.0, 130.0]);
        let advice = generate_advice(&totals, &goals);
        assert_eq!(advice.last().map(|a| a.kind), Some(AdviceKind::Praise));
    }

    #[test]
    fn test_no_tip_at_exactly_threshold() {
        let goals = Goals::default();
        let totals = totals_at(&goals, [150.0, 50.0, 100.0, 120.0, 130.0]);
        let advice = generate_advice(&totals, &goals);
        assert!(advice.iter().all(|a| a.tone != Tone::Closing));
    }

    #[test]
    fn test_display() {
        let advice = nutrient_advice(Nutrient::Sugar, 0.0).unwrap();
        assert_eq!(
            advice.to_string(),
            "🌟 Excellent sugar control! You're keeping sugar low - great for your health!"
        );
    }
}
