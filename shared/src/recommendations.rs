//! Static diet and exercise recommendation catalog
//!
//! Fixed content keyed by category name. Only the three categories that
//! carry an advice flag have an entry; Normal intentionally has none, since
//! no advice is ever surfaced for it.

use serde::Serialize;

/// Diet and exercise recommendations for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationChart {
    pub diet: &'static [&'static str],
    pub exercise: &'static [&'static str],
}

static UNDERWEIGHT: RecommendationChart = RecommendationChart {
    diet: &[
        "Increase calorie intake with nutrient-dense foods.",
        "Include more proteins like eggs, chicken, fish, and legumes.",
        "Consume healthy fats like avocado, nuts, seeds, and olive oil.",
    ],
    exercise: &[
        "Vrikshasana (Tree Pose): Helps improve balance and stability.",
        "Bhujangasana (Cobra Pose): Strengthens the spine and reduces stress.",
    ],
};

static OVERWEIGHT: RecommendationChart = RecommendationChart {
    diet: &[
        "Focus on portion control and avoid overeating.",
        "Include more fiber-rich foods like vegetables, fruits, and whole grains.",
    ],
    exercise: &[
        "Trikonasana (Triangle Pose): Reduces fat and strengthens muscles.",
        "Surya Namaskar (Sun Salutation): Enhances metabolism and burns calories.",
    ],
};

static OBESE: RecommendationChart = RecommendationChart {
    diet: &[
        "Focus on a balanced, low-calorie diet with lean proteins and vegetables.",
        "Limit processed foods, sugary drinks, and fried foods.",
    ],
    exercise: &[
        "Virabhadrasana (Warrior Pose): Increases stamina and promotes weight loss.",
        "Pranayama (Breathing exercises): Reduces stress and helps with weight management.",
    ],
};

/// Look up the recommendation chart for a category name
///
/// Case-sensitive. Returns None for "Normal" and for anything unrecognized;
/// the caller renders an empty state rather than an error.
pub fn lookup(category: &str) -> Option<&'static RecommendationChart> {
    match category {
        "Underweight" => Some(&UNDERWEIGHT),
        "Overweight" => Some(&OVERWEIGHT),
        "Obese" => Some(&OBESE),
        _ => None,
    }
}
