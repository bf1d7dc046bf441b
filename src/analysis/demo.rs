use once_cell::sync::Lazy;
use rand::Rng;

use super::types::{BodyTypeProfile, ColorAnalysis, MakeupStyle};

static COLOR_ANALYSES: Lazy<Vec<ColorAnalysis>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../assets/demo_color_analyses.json"))
        .expect("embedded demo color analyses are valid JSON")
});

static BODY_TYPES: Lazy<Vec<BodyTypeProfile>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../assets/demo_body_types.json"))
        .expect("embedded demo body types are valid JSON")
});

static MAKEUP_STYLES: Lazy<Vec<MakeupStyle>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../assets/demo_makeup_styles.json"))
        .expect("embedded demo makeup styles are valid JSON")
});

/// One canned color analysis, chosen uniformly at random.
pub fn random_color_analysis<R: Rng + ?Sized>(rng: &mut R) -> ColorAnalysis {
    COLOR_ANALYSES[rng.random_range(0..COLOR_ANALYSES.len())].clone()
}

/// One canned body-type profile, chosen uniformly at random.
pub fn random_body_type<R: Rng + ?Sized>(rng: &mut R) -> BodyTypeProfile {
    BODY_TYPES[rng.random_range(0..BODY_TYPES.len())].clone()
}

/// One canned makeup style, chosen uniformly at random.
pub fn random_makeup_style<R: Rng + ?Sized>(rng: &mut R) -> MakeupStyle {
    MAKEUP_STYLES[rng.random_range(0..MAKEUP_STYLES.len())].clone()
}

/// Names of the styles other than `style`, in declared order.
///
/// The makeup endpoint reports the first two of these as related looks.
pub fn similar_makeup_styles(style: &str) -> Vec<String> {
    MAKEUP_STYLES
        .iter()
        .filter(|candidate| candidate.style != style)
        .map(|candidate| candidate.style.clone())
        .collect()
}
