use serde::{Deserialize, Serialize};

/// A display color: human-readable name plus the hex code it renders as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
    pub name: String,
    pub hex: String,
}

/// One full color-analysis report, either parsed out of model output or taken
/// from the canned demo set. Fields missing from model output deserialize to
/// empty defaults and are passed through as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorAnalysis {
    #[serde(default)]
    pub skin_tone: String,
    #[serde(default)]
    pub undertone: String,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub body_type: String,
    #[serde(default)]
    pub confidence: String,
    #[serde(default)]
    pub best_colors: Vec<String>,
    #[serde(default)]
    pub avoid_colors: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub color_analysis: String,
    #[serde(default)]
    pub clothing_recommendations: ClothingRecommendations,
    #[serde(default)]
    pub jewelry_recommendations: JewelryRecommendations,
    #[serde(default)]
    pub makeup_recommendations: MakeupRecommendations,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingRecommendations {
    #[serde(default)]
    pub casual: Vec<String>,
    #[serde(default)]
    pub formal: Vec<String>,
    #[serde(default)]
    pub body_type_specific: Vec<String>,
    #[serde(default)]
    pub denim: Vec<String>,
    #[serde(default)]
    pub fabrics: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JewelryRecommendations {
    #[serde(default)]
    pub metals: Vec<String>,
    #[serde(default)]
    pub avoid: Vec<String>,
    #[serde(default)]
    pub avoid_with_hex: Vec<NamedColor>,
    #[serde(default)]
    pub gemstones: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeupRecommendations {
    #[serde(default)]
    pub foundation: String,
    #[serde(default)]
    pub lip_colors: Vec<String>,
    #[serde(default)]
    pub eyeshadow: Vec<String>,
    #[serde(default)]
    pub blush: Vec<String>,
    #[serde(default)]
    pub eyeliner: Vec<String>,
    #[serde(default)]
    pub mascara: Vec<String>,
}

/// Canned body-type profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyTypeProfile {
    pub body_type: String,
    pub description: String,
    pub recommendations: Vec<String>,
    pub tips: Vec<String>,
}

/// Canned makeup style guide.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeupStyle {
    pub style: String,
    pub description: String,
    pub features: Vec<String>,
    pub steps: Vec<String>,
    pub video_id: String,
    pub difficulty: String,
}
