use std::env;

use anyhow::Result;
use once_cell::sync::Lazy;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub log_level: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_temperature: f32,
    pub gemini_top_k: i32,
    pub gemini_top_p: f32,
    pub gemini_max_output_tokens: i32,
    pub gemini_safety_settings: String,
    pub http_timeout_seconds: u64,
    pub demo_delay_ms: u64,
    pub max_upload_bytes: usize,
}

pub static CONFIG: Lazy<Config> =
    Lazy::new(|| Config::load().expect("Failed to load configuration"));

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<f32>().ok())
        .unwrap_or(default)
}

fn env_i32(name: &str, default: i32) -> i32 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<i32>().ok())
        .unwrap_or(default)
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(default)
}

fn normalize_gemini_safety_settings(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "permissive".to_string();
    }

    let lowered = trimmed.to_lowercase();
    match lowered.as_str() {
        "permissive" | "off" | "none" => "permissive".to_string(),
        "standard" => "standard".to_string(),
        _ => {
            warn!(
                "Unknown GEMINI_SAFETY_SETTINGS value '{}'; defaulting to permissive.",
                value
            );
            "permissive".to_string()
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Config {
            server_host: env_string("SERVER_HOST", "0.0.0.0"),
            server_port: env_u16("SERVER_PORT", 3000),
            log_level: env_string("LOG_LEVEL", "info").to_lowercase(),
            gemini_api_key: env_string("GEMINI_API_KEY", ""),
            gemini_model: env_string("GEMINI_MODEL", "gemini-1.5-flash"),
            gemini_temperature: env_f32("GEMINI_TEMPERATURE", 0.7),
            gemini_top_k: env_i32("GEMINI_TOP_K", 40),
            gemini_top_p: env_f32("GEMINI_TOP_P", 0.95),
            gemini_max_output_tokens: env_i32("GEMINI_MAX_OUTPUT_TOKENS", 2048),
            gemini_safety_settings: normalize_gemini_safety_settings(env_string(
                "GEMINI_SAFETY_SETTINGS",
                "permissive",
            )),
            http_timeout_seconds: env_u64("HTTP_TIMEOUT_SECONDS", 90),
            demo_delay_ms: env_u64("DEMO_DELAY_MS", 2000),
            max_upload_bytes: env_usize("MAX_UPLOAD_BYTES", 8 * 1024 * 1024),
        })
    }
}

pub const COLOR_ANALYSIS_PROMPT: &str = r##"
Here's a picture of me, do colour analysis & let me know which season I fall in. Also mention few colours according to my skin tone which look best on me.

As a professional color analyst and style consultant, please analyze this person's photo comprehensively:

CRITICAL FIRST CHECK:
- If this image contains MORE THAN ONE PERSON, respond with: {"error": "group_photo", "message": "Please upload a solo photo for accurate color analysis. Group photos cannot be analyzed properly."}
- Only proceed with analysis if there is EXACTLY ONE PERSON clearly visible in the image

ANALYSIS REQUIREMENTS:
1. Examine skin tone depth (fair, light, medium, tan, deep, dark)
2. Identify undertones (warm/golden, cool/pink, neutral/olive) - this is crucial for accurate recommendations
3. Determine seasonal color palette (Spring: warm & bright, Summer: cool & muted, Autumn: warm & muted, Winter: cool & bright)
4. Analyze body type from visible features - be specific (Hourglass-Curvy, Pear-Curvy Bottom, Apple-Full Figure, Rectangle-Skinny, Inverted Triangle-Athletic)
5. Consider hair color and eye color in the analysis
6. Factor in contrast levels between skin, hair, and eyes

IMPORTANT: If you cannot clearly determine the body type from the image (due to clothing, angle, or image quality), respond with "bodyType": "unclear - please upload a clearer full-body image for accurate body type analysis"

SPECIFIC RECOMMENDATIONS NEEDED:
- 10 BEST colors that will make their skin glow and look healthy (be very specific with color names)
- 10 colors to AVOID that will wash them out or clash with their undertones (be very specific)
- Detailed clothing recommendations including:
  * Specific garment types for their body type (palazzo pants, baggy jeans, skinny jeans, A-line skirts, pencil skirts, etc.)
  * Denim styles that flatter their figure
  * Fabric recommendations
  * Style guidelines based on body type
- Jewelry recommendations:
  * Best metals based on undertones (gold, silver, rose gold, platinum)
  * Metals to avoid with hex color codes
  * Gemstone recommendations
  * Specific jewelry pieces that complement their features
- Professional makeup color palette with specific shade recommendations

Please provide extremely detailed and accurate analysis that considers both color theory and body type styling. Be specific with garment names and styling advice.

Return the response in JSON format with the following structure:
{
  "skinTone": "detailed description",
  "undertone": "warm/cool/neutral",
  "season": "Spring/Summer/Autumn/Winter",
  "bodyType": "specific body type with descriptor (e.g., Hourglass-Curvy) or unclear message",
  "bestColors": ["color1", "color2", ...],
  "avoidColors": ["color1", "color2", ...],
  "clothingRecommendations": {
    "casual": ["recommendation1", "recommendation2", ...],
    "formal": ["recommendation1", "recommendation2", ...],
    "bodyTypeSpecific": ["specific garment recommendations"],
    "denim": ["denim style recommendations"],
    "fabrics": ["fabric recommendations"],
    "styles": ["style guidelines"],
    "colors": ["clothing color recommendations"]
  },
  "jewelryRecommendations": {
    "metals": ["recommended metals"],
    "avoid": ["metals to avoid"],
    "avoidWithHex": [{"name": "metal name", "hex": "#hexcode"}],
    "gemstones": ["recommended gemstones"],
    "recommendations": ["specific jewelry pieces"]
  },
  "makeupRecommendations": {
    "foundation": "foundation shade recommendation",
    "lipColors": ["lip color recommendations"],
    "eyeshadow": ["eyeshadow recommendations"],
    "blush": ["blush recommendations"],
    "eyeliner": ["eyeliner recommendations"],
    "mascara": ["mascara recommendations"]
  }
}
"##;
