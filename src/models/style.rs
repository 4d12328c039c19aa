use serde::{Deserialize, Serialize};

/// Visual style presets the prompt engineer can condition on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisualStyle {
    #[default]
    Photorealistic,
    Neon,
    Pastel,
    Luxury,
}

impl VisualStyle {
    pub const ALL: [VisualStyle; 4] = [
        VisualStyle::Photorealistic,
        VisualStyle::Neon,
        VisualStyle::Pastel,
        VisualStyle::Luxury,
    ];

    /// Exact-key lookup. Anything unrecognised is treated as photorealistic.
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == key)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VisualStyle::Photorealistic => "Photorealistic",
            VisualStyle::Neon => "Neon",
            VisualStyle::Pastel => "Pastel",
            VisualStyle::Luxury => "Luxury",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VisualStyle::Photorealistic => PHOTOREALISTIC,
            VisualStyle::Neon => NEON,
            VisualStyle::Pastel => PASTEL,
            VisualStyle::Luxury => LUXURY,
        }
    }
}

const PHOTOREALISTIC: &str = "ULTRA-REALISTIC COMMERCIAL PHOTOGRAPHY STYLE:
- Shot on Phase One IQ4 150MP medium format camera with Schneider 80mm f/2.8 lens
- Three-point studio lighting: key light with large softbox at 45°, fill light at 1:4 ratio, rim light for product separation
- Perfectly controlled shadows with gradient falloff, subtle ambient occlusion
- 8K resolution quality, razor-sharp product focus with gentle depth of field on background
- Color-accurate with professional color grading, neutral but rich tones";

const NEON: &str = "CINEMATIC CYBERPUNK NEON STYLE:
- Deep noir darkness (near-black background with selective illumination)
- Intense saturated neon lighting: electric cyan (#00FFFF), hot magenta (#FF00FF), electric violet (#8B00FF)
- Dramatic light rays, volumetric fog/haze catching neon beams
- Reflective wet surfaces, chrome/mirror accents catching neon reflections
- High contrast with crushed blacks and blown-out neon highlights
- Blade Runner / Tron aesthetic with futuristic tech-noir atmosphere";

const PASTEL: &str = "REFINED MINIMALIST PASTEL STYLE:
- Soft, diffused natural lighting with no harsh shadows
- Limited palette: dusty rose (#E8D5D5), sage green (#B4C4AE), powder blue (#B6D0E2), cream (#FFF8E7), blush pink (#F4C2C2)
- Generous negative space (60%+ of composition)
- Subtle paper/canvas texture overlay for organic warmth
- Soft rounded geometric accents, thin elegant lines
- Scandinavian-inspired clean composition, Marie Kondo aesthetic";

const LUXURY: &str = "OPULENT HIGH-END LUXURY STYLE:
- Rich, moody lighting with dramatic chiaroscuro (Renaissance-inspired light/shadow)
- Deep blacks, champagne golds (#F7E7CE), rose gold (#B76E79), platinum silver
- Materials: black velvet, Italian marble, polished ebony, liquid gold
- Subtle ambient glow, candlelit warmth with modern precision
- Baroque-inspired decorative flourishes, art deco geometric patterns
- Vogue/Harper's Bazaar editorial quality, aspirational and exclusive";
