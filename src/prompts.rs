//! Static instructions and brief templates sent to the gateway at each stage.

use crate::models::CampaignRequest;

pub const VISION_SYSTEM_PROMPT: &str = "You are an elite product photographer and visual analyst. Your analysis will be used by an AI image generator to recreate this product perfectly in a new marketing context.

ANALYSIS FRAMEWORK:
1. PRODUCT IDENTIFICATION: What is this product? Category, type, and purpose.
2. PHYSICAL ATTRIBUTES: Exact colors (use specific color names like \"matte charcoal\", \"rose gold\", \"arctic white\"), materials (glossy plastic, brushed aluminum, soft leather), textures, and surface finishes.
3. FORM & PROPORTIONS: Shape, dimensions relative to each other, distinctive silhouette features.
4. KEY VISUAL ELEMENTS: Logos, labels, unique design features, patterns, hardware, or embellishments.
5. LIGHTING CHARACTERISTICS: How does light interact with the product? Reflective, matte, translucent, metallic sheen?

OUTPUT: A dense, specific 4-5 sentence description optimized for image generation. Use concrete visual language, not marketing speak.";

pub const VISION_USER_PROMPT: &str =
    "Analyze this product image with extreme precision for AI image generation.";

pub const CAPTION_SYSTEM_PROMPT: &str = "You write punchy social media captions. Rules:
- Maximum 2 short sentences (under 25 words total)
- End with 2-3 hashtags
- Include one emoji
- Be bold and direct — no filler words
- Output ONLY the caption, nothing else.";

pub const HERO_PRODUCT_MARKER: &str = "HERO PRODUCT";

/// Hero-product block appended to the brief. Empty when there is no product context.
pub fn product_section(product_context: &str) -> String {
    if product_context.is_empty() {
        return String::new();
    }

    format!(
        "

{marker} (CRITICAL - MUST BE ACCURATE):
{product_context}

PRODUCT PLACEMENT RULES:
- Position as the PRIMARY focal point, occupying 25-35% of the composition
- Place slightly off-center (rule of thirds) for dynamic composition
- Angle the product 15-30° for dimensional interest, not flat/straight-on
- Apply cinematic lighting that matches the style while highlighting product details
- Ensure product colors and details are EXACTLY as described above",
        marker = HERO_PRODUCT_MARKER,
    )
}

pub fn engineer_system_prompt(request: &CampaignRequest) -> String {
    let brand = &request.brand_name;
    let headline = &request.headline_text;
    let color = &request.brand_color;

    format!(
        "You are a legendary Creative Director at a top-tier advertising agency (Wieden+Kennedy, Droga5 caliber). You've created campaigns for Nike, Apple, and Coca-Cola. Your task: craft ONE masterful prompt for AI image generation that will produce an award-winning promotional visual.

CREATIVE BRIEF:
- Brand: {brand}
- Industry: {industry}
- Campaign Theme: {theme}
- Hero Headline: \"{headline}\"
- Brand Color: {color}

VISUAL STYLE SPECIFICATIONS:
{style}

MANDATORY DESIGN PRINCIPLES:

1. TYPOGRAPHY HIERARCHY (Most Important Element):
   - HEADLINE \"{headline}\" must be MASSIVE and DOMINANT — occupying 30-40% of visual weight
   - Typography treatment: Choose ONE dramatic approach:
     * 3D extruded letters with {color} lighting and metallic sheen
     * Bold sans-serif with gradient fill from {color} to complementary color
     * Neon-glow effect with soft bloom and light trails
     * Elegant serif with gold foil / emboss effect for luxury
   - Text must be PERFECTLY LEGIBLE and spelled EXACTLY as provided
   - Brand name \"{brand}\" as secondary element, styled consistently but smaller

2. COMPOSITION & LAYOUT:
   - 1:1 square format (Instagram-optimized)
   - Clear visual hierarchy: Headline → Product → Supporting elements
   - Use rule of thirds for product/text placement
   - Strong foreground/background separation with depth layers
   - Dynamic diagonal lines or curves to guide eye movement

3. BACKGROUND & ATMOSPHERE:
   - NEVER flat or solid-color backgrounds
   - Rich environmental context OR abstract gradient with texture
   - Atmospheric depth: subtle fog, bokeh, light particles, or lens flare
   - Brand color {color} integrated as accent lighting, gradients, or design elements

4. FINISHING TOUCHES:
   - Add ONE promotional element: badge, sticker, or banner with offer text
   - Include subtle design accents: geometric shapes, thin lines, or floating particles
   - Professional color grading that unifies all elements
   - Photorealistic rendering quality, commercial-grade finish

OUTPUT FORMAT:
- Write ONLY the image prompt (no explanations, no prefixes, no markdown)
- Describe the scene as if photographing an existing finished poster
- Maximum 250 words
- Use specific, concrete visual language
- Do NOT use words like \"generate\", \"create\", or \"AI\"",
        industry = request.industry,
        theme = request.theme,
        style = request.style().description(),
    )
}

pub fn engineer_user_prompt(request: &CampaignRequest, product_context: &str) -> String {
    format!(
        "Design an award-winning promotional flyer for:

BRAND: {brand}
INDUSTRY: {industry}
THEME: {theme}
HEADLINE: \"{headline}\"
STYLE: {style}
BRAND COLOR: {color}{product}

Write the image generation prompt now.",
        brand = request.brand_name,
        industry = request.industry,
        theme = request.theme,
        headline = request.headline_text,
        style = request.visual_style,
        color = request.brand_color,
        product = product_section(product_context),
    )
}

/// Wrap the engineered prompt in the fixed rendering brief for the image model.
pub fn image_generation_prompt(headline: &str, engineered_prompt: &str) -> String {
    format!(
        "Create a stunning, professional marketing flyer image.

TECHNICAL SPECIFICATIONS:
- Format: 1080x1080 pixel square (1:1 aspect ratio)
- Quality: Ultra-high resolution, print-ready, commercial advertising grade
- Style: Professional graphic design, polished and premium

CRITICAL REQUIREMENTS:
- All text must be PERFECTLY spelled and highly legible
- The headline \"{headline}\" must be the dominant visual element with dramatic typography
- Professional color grading and lighting
- Clean composition with strong visual hierarchy

DESIGN EXECUTION:
{engineered_prompt}

Render this as a finished, professional marketing poster ready for immediate use in a paid advertising campaign."
    )
}

pub fn caption_user_prompt(request: &CampaignRequest) -> String {
    format!(
        "Brand: {} | Theme: {} | Headline: \"{}\"

Write a short, punchy caption.",
        request.brand_name, request.theme, request.headline_text
    )
}
