// Presentation constants for the article page: palette, type and the inline
// style strings of every block. Structural code never hard-codes a colour.

// Palette
pub const BG: &str = "#060b10";
pub const TEAL: &str = "#64dcc8";
pub const TEAL_DIM: &str = "#3a8f7d";
pub const CORAL: &str = "#e74c6f";
pub const TEXT: &str = "rgba(200,215,220,0.85)";
pub const TEXT_DIM: &str = "rgba(200,215,220,0.5)";
pub const HEADING: &str = "#e8f0ee";
pub const BORDER: &str = "rgba(100,220,200,0.12)";

/// Accent colour as RGB components, used for canvas strokes and fills.
pub const ACCENT_RGB: [u8; 3] = [100, 220, 200];

// Type
pub const FONT_DISPLAY: &str = "'Instrument Serif',Georgia,serif";
pub const FONT_BODY: &str = "'Source Serif 4',Georgia,serif";
pub const FONT_MONO: &str = "'JetBrains Mono',monospace";

#[inline]
pub fn accent_rgba(alpha: f32) -> String {
    let [r, g, b] = ACCENT_RGB;
    format!("rgba({},{},{},{})", r, g, b, alpha.clamp(0.0, 1.0))
}

pub const GLOBAL_CSS: &str = "\
@import url('https://fonts.googleapis.com/css2?family=Instrument+Serif:ital@0;1&family=Source+Serif+4:ital,opsz,wght@0,8..60,300;0,8..60,400;0,8..60,600;1,8..60,400&family=JetBrains+Mono:wght@400;500;700&display=swap');
* { box-sizing: border-box; margin: 0; padding: 0; }
html { scroll-behavior: smooth; }
::selection { background: rgba(100,220,200,0.3); color: #fff; }
@keyframes heroGlow { 0%,100% { opacity:.35; } 50% { opacity:.65; } }
@keyframes fadeUp { from { opacity:0; transform:translateY(28px); } to { opacity:1; transform:translateY(0); } }
@keyframes typeIn { from { opacity:0; transform:translateY(18px); } to { opacity:1; transform:translateY(0); } }
";

// Page frame
pub fn root_style() -> String {
    format!("background:{BG};min-height:100vh;color:{TEXT}")
}
pub const CANVAS_STYLE: &str =
    "position:fixed;inset:0;width:100%;height:100%;pointer-events:none;z-index:0";
pub const CONTENT_STYLE: &str = "position:relative;z-index:1";
pub const ARTICLE_STYLE: &str = "max-width:720px;margin:0 auto;padding:0 1.5rem 6rem";

// Hero
pub const HERO_STYLE: &str = "min-height:100vh;display:flex;flex-direction:column;justify-content:center;align-items:center;text-align:center;padding:2rem;position:relative;overflow:hidden";
pub const HERO_GLOW_STYLE: &str = "position:absolute;width:700px;height:700px;border-radius:50%;background:radial-gradient(circle,rgba(100,220,200,0.06) 0%,transparent 70%);top:50%;left:50%;transform:translate(-50%,-50%);animation:heroGlow 6s ease-in-out infinite;pointer-events:none";
pub const HERO_INNER_STYLE: &str = "animation:fadeUp .9s ease-out .2s both;max-width:800px";
pub fn hero_kicker_style() -> String {
    format!("font-family:{FONT_MONO};font-size:.68rem;letter-spacing:.35em;text-transform:uppercase;color:{TEAL};margin-bottom:2rem;opacity:.75")
}
pub fn hero_title_style() -> String {
    format!("font-family:{FONT_DISPLAY};font-size:clamp(2.4rem,5.5vw,4.8rem);font-weight:400;color:#f0f8f6;line-height:1.1;margin-bottom:1.5rem;animation:typeIn 1s ease-out .5s both")
}
pub fn hero_emphasis_style() -> String {
    format!("color:{TEAL};font-style:italic")
}
pub fn hero_subtitle_style() -> String {
    format!("font-family:{FONT_BODY};font-size:1.2rem;color:rgba(200,215,220,0.55);max-width:600px;line-height:1.7;margin:0 auto 2.5rem;animation:typeIn 1s ease-out .8s both")
}
pub const BYLINE_STYLE: &str = "display:flex;align-items:center;justify-content:center;gap:1rem;animation:typeIn 1s ease-out 1.1s both";
pub fn avatar_style() -> String {
    format!("width:40px;height:40px;border-radius:50%;background:linear-gradient(135deg,{TEAL},{TEAL_DIM});display:flex;align-items:center;justify-content:center;font-size:1rem;font-weight:600;color:{BG};font-family:'Instrument Serif',serif")
}
pub fn author_style() -> String {
    format!("font-family:{FONT_BODY};font-size:1rem;color:{HEADING}")
}
pub fn author_meta_style() -> String {
    format!("font-family:{FONT_MONO};font-size:.68rem;color:rgba(200,215,220,0.3)")
}
pub const SCROLL_HINT_STYLE: &str =
    "position:absolute;bottom:2rem;left:50%;transform:translateX(-50%);animation:fadeUp 1s ease-out 1.8s both";
pub const SCROLL_HINT_SVG: &str = r##"<svg width="20" height="28" viewBox="0 0 20 28" fill="none"><rect x="1" y="1" width="18" height="26" rx="9" stroke="rgba(100,220,200,0.25)" stroke-width="1.5"/><circle cx="10" cy="9" r="2" fill="#64dcc8"><animate attributeName="cy" values="9;19;9" dur="2s" repeatCount="indefinite"/><animate attributeName="opacity" values="1;.3;1" dur="2s" repeatCount="indefinite"/></circle></svg>"##;

// Body text
pub fn paragraph_style() -> String {
    format!("font-family:{FONT_BODY};font-size:1.1rem;line-height:1.85;color:{TEXT};margin-bottom:1.5rem")
}
pub fn heading_style() -> String {
    format!("font-family:{FONT_DISPLAY};font-size:2.1rem;font-weight:400;color:{HEADING};margin-bottom:1.2rem;margin-top:.5rem;line-height:1.25")
}
pub fn strong_style() -> String {
    format!("color:{TEAL}")
}
pub fn code_style() -> String {
    format!("font-family:{FONT_MONO};font-size:.84em;background:rgba(100,220,200,0.08);color:{TEAL};padding:2px 7px;border-radius:4px;border:1px solid {BORDER}")
}
pub fn link_style() -> String {
    format!("color:{TEAL};text-decoration:none")
}

// Callouts
pub fn pull_quote_style() -> String {
    format!("margin:3rem 0;padding:2rem 2.5rem;border-left:3px solid rgba(100,220,200,0.6);background:linear-gradient(135deg,rgba(100,220,200,0.04),rgba(100,220,200,0.01));border-radius:0 12px 12px 0;font-family:{FONT_BODY};font-size:1.25rem;line-height:1.6;color:rgba(200,230,225,0.9);font-style:italic")
}
pub const DIVIDER_STYLE: &str = "display:flex;align-items:center;gap:1.5rem;margin:4rem 0 2.5rem";
pub const DIVIDER_RULE_STYLE: &str =
    "flex:1;height:1px;background:linear-gradient(90deg,transparent,rgba(100,220,200,0.25),transparent)";
pub fn divider_label_style() -> String {
    format!("font-family:{FONT_MONO};font-size:.68rem;letter-spacing:.2em;text-transform:uppercase;color:rgba(100,220,200,0.45);white-space:nowrap")
}
pub const DEBUG_NOTE_STYLE: &str =
    "margin:2rem 0;padding:1.2rem 1.5rem;border-radius:10px;border:1px solid rgba(231,76,111,0.2);background:rgba(231,76,111,0.04)";
pub fn debug_note_title_style() -> String {
    format!("font-family:{FONT_MONO};font-size:.68rem;letter-spacing:.15em;text-transform:uppercase;color:{CORAL};margin-bottom:.5rem;display:flex;align-items:center;gap:.4rem")
}
pub const DEBUG_NOTE_ICON: &str = "🐛";
pub fn debug_note_body_style() -> String {
    format!("font-family:{FONT_BODY};font-size:1rem;line-height:1.7;color:{TEXT}")
}

// Stats
pub fn stat_grid_style(columns: usize) -> String {
    format!(
        "display:grid;grid-template-columns:repeat({},1fr);gap:1rem;margin:2rem 0",
        columns.max(1)
    )
}
pub fn stat_card_style() -> String {
    format!("text-align:center;padding:1.4rem 1rem;border-radius:12px;background:rgba(100,220,200,0.04);border:1px solid {BORDER}")
}
pub fn stat_value_style() -> String {
    format!("font-family:{FONT_MONO};font-size:1.9rem;font-weight:700;color:{TEAL};line-height:1;margin-bottom:.4rem")
}
pub fn stat_label_style() -> String {
    format!("font-family:{FONT_BODY};font-size:.82rem;color:{TEXT_DIM}")
}

// Figures
pub fn figure_style(wide: bool) -> String {
    let margin = if wide { "3rem 0" } else { "2.5rem 0" };
    format!("margin:{margin};cursor:zoom-in;border-radius:12px;overflow:hidden;border:1px solid {BORDER};background:rgba(10,15,20,0.7)")
}
pub const FIGURE_IMG_STYLE: &str = "width:100%;display:block;transition:transform .3s";
pub const FIGURE_IMG_HOVER_TRANSFORM: &str = "scale(1.008)";
pub const FIGURE_IMG_REST_TRANSFORM: &str = "scale(1)";
pub fn figcaption_style() -> String {
    format!("padding:14px 20px;font-family:{FONT_BODY};font-size:.88rem;color:{TEXT_DIM};font-style:italic;line-height:1.5;border-top:1px solid rgba(100,220,200,0.06)")
}
pub const OVERLAY_STYLE: &str = "position:fixed;inset:0;z-index:9999;background:rgba(0,0,0,.93);display:flex;align-items:center;justify-content:center;cursor:zoom-out;backdrop-filter:blur(20px)";
pub const OVERLAY_HIDDEN_STYLE: &str = "display:none";
pub const OVERLAY_IMG_STYLE: &str =
    "max-width:94vw;max-height:92vh;border-radius:8px;box-shadow:0 0 80px rgba(100,220,200,.1)";

// Closing
pub const REFERENCES_STYLE: &str =
    "padding:1.8rem;border-radius:12px;background:rgba(100,220,200,0.025);border:1px solid rgba(100,220,200,0.08)";
pub fn references_title_style() -> String {
    format!("font-family:{FONT_MONO};font-size:.68rem;letter-spacing:.15em;text-transform:uppercase;color:rgba(100,220,200,0.45);margin-bottom:.8rem")
}
pub fn references_body_style() -> String {
    format!("font-family:{FONT_BODY};font-size:.9rem;line-height:1.8;color:{TEXT_DIM}")
}
pub fn footer_style() -> String {
    format!("text-align:center;margin-top:3.5rem;font-family:{FONT_MONO};font-size:.68rem;color:rgba(200,215,220,0.18);letter-spacing:.08em")
}
