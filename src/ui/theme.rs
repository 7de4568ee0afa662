//! Visual constants, the sender color map, and theme application.

use std::collections::HashMap;

use eframe::egui;
use eframe::egui::Color32;

// Dark chrome around the pastel bubbles.
pub const COLOR_BG: Color32 = Color32::from_rgb(30, 31, 34);
pub const COLOR_BG_INPUT: Color32 = Color32::from_rgb(64, 68, 75);
pub const COLOR_TEXT: Color32 = Color32::from_rgb(219, 222, 225);

// Bubble colors; text inside bubbles is dark since the fills are light.
pub const COLOR_OWN_BUBBLE: Color32 = Color32::from_rgb(0x90, 0xca, 0xf9);
pub const COLOR_OTHER_BUBBLE: Color32 = Color32::from_rgb(0xa5, 0xd6, 0xa7);
pub const COLOR_BUBBLE_TEXT: Color32 = Color32::from_rgb(24, 26, 28);
pub const COLOR_TIMESTAMP: Color32 = Color32::from_black_alpha(128);

// Bubble geometry.
pub const BUBBLE_PADDING: egui::Vec2 = egui::Vec2::new(15.0, 5.0);
pub const BUBBLE_ROUNDING: u8 = 10;
pub const HEADER_GAP: f32 = 4.0;
pub const HEADER_FONT_SIZE: f32 = 10.0;
pub const BODY_FONT_SIZE: f32 = 14.0;
pub const MIN_BUBBLE_WIDTH: f32 = 80.0;

// Transcript layout.
pub const MIN_CHAT_WIDTH: f32 = 400.0;
pub const SPACER_RESERVE: f32 = 50.0;
pub const LINE_SPACING: f32 = 5.0;

/// Sender → bubble color, with a fallback for senders without an entry.
#[derive(Clone, Debug)]
pub struct Palette {
    senders: HashMap<String, Color32>,
    fallback: Color32,
}

impl Palette {
    /// Default palette: the owning user gets the blue bubble, everyone else
    /// the fallback green.
    pub fn default_for(own_user: &str) -> Self {
        let mut senders = HashMap::new();
        senders.insert(own_user.to_string(), COLOR_OWN_BUBBLE);
        Self {
            senders,
            fallback: COLOR_OTHER_BUBBLE,
        }
    }

    pub fn with_sender(mut self, name: impl Into<String>, color: Color32) -> Self {
        self.senders.insert(name.into(), color);
        self
    }

    pub fn with_fallback(mut self, color: Color32) -> Self {
        self.fallback = color;
        self
    }

    pub fn color_for(&self, sender: &str) -> Color32 {
        self.senders.get(sender).copied().unwrap_or(self.fallback)
    }
}

pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let v = &mut style.visuals;
    v.dark_mode = true;
    v.override_text_color = Some(COLOR_TEXT);
    v.panel_fill = COLOR_BG;
    v.window_fill = COLOR_BG;
    v.extreme_bg_color = COLOR_BG_INPUT;

    style.spacing.item_spacing = egui::vec2(8.0, 4.0);

    ctx.set_style(style);
}

/// Parses `#RRGGBB` into a color. Used by the CLI's color arguments.
pub fn parse_hex_color(s: &str) -> Result<Color32, String> {
    let hex = s
        .strip_prefix('#')
        .ok_or_else(|| format!("expected #RRGGBB, got {s:?}"))?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("expected #RRGGBB, got {s:?}"));
    }
    let byte = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|e| e.to_string())
    };
    Ok(Color32::from_rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_resolves_override_then_fallback() {
        let palette = Palette::default_for("me")
            .with_sender("alice", Color32::from_rgb(0xff, 0xcc, 0x80));

        assert_eq!(palette.color_for("me"), COLOR_OWN_BUBBLE);
        assert_eq!(
            palette.color_for("alice"),
            Color32::from_rgb(0xff, 0xcc, 0x80)
        );
        assert_eq!(palette.color_for("stranger"), COLOR_OTHER_BUBBLE);
    }

    #[test]
    fn custom_fallback_applies_to_unknown_senders_only() {
        let palette = Palette::default_for("me").with_fallback(Color32::WHITE);
        assert_eq!(palette.color_for("me"), COLOR_OWN_BUBBLE);
        assert_eq!(palette.color_for("bob"), Color32::WHITE);
    }

    #[test]
    fn parse_hex_color_accepts_rrggbb() {
        assert_eq!(
            parse_hex_color("#90caf9"),
            Ok(Color32::from_rgb(0x90, 0xca, 0xf9))
        );
        assert_eq!(
            parse_hex_color("#A5D6A7"),
            Ok(Color32::from_rgb(0xa5, 0xd6, 0xa7))
        );
    }

    #[test]
    fn parse_hex_color_rejects_bad_input() {
        assert!(parse_hex_color("90caf9").is_err());
        assert!(parse_hex_color("#90caf").is_err());
        assert!(parse_hex_color("#90caf9ff").is_err());
        assert!(parse_hex_color("#zzzzzz").is_err());
    }
}
