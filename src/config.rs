use clap::Parser;
use eframe::egui::Color32;

use crate::ui::theme::parse_hex_color;

#[derive(Parser, Debug, Clone)]
#[command(name = "scrollchat", about = "Speech-bubble chat transcript demo")]
pub struct Config {
    /// Your username; your messages align right.
    #[arg(long, env = "SCROLLCHAT_USER", default_value = "me")]
    pub user: String,

    /// Minimum width of the chat area, in points.
    #[arg(long, default_value_t = 400.0)]
    pub min_width: f32,

    /// Bubble color for senders without an explicit override.
    #[arg(long, default_value = "#a5d6a7", value_parser = parse_hex_color)]
    pub other_color: Color32,

    /// Per-sender bubble color override, e.g. --color alice=#ffcc80. Repeatable.
    #[arg(long = "color", value_parser = parse_sender_color)]
    pub colors: Vec<(String, Color32)>,

    /// Start with an empty transcript instead of the demo conversation.
    #[arg(long, default_value_t = false)]
    pub no_seed: bool,
}

fn parse_sender_color(s: &str) -> Result<(String, Color32), String> {
    let (name, hex) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=#RRGGBB, got {s:?}"))?;
    if name.is_empty() {
        return Err(format!("expected NAME=#RRGGBB, got {s:?}"));
    }
    Ok((name.to_string(), parse_hex_color(hex)?))
}
