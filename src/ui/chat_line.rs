//! One transcript row: a bubble on the left or right, flexible space opposite.

use eframe::egui;

use crate::model::ChatItem;
use crate::ui::bubble::Bubble;
use crate::ui::theme;

/// Per-message row spec, resolved once when the message enters the
/// transcript: which side it sits on and what color its bubble is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChatLine {
    pub color: egui::Color32,
    pub left: bool,
}

impl ChatLine {
    /// Renders the row across the full available width. The unused width on
    /// the other side of the bubble is the flexible spacer; the bubble itself
    /// may grow to the row width minus the spacer reserve. Returns the bubble
    /// rect.
    pub fn show(&self, ui: &mut egui::Ui, item: &ChatItem) -> egui::Rect {
        let mut bubble_rect = egui::Rect::NOTHING;

        ui.horizontal(|ui| {
            ui.set_width(ui.available_width());
            let max_width =
                (ui.available_width() - theme::SPACER_RESERVE).max(theme::MIN_BUBBLE_WIDTH);
            let row_layout = if self.left {
                egui::Layout::left_to_right(egui::Align::TOP)
            } else {
                egui::Layout::right_to_left(egui::Align::TOP)
            };
            ui.with_layout(row_layout, |ui| {
                bubble_rect = ui.add(Bubble::new(item, self.color, max_width)).rect;
            });
        });

        bubble_rect
    }
}
