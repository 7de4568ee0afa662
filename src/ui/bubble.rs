//! Rounded-rectangle speech bubble sized to its wrapped text.

use eframe::egui;

use crate::model::ChatItem;
use crate::ui::theme;

/// Paints one message as a filled rounded rectangle: a small timestamp header
/// on top, the wrapped body below. The bubble allocates exactly the space its
/// wrapped text needs plus padding, never more than `max_width`.
pub struct Bubble<'a> {
    item: &'a ChatItem,
    fill: egui::Color32,
    max_width: f32,
}

impl<'a> Bubble<'a> {
    pub fn new(item: &'a ChatItem, fill: egui::Color32, max_width: f32) -> Self {
        Self {
            item,
            fill,
            max_width,
        }
    }
}

impl egui::Widget for Bubble<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let wrap_width =
            (self.max_width - 2.0 * theme::BUBBLE_PADDING.x).max(theme::MIN_BUBBLE_WIDTH);

        // Wrapped-text bounding boxes; newlines in the body become paragraph
        // breaks in the galley.
        let header = ui.painter().layout(
            self.item.header_text(),
            egui::FontId::proportional(theme::HEADER_FONT_SIZE),
            theme::COLOR_TIMESTAMP,
            wrap_width,
        );
        let body = if self.item.body.is_empty() {
            None
        } else {
            Some(ui.painter().layout(
                self.item.body.clone(),
                egui::FontId::proportional(theme::BODY_FONT_SIZE),
                theme::COLOR_BUBBLE_TEXT,
                wrap_width,
            ))
        };

        let mut text_size = header.size();
        if let Some(body) = &body {
            text_size.x = text_size.x.max(body.size().x);
            text_size.y += theme::HEADER_GAP + body.size().y;
        }

        let desired = text_size + 2.0 * theme::BUBBLE_PADDING;
        let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(
                rect,
                egui::CornerRadius::same(theme::BUBBLE_ROUNDING),
                self.fill,
            );

            let mut pos = rect.min + theme::BUBBLE_PADDING;
            let header_height = header.size().y;
            painter.galley(pos, header, theme::COLOR_TIMESTAMP);
            if let Some(body) = body {
                pos.y += header_height + theme::HEADER_GAP;
                painter.galley(pos, body, theme::COLOR_BUBBLE_TEXT);
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn item(body: &str) -> ChatItem {
        ChatItem::new(
            "me",
            body,
            Local.with_ymd_and_hms(2024, 3, 26, 9, 0, 0).unwrap(),
        )
    }

    fn bubble_rect(body: &str, max_width: f32) -> egui::Rect {
        let ctx = egui::Context::default();
        let mut rect = None;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let item = item(body);
                let response = ui.add(Bubble::new(&item, theme::COLOR_OWN_BUBBLE, max_width));
                rect = Some(response.rect);
            });
        });

        rect.expect("bubble should be rendered")
    }

    #[test]
    fn long_body_wraps_inside_max_width() {
        let rect = bubble_rect(&"lorem ipsum dolor sit amet ".repeat(40), 300.0);
        assert!(
            rect.width() <= 300.0 + 1.0,
            "bubble width {} exceeded max 300",
            rect.width()
        );
    }

    #[test]
    fn newlines_make_the_bubble_taller_not_wider() {
        let single = bubble_rect("alpha beta gamma", 400.0);
        let multi = bubble_rect("alpha\nbeta\ngamma", 400.0);
        assert!(multi.height() > single.height());
        assert!(multi.width() < single.width());
    }

    #[test]
    fn empty_body_still_shows_the_timestamp_header() {
        let rect = bubble_rect("", 400.0);
        assert!(rect.width() > 0.0);
        assert!(rect.height() > 0.0);
    }

    #[test]
    fn short_body_hugs_its_text() {
        let short = bubble_rect("hi", 400.0);
        let long = bubble_rect("a somewhat longer single line", 400.0);
        assert!(short.width() < long.width());
    }
}
