//! The scrolling transcript container and its display-map bookkeeping.

use eframe::egui;
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::error::{ChatError, ChatResult};
use crate::model::ChatItem;
use crate::ui::chat_line::ChatLine;
use crate::ui::theme::{self, Palette};

/// A vertically scrolling chat transcript. Messages are keyed by value
/// identity in an insertion-ordered map; each maps to the row spec resolved
/// when it was added. Rendering replays the map in visit order every frame.
pub struct ScrollChat {
    own_user: String,
    palette: Palette,
    min_width: f32,
    lines: IndexMap<ChatItem, ChatLine>,
}

impl ScrollChat {
    /// `own_user` is the name whose messages align right; everyone else
    /// aligns left.
    pub fn new(own_user: impl Into<String>) -> Self {
        let own_user = own_user.into();
        let palette = Palette::default_for(&own_user);
        Self {
            own_user,
            palette,
            min_width: theme::MIN_CHAT_WIDTH,
            lines: IndexMap::new(),
        }
    }

    pub fn with_min_width(mut self, min_width: f32) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn own_user(&self) -> &str {
        &self.own_user
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Messages in visit order.
    pub fn items(&self) -> impl Iterator<Item = &ChatItem> {
        self.lines.keys()
    }

    /// Appends a message. Side and color are resolved here, once. Re-adding
    /// an equal message replaces its row spec in place without growing the
    /// map.
    pub fn add_chat_item(&mut self, item: ChatItem) {
        let line = ChatLine {
            color: self.palette.color_for(&item.sender),
            left: item.sender != self.own_user,
        };
        debug!(sender = %item.sender, left = line.left, "chat line added");
        self.lines.insert(item, line);
    }

    /// Removes exactly this message's row; the visit order of the remaining
    /// rows is preserved.
    pub fn remove_chat_item(&mut self, item: &ChatItem) -> ChatResult<()> {
        self.lines
            .shift_remove(item)
            .ok_or(ChatError::NotFound)?;
        debug!(sender = %item.sender, "chat line removed");
        Ok(())
    }

    /// Empties the transcript by repeatedly removing the first entry. Aborts
    /// if the loop runs more than two iterations past the starting size,
    /// which would mean the map is not shrinking.
    pub fn clear_chat(&mut self) -> ChatResult<()> {
        let start_len = self.lines.len();
        let mut iterations = 0usize;
        while !self.lines.is_empty() {
            if iterations > start_len + 2 {
                return Err(ChatError::IterationGuard {
                    iterations,
                    start_len,
                });
            }
            if let Some(item) = self.lines.keys().next().cloned() {
                self.remove_chat_item(&item)?;
            }
            iterations += 1;
        }
        info!(removed = start_len, "transcript cleared");
        Ok(())
    }

    /// Renders every line in visit order inside a vertical scroll area that
    /// keeps its scrollbar visible and sticks to the newest message.
    pub fn show(&self, ui: &mut egui::Ui) {
        ui.set_min_width(self.min_width);
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysVisible)
            .show(ui, |ui| {
                ui.set_min_width(self.min_width);
                for (item, line) in &self.lines {
                    line.show(ui, item);
                    ui.add_space(theme::LINE_SPACING);
                }
            });
    }
}
