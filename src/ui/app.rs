//! eframe shell for the demo: transcript on top, input bar below.

use eframe::egui;

use crate::model::ChatItem;
use crate::ui::scroll_chat::ScrollChat;

pub struct ChatApp {
    chat: ScrollChat,
    input: String,
}

impl ChatApp {
    pub fn new(chat: ScrollChat) -> Self {
        Self {
            chat,
            input: String::new(),
        }
    }

    /// Appends the typed text as an own-user message stamped now.
    fn submit_input(&mut self) {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return;
        }
        let sender = self.chat.own_user().to_string();
        self.chat.add_chat_item(ChatItem::now(sender, text));
        self.input.clear();
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("input_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.input)
                        .hint_text("Type a message...")
                        .desired_width(ui.available_width() - 70.0),
                );

                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.submit_input();
                    response.request_focus();
                }

                if ui.button("Send").clicked() {
                    self.submit_input();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chat.show(ui);
        });
    }
}
