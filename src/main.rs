use anyhow::{anyhow, Result};
use chrono::Local;
use clap::Parser;
use eframe::egui;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use scrollchat::config::Config;
use scrollchat::ui::{theme, ChatApp};
use scrollchat::{ChatItem, ChatResult, Palette, ScrollChat};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cfg = Config::parse();

    let mut palette = Palette::default_for(&cfg.user).with_fallback(cfg.other_color);
    for (name, color) in &cfg.colors {
        palette = palette.with_sender(name.clone(), *color);
    }

    let mut chat = ScrollChat::new(cfg.user.clone())
        .with_min_width(cfg.min_width)
        .with_palette(palette);

    if !cfg.no_seed {
        seed_demo(&mut chat)?;
    }
    info!(user = %cfg.user, lines = chat.len(), "starting chat window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cfg.min_width + 80.0, 640.0])
            .with_min_inner_size([cfg.min_width, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "scrollchat",
        options,
        Box::new(move |cc| {
            theme::apply_theme(&cc.egui_ctx);
            Ok(Box::new(ChatApp::new(chat)))
        }),
    )
    .map_err(|err| anyhow!("chat window terminated: {err}"))
}

/// Seeds the transcript with a short two-person conversation, including one
/// message that is added and then removed again.
fn seed_demo(chat: &mut ScrollChat) -> ChatResult<()> {
    let me = chat.own_user().to_string();

    chat.add_chat_item(ChatItem::new(
        &me,
        "this is a test message\nwith a newline",
        Local::now(),
    ));
    chat.add_chat_item(ChatItem::new(
        "other",
        "Other person's message",
        Local::now(),
    ));
    chat.add_chat_item(ChatItem::new(&me, "this is a test message", Local::now()));

    let removed = ChatItem::new(
        "other",
        "Other person's message, should be removed",
        Local::now(),
    );
    chat.add_chat_item(removed.clone());

    chat.add_chat_item(ChatItem::new(
        &me,
        "Right longer message sas df asdf asdf asd fasdf asd fasdfa s \
         df asd fasdf as dfsdf asdfide this is the end",
        Local::now(),
    ));
    chat.add_chat_item(ChatItem::new(
        "other",
        "Other long message Lorem ipsum dolor sit amet, consectetur \
         adipiscing elit, sed do eiusmod tempor incididunt ut labore \n \
         et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
         exercitation ullamco laboris nisi ut aliquip ex ea commodo \
         consequat. Duis aute irure dolor in reprehenderit in voluptate \
         velit esse \ncillum dolore eu fugiat nulla pariatur. Excepteur \
         sint occaecat cupidatat non proident, sunt in culpa qui officia \
         deserunt mollit anim id est laborum. \n \n \n End of longboy",
        Local::now(),
    ));

    chat.remove_chat_item(&removed)?;
    Ok(())
}
