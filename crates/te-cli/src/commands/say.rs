use te_bot::{Reply, Sender};

use super::Context;

pub fn run(ctx: &Context, user: &str, name: &str, prefix: &str, text: &str) -> Result<(), String> {
    let bot = super::open_bot(ctx, prefix)?;
    let reply = bot
        .process(&Sender::new(user, name), text)
        .map_err(|e| e.to_string())?;
    if matches!(reply, Reply::Ignored) {
        log::info!("not a command: {text}");
    }
    super::deliver(ctx, &reply)
}
