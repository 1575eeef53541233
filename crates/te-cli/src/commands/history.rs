use te_bot::Sender;

use super::Context;

pub fn run(ctx: &Context, user: &str, name: &str) -> Result<(), String> {
    let bot = super::open_bot(ctx, "")?;
    let reply = bot
        .history(&Sender::new(user, name))
        .map_err(|e| e.to_string())?;
    super::deliver(ctx, &reply)
}
