use te_bot::{RollRequest, Sender};

use super::Context;

pub fn run(ctx: &Context, user: &str, name: &str, text: &[String]) -> Result<(), String> {
    let bot = super::open_bot(ctx, "")?;
    let request = RollRequest::parse(&text.join(" "));
    let reply = bot
        .roll(&Sender::new(user, name), request)
        .map_err(|e| e.to_string())?;
    super::deliver(ctx, &reply)
}
