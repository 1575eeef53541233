use std::io::{self, BufRead, Write};

use colored::Colorize;

use te_bot::Sender;

use super::Context;

pub fn run(ctx: &Context, user: &str, name: &str, prefix: &str) -> Result<(), String> {
    let bot = super::open_bot(ctx, prefix)?;
    let sender = Sender::new(user, name);

    println!("  {} as {name} ({user})", "Chatting".bold());
    println!("  Try '{prefix}梭哈5次' or '{prefix}梭哈结果'. Ctrl-D to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match bot.process(&sender, input) {
            Ok(reply) => super::deliver(ctx, &reply)?,
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    Ok(())
}
