use std::io::{BufRead, Write};

use anyhow::Result;
use cimreader_application::ChatSession;
use cimreader_core::ChatMessage;
use tokio_util::sync::CancellationToken;

use super::surface;
use crate::context::AppContext;

pub async fn run(ctx: &AppContext, document_id: String, title: Option<String>) -> Result<()> {
    let session = ChatSession::new(
        ctx.gateway.clone(),
        ctx.sessions.clone(),
        ctx.notifier.clone(),
        Some(document_id),
        title.as_deref(),
    );
    run_loop(&session).await
}

/// Interactive question loop. Ends on EOF, `exit`, or `quit`.
pub async fn run_loop(session: &ChatSession) -> Result<()> {
    for turn in session.transcript() {
        print_turn(&turn);
    }
    println!("Type a question about the document ('exit' to quit).");

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question == "exit" || question == "quit" {
            break;
        }

        let before = session.transcript().len();
        match session.send(question, &CancellationToken::new()).await {
            Ok(()) => {
                // The answer is the turn appended after the question.
                if let Some(turn) = session.transcript().get(before + 1) {
                    print_turn(turn);
                }
            }
            Err(err) if err.is_unauthenticated() => return Err(surface(err)),
            // Request failures were already surfaced as a notice; the user
            // can re-ask explicitly.
            Err(_) => {}
        }
    }

    Ok(())
}

fn print_turn(turn: &ChatMessage) {
    let speaker = if turn.is_user() { "you" } else { "assistant" };
    println!("{speaker}: {}", turn.content);
}
