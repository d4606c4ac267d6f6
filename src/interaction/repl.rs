//! Interactive chat loop on stdin/stdout.

use std::io::Write;

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    sync::broadcast::error::RecvError,
};
use tracing::{info, instrument, warn};

use crate::base::{
    responses,
    types::{Author, Void},
};

use super::{render, session::ChatSession};

/// What a line typed at the prompt asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplInput<'a> {
    /// Leave the chat.
    Quit,
    /// Submit text to the session (may still be blank; the session ignores that).
    Submit(&'a str),
    /// An unknown `/` command.
    Unknown(&'a str),
}

/// Interpret one line of input.
///
/// `/1`..`/n` pick a quick action; `/quit` and `/exit` leave.
pub fn parse_line(line: &str) -> ReplInput<'_> {
    let trimmed = line.trim();

    let Some(command) = trimmed.strip_prefix('/') else {
        return ReplInput::Submit(line);
    };

    match command {
        "quit" | "exit" => ReplInput::Quit,
        _ => match command.parse::<usize>() {
            Ok(n) if (1..=responses::QUICK_ACTIONS.len()).contains(&n) => ReplInput::Submit(responses::QUICK_ACTIONS[n - 1].1),
            _ => ReplInput::Unknown(trimmed),
        },
    }
}

/// Run the chat on the terminal.
pub async fn run(session: ChatSession) -> Void {
    run_with(session, BufReader::new(tokio::io::stdin()), std::io::stdout()).await
}

/// Run the chat over any line source and sink.
///
/// Ends on `/quit`, Ctrl-C, or once input has closed and every pending reply
/// has been printed. Dropping the session on return abandons anything still in flight.
#[instrument(skip_all)]
pub async fn run_with<R, W>(mut session: ChatSession, input: R, mut out: W) -> Void
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut updates = session.subscribe();

    for message in session.messages().await {
        writeln!(out, "{}", render::message_line(&message))?;
    }

    writeln!(out)?;
    for (i, (label, text)) in responses::QUICK_ACTIONS.iter().enumerate() {
        writeln!(out, "  /{} {label}: \"{text}\"", i + 1)?;
    }
    writeln!(out, "  /quit to leave. {}", responses::EMERGENCY_CONTACT)?;
    writeln!(out)?;

    let mut lines = input.lines();
    let mut reading = true;
    // Replies submitted here but not yet printed.
    let mut awaiting = 0usize;

    loop {
        if !reading && awaiting == 0 {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if reading => {
                let Some(line) = line? else {
                    info!("Input closed; waiting for {} pending reply(ies).", awaiting);
                    reading = false;
                    continue;
                };

                match parse_line(&line) {
                    ReplInput::Quit => break,
                    ReplInput::Submit(text) => {
                        if session.submit(text).await {
                            awaiting += 1;
                        }
                    }
                    ReplInput::Unknown(command) => writeln!(out, "Unknown command `{command}`.")?,
                }
            }
            update = updates.recv() => match update {
                Ok(message) => {
                    if message.author() == Author::Assistant {
                        awaiting = awaiting.saturating_sub(1);
                    }

                    writeln!(out, "{}", render::message_line(&message))?;
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Skipped {} messages.", skipped);
                    awaiting = session.pending_replies();
                }
                Err(RecvError::Closed) => break,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted.");
                break;
            }
        }
    }

    if session.pending_replies() > 0 {
        info!("Leaving with {} reply(ies) still pending.", session.pending_replies());
    }

    Ok(())
}

// Tests.
