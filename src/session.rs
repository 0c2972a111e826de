use crate::agent::Agent;
use crate::backend::ChatBackend;
use std::future::Future;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Words that end an interactive session, matched case-insensitively
pub const EXIT_COMMANDS: [&str; 3] = ["exit", "quit", "q"];

/// State of an interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Terminated,
}

/// What a single input line asks the session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line, re-prompt
    Skip,
    Exit,
    Ask(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            Command::Skip
        } else if EXIT_COMMANDS.iter().any(|c| line.eq_ignore_ascii_case(c)) {
            Command::Exit
        } else {
            Command::Ask(line.to_string())
        }
    }
}

/// Line-oriented read/eval loop over an agent
pub struct Session<'a, B> {
    agent: &'a Agent<B>,
    state: SessionState,
    dispatched: usize,
}

impl<'a, B: ChatBackend> Session<'a, B> {
    pub fn new(agent: &'a Agent<B>) -> Self {
        Self {
            agent,
            state: SessionState::AwaitingInput,
            dispatched: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of questions sent to the agent so far
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    /// Handles one input line; returns the text to print, if any
    pub async fn step(&mut self, line: &str) -> Option<String> {
        if self.state == SessionState::Terminated {
            return None;
        }

        match Command::parse(line) {
            Command::Skip => None,
            Command::Exit => {
                self.state = SessionState::Terminated;
                Some("Goodbye! 👋".to_string())
            }
            Command::Ask(question) => {
                self.dispatched += 1;
                Some(self.agent.ask_text(&question).await)
            }
        }
    }

    /// Moves to `Terminated` without reading further input
    pub fn interrupt(&mut self) {
        self.state = SessionState::Terminated;
    }

    /// Runs until an exit command, end of input or the `interrupt` future completes.
    ///
    /// I/O errors on a single turn are reported and the loop continues.
    pub async fn run<R, W, I>(&mut self, input: R, mut output: W, interrupt: I) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        I: Future,
    {
        let mut lines = input.lines();
        tokio::pin!(interrupt);

        while self.state == SessionState::AwaitingInput {
            output.write_all("\n🧠 Your question: ".as_bytes()).await?;
            output.flush().await?;

            let next = tokio::select! {
                _ = &mut interrupt => {
                    self.interrupt();
                    output.write_all("\n\nGoodbye! 👋\n".as_bytes()).await?;
                    break;
                }
                next = lines.next_line() => next,
            };

            let line = match next {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.interrupt();
                    output.write_all("\nGoodbye! 👋\n".as_bytes()).await?;
                    break;
                }
                Err(e) => {
                    ::log::error!("Failed to read input: {}", e);
                    output.write_all(format!("❌ Error: {}\n", e).as_bytes()).await?;
                    continue;
                }
            };

            if let Command::Ask(_) = Command::parse(&line) {
                output.write_all("\n🔍 Analyzing complete content...\n".as_bytes()).await?;
                output.flush().await?;
            }

            let reply = tokio::select! {
                _ = &mut interrupt => {
                    self.interrupt();
                    output.write_all("\n\nGoodbye! 👋\n".as_bytes()).await?;
                    break;
                }
                reply = self.step(&line) => reply,
            };

            match (reply, self.state) {
                (Some(text), SessionState::Terminated) => {
                    output.write_all(format!("{}\n", text).as_bytes()).await?;
                }
                (Some(text), SessionState::AwaitingInput) => {
                    output
                        .write_all(format!("\n🤖 Agent response:\n{}\n", text).as_bytes())
                        .await?;
                }
                (None, _) => {}
            }
        }

        output.flush().await
    }
}
