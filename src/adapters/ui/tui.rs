//! Implements InputPort. Inquire-based chat prompt.
//!
//! Plain lines are sent to the assistant; lines starting with `/` are commands.

use crate::adapters::ui::progress;
use crate::domain::{AssistantContext, AssistantReply, DomainError, Language};
use crate::ports::InputPort;
use crate::usecases::AssistantService;
use async_trait::async_trait;
use chrono::Utc;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Confirm, InquireError, Text};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

const HELP: &str = "Commands: /history, /clear, /export [path], /help, /quit";

/// Apply the prompt theme globally.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightMagenta))
        .with_answered_prompt_prefix(Styled::new("✓").with_fg(Color::LightYellow));
    inquire::set_global_render_config(config);
}

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ask(String),
    History,
    Clear,
    Export(Option<PathBuf>),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let Some(rest) = line.strip_prefix('/') else {
            return Some(Command::Ask(line.to_string()));
        };
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        Some(match name.to_lowercase().as_str() {
            "history" => Command::History,
            "clear" => Command::Clear,
            "export" => Command::Export((!arg.is_empty()).then(|| PathBuf::from(arg))),
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Help,
        })
    }
}

/// Render a reply as terminal text: answer, numbered cards, follow-ups.
pub fn render_reply(reply: &AssistantReply) -> String {
    let mut out = String::new();
    out.push_str(&reply.answer);
    out.push('\n');
    for (i, card) in reply.recommendations.iter().enumerate() {
        out.push_str(&format!(
            "  {}. [{}] {} · {}",
            i + 1,
            card.kind,
            card.title,
            card.subtitle
        ));
        if let Some(reason) = &card.reason {
            out.push_str(&format!(" ({})", reason));
        }
        out.push('\n');
    }
    if !reply.suggestions.is_empty() {
        out.push_str(&format!("Try: {}\n", reply.suggestions.join(" | ")));
    }
    out
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    assistant: Arc<AssistantService>,
    language: Language,
    export_dir: PathBuf,
}

impl TuiInputPort {
    pub fn new(assistant: Arc<AssistantService>, language: Language, export_dir: PathBuf) -> Self {
        Self {
            assistant,
            language,
            export_dir,
        }
    }

    fn default_export_path(&self) -> PathBuf {
        self.export_dir
            .join(format!("history-{}.csv", Utc::now().format("%Y%m%d-%H%M%S")))
    }

    async fn show_history(&self) -> Result<(), DomainError> {
        let entries = self.assistant.history().await?;
        if entries.is_empty() {
            println!("No conversation history yet.");
            return Ok(());
        }
        for entry in &entries {
            println!("[{}] {} → {}", entry.intent, entry.query, entry.answer);
        }
        Ok(())
    }

    async fn clear_history(&self) -> Result<(), DomainError> {
        let confirmed = Confirm::new("Clear all conversation history?")
            .with_default(false)
            .prompt()
            .map_err(|e| DomainError::Input(e.to_string()))?;
        if confirmed {
            self.assistant.clear_history().await?;
            println!("History cleared.");
        }
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let greeting = AssistantService::get_greetings(self.language);
        let mut context = AssistantContext {
            language: self.language,
            ..AssistantContext::default()
        };
        println!("{}\nTry: {}\n{}", greeting.message, greeting.suggestions.join(" | "), HELP);

        loop {
            let line = match Text::new("You:").prompt() {
                Ok(line) => line,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(e) => return Err(DomainError::Input(e.to_string())),
            };

            match Command::parse(&line) {
                None => continue,
                Some(Command::Quit) => break,
                Some(Command::Help) => println!("{}", HELP),
                Some(Command::History) => self.show_history().await?,
                Some(Command::Clear) => self.clear_history().await?,
                Some(Command::Export(path)) => {
                    let path = path.unwrap_or_else(|| self.default_export_path());
                    match self.assistant.export_history(&path).await {
                        Ok((count, format)) => {
                            println!("Exported {} entries ({:?}) to {}", count, format, path.display())
                        }
                        Err(e) => println!("Export failed: {}", e),
                    }
                }
                Some(Command::Ask(query)) => {
                    let pb = progress::spinner("Searching the catalog...");
                    let reply = self.assistant.get_ai_answer(&query, &context).await;
                    pb.finish_and_clear();
                    print!("{}", render_reply(&reply));
                    if let Some(memory) = reply.memory_update {
                        context.memory = memory;
                    }
                }
            }
        }

        info!("session ended");
        Ok(())
    }
}
