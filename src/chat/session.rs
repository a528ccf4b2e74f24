use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::clipboard::{DisabledClipboard, SystemClipboard};
use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::controller::{ChatController, CopyOutcome, SessionConfig, Submission};
use super::conversation::IgnoreReason;
use super::message::MessageId;
use super::ui::{self, TerminalRenderer};
use crate::translation::LookupEngine;
use crate::ui::Style;

/// An interactive chat session for translation.
///
/// Provides a REPL-style interface around a [`ChatController`].
pub struct ChatSession {
    config: SessionConfig,
    controller: ChatController,
}

impl ChatSession {
    /// Creates a new chat session with the given configuration.
    pub fn new(engine: LookupEngine, config: SessionConfig) -> Self {
        let controller =
            ChatController::new(engine, &config).with_observer(TerminalRenderer::default());
        let controller = if config.clipboard {
            controller.with_clipboard(SystemClipboard)
        } else {
            controller.with_clipboard(DisabledClipboard)
        };
        Self { config, controller }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config);
        ui::print_history(self.controller.conversation());

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let placeholder = format!(
                "Tapez votre texte en {}...",
                self.controller.conversation().direction().source.adjective()
            );
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_placeholder(&placeholder)
                .with_help_message("Enter to translate, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => self.translate(&text).await,
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => ui::print_config(&self.config, self.controller.conversation()),
            SlashCommand::Copy(id) => self.copy(id),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::History => ui::print_history(self.controller.conversation()),
            SlashCommand::Quit => return false,
            SlashCommand::Reset => self.controller.reset(),
            SlashCommand::Swap => {
                self.controller.toggle_direction();
            }
            SlashCommand::Unknown(cmd) => ui::print_error(&format!("Unknown command: /{cmd}")),
        }
        true
    }

    async fn translate(&mut self, text: &str) {
        match self.controller.submit(text) {
            Submission::Accepted(_) => {
                self.controller.wait_for_reply().await;
            }
            // The prompt is modal, so a pending reply cannot normally be observed here
            Submission::Ignored(IgnoreReason::Busy) => {
                ui::print_error("A translation is already in progress");
            }
            Submission::Ignored(IgnoreReason::EmptyInput) => {}
        }
    }

    fn copy(&mut self, id: Option<MessageId>) {
        let Some(id) = id.or_else(|| self.controller.conversation().last_reply().map(|m| m.id))
        else {
            ui::print_error("Nothing to copy yet");
            return;
        };

        match self.controller.copy(id) {
            CopyOutcome::Copied => {
                println!("{} Copied {}", Style::success("✓"), Style::secondary(id));
                println!();
            }
            CopyOutcome::Unavailable => {
                ui::print_error(&format!("No reply {id} to copy"));
            }
            CopyOutcome::Failed => {
                ui::print_error("Could not copy to the clipboard");
            }
        }
    }
}
