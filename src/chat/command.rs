use inquire::autocompletion::{Autocomplete, Replacement};

use super::message::MessageId;

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show session settings"),
    ("/copy", "Copy a reply to the clipboard"),
    ("/help", "Show available commands"),
    ("/history", "Show the conversation"),
    ("/quit", "Exit chat mode"),
    ("/reset", "Clear the conversation"),
    ("/swap", "Switch translation direction"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        Ok(SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        Ok(highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    /// Copy the given reply, or the latest one.
    Copy(Option<MessageId>),
    Help,
    History,
    Quit,
    Reset,
    Swap,
    Unknown(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// Text to translate, exactly as typed.
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Input::Empty;
    }

    // Text keeps its surrounding whitespace; the conversation decides what to do with it.
    trimmed
        .strip_prefix('/')
        .map_or_else(|| Input::Text(line.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    let command = match parts.as_slice() {
        ["config"] => SlashCommand::Config,
        ["copy"] => SlashCommand::Copy(None),
        ["copy", id] => match parse_message_id(id) {
            Some(id) => SlashCommand::Copy(Some(id)),
            None => SlashCommand::Unknown(parts.join(" ")),
        },
        ["help"] => SlashCommand::Help,
        ["history"] => SlashCommand::History,
        ["quit" | "exit" | "q"] => SlashCommand::Quit,
        ["reset" | "clear"] => SlashCommand::Reset,
        ["swap"] => SlashCommand::Swap,
        _ => SlashCommand::Unknown(parts.join(" ")),
    };
    Input::Command(command)
}

fn parse_message_id(s: &str) -> Option<MessageId> {
    s.trim_start_matches('#').parse().ok().map(MessageId)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_input(""), Input::Empty);
        assert_eq!(parse_input("   "), Input::Empty);
    }

    #[test]
    fn test_parse_text_input_keeps_original() {
        assert_eq!(
            parse_input(" Comment allez-vous "),
            Input::Text(" Comment allez-vous ".to_string())
        );
    }

    #[test]
    fn test_parse_swap_and_reset() {
        assert_eq!(parse_input("/swap"), Input::Command(SlashCommand::Swap));
        assert_eq!(parse_input("/reset"), Input::Command(SlashCommand::Reset));
        assert_eq!(parse_input("/clear"), Input::Command(SlashCommand::Reset));
    }

    #[test]
    fn test_parse_copy() {
        assert_eq!(parse_input("/copy"), Input::Command(SlashCommand::Copy(None)));
        assert_eq!(
            parse_input("/copy 4"),
            Input::Command(SlashCommand::Copy(Some(MessageId(4))))
        );
        assert_eq!(
            parse_input("/copy #12"),
            Input::Command(SlashCommand::Copy(Some(MessageId(12))))
        );
        assert_eq!(
            parse_input("/copy last"),
            Input::Command(SlashCommand::Unknown("copy last".to_string()))
        );
    }

    #[test]
    fn test_parse_quit_commands() {
        for line in ["/quit", "/exit", "/q"] {
            assert_eq!(parse_input(line), Input::Command(SlashCommand::Quit));
        }
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_input("/unknown"),
            Input::Command(SlashCommand::Unknown("unknown".to_string()))
        );
    }

    // SlashCommandCompleter tests

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        assert!(completer.get_suggestions("bonjour").unwrap().is_empty());
    }

    #[test]
    fn test_completer_suggestions_for_slash() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), SLASH_COMMANDS.len());
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = SlashCommandCompleter;

        let suggestions = completer.get_suggestions("/s").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/swap"));

        let suggestions = completer.get_suggestions("/h").unwrap();
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/reset  Clear the conversation".to_string();
        let completion = completer.get_completion("/r", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/reset".to_string()));
    }

    #[test]
    fn test_completer_completion_none() {
        let mut completer = SlashCommandCompleter;
        assert!(completer.get_completion("/x", None).unwrap().is_none());
    }
}
