use anyhow::Result;
use clap::Parser;

use jokko_cli::cli::commands::{chat, configure, phrases, translate};
use jokko_cli::cli::{Args, Command};
use jokko_cli::output::{self, OutputConfig};
use jokko_cli::translation::print_languages;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    output::init_logging(args.verbose);

    match args.command {
        Some(Command::Chat {
            from,
            latency_ms,
            no_clipboard,
        }) => {
            let options = chat::ChatOptions {
                from,
                latency_ms,
                no_clipboard,
            };
            chat::run_chat(options).await?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Phrases { from }) => {
            phrases::print_phrases(from.as_deref())?;
        }
        None => {
            let options = translate::TranslateOptions {
                text: args.text,
                from: args.from,
                json: args.json,
            };
            translate::run_translate(&options)?;
        }
    }

    Ok(())
}
