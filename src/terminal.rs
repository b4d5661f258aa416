//! Line-oriented front end for the translation view.
//!
//! Plain lines replace the draft; lines starting with `/` are commands.

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::view::{render_view, CompletionOutcome, ViewController};

const HELP: &str = "\
Type text to set the draft.
  /append <text>  add a line to the draft
  /mode           toggle multi-language / single-language
  /lang <CODE>    pick the single-language target (no code clears it)
  /langs          list languages
  /send           translate & analyze
  /cancel         abandon the running request
  /show           redraw
  /health         ping the translation service
  /quit           exit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Edit(String),
    Append(String),
    ToggleMode,
    Select(Option<String>),
    Languages,
    Send,
    Cancel,
    Show,
    Health,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let Some(rest) = line.strip_prefix('/') else {
            return Command::Edit(line.to_string());
        };
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        match name {
            "append" => Command::Append(arg.to_string()),
            "mode" => Command::ToggleMode,
            "lang" if arg.is_empty() => Command::Select(None),
            "lang" => Command::Select(Some(arg.to_string())),
            "langs" => Command::Languages,
            "send" => Command::Send,
            "cancel" => Command::Cancel,
            "show" => Command::Show,
            "health" => Command::Health,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(name.to_string()),
        }
    }
}

/// Run the console until `/quit` or end of input.
///
/// At end of input a request still in flight is awaited so its result is
/// printed before returning.
pub async fn run<R, W>(controller: &mut ViewController, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    writer.write_all(render_view(controller.view()).as_bytes()).await?;
    writer.flush().await?;

    loop {
        let busy = controller.is_busy();
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let command = Command::parse(&line);
                debug!("Command: {:?}", command);
                if command == Command::Quit {
                    return Ok(());
                }
                let output = handle_command(controller, command).await;
                writer.write_all(output.as_bytes()).await?;
            }
            completion = controller.next_completion(), if busy => {
                if let Some((_, outcome)) = completion {
                    writer.write_all(completion_screen(controller, &outcome).as_bytes()).await?;
                }
            }
        }
        writer.flush().await?;
    }

    if let Some((_, outcome)) = controller.next_completion().await {
        writer.write_all(completion_screen(controller, &outcome).as_bytes()).await?;
        writer.flush().await?;
    }
    Ok(())
}

async fn handle_command(controller: &mut ViewController, command: Command) -> String {
    match command {
        Command::Edit(text) => {
            controller.view_mut().edit_text(text);
            String::new()
        }
        Command::Append(text) => {
            let view = controller.view_mut();
            let draft = if view.draft().is_empty() {
                text
            } else {
                format!("{}\n{}", view.draft(), text)
            };
            view.edit_text(draft);
            String::new()
        }
        Command::ToggleMode => {
            controller.view_mut().toggle_mode();
            render_view(controller.view())
        }
        Command::Select(None) => {
            controller.view_mut().clear_selection();
            render_view(controller.view())
        }
        Command::Select(Some(code)) => match controller.view_mut().select_language(&code) {
            Ok(()) => render_view(controller.view()),
            Err(e) => {
                warn!("Language selection rejected: {}", e);
                format!("{}\n", e)
            }
        },
        Command::Languages => {
            let mut out = String::new();
            for language in controller.view().catalog().iter() {
                out.push_str(&format!("  {:<8} {}\n", language.code, language.name));
            }
            out
        }
        Command::Send => {
            controller.submit();
            render_view(controller.view())
        }
        Command::Cancel => {
            controller.cancel();
            render_view(controller.view())
        }
        Command::Show => render_view(controller.view()),
        Command::Health => match controller.health_check().await {
            Ok(true) => "Translation service is up\n".to_string(),
            Ok(false) => "Translation service answered with an error\n".to_string(),
            Err(e) => format!("Translation service unreachable: {}\n", e),
        },
        Command::Help => HELP.to_string(),
        Command::Unknown(name) => format!("Unknown command /{} (try /help)\n", name),
        Command::Quit => String::new(),
    }
}

fn completion_screen(controller: &ViewController, outcome: &CompletionOutcome) -> String {
    match outcome {
        CompletionOutcome::Discarded => String::new(),
        _ => format!("\n{}", render_view(controller.view())),
    }
}
