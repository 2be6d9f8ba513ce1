//! REPL (Read-Eval-Print Loop) for interactive conversation
//!
//! Three modes share one loop skeleton: text reads lines, voice reads
//! utterances, and interactive multiplexes both behind typed commands.
//! Errors inside a turn are printed and the loop continues; only startup
//! and teardown failures propagate.

use crate::output::console::{StatusFormatter, StatusInfo};
use crate::progress::spinner::ThinkingSpinner;
use colored::Colorize;
use rica_application::{
    ResolveInquiryUseCase, SpeechError, VoiceTurn, VoiceTurnError, VoiceTurnUseCase,
};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

/// Which conversation mode to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplMode {
    Text,
    Voice,
    Interactive,
}

/// Why a text loop ended
enum TextLoopEnd {
    Quit,
    SwitchVoice,
}

/// Why a voice loop ended
enum VoiceLoopEnd {
    Quit,
    SwitchText,
}

/// One parsed line of typed input
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Blank,
    Quit,
    SwitchVoice,
    Status,
    Ask(&'a str),
}

/// Interactive conversation REPL
pub struct AssistantRepl {
    resolver: Arc<ResolveInquiryUseCase>,
    voice: Option<Arc<VoiceTurnUseCase>>,
    status: StatusInfo,
    debug: bool,
}

impl AssistantRepl {
    pub fn new(resolver: Arc<ResolveInquiryUseCase>, status: StatusInfo) -> Self {
        Self {
            resolver,
            voice: None,
            status,
            debug: false,
        }
    }

    /// Attach the voice turn use case (absent in builds without voice
    /// support or when the microphone is unusable)
    pub fn with_voice(mut self, voice: Arc<VoiceTurnUseCase>) -> Self {
        self.voice = Some(voice);
        self
    }

    /// Show full error detail on turn failures
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Run the REPL until the user quits or interrupts
    pub async fn run(&self, mode: ReplMode) -> RlResult<()> {
        self.print_welcome(mode);

        match mode {
            ReplMode::Text => {
                self.run_text(false).await?;
            }
            ReplMode::Voice => {
                self.run_voice_loop(false).await;
            }
            ReplMode::Interactive => self.run_interactive().await?,
        }

        println!("Goodbye!");
        Ok(())
    }

    async fn run_text(&self, interactive: bool) -> RlResult<TextLoopEnd> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("rica").join("history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        let end = self.text_loop(&mut rl, interactive).await?;

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(end)
    }

    async fn text_loop(
        &self,
        rl: &mut DefaultEditor,
        interactive: bool,
    ) -> RlResult<TextLoopEnd> {
        loop {
            match rl.readline("You: ") {
                Ok(line) => {
                    match parse_line(&line) {
                        Command::Blank => continue,
                        Command::Quit => return Ok(TextLoopEnd::Quit),
                        Command::SwitchVoice if interactive => {
                            if self.voice.is_some() {
                                return Ok(TextLoopEnd::SwitchVoice);
                            }
                            println!("Voice mode is not available.");
                            continue;
                        }
                        Command::Status if interactive => {
                            println!("{}", StatusFormatter::format(&self.status));
                            continue;
                        }
                        // Outside interactive mode, 'voice' and 'status' are
                        // just questions like any other
                        Command::SwitchVoice | Command::Status | Command::Ask(_) => {}
                    }

                    let line = line.trim();
                    let _ = rl.add_history_entry(line);
                    self.process_question(line).await;
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!();
                    return Ok(TextLoopEnd::Quit);
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn process_question(&self, question: &str) {
        let spinner = ThinkingSpinner::start("Thinking...");
        let result = self.resolver.resolve(None, question).await;
        spinner.finish();

        match result {
            Ok(resolution) => {
                println!("{} {}", "RICA:".green().bold(), resolution.response_text());
                println!();
            }
            Err(e) => self.report_turn_error(&e),
        }
    }

    async fn run_voice_loop(&self, interactive: bool) -> VoiceLoopEnd {
        let Some(voice) = &self.voice else {
            println!("Voice mode is not available.");
            return VoiceLoopEnd::SwitchText;
        };

        loop {
            if interactive {
                println!("Listening... (say 'text' to switch to text mode)");
            } else {
                println!("Listening... (speak now, or press Ctrl-C to exit)");
            }

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    println!();
                    return VoiceLoopEnd::Quit;
                }
                turn = voice.execute() => match turn {
                    Ok(VoiceTurn::Quit { .. }) => return VoiceLoopEnd::Quit,
                    Ok(VoiceTurn::Answered { transcript, resolution }) => {
                        println!("{} {}", "You said:".cyan().bold(), transcript);
                        println!("{} {}", "RICA:".green().bold(), resolution.response_text());
                        println!("{}", "-".repeat(30));

                        if interactive && wants_text_mode(&transcript) {
                            return VoiceLoopEnd::SwitchText;
                        }
                    }
                    Err(VoiceTurnError::Speech(SpeechError::NoSpeech)) => {
                        println!("No speech detected, try again.");
                    }
                    Err(VoiceTurnError::Speech(SpeechError::Unintelligible)) => {
                        println!("Sorry, I couldn't make that out.");
                    }
                    Err(e) => self.report_turn_error(&e),
                }
            }
        }
    }

    async fn run_interactive(&self) -> RlResult<()> {
        loop {
            match self.run_text(true).await? {
                TextLoopEnd::Quit => return Ok(()),
                TextLoopEnd::SwitchVoice => {
                    println!("Switched to voice mode. Say 'text' to switch back.");
                }
            }

            match self.run_voice_loop(true).await {
                VoiceLoopEnd::Quit => return Ok(()),
                VoiceLoopEnd::SwitchText => {
                    println!("Switched to text mode.");
                }
            }
        }
    }

    fn report_turn_error(&self, error: &dyn std::error::Error) {
        if self.debug {
            eprintln!("{} {:?}", "Error:".red().bold(), error);
        } else {
            eprintln!("{} {}", "Error:".red().bold(), error);
        }
    }

    fn print_welcome(&self, mode: ReplMode) {
        println!();
        match mode {
            ReplMode::Text => {
                println!("RICA - Text Mode");
                println!("{}", "=".repeat(30));
                println!("Type 'quit' to exit");
            }
            ReplMode::Voice => {
                println!("RICA - Voice Mode");
                println!("{}", "=".repeat(30));
                println!("Press Ctrl-C to exit");
            }
            ReplMode::Interactive => {
                println!("RICA - Interactive Mode");
                println!("{}", "=".repeat(35));
                println!("Commands:");
                println!("  'voice'  - Switch to voice input");
                println!("  'status' - Show system status");
                println!("  'quit'   - Exit");
            }
        }
        println!();
    }
}

/// Parse one typed line into a command
fn parse_line(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Blank;
    }
    match trimmed.to_lowercase().as_str() {
        "quit" | "exit" | "bye" => Command::Quit,
        "voice" => Command::SwitchVoice,
        "status" => Command::Status,
        _ => Command::Ask(trimmed),
    }
}

/// Whether a spoken transcript asks for text mode
fn wants_text_mode(transcript: &str) -> bool {
    transcript
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .any(|word| word == "text")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_line("quit"), Command::Quit);
        assert_eq!(parse_line("  EXIT  "), Command::Quit);
        assert_eq!(parse_line("bye"), Command::Quit);
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(parse_line(""), Command::Blank);
        assert_eq!(parse_line("   "), Command::Blank);
    }

    #[test]
    fn test_parse_commands_and_questions() {
        assert_eq!(parse_line("voice"), Command::SwitchVoice);
        assert_eq!(parse_line("status"), Command::Status);
        assert_eq!(
            parse_line("what is the weather?"),
            Command::Ask("what is the weather?")
        );
        // Multi-word lines starting with a command word are questions
        assert_eq!(
            parse_line("voice recognition tips"),
            Command::Ask("voice recognition tips")
        );
    }

    #[test]
    fn test_wants_text_mode() {
        assert!(wants_text_mode("text"));
        assert!(wants_text_mode("switch to text, please"));
        assert!(!wants_text_mode("read me the context"));
    }
}
