use crate::host::{Console, ANSI_COLORS};
use ansi_term::{Colour, Style};
use linefeed::{DefaultTerminal, Interface, ReadResult};
use log::warn;
use mortal::Terminal;
use std::io::{BufRead, Write};

/// The controlling terminal. Falls back to plain stdin and stdout when
/// there is no tty, such as when output is piped.
pub struct TerminalConsole {
    terminal: Option<Terminal>,
    input: Option<Interface<DefaultTerminal>>,
}

impl Default for TerminalConsole {
    fn default() -> TerminalConsole {
        TerminalConsole::new()
    }
}

impl TerminalConsole {
    pub fn new() -> TerminalConsole {
        TerminalConsole {
            terminal: Terminal::new().ok(),
            input: Interface::new("INPUT").ok(),
        }
    }

    fn write(&mut self, s: &str) {
        let result = match &self.terminal {
            Some(terminal) => terminal.write_str(s),
            None => {
                let mut stdout = std::io::stdout();
                stdout.write_all(s.as_bytes()).and_then(|_| stdout.flush())
            }
        };
        if let Err(error) = result {
            warn!("console: {}", error);
        }
    }
}

impl Console for TerminalConsole {
    fn print(&mut self, text: &str) {
        self.write(text);
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        if let Some(input) = &self.input {
            let line = input.set_prompt(prompt).and_then(|_| input.read_line());
            return match line {
                Ok(ReadResult::Input(line)) => Some(line),
                Ok(ReadResult::Signal(_)) | Ok(ReadResult::Eof) => None,
                Err(error) => {
                    warn!("console: {}", error);
                    None
                }
            };
        }
        self.write(prompt);
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
            Err(error) => {
                warn!("console: {}", error);
                None
            }
        }
    }

    fn clear(&mut self) {
        match &self.terminal {
            Some(terminal) => {
                if let Err(error) = terminal.clear_screen() {
                    warn!("console: {}", error);
                }
            }
            None => self.write("\x1b[2J\x1b[H"),
        }
    }

    fn locate(&mut self, row: usize, column: usize) {
        self.write(&format!("\x1b[{};{}H", row.max(1), column.max(1)));
    }

    fn color(&mut self, foreground: u8, background: Option<u8>) {
        let colour = |n: u8| Colour::Fixed(ANSI_COLORS[(n & 15) as usize]);
        let mut style = Style::new().fg(colour(foreground));
        if let Some(background) = background {
            style = style.on(colour(background));
        }
        self.write(&format!("{}", style.prefix()));
    }
}
