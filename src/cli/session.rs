use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use catalog::{Config, Library, Manager};
use tracing::{debug, instrument};

use super::terminal::{Painter, Tone};

#[derive(Debug, Default, clap::Parser)]
pub struct Command {}

impl Command {
    #[instrument(skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let session = Session::new(stdin.lock(), stdout.lock(), Painter::detect())
            .with_prompt(config.prompt());
        let library = session.run()?;
        debug!(remaining = library.len(), "session finished");
        Ok(())
    }
}

/// A command read at the session prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Remove,
    Show,
    Exit,
}

impl FromStr for Action {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            "show" => Ok(Self::Show),
            "exit" => Ok(Self::Exit),
            _ => Err(UnknownCommand(s.trim().to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown command '{0}'")]
struct UnknownCommand(String);

/// The interactive loop over a catalog.
///
/// Reads commands and answers from `input`, writes prompts and results to
/// `output`. End of input ends the session as if `exit` had been typed.
pub struct Session<R, W> {
    input: R,
    output: W,
    painter: Painter,
    prompt: String,
    manager: Manager<Library>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, painter: Painter) -> Self {
        Self {
            input,
            output,
            painter,
            prompt: Config::default().prompt().to_string(),
            manager: Manager::new(Library::new()),
        }
    }

    pub fn with_prompt(mut self, prompt: &str) -> Self {
        prompt.clone_into(&mut self.prompt);
        self
    }

    /// Runs until `exit` or end of input, returning the library as it was
    /// left.
    pub fn run(mut self) -> io::Result<Library> {
        loop {
            let prompt = self.prompt.clone();
            let Some(line) = self.ask(&prompt)? else {
                break;
            };

            match line.parse::<Action>() {
                Ok(Action::Add) => {
                    if !self.add()? {
                        break;
                    }
                }
                Ok(Action::Remove) => {
                    if !self.remove()? {
                        break;
                    }
                }
                Ok(Action::Show) => self.show()?,
                Ok(Action::Exit) => {
                    self.say("Exiting the program.", Tone::Muted)?;
                    break;
                }
                Err(e) => {
                    debug!("{e}");
                    self.say("Invalid command. Please try again.", Tone::Warning)?;
                }
            }
        }
        Ok(self.manager.into_inner())
    }

    /// Returns `false` if input ran out before every field was given.
    fn add(&mut self) -> io::Result<bool> {
        let Some(title) = self.ask("Enter book title: ")? else {
            return Ok(false);
        };
        let Some(author) = self.ask("Enter book author: ")? else {
            return Ok(false);
        };
        let Some(year) = self.ask("Enter book year: ")? else {
            return Ok(false);
        };

        let message = format!("Book added: Title: {title}, Author: {author}, Year: {year}");
        self.manager.add_book(title, author, year);
        self.say(&message, Tone::Success)?;
        Ok(true)
    }

    /// Returns `false` if input ran out before a title was given.
    fn remove(&mut self) -> io::Result<bool> {
        let Some(title) = self.ask("Enter book title to remove: ")? else {
            return Ok(false);
        };

        if self.manager.remove_book(&title) > 0 {
            self.say(&format!("Book removed: {title}"), Tone::Success)?;
        } else {
            self.say(&format!("No book found with title: {title}"), Tone::Muted)?;
        }
        Ok(true)
    }

    fn show(&mut self) -> io::Result<()> {
        let books = self.manager.show_books();
        if books.is_empty() {
            return self.say("Library is empty.", Tone::Muted);
        }
        for book in books {
            self.say(&book.to_string(), Tone::Info)?;
        }
        Ok(())
    }

    /// Writes `prompt` and reads one trimmed line, or `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        writeln!(self.output, "{}", self.painter.paint(text, tone))
    }
}
