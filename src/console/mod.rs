//! Console presentation shared by both tools
//!
//! This module provides:
//! - A message catalog holding every user-facing template
//! - Console chrome: horizontal rules, padded text, banners, bulleted lists
//! - Error and notice display that halts until the user acknowledges it
//! - The prompt-until-valid input loop and its validators

mod messages;
mod prompt;
pub mod validate;

pub use messages::{render_template, MessageCatalog, MessageKey};

use colored::Colorize;
use std::io::{BufRead, Write};

/// Rule printed between console sections
pub const HORIZONTAL_RULE: &str = "====================================================================================================================";

/// Prefix for each bulleted list item
pub const LIST_ITEM_DECORATOR: &str = " * ";

/// Element printed before and after padded text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// An empty line
    #[default]
    BlankLine,
    /// A horizontal rule
    HorizontalRule,
    /// Nothing
    None,
}

/// Interactive console over an input reader and an output writer
pub struct Console<R, W> {
    reader: R,
    writer: W,
    messages: MessageCatalog,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console with the default message catalog and colors enabled
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            messages: MessageCatalog::new(),
            color: true,
        }
    }

    /// Enable or disable colored error output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Use a custom message catalog
    pub fn with_messages(mut self, messages: MessageCatalog) -> Self {
        self.messages = messages;
        self
    }

    /// The message catalog in use
    pub fn messages(&self) -> &MessageCatalog {
        &self.messages
    }

    /// Render a message from the catalog
    pub fn message(&self, key: MessageKey, args: &[&str]) -> String {
        self.messages.render(key, args)
    }

    /// The output writer
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Print a line of text
    pub fn print_text(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }

    /// Print a rendered catalog message
    pub fn print_message(&mut self, key: MessageKey, args: &[&str]) -> std::io::Result<()> {
        let text = self.message(key, args);
        self.print_text(&text)
    }

    /// Print an empty line
    pub fn print_empty_line(&mut self) -> std::io::Result<()> {
        self.print_text("")
    }

    /// Print a horizontal rule
    pub fn print_horizontal_rule(&mut self) -> std::io::Result<()> {
        self.print_text(HORIZONTAL_RULE)
    }

    fn print_padding(&mut self, padding: Padding) -> std::io::Result<()> {
        match padding {
            Padding::BlankLine => self.print_empty_line(),
            Padding::HorizontalRule => self.print_horizontal_rule(),
            Padding::None => Ok(()),
        }
    }

    /// Print text with a padding element before and after it
    pub fn print_padded(&mut self, text: &str, padding: Padding) -> std::io::Result<()> {
        self.print_padding(padding)?;
        self.print_text(text)?;
        self.print_padding(padding)
    }

    /// Print text followed by a horizontal rule
    pub fn print_text_followed_by_rule(&mut self, text: &str) -> std::io::Result<()> {
        self.print_text(text)?;
        self.print_horizontal_rule()
    }

    /// Print text framed by horizontal rules
    pub fn print_text_surrounded_by_rules(&mut self, text: &str) -> std::io::Result<()> {
        self.print_horizontal_rule()?;
        self.print_text(text)?;
        self.print_horizontal_rule()
    }

    /// Print each item on its own bulleted line
    pub fn print_list<S: AsRef<str>>(&mut self, items: &[S]) -> std::io::Result<()> {
        for item in items {
            writeln!(self.writer, "{}{}", LIST_ITEM_DECORATOR, item.as_ref())?;
        }
        self.writer.flush()
    }

    /// Print the opening banner: welcome, description and data source notes
    pub fn print_banner(
        &mut self,
        welcome: &str,
        description: &str,
        source_notes: &str,
    ) -> std::io::Result<()> {
        self.print_padded(welcome, Padding::HorizontalRule)?;
        self.print_padded(description, Padding::BlankLine)?;
        self.print_horizontal_rule()?;
        self.print_padded(source_notes, Padding::BlankLine)?;
        self.print_horizontal_rule()
    }

    /// Print an empty line then a prompt
    pub fn prompt_for_input(&mut self, prompt: &str) -> std::io::Result<()> {
        self.print_empty_line()?;
        self.print_text(prompt)
    }

    /// Read one line and trim it; `None` at end of input
    pub fn read_trimmed_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Block until the user presses Enter (or input ends)
    pub fn wait_for_acknowledgement(&mut self) -> std::io::Result<()> {
        self.read_trimmed_line().map(|_| ())
    }

    /// Print an error framed by rules, then wait for acknowledgement
    pub fn print_error_then_halt(&mut self, message: &str) -> std::io::Result<()> {
        let text = if self.color {
            message.red().to_string()
        } else {
            message.to_string()
        };
        self.print_halting_block(&text)
    }

    /// Print an informational notice framed by rules, then wait
    pub fn print_notice_then_halt(&mut self, message: &str) -> std::io::Result<()> {
        let text = if self.color {
            message.yellow().to_string()
        } else {
            message.to_string()
        };
        self.print_halting_block(&text)
    }

    fn print_halting_block(&mut self, text: &str) -> std::io::Result<()> {
        self.print_empty_line()?;
        self.print_horizontal_rule()?;
        self.print_text(text)?;
        self.wait_for_acknowledgement()?;
        self.print_horizontal_rule()?;
        self.print_empty_line()
    }
}
