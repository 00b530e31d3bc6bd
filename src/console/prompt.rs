//! Prompt-until-valid input loop

use super::{render_template, validate, Console, MessageKey};
use crate::error::InputError;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Console<R, W> {
    /// Prompt repeatedly until `predicate` accepts the trimmed input
    ///
    /// Each rejected value is shown once through `error_template`, with the
    /// value substituted for `{0}`. A value that fails the predicate is never
    /// returned; end of input yields [`InputError::EndOfInput`].
    pub fn prompt_until_valid<P>(
        &mut self,
        prompt: &str,
        predicate: P,
        error_template: &str,
    ) -> Result<String, InputError>
    where
        P: Fn(&str) -> bool,
    {
        self.prompt_with(prompt, |value| {
            (!predicate(value)).then(|| render_template(error_template, &[value]))
        })
    }

    /// Prompt for a value that must be present and satisfy `predicate`
    ///
    /// Empty input is rejected with the "value required" message before the
    /// predicate runs.
    pub fn prompt_required<P>(
        &mut self,
        prompt: &str,
        predicate: P,
        error_template: &str,
    ) -> Result<String, InputError>
    where
        P: Fn(&str) -> bool,
    {
        let required = self.message(MessageKey::ValueRequired, &[]);
        self.prompt_with(prompt, |value| {
            if !validate::is_present(value) {
                Some(required.clone())
            } else if !predicate(value) {
                Some(render_template(error_template, &[value]))
            } else {
                None
            }
        })
    }

    /// Core loop: `check` returns the error text for a rejected value
    fn prompt_with<C>(&mut self, prompt: &str, check: C) -> Result<String, InputError>
    where
        C: Fn(&str) -> Option<String>,
    {
        loop {
            self.prompt_for_input(prompt)?;
            let Some(value) = self.read_trimmed_line()? else {
                return Err(InputError::EndOfInput);
            };

            match check(&value) {
                Some(error) => {
                    tracing::debug!(value = %value, "rejected input");
                    self.print_text(&error)?;
                }
                None => {
                    self.print_empty_line()?;
                    return Ok(value);
                }
            }
        }
    }
}
