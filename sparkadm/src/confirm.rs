// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operator confirmation for destructive actions.

use anyhow::Result;
use console::Term;
use dialoguer::Confirm;

/// Something that can ask the operator a yes/no question.
pub trait Gate {
    fn confirm(&self, question: &str) -> Result<bool>;
}

/// Interactive yes/no prompt on the terminal, defaulting to no.
pub struct Prompt;

impl Gate for Prompt {
    fn confirm(&self, question: &str) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact_on(&Term::stdout())?)
    }
}

/// Ask `question` through `gate` unless the operator already agreed up front.
pub fn yesno(question: &str, yes: bool, gate: &impl Gate) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    gate.confirm(question)
}
