// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::confirm::{yesno, Gate};
use anyhow::Result;
use spark_admin_client::SparkCtrl;
use std::io::Write;

const QUESTION: &str = "Are you sure to force sending GR msg to neighbors?";

/// Terminal outcome of a graceful restart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Executed,
    Declined,
}

/// Force the daemon to flood a graceful restart message to its neighbors.
pub fn graceful_restart(
    c: &impl SparkCtrl,
    yes: bool,
    gate: &impl Gate,
    out: &mut impl Write,
) -> Result<Outcome> {
    if !yesno(QUESTION, yes, gate)? {
        writeln!(out)?;
        return Ok(Outcome::Declined);
    }

    c.flood_restarting_msg()?;
    writeln!(out, "Successfully forcing to send GR msgs.")?;
    writeln!(out)?;
    Ok(Outcome::Executed)
}
