// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::confirm::Gate;
use crate::{neighbor, restart};
use anyhow::Result;
use clap::Subcommand;
use spark_admin_client::SparkCtrl;
use std::io::Write;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dump all detected neighbors.
    Neighbors {
        /// Dump in JSON format.
        #[arg(long)]
        json: bool,

        /// Show all details of each neighbor. Ignored with --json.
        #[arg(long)]
        detailed: bool,
    },

    /// Force the daemon to send graceful restart messages to all neighbors.
    GracefulRestart {
        /// Do not ask for confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn commands(
    command: Commands,
    c: &impl SparkCtrl,
    gate: &impl Gate,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Commands::Neighbors { json, detailed } => {
            neighbor::neighbors(c, json, detailed, out)?
        }
        Commands::GracefulRestart { yes } => {
            restart::graceful_restart(c, yes, gate, out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::confirm::test::Scripted;
    use pretty_assertions::assert_eq;
    use spark_admin_client::types::{
        BinaryAddress, NeighborEvent, NeighborRecord, NeighborState,
    };
    use spark_admin_client::{Error, StatusCode};
    use std::cell::Cell;
    use std::net::Ipv6Addr;

    pub(crate) fn record(name: &str) -> NeighborRecord {
        NeighborRecord {
            node_name: name.to_string(),
            state: NeighborState::Established,
            event: NeighborEvent::HeartbeatRcvd,
            transport_address_v4: BinaryAddress::new([192, 168, 1, 1]),
            transport_address_v6: BinaryAddress::from(Ipv6Addr::new(
                0xfe80, 0, 0, 0, 0, 0, 0, 1,
            )),
            local_if_name: "po1".into(),
            remote_if_name: "po7".into(),
            area: "0".into(),
            rtt_us: 172,
            openr_ctrl_thrift_port: 2018,
            last_hello_msg_sent_time_delta: 1_500,
            last_handshake_msg_sent_time_delta: 90_061_000,
            last_heartbeat_msg_sent_time_delta: 0,
        }
    }

    /// An in-memory daemon that counts the calls made against it.
    pub(crate) struct FakeDaemon {
        neighbors: Option<Vec<NeighborRecord>>,
        pub fetches: Cell<usize>,
        pub floods: Cell<usize>,
    }

    impl FakeDaemon {
        pub(crate) fn with_neighbors(neighbors: Vec<NeighborRecord>) -> Self {
            Self {
                neighbors: Some(neighbors),
                fetches: Cell::new(0),
                floods: Cell::new(0),
            }
        }

        pub(crate) fn unreachable() -> Self {
            Self {
                neighbors: None,
                fetches: Cell::new(0),
                floods: Cell::new(0),
            }
        }

        fn failure() -> Error {
            Error::Remote {
                status: StatusCode::SERVICE_UNAVAILABLE,
                message: "spark is not running".into(),
            }
        }
    }

    impl SparkCtrl for FakeDaemon {
        fn get_neighbors(&self) -> Result<Vec<NeighborRecord>, Error> {
            self.fetches.set(self.fetches.get() + 1);
            self.neighbors.clone().ok_or_else(Self::failure)
        }

        fn flood_restarting_msg(&self) -> Result<(), Error> {
            self.floods.set(self.floods.get() + 1);
            match self.neighbors {
                Some(_) => Ok(()),
                None => Err(Self::failure()),
            }
        }
    }

    #[test]
    fn neighbors_dispatch() {
        colored::control::set_override(false);
        let daemon = FakeDaemon::with_neighbors(vec![record("rsw001")]);
        let gate = Scripted::new(false);
        let mut out = Vec::new();

        commands(
            Commands::Neighbors {
                json: false,
                detailed: true,
            },
            &daemon,
            &gate,
            &mut out,
        )
        .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("\nNeighbor: rsw001, State: ESTABLISHED"));
        assert_eq!(daemon.fetches.get(), 1);
        assert_eq!(daemon.floods.get(), 0);
        assert!(gate.asked.borrow().is_empty());
    }

    #[test]
    fn graceful_restart_dispatch() {
        let daemon = FakeDaemon::with_neighbors(Vec::new());
        let gate = Scripted::new(false);
        let mut out = Vec::new();

        commands(
            Commands::GracefulRestart { yes: false },
            &daemon,
            &gate,
            &mut out,
        )
        .unwrap();
        assert_eq!(daemon.floods.get(), 0);
        assert_eq!(daemon.fetches.get(), 0);
        assert_eq!(gate.asked.borrow().len(), 1);
    }
}
