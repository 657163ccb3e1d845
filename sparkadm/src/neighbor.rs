// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use anyhow::Result;
use colored::Colorize;
use spark_admin_client::types::NeighborRecord;
use spark_admin_client::SparkCtrl;
use std::io::Write;
use std::time::Duration;
use tabwriter::TabWriter;

/// Report the neighbors a daemon has discovered.
pub fn neighbors(
    c: &impl SparkCtrl,
    json: bool,
    detailed: bool,
    out: &mut impl Write,
) -> Result<()> {
    let neighbors = c.get_neighbors()?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &neighbors)?;
        writeln!(out)?;
        return Ok(());
    }
    render(&neighbors, detailed, out)
}

pub fn render(
    neighbors: &[NeighborRecord],
    detailed: bool,
    out: &mut impl Write,
) -> Result<()> {
    if detailed {
        print_neighbors_detailed(neighbors, out)
    } else {
        print_neighbors(neighbors, out)
    }
}

/// One row per neighbor, ordered by node name. Neighbors sharing a name keep
/// the order the daemon reported them in.
fn print_neighbors(
    neighbors: &[NeighborRecord],
    out: &mut impl Write,
) -> Result<()> {
    let mut sorted: Vec<&NeighborRecord> = neighbors.iter().collect();
    sorted.sort_by(|a, b| a.node_name.cmp(&b.node_name));

    writeln!(out)?;
    let mut tw = TabWriter::new(&mut *out);
    writeln!(
        &mut tw,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        "Neighbor".dimmed(),
        "State".dimmed(),
        "Latest Event".dimmed(),
        "Local Intf".dimmed(),
        "Remote Intf".dimmed(),
        "Area".dimmed(),
        "Rtt(us)".dimmed(),
    )?;
    for n in sorted {
        writeln!(
            &mut tw,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            n.node_name,
            n.state,
            n.event,
            n.local_if_name,
            n.remote_if_name,
            n.area,
            n.rtt_us,
        )?;
    }
    tw.flush()?;
    Ok(())
}

fn print_neighbors_detailed(
    neighbors: &[NeighborRecord],
    out: &mut impl Write,
) -> Result<()> {
    for n in neighbors {
        writeln!(out)?;
        writeln!(
            out,
            "Neighbor: {}, State: {}, Last Event: {}",
            n.node_name, n.state, n.event
        )?;

        writeln!(out, "\t[Transport Attributes]:")?;
        writeln!(out, "\t\tNeighbor V4 Addr: {}", n.transport_address_v4)?;
        writeln!(out, "\t\tNeighbor V6 Addr: {}", n.transport_address_v6)?;
        writeln!(out, "\t\tLocal Interface: {}", n.local_if_name)?;
        writeln!(out, "\t\tRemote Interface: {}", n.remote_if_name)?;
        writeln!(out)?;

        writeln!(out, "\t[Other Attributes]:")?;
        writeln!(out, "\t\tAreaId: {}", n.area)?;
        writeln!(out, "\t\tRtt(us): {}", n.rtt_us)?;
        writeln!(out, "\t\tTCP port: {}", n.openr_ctrl_thrift_port)?;
        writeln!(out)?;

        writeln!(
            out,
            "Last SparkHelloMsg sent: {} ago",
            since(n.last_hello_msg_sent_time_delta)
        )?;
        writeln!(
            out,
            "Last SparkHandshakeMsg sent: {} ago",
            since(n.last_handshake_msg_sent_time_delta)
        )?;
        writeln!(
            out,
            "Last SparkHeartbeatMsg sent: {} ago",
            since(n.last_heartbeat_msg_sent_time_delta)
        )?;
    }
    Ok(())
}

fn since(millis: u64) -> humantime::FormattedDuration {
    humantime::format_duration(Duration::from_millis(millis))
}
