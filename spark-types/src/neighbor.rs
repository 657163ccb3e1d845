// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::addr::BinaryAddress;
use serde::{Deserialize, Serialize};

/// Declares a label enum for a daemon-defined string. Known labels map to
/// named variants, anything else is kept verbatim in `Unknown` so labels
/// introduced by newer daemons survive display and re-encoding.
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal,)+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Unknown(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Unknown(s) => s,
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match s.as_str() {
                    $($label => Self::$variant,)+
                    _ => Self::Unknown(s),
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::from(s.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                match v {
                    $name::Unknown(s) => s,
                    other => other.as_str().to_owned(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

label_enum! {
    /// Adjacency state of a neighbor in the discovery state machine.
    NeighborState {
        Idle => "IDLE",
        Warm => "WARM",
        Negotiate => "NEGOTIATE",
        Established => "ESTABLISHED",
        Restart => "RESTART",
    }
}

label_enum! {
    /// The event that drove a neighbor's most recent state transition.
    NeighborEvent {
        HelloRcvdInfo => "HELLO_RCVD_INFO",
        HelloRcvdNoInfo => "HELLO_RCVD_NO_INFO",
        HelloRcvdRestart => "HELLO_RCVD_RESTART",
        HeartbeatRcvd => "HEARTBEAT_RCVD",
        HandshakeRcvd => "HANDSHAKE_RCVD",
        HeartbeatTimerExpire => "HEARTBEAT_TIMER_EXPIRE",
        NegotiateTimerExpire => "NEGOTIATE_TIMER_EXPIRE",
        GrTimerExpire => "GR_TIMER_EXPIRE",
        NegotiationFailure => "NEGOTIATION_FAILURE",
    }
}

/// A single discovered adjacency. Records are a point-in-time snapshot taken
/// by the daemon; time deltas are relative to when the snapshot was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborRecord {
    pub node_name: String,
    pub state: NeighborState,
    pub event: NeighborEvent,
    pub transport_address_v4: BinaryAddress,
    pub transport_address_v6: BinaryAddress,
    pub local_if_name: String,
    pub remote_if_name: String,
    pub area: String,
    /// Round trip time in microseconds.
    pub rtt_us: u64,
    pub openr_ctrl_thrift_port: u16,
    /// Milliseconds since the last hello message was sent.
    pub last_hello_msg_sent_time_delta: u64,
    /// Milliseconds since the last handshake message was sent.
    pub last_handshake_msg_sent_time_delta: u64,
    /// Milliseconds since the last heartbeat message was sent.
    pub last_heartbeat_msg_sent_time_delta: u64,
}
