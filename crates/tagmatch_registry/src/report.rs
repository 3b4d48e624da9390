//! Report snapshots
//!
//! The registry produces report content only; choosing where the report
//! is stored (and under what name) is a collaborator's responsibility.

use crate::socket::SocketStatus;
use serde::{Deserialize, Serialize};

/// Status of one socket at snapshot time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    /// Socket display name
    pub socket: String,
    /// Three-way occupancy status
    pub status: SocketStatus,
}

/// Ordered snapshot of every registered socket, in registration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardReport {
    /// One line per socket
    pub lines: Vec<ReportLine>,
}

impl BoardReport {
    /// Render as text, one `"{socket}: {status}"` line per socket
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.socket);
            out.push_str(": ");
            out.push_str(line.status.label());
            out.push('\n');
        }
        out
    }

    /// Get line count
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the snapshot covers no sockets
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
