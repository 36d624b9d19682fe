//! Host bridge: fetching groups and committing switches.
//!
//! The host process owns the tab-group data and performs the actual
//! switch. The switcher reaches it through two one-shot operations behind
//! the [`HostBridge`] trait, injected into the controller so tests can
//! substitute a recording double.
//!
//! On the wire the operations are JSON messages tagged by `action`:
//!
//! ```json
//! {"action":"getGroups"}
//! {"action":"switchToGroup","groupId":5}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::group::{Group, GroupId};
use crate::logging::{LogLevel, emit_log};

/// Operations the switcher needs from the host process.
pub trait HostBridge {
    /// Fetch the current group list.
    ///
    /// Invoked on every open attempt. An unreachable host is an error,
    /// never a panic; the caller abandons the open attempt on failure.
    fn fetch_groups(&mut self) -> Result<Vec<Group>>;

    /// Ask the host to switch to a group. Fire-and-forget: no response is
    /// awaited and the caller proceeds to close the overlay immediately.
    fn commit_switch(&mut self, id: GroupId);
}

/// A request message to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum HostRequest {
    /// Ask for the ordered group list.
    GetGroups,
    /// Notify the host to switch to `group_id`.
    #[serde(rename_all = "camelCase")]
    SwitchToGroup { group_id: GroupId },
}

/// The host's response to [`HostRequest::GetGroups`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupsResponse {
    /// Ordered group sequence; order defines cycle and visual order.
    pub groups: Vec<Group>,
}

/// A one-shot string transport to the host process.
///
/// This is the only seam the embedding has to implement to wire up a real
/// host; [`PortBridge`] does the codec work on top of it.
pub trait MessagePort {
    /// Send a request and wait for its response.
    fn request(&mut self, message: &str) -> Result<String>;

    /// Send a notification; no response is consumed.
    fn notify(&mut self, message: &str);
}

/// A [`HostBridge`] speaking JSON over any [`MessagePort`].
#[derive(Debug)]
pub struct PortBridge<P: MessagePort> {
    port: P,
}

impl<P: MessagePort> PortBridge<P> {
    /// Wrap a message port.
    #[must_use]
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Take the underlying port back.
    pub fn into_inner(self) -> P {
        self.port
    }
}

impl<P: MessagePort> HostBridge for PortBridge<P> {
    fn fetch_groups(&mut self) -> Result<Vec<Group>> {
        let request = serde_json::to_string(&HostRequest::GetGroups)?;
        let response = self.port.request(&request)?;
        let parsed: GroupsResponse = serde_json::from_str(&response)?;
        Ok(parsed.groups)
    }

    fn commit_switch(&mut self, id: GroupId) {
        match serde_json::to_string(&HostRequest::SwitchToGroup { group_id: id }) {
            Ok(message) => self.port.notify(&message),
            Err(e) => emit_log(LogLevel::Error, &format!("bridge: encode failed: {e}")),
        }
    }
}

/// A bridge whose host never answers. Useful as a placeholder and in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnreachableBridge;

impl HostBridge for UnreachableBridge {
    fn fetch_groups(&mut self) -> Result<Vec<Group>> {
        Err(Error::Host("host unreachable".to_string()))
    }

    fn commit_switch(&mut self, _id: GroupId) {}
}
