use motorlink_wire::ValueKind;
use serde::Serialize;

use crate::endpoints::CATALOG;

/// Whether the device accepts writes to an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Access {
    #[serde(rename = "read-only")]
    ReadOnly,
    #[serde(rename = "read-write")]
    ReadWrite,
}

impl Access {
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::ReadWrite)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReadOnly => "read-only",
            Self::ReadWrite => "read-write",
        }
    }
}

/// One row of the generated endpoint table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EndpointInfo {
    pub id: u16,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: ValueKind,
    pub access: Access,
}

/// Look up an endpoint by name.
pub fn find(name: &str) -> Option<&'static EndpointInfo> {
    CATALOG.iter().find(|entry| entry.name == name)
}

/// Look up an endpoint by identifier.
pub fn get(id: u16) -> Option<&'static EndpointInfo> {
    CATALOG.iter().find(|entry| entry.id == id)
}
