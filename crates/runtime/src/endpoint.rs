//! Service endpoints and account credentials.
//!
//! Responsys runs the Interact service on a set of regional "pods"; the pod
//! qualifier in the credentials selects which WSDL and service endpoint a
//! transport should contact.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Regional service pod.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pod {
    /// Interact pod 2 (`ws2.responsys.net`)
    #[serde(rename = "2")]
    Interact2,
    /// Interact pod 5 (`ws5.responsys.net`)
    #[serde(rename = "5")]
    Interact5,
    /// Triggered-message pod rtm4
    #[serde(rename = "rtm4")]
    Rtm4,
    /// Triggered-message pod rtm4b
    #[serde(rename = "rtm4b")]
    Rtm4b,
}

impl Pod {
    /// The pod qualifier as it appears in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Pod::Interact2 => "2",
            Pod::Interact5 => "5",
            Pod::Rtm4 => "rtm4",
            Pod::Rtm4b => "rtm4b",
        }
    }

    /// URL of the WSDL describing this pod's service.
    pub fn wsdl(self) -> &'static str {
        match self {
            Pod::Interact2 => "https://ws2.responsys.net/webservices/wsdl/ResponsysWS_Level1.wsdl",
            Pod::Interact5 => "https://ws5.responsys.net/webservices/wsdl/ResponsysWS_Level1.wsdl",
            Pod::Rtm4 => "https://rtm4.responsys.net/tmws/services/TriggeredMessageWS?wsdl",
            Pod::Rtm4b => "https://rtm4b.responsys.net/tmws/services/TriggeredMessageWS?wsdl",
        }
    }

    /// URL of the service endpoint calls are sent to.
    pub fn endpoint(self) -> &'static str {
        match self {
            Pod::Interact2 => "https://ws2.responsys.net/webservices/services/ResponsysWSService",
            Pod::Interact5 => "https://ws5.responsys.net/webservices/services/ResponsysWSService",
            Pod::Rtm4 => "http://rtm4.responsys.net:80/tmws/services/TriggeredMessageWS",
            Pod::Rtm4b => "http://rtm4b.responsys.net:80/tmws/services/TriggeredMessageWS",
        }
    }
}

impl FromStr for Pod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2" => Ok(Pod::Interact2),
            "5" => Ok(Pod::Interact5),
            "rtm4" => Ok(Pod::Rtm4),
            "rtm4b" => Ok(Pod::Rtm4b),
            other => Err(Error::UnknownPod(other.to_string())),
        }
    }
}

impl fmt::Display for Pod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account credentials plus the pod to contact.
///
/// Immutable once the client is constructed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
    pod: Pod,
}

impl Credentials {
    /// Creates credentials for the given account and pod.
    pub fn new(username: impl Into<String>, password: impl Into<String>, pod: Pod) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            pod,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn pod(&self) -> Pod {
        self.pod
    }
}

// The password must never leak through Debug output or logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("pod", &self.pod)
            .finish()
    }
}
