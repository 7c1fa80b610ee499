use std::fmt;
use std::str::FromStr;

/// How a zone is provisioned. Resolution treats this as opaque bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneKind {
    Native,
    Master,
    Slave,
}

impl ZoneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneKind::Native => "NATIVE",
            ZoneKind::Master => "MASTER",
            ZoneKind::Slave => "SLAVE",
        }
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ZoneKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NATIVE" => Ok(ZoneKind::Native),
            "MASTER" => Ok(ZoneKind::Master),
            "SLAVE" => Ok(ZoneKind::Slave),
            _ => Err(format!("Unknown zone kind: {}", s)),
        }
    }
}

/// A DNS zone row. `name` is the apex in canonical form (lower-case, no
/// trailing dot) and uniquely identifies the zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub id: i64,
    pub name: String,
    pub kind: ZoneKind,
    pub master: Option<String>,
    pub last_check: Option<i64>,
    pub notified_serial: Option<i64>,
    pub account: Option<String>,
}
