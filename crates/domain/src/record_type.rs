use std::fmt;
use std::str::FromStr;

/// The record types this backend materializes. Stored rows of any other type
/// are dropped from answers without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    PTR,
    SRV,
    SOA,
    NS,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::PTR => "PTR",
            RecordType::SRV => "SRV",
            RecordType::SOA => "SOA",
            RecordType::NS => "NS",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::SRV => 33,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            5 => Some(RecordType::CNAME),
            6 => Some(RecordType::SOA),
            12 => Some(RecordType::PTR),
            15 => Some(RecordType::MX),
            16 => Some(RecordType::TXT),
            28 => Some(RecordType::AAAA),
            33 => Some(RecordType::SRV),
            _ => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "MX" => Ok(RecordType::MX),
            "TXT" => Ok(RecordType::TXT),
            "PTR" => Ok(RecordType::PTR),
            "SRV" => Ok(RecordType::SRV),
            "SOA" => Ok(RecordType::SOA),
            "NS" => Ok(RecordType::NS),
            _ => Err(format!("Unknown record type: {}", s)),
        }
    }
}

/// What a query asks for: a concrete type or everything at the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    Any,
    Record(RecordType),
}

pub const ANY_CODE: u16 = 255;

impl QueryType {
    pub fn from_u16(code: u16) -> Option<Self> {
        if code == ANY_CODE {
            return Some(QueryType::Any);
        }
        RecordType::from_u16(code).map(QueryType::Record)
    }

    pub fn is_any(&self) -> bool {
        matches!(self, QueryType::Any)
    }

    /// Repository type filter for a lookup at one name. ANY scans every
    /// type; a CNAME query sees only CNAMEs; anything else must also see
    /// CNAMEs so indirection can be expanded.
    pub fn lookup_types(&self) -> Option<Vec<RecordType>> {
        match self {
            QueryType::Any => None,
            QueryType::Record(RecordType::CNAME) => Some(vec![RecordType::CNAME]),
            QueryType::Record(t) => Some(vec![RecordType::CNAME, *t]),
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryType::Any => write!(f, "ANY"),
            QueryType::Record(t) => write!(f, "{}", t),
        }
    }
}
