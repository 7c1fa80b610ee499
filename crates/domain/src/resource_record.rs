use crate::errors::DomainError;
use crate::name;
use crate::record_type::RecordType;
use crate::soa::Soa;
use crate::stored_record::StoredRecord;
use std::net::{Ipv4Addr, Ipv6Addr};

pub const CLASS_IN: u16 = 1;

/// Type-specific record data, parsed out of the stored text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Txt(String),
    Ns(String),
    Ptr(String),
    Cname(String),
    Mx { preference: u16, exchange: String },
    Srv { priority: u16, weight: u16, port: u16, target: String },
    Soa(Soa),
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::Aaaa(_) => RecordType::AAAA,
            RecordData::Txt(_) => RecordType::TXT,
            RecordData::Ns(_) => RecordType::NS,
            RecordData::Ptr(_) => RecordType::PTR,
            RecordData::Cname(_) => RecordType::CNAME,
            RecordData::Mx { .. } => RecordType::MX,
            RecordData::Srv { .. } => RecordType::SRV,
            RecordData::Soa(_) => RecordType::SOA,
        }
    }
}

/// A wire-ready answer record. Owner name carries the trailing root dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub class: u16,
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    /// Converts a stored row into an answer record.
    ///
    /// `Ok(None)` drops the row: the type is outside the supported set, or
    /// SOA content failed to parse. Malformed A/AAAA/MX/SRV content is a
    /// hard error that fails the whole query.
    pub fn materialize(
        record: &StoredRecord,
        class: u16,
    ) -> Result<Option<Self>, DomainError> {
        let Some(rtype) = record.record_type() else {
            return Ok(None);
        };

        let data = match rtype {
            RecordType::A => RecordData::A(
                record
                    .content
                    .parse()
                    .map_err(|_| malformed(rtype, record))?,
            ),
            RecordType::AAAA => RecordData::Aaaa(
                record
                    .content
                    .parse()
                    .map_err(|_| malformed(rtype, record))?,
            ),
            RecordType::TXT => RecordData::Txt(record.content.clone()),
            RecordType::NS => RecordData::Ns(name::with_trailing_dot(&record.content)),
            RecordType::PTR => RecordData::Ptr(name::with_trailing_dot(&record.content)),
            RecordType::CNAME => RecordData::Cname(name::with_trailing_dot(&record.content)),
            RecordType::MX => parse_mx(record)?,
            RecordType::SRV => parse_srv(record)?,
            RecordType::SOA => match Soa::parse(&record.content) {
                Some(soa) => RecordData::Soa(soa),
                None => return Ok(None),
            },
        };

        Ok(Some(Self {
            name: name::with_trailing_dot(&record.name),
            class,
            ttl: record.ttl,
            data,
        }))
    }
}

/// MX preference comes from the prio column when set, otherwise from an
/// inline "<preference> <host>" content encoding.
fn parse_mx(record: &StoredRecord) -> Result<RecordData, DomainError> {
    if record.prio != 0 {
        let preference =
            u16::try_from(record.prio).map_err(|_| malformed(RecordType::MX, record))?;
        return Ok(RecordData::Mx {
            preference,
            exchange: name::with_trailing_dot(&record.content),
        });
    }

    let parts: Vec<&str> = record.content.split(' ').collect();
    if parts.len() != 2 {
        return Err(malformed(RecordType::MX, record));
    }

    let preference = parts[0]
        .parse::<u16>()
        .map_err(|_| malformed(RecordType::MX, record))?;

    Ok(RecordData::Mx {
        preference,
        exchange: name::with_trailing_dot(parts[1]),
    })
}

/// SRV content is always "<priority> <weight> <port> <target>".
fn parse_srv(record: &StoredRecord) -> Result<RecordData, DomainError> {
    let parts: Vec<&str> = record.content.split(' ').collect();
    if parts.len() != 4 {
        return Err(malformed(RecordType::SRV, record));
    }

    let priority = parts[0]
        .parse::<u16>()
        .map_err(|_| malformed(RecordType::SRV, record))?;
    let weight = parts[1]
        .parse::<u16>()
        .map_err(|_| malformed(RecordType::SRV, record))?;
    let port = parts[2]
        .parse::<u16>()
        .map_err(|_| malformed(RecordType::SRV, record))?;

    Ok(RecordData::Srv {
        priority,
        weight,
        port,
        target: parts[3].to_string(),
    })
}

fn malformed(rtype: RecordType, record: &StoredRecord) -> DomainError {
    DomainError::MalformedContent {
        rtype: rtype.as_str(),
        content: record.content.clone(),
    }
}
