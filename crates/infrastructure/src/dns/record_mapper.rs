//! Conversions between the domain's answer records and hickory wire types.

use basalt_dns_domain::{QueryType, RecordData, ResourceRecord};
use hickory_proto::error::ProtoError;
use hickory_proto::rr::rdata;
use hickory_proto::rr::{Name, RData, Record, RecordType as WireRecordType};
use std::str::FromStr;

/// Maps a wire query type onto the supported set. `None` means the type is
/// not implemented by this backend.
pub fn query_type_from_wire(rtype: WireRecordType) -> Option<QueryType> {
    QueryType::from_u16(u16::from(rtype))
}

/// Builds the wire record for a materialized answer.
pub fn to_wire_record(rr: &ResourceRecord) -> Result<Record, ProtoError> {
    let name = Name::from_str(&rr.name)?;

    let rdata = match &rr.data {
        RecordData::A(addr) => RData::A(rdata::A(*addr)),
        RecordData::Aaaa(addr) => RData::AAAA(rdata::AAAA(*addr)),
        RecordData::Txt(text) => RData::TXT(rdata::TXT::new(vec![text.clone()])),
        RecordData::Ns(host) => RData::NS(rdata::NS(Name::from_str(host)?)),
        RecordData::Ptr(host) => RData::PTR(rdata::PTR(Name::from_str(host)?)),
        RecordData::Cname(target) => RData::CNAME(rdata::CNAME(Name::from_str(target)?)),
        RecordData::Mx {
            preference,
            exchange,
        } => RData::MX(rdata::MX::new(*preference, Name::from_str(exchange)?)),
        RecordData::Srv {
            priority,
            weight,
            port,
            target,
        } => RData::SRV(rdata::SRV::new(
            *priority,
            *weight,
            *port,
            Name::from_str(target)?,
        )),
        RecordData::Soa(soa) => RData::SOA(rdata::SOA::new(
            Name::from_str(&soa.mname)?,
            Name::from_str(&soa.rname)?,
            soa.serial,
            soa.refresh as i32,
            soa.retry as i32,
            soa.expire as i32,
            soa.minimum,
        )),
    };

    Ok(Record::from_rdata(name, rr.ttl, rdata))
}
