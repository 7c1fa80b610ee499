use crate::dns::record_mapper;
use basalt_dns_application::use_cases::{LookupRequest, ResolveOutcome, ResolveQueryUseCase};
use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::{DNSClass, Record};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Serves queries out of the record store; the hosting framework owns the
/// sockets and per-query concurrency.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = request.request_info();
        let query = &request_info.query;
        let qname = query.name().to_string();
        let query_class = query.query_class();
        let client_ip = request.src().ip();

        debug!(qname = %qname, qtype = ?query.query_type(), client = %client_ip, "DNS query received");

        let Some(qtype) = record_mapper::query_type_from_wire(query.query_type()) else {
            warn!(qtype = ?query.query_type(), "Unsupported query type");
            return send_error_response(request, &mut response_handle, ResponseCode::NotImp)
                .await;
        };

        let lookup = LookupRequest::new(qname.clone(), qtype, u16::from(query_class));

        let outcome = match self.use_case.execute(&lookup).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(qname = %qname, error = %e, "Query resolution failed");
                return send_error_response(
                    request,
                    &mut response_handle,
                    ResponseCode::ServFail,
                )
                .await;
            }
        };

        let (answers, additionals) = match outcome {
            ResolveOutcome::Answered(records) => {
                match build_wire_records(&records, query_class) {
                    Ok(answers) => (answers, Vec::new()),
                    Err(e) => {
                        error!(qname = %qname, error = %e, "Failed to encode answer records");
                        return send_error_response(
                            request,
                            &mut response_handle,
                            ResponseCode::ServFail,
                        )
                        .await;
                    }
                }
            }
            // Nothing resolved here and no further handler exists: an
            // empty authoritative answer, carrying the zone SOA in the
            // additionals when one was found.
            ResolveOutcome::Delegated { soa } => {
                let supplement = soa.as_ref().map(std::slice::from_ref).unwrap_or(&[]);
                match build_wire_records(supplement, query_class) {
                    Ok(additionals) => (Vec::new(), additionals),
                    Err(e) => {
                        error!(qname = %qname, error = %e, "Failed to encode SOA supplement");
                        (Vec::new(), Vec::new())
                    }
                }
            }
        };

        debug!(qname = %qname, answers = answers.len(), "Sending response");

        let mut header = Header::response_from_request(request.header());
        header.set_authoritative(true);

        let builder = MessageResponseBuilder::from_message_request(request);
        let response = builder.build(
            header,
            answers.iter(),
            std::iter::empty(),
            std::iter::empty(),
            additionals.iter(),
        );

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

fn build_wire_records(
    records: &[basalt_dns_domain::ResourceRecord],
    query_class: DNSClass,
) -> Result<Vec<Record>, hickory_proto::error::ProtoError> {
    records
        .iter()
        .map(|rr| {
            let mut record = record_mapper::to_wire_record(rr)?;
            record.set_dns_class(query_class);
            Ok(record)
        })
        .collect()
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);

    let builder = MessageResponseBuilder::from_message_request(request);
    let response = builder.build(
        header,
        std::iter::empty(),
        std::iter::empty(),
        std::iter::empty(),
        std::iter::empty(),
    );

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
