use super::record_builder::RecordBuilder;
use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Header, OpCode, ResponseCode as HickoryResponseCode};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use nibbledns_application::use_cases::{HandleDnsQueryUseCase, QueryResolution};
use nibbledns_domain::{AnswerRecord, DnsQuery, ResponseCode};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Adapts hickory's request handling onto the query dispatcher.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
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
        if request.header().op_code() != OpCode::Query {
            warn!(op_code = ?request.header().op_code(), "Unsupported opcode");
            return send_error_response(
                request,
                &mut response_handle,
                HickoryResponseCode::NotImp,
            )
            .await;
        }

        let questions: Vec<DnsQuery> = request
            .queries()
            .iter()
            .map(|query| {
                let query = query.original();
                DnsQuery::new(
                    &query.name().to_ascii(),
                    RecordTypeMapper::from_hickory(query.query_type()),
                )
            })
            .collect();

        if questions.is_empty() {
            error!(client = %request.src().ip(), "Query without a question");
            return send_error_response(
                request,
                &mut response_handle,
                HickoryResponseCode::FormErr,
            )
            .await;
        }

        for question in &questions {
            debug!(
                domain = %question.domain,
                record_type = %question.record_type,
                client = %request.src().ip(),
                "DNS query received"
            );
        }

        let resolution = self.use_case.execute(&questions);
        send_resolution(request, &mut response_handle, resolution).await
    }
}

/// Writes a dispatcher resolution back to the client.
///
/// On NXDOMAIN the SOA goes into the authority section so resolvers can
/// negatively cache; every other record travels in the answer section.
async fn send_resolution<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    resolution: QueryResolution,
) -> ResponseInfo {
    let mut answers = Vec::with_capacity(resolution.answers.len());
    let mut soa = Vec::new();
    let negative = resolution.code == ResponseCode::NXDomain;

    for answer in &resolution.answers {
        let record = match RecordBuilder::build(answer) {
            Ok(record) => record,
            Err(e) => {
                error!(error = %e, answer = %answer, "Dropping answer that cannot be encoded");
                continue;
            }
        };
        debug!(answer = %answer, "Answer");

        if negative && matches!(answer, AnswerRecord::Soa { .. }) {
            soa.push(record);
        } else {
            answers.push(record);
        }
    }

    if resolution.code.is_error() {
        debug!(code = %resolution.code, "Negative response");
    }

    let mut header = Header::response_from_request(request.header());
    header.set_authoritative(true);
    header.set_recursion_available(false);
    header.set_response_code(to_hickory_code(resolution.code));

    let builder = MessageResponseBuilder::from_message_request(request);
    let response = builder.build(header, answers.iter(), &[], soa.iter(), &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send response");
            ResponseInfo::from(header)
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: HickoryResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(header)
        }
    }
}

fn to_hickory_code(code: ResponseCode) -> HickoryResponseCode {
    match code {
        ResponseCode::NoError => HickoryResponseCode::NoError,
        ResponseCode::NXDomain => HickoryResponseCode::NXDomain,
        ResponseCode::Refused => HickoryResponseCode::Refused,
    }
}
