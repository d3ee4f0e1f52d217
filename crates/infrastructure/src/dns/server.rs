use crate::dns::forwarding::AnswerRecordBuilder;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use splitdns_application::use_cases::ResolveQueryUseCase;
use splitdns_domain::RecordType;
use std::sync::Arc;
use tracing::{debug, error, info};

/// hickory-server adapter in front of the resolver.
///
/// Every well-formed question is answered with NOERROR: either the rendered
/// answers or an empty answer section (NODATA).
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
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = &request_info.query;
        let domain = query.name().to_utf8();
        let record_type = u16::from(query.query_type());

        info!(
            domain = %domain,
            record_type = %RecordType::label(record_type),
            client = %request.src().ip(),
            "DNS query received"
        );

        let answers = self.use_case.execute(&domain, record_type).await;

        let mut records: Vec<Record> = Vec::with_capacity(answers.len());
        for answer in &answers {
            match AnswerRecordBuilder::to_record(answer) {
                Some(record) => records.push(record),
                None => debug!(
                    name = %answer.name,
                    record_type = %RecordType::label(answer.record_type),
                    data = %answer.data,
                    "answer not renderable, skipped"
                ),
            }
        }

        if records.is_empty() {
            debug!(domain = %domain, "No records found (NODATA)");
        } else {
            debug!(domain = %domain, answers = records.len(), "Sending response");
        }

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = *request.header();
        header.set_recursion_available(true);
        let response = builder.build(header, records.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = *request.header();
    header.set_response_code(code);
    header.set_recursion_available(true);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
