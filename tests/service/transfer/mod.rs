mod approve_request;
mod cancel_request;
mod pending_requests_for_campus;
mod request_transfer;
