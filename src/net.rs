//! Transport layer: builds the outgoing request and buffers the response.

mod dispatch;
mod response;

pub use dispatch::dispatch;
pub use response::TransportResponse;
