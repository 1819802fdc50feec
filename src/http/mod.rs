//! HTTP/1.0 wire format.
//!
//! The client speaks plain HTTP/1.0 with no persistent connections: each
//! request is written in full, and the response is framed solely by the
//! peer closing the connection.
//!
//! - **`request`**: request representation, builder, and serialization
//! - **`response`**: response framing and presentation

pub mod request;
pub mod response;
