//! Infrastructure: ports and their concrete adapters.

pub mod blobstore;
pub mod http;
pub mod ports;
pub mod postgres;
