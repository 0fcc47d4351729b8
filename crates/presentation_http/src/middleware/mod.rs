//! HTTP middleware and extractors
//!
//! Cross-cutting request concerns, currently the JSON body extractor
//! with the API's content-type policy.

pub mod json;

pub use json::ApiJson;
