//! Typed endpoints, one module per resource
//!
//! Each module extends [`ApiClient`](crate::ApiClient) with the calls for
//! that resource; all of them go through the interceptor pipeline.

mod novels;
mod projects;
mod release_orders;
mod workflows;
