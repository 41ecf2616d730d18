// SPDX-License-Identifier: MIT

//! Remote CRUD client for the summary service.
//!
//! The [`Api`] trait abstracts the service's REST surface so the
//! controller can be driven by a scripted double in tests; [`HttpApi`]
//! is the production implementation.

mod api;
mod http;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use api::{Api, ApiError, ApiFuture, ApiResult};
pub use http::HttpApi;
