//! Inbound adapters translating requests into driving-port calls.
//!
//! [`http`] serves JSON clients; [`html`] renders pages for browsers. Both
//! share [`http::state::HttpState`].

pub mod html;
pub mod http;
