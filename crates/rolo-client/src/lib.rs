//! rolo-client: HTTP implementation of the contact store.
//!
//! [`ContactApi`] speaks the backend's REST contract and plugs into
//! `rolo_core::Session` as its [`ContactStore`](rolo_core::ContactStore)
//! backend. Response decoding lives in [`decode`], separated from
//! transport so it can be tested without a network.

pub mod api;
pub mod decode;

pub use api::ContactApi;
