//! rolo-core: contact domain model, store abstraction, and the view-model
//! coordinator.
//!
//! The [`Session`] coordinator owns the derived [`TagIndex`], the rendered
//! contact list, and the pending-edit state, and drives a pluggable
//! [`ContactStore`] backend. Rendering is a separate, swappable layer built
//! on the pure view-model in [`view`].

pub mod contact;
pub mod form;
pub mod session;
pub mod store;
pub mod view;

pub use contact::*;
pub use form::*;
pub use session::*;
pub use store::*;
pub use view::*;

pub use rolo_tags::TagIndex;
