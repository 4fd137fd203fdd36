//! Domain-based type organization
//!
//! - event: catalog records and lenient number coercion
//! - registration: the locally persisted registration set
//! - filters: listing filter and sort state
//! - page: page composition and detail selection
//! - common: feedback and statistics shared by the renderers

pub mod common;
pub mod event;
pub mod filters;
pub mod page;
pub mod registration;

pub use common::*;
pub use event::*;
pub use filters::*;
pub use page::*;
pub use registration::*;
