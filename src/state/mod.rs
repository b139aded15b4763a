//! Client-side state: persisted session, route guard machine, navigation shell
//! and the shared per-fetch [`loadable::Loadable`] status.

pub mod guard;
pub mod loadable;
pub mod nav;
pub mod session;
