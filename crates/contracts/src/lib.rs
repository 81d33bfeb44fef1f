//! DOM-free core of the portfolio site: profile data, the tab controller
//! state machine, the certificate asset join and the view models the
//! frontend renders.

pub mod domain;
pub mod enums;
pub mod shared;
