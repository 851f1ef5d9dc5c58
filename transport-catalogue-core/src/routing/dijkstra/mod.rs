mod router;
mod state;

pub use router::{RouteInfo, Router};
