//! Cisco Support API model types.

mod bug;
mod case;
mod eox;
mod product;
mod rma;
mod serial;
mod suggestion;

pub use bug::*;
pub use case::*;
pub use eox::*;
pub use product::*;
pub use rma::*;
pub use serial::*;
pub use suggestion::*;
