pub mod diagnostics;
pub mod participants;
pub mod routes;
pub mod submission;
pub mod winners;

pub use diagnostics::*;
pub use participants::*;
pub use routes::*;
pub use winners::*;
