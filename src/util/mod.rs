pub mod clock;
pub mod rotating;
pub mod telemetry;

pub use clock::*;
pub use rotating::*;
pub use telemetry::*;
