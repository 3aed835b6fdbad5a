pub mod claims;
pub mod clock;
pub mod token;

pub use claims::Claims;
pub use clock::{Clock, FixedClock, SystemClock};
pub use token::TokenService;
