pub mod boost;
pub mod clock;
pub mod help;
pub mod stoch;

pub use boost::*;
pub use clock::*;
pub use help::*;
pub use stoch::*;
