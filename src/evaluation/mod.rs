pub mod colex;
pub mod evaluator;
pub mod high;
pub mod kicks;
pub mod low;
pub mod ranking;
pub mod strength;
pub mod table;

pub use colex::*;
pub use evaluator::*;
pub use high::*;
pub use kicks::*;
pub use low::*;
pub use ranking::*;
pub use strength::*;
pub use table::*;
