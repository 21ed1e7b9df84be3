pub mod adaptive;
pub mod cache;
pub mod config;
pub mod engine;
pub mod range;
pub mod stud;

pub use adaptive::*;
pub use cache::*;
pub use config::*;
pub use engine::*;
pub use range::*;
pub use stud::*;
