pub mod linalg;
pub mod logistic;
pub mod stoch;
pub mod undo;

pub use linalg::*;
pub use logistic::*;
pub use stoch::*;
pub use undo::*;
