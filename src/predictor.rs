//! Implementations of the direction prediction schemes.

pub mod bimodal;
pub mod btb;
pub mod counter;
pub mod gshare;
pub mod hybrid;
pub mod index;
pub mod table;

pub use bimodal::*;
pub use btb::*;
pub use counter::*;
pub use gshare::*;
pub use hybrid::*;
pub use index::*;
pub use table::*;
