pub mod bill;
pub mod extraction;
pub mod interaction;
pub mod roster;
pub mod utterance;

pub use bill::*;
pub use extraction::*;
pub use interaction::*;
pub use roster::*;
pub use utterance::*;
