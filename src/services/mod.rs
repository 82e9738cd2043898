pub mod citizendium;
pub mod encyclopedia;
pub mod wikipedia;

pub use citizendium::*;
pub use encyclopedia::*;
pub use wikipedia::*;
