pub mod builders;
pub mod wire;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use wire::*;
