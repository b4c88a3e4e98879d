//! Command implementations.

pub mod makecldf;
pub mod maps;
pub mod run;

pub use self::makecldf::execute_makecldf;
pub use self::maps::execute_maps;
pub use self::run::execute_run;
