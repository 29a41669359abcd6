/// Master bus hierarchy command.
pub mod buses;
/// Raw chunk dump command.
pub mod chunk;
/// File-level information command.
pub mod info;
/// Object listing command.
pub mod objects;
/// Actor-mixer hierarchy command.
pub mod tree;

mod util;
