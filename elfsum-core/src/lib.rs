pub mod descriptor;
pub mod error;
pub mod header;

pub use descriptor::*;
pub use error::{ElfParseError, Stage};
pub use header::elf::{Elf64Ehdr, ObjectType};
pub use header::program::Elf64Phdr;
pub use header::section::Elf64Shdr;
pub use header::Record;
