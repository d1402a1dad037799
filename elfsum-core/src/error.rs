use std::fmt;
use std::io;
use std::path::PathBuf;

/// Part of the file a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// The fixed-size ELF file header at offset 0.
    Header,
    /// The program header table.
    Phdr,
    /// The section header table.
    Shdr,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Header => "header",
            Stage::Phdr => "phdr",
            Stage::Shdr => "shdr",
        };
        write!(f, "{}", name)
    }
}

/// Reasons an ELF file is rejected by [`ElfDescriptor`](crate::ElfDescriptor).
///
/// Every check is fatal: the first failing one is returned and nothing read
/// before it is kept.
#[derive(Debug, thiserror::Error)]
pub enum ElfParseError {
    #[error("cannot open {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("truncated {0}")]
    Truncated(Stage),

    #[error("bad ELF magic")]
    BadMagic,

    #[error("not a 64-bit ELF file (class {0})")]
    UnsupportedClass(u8),

    #[error("invalid ELF object type {0}")]
    InvalidType(u16),

    #[error("bad {table} entry size {size}, expected {expected}")]
    BadEntrySize {
        table: Stage,
        size: u16,
        expected: usize,
    },

    #[error("invalid {table} offset {offset:#x}")]
    InvalidOffset { table: Stage, offset: u64 },
}

impl ElfParseError {
    /// The stage a failure was detected in, for the kinds that carry one.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Truncated(stage) => Some(*stage),
            Self::BadEntrySize { table, .. } | Self::InvalidOffset { table, .. } => Some(*table),
            Self::SourceUnavailable { .. }
            | Self::BadMagic
            | Self::UnsupportedClass(_)
            | Self::InvalidType(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ElfParseError>;
