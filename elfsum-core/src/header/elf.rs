use crate::header::Record;
use byteorder::{NativeEndian, ReadBytesExt};
use goblin::elf::header::{
    ELFCLASS64, ELFMAG, EI_CLASS, ET_CORE, ET_DYN, ET_EXEC, ET_REL, SELFMAG, SIZEOF_IDENT,
};
use goblin::elf64::header::SIZEOF_EHDR;
use std::io;

/// Represents the ELF (Executable and Linkable Format) header for a 64-bit object file.
///
/// This structure corresponds to the standard `Elf64_Ehdr` defined in the ELF specification.
/// It appears at the very beginning of every ELF file and locates the program and
/// section header tables.
///
/// Reference: [ELF Specification v1.2](https://refspecs.linuxfoundation.org/elf/elf.pdf)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elf64Ehdr {
    /// ELF identification bytes.
    ///
    /// The first 4 bytes should be `0x7F`, `'E'`, `'L'`, `'F'`; byte 4 is the class.
    pub e_ident: [u8; SIZEOF_IDENT],

    /// Object file type, see [`ObjectType`].
    pub e_type: u16,

    /// Target architecture (e.g. `EM_X86_64` = 62).
    pub e_machine: u16,

    /// ELF version (usually `EV_CURRENT` = 1).
    pub e_version: u32,

    /// Virtual address of the program entry point.
    pub e_entry: u64,

    /// File offset of the program header table.
    pub e_phoff: u64,

    /// File offset of the section header table.
    pub e_shoff: u64,

    /// Processor-specific flags.
    pub e_flags: u32,

    /// Size of this header, 64 for ELF64.
    pub e_ehsize: u16,

    /// Size of one entry in the program header table, or 0.
    pub e_phentsize: u16,

    /// Number of entries in the program header table.
    pub e_phnum: u16,

    /// Size of one entry in the section header table, or 0.
    pub e_shentsize: u16,

    /// Number of entries in the section header table.
    pub e_shnum: u16,

    /// Index of the section header string table.
    pub e_shstrndx: u16,
}

const _: () = assert!(std::mem::size_of::<Elf64Ehdr>() == SIZEOF_EHDR);

impl Elf64Ehdr {
    pub fn has_elf_magic(&self) -> bool {
        self.e_ident[..SELFMAG] == ELFMAG[..]
    }

    pub fn class(&self) -> u8 {
        self.e_ident[EI_CLASS]
    }

    pub fn is_64(&self) -> bool {
        self.class() == ELFCLASS64
    }
}

impl Record for Elf64Ehdr {
    const SIZE: usize = SIZEOF_EHDR;

    fn read_from<R: io::Read>(cur: &mut R) -> io::Result<Elf64Ehdr> {
        let mut e_ident = [0u8; SIZEOF_IDENT];
        cur.read_exact(&mut e_ident)?;

        Ok(Elf64Ehdr {
            e_ident,
            e_type: cur.read_u16::<NativeEndian>()?,
            e_machine: cur.read_u16::<NativeEndian>()?,
            e_version: cur.read_u32::<NativeEndian>()?,
            e_entry: cur.read_u64::<NativeEndian>()?,
            e_phoff: cur.read_u64::<NativeEndian>()?,
            e_shoff: cur.read_u64::<NativeEndian>()?,
            e_flags: cur.read_u32::<NativeEndian>()?,
            e_ehsize: cur.read_u16::<NativeEndian>()?,
            e_phentsize: cur.read_u16::<NativeEndian>()?,
            e_phnum: cur.read_u16::<NativeEndian>()?,
            e_shentsize: cur.read_u16::<NativeEndian>()?,
            e_shnum: cur.read_u16::<NativeEndian>()?,
            e_shstrndx: cur.read_u16::<NativeEndian>()?,
        })
    }
}

/// The kinds of ELF object accepted, `ET_REL` through `ET_CORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ObjectType {
    Relocatable = ET_REL,
    Executable = ET_EXEC,
    SharedObject = ET_DYN,
    Core = ET_CORE,
}

impl TryFrom<u16> for ObjectType {
    type Error = u16;

    fn try_from(e_type: u16) -> Result<Self, Self::Error> {
        match e_type {
            ET_REL => Ok(ObjectType::Relocatable),
            ET_EXEC => Ok(ObjectType::Executable),
            ET_DYN => Ok(ObjectType::SharedObject),
            ET_CORE => Ok(ObjectType::Core),
            other => Err(other),
        }
    }
}
