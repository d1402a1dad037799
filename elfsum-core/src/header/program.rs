use crate::header::Record;
use byteorder::{NativeEndian, ReadBytesExt};
use goblin::elf64::program_header::SIZEOF_PHDR;
use std::io;

/// One entry of the program header table (`Elf64_Phdr`), describing a segment.
///
/// Fields are stored as read; none of them is interpreted.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elf64Phdr {
    pub p_type: u32,
    pub p_flags: u32,
    pub p_offset: u64,
    pub p_vaddr: u64,
    pub p_paddr: u64,
    pub p_filesz: u64,
    pub p_memsz: u64,
    pub p_align: u64,
}

const _: () = assert!(std::mem::size_of::<Elf64Phdr>() == SIZEOF_PHDR);

impl Record for Elf64Phdr {
    const SIZE: usize = SIZEOF_PHDR;

    fn read_from<R: io::Read>(cur: &mut R) -> io::Result<Elf64Phdr> {
        Ok(Elf64Phdr {
            p_type: cur.read_u32::<NativeEndian>()?,
            p_flags: cur.read_u32::<NativeEndian>()?,
            p_offset: cur.read_u64::<NativeEndian>()?,
            p_vaddr: cur.read_u64::<NativeEndian>()?,
            p_paddr: cur.read_u64::<NativeEndian>()?,
            p_filesz: cur.read_u64::<NativeEndian>()?,
            p_memsz: cur.read_u64::<NativeEndian>()?,
            p_align: cur.read_u64::<NativeEndian>()?,
        })
    }
}
