use crate::header::Record;
use byteorder::{NativeEndian, ReadBytesExt};
use goblin::elf64::section_header::SIZEOF_SHDR;
use std::io;

/// One entry of the section header table (`Elf64_Shdr`).
///
/// Fields are stored as read; the name is an index into the section name
/// string table and is not resolved.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elf64Shdr {
    pub sh_name: u32,
    pub sh_type: u32,
    pub sh_flags: u64,
    pub sh_addr: u64,
    pub sh_offset: u64,
    pub sh_size: u64,
    pub sh_link: u32,
    pub sh_info: u32,
    pub sh_addralign: u64,
    pub sh_entsize: u64,
}

const _: () = assert!(std::mem::size_of::<Elf64Shdr>() == SIZEOF_SHDR);

impl Record for Elf64Shdr {
    const SIZE: usize = SIZEOF_SHDR;

    fn read_from<R: io::Read>(cur: &mut R) -> io::Result<Elf64Shdr> {
        Ok(Elf64Shdr {
            sh_name: cur.read_u32::<NativeEndian>()?,
            sh_type: cur.read_u32::<NativeEndian>()?,
            sh_flags: cur.read_u64::<NativeEndian>()?,
            sh_addr: cur.read_u64::<NativeEndian>()?,
            sh_offset: cur.read_u64::<NativeEndian>()?,
            sh_size: cur.read_u64::<NativeEndian>()?,
            sh_link: cur.read_u32::<NativeEndian>()?,
            sh_info: cur.read_u32::<NativeEndian>()?,
            sh_addralign: cur.read_u64::<NativeEndian>()?,
            sh_entsize: cur.read_u64::<NativeEndian>()?,
        })
    }
}
