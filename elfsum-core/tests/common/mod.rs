//! Synthetic ELF64 images for the integration tests.
#![allow(dead_code)]

use goblin::elf::header::{ELFCLASS64, ELFDATA2LSB, ELFDATA2MSB, ET_EXEC, EV_CURRENT};
use goblin::elf::program_header::{PF_R, PT_LOAD};
use goblin::elf::section_header::SHT_PROGBITS;

pub const EHDR_SIZE: usize = 64;
pub const PHDR_SIZE: usize = 56;
pub const SHDR_SIZE: usize = 64;

/// Header fields the tests care about; everything else is filled with plausible values.
#[derive(Debug, Clone, Copy)]
pub struct HeaderFields {
    pub magic: [u8; 4],
    pub class: u8,
    pub e_type: u16,
    pub phoff: u64,
    pub phentsize: u16,
    pub phnum: u16,
    pub shoff: u64,
    pub shentsize: u16,
    pub shnum: u16,
}

impl Default for HeaderFields {
    fn default() -> Self {
        Self {
            magic: *b"\x7fELF",
            class: ELFCLASS64,
            e_type: ET_EXEC,
            phoff: 0,
            phentsize: PHDR_SIZE as u16,
            phnum: 0,
            shoff: 0,
            shentsize: SHDR_SIZE as u16,
            shnum: 0,
        }
    }
}

impl HeaderFields {
    pub fn encode(&self) -> Vec<u8> {
        let data = if cfg!(target_endian = "little") {
            ELFDATA2LSB
        } else {
            ELFDATA2MSB
        };
        let mut buf = Vec::with_capacity(EHDR_SIZE);
        buf.extend_from_slice(&self.magic);
        buf.extend_from_slice(&[self.class, data, EV_CURRENT]);
        buf.resize(16, 0);
        buf.extend_from_slice(&self.e_type.to_ne_bytes());
        buf.extend_from_slice(&62u16.to_ne_bytes());
        buf.extend_from_slice(&u32::from(EV_CURRENT).to_ne_bytes());
        buf.extend_from_slice(&0x401000u64.to_ne_bytes());
        buf.extend_from_slice(&self.phoff.to_ne_bytes());
        buf.extend_from_slice(&self.shoff.to_ne_bytes());
        buf.extend_from_slice(&0u32.to_ne_bytes());
        buf.extend_from_slice(&(EHDR_SIZE as u16).to_ne_bytes());
        buf.extend_from_slice(&self.phentsize.to_ne_bytes());
        buf.extend_from_slice(&self.phnum.to_ne_bytes());
        buf.extend_from_slice(&self.shentsize.to_ne_bytes());
        buf.extend_from_slice(&self.shnum.to_ne_bytes());
        buf.extend_from_slice(&0u16.to_ne_bytes());
        assert_eq!(buf.len(), EHDR_SIZE);
        buf
    }
}

/// A loadable segment whose virtual address encodes its index.
pub fn phdr(index: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(PHDR_SIZE);
    buf.extend_from_slice(&PT_LOAD.to_ne_bytes());
    buf.extend_from_slice(&PF_R.to_ne_bytes());
    let vaddr = 0x400000 + index * 0x1000;
    for field in [index * 0x1000, vaddr, vaddr, 0x1000, 0x1000, 0x1000] {
        buf.extend_from_slice(&field.to_ne_bytes());
    }
    buf
}

/// A progbits section whose name index encodes its index.
pub fn shdr(index: u32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(SHDR_SIZE);
    buf.extend_from_slice(&index.to_ne_bytes());
    buf.extend_from_slice(&SHT_PROGBITS.to_ne_bytes());
    for field in [0u64, 0, 0, 0] {
        buf.extend_from_slice(&field.to_ne_bytes());
    }
    buf.extend_from_slice(&0u32.to_ne_bytes());
    buf.extend_from_slice(&0u32.to_ne_bytes());
    buf.extend_from_slice(&1u64.to_ne_bytes());
    buf.extend_from_slice(&0u64.to_ne_bytes());
    buf
}

/// A well-formed image: header, `phnum` program headers, then `shnum` section headers.
pub fn image(phnum: u16, shnum: u16) -> Vec<u8> {
    let phoff = EHDR_SIZE as u64;
    let shoff = phoff + u64::from(phnum) * PHDR_SIZE as u64;
    let mut buf = HeaderFields {
        phoff,
        phnum,
        shoff,
        shnum,
        ..HeaderFields::default()
    }
    .encode();
    for i in 0..phnum {
        buf.extend_from_slice(&phdr(u64::from(i)));
    }
    for i in 0..shnum {
        buf.extend_from_slice(&shdr(u32::from(i)));
    }
    buf
}
