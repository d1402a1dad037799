use crate::error::{ElfParseError, Result, Stage};
use crate::header::elf::{Elf64Ehdr, ObjectType};
use crate::header::program::Elf64Phdr;
use crate::header::section::Elf64Shdr;
use crate::header::Record;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// A validated ELF64 file header together with its program and section header tables.
///
/// Only obtainable through a load that passed every check, so the entry
/// counts always match what the header declares.
#[derive(Debug, Clone)]
pub struct ElfDescriptor {
    header: Elf64Ehdr,
    object_type: ObjectType,
    program_headers: Vec<Elf64Phdr>,
    section_headers: Vec<Elf64Shdr>,
}

/// Number of entries collected from each header table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub program_header_count: usize,
    pub section_header_count: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "program headers: {}", self.program_header_count)?;
        write!(f, "section headers: {}", self.section_header_count)
    }
}

impl ElfDescriptor {
    /// Opens the file at `path` and validates it, see [`ElfDescriptor::from_reader`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ElfParseError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Opened {}", path.display());

        // The file is closed when the reader drops, on success and on every error.
        Self::from_reader(BufReader::new(file))
    }

    /// Validates an ELF64 image starting at offset 0 of `source`.
    ///
    /// Checks run in file order and stop at the first failure: header length,
    /// magic, class, object type, both entry sizes, then the program and section
    /// header tables are read in full.
    pub fn from_reader<R: Read + Seek>(mut source: R) -> Result<Self> {
        source.rewind().map_err(|err| {
            log::debug!("Cannot rewind source: {err}");
            ElfParseError::Truncated(Stage::Header)
        })?;
        let header: Elf64Ehdr = read_record(&mut source, Stage::Header)?;

        if !header.has_elf_magic() {
            return Err(ElfParseError::BadMagic);
        }
        if !header.is_64() {
            return Err(ElfParseError::UnsupportedClass(header.class()));
        }
        let object_type =
            ObjectType::try_from(header.e_type).map_err(ElfParseError::InvalidType)?;
        check_entry_size::<Elf64Phdr>(header.e_phentsize, Stage::Phdr)?;
        check_entry_size::<Elf64Shdr>(header.e_shentsize, Stage::Shdr)?;
        log::trace!("{object_type:?} header passed structural checks");

        let program_headers = read_table(&mut source, header.e_phoff, header.e_phnum, Stage::Phdr)?;
        let section_headers = read_table(&mut source, header.e_shoff, header.e_shnum, Stage::Shdr)?;

        Ok(Self {
            header,
            object_type,
            program_headers,
            section_headers,
        })
    }

    pub fn header(&self) -> &Elf64Ehdr {
        &self.header
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    /// Program header entries in file order.
    pub fn program_headers(&self) -> &[Elf64Phdr] {
        &self.program_headers
    }

    /// Section header entries in file order.
    pub fn section_headers(&self) -> &[Elf64Shdr] {
        &self.section_headers
    }

    pub fn summary(&self) -> Summary {
        Summary {
            program_header_count: self.program_headers.len(),
            section_header_count: self.section_headers.len(),
        }
    }
}

fn read_record<T: Record, R: Read>(source: &mut R, stage: Stage) -> Result<T> {
    T::read_from(source).map_err(|err| {
        log::debug!("Short {stage} read: {err}");
        ElfParseError::Truncated(stage)
    })
}

/// A declared entry size of 0 is accepted; anything else must be the record size.
fn check_entry_size<T: Record>(size: u16, table: Stage) -> Result<()> {
    if size != 0 && usize::from(size) != T::SIZE {
        return Err(ElfParseError::BadEntrySize {
            table,
            size,
            expected: T::SIZE,
        });
    }
    Ok(())
}

fn read_table<T: Record, R: Read + Seek>(
    source: &mut R,
    offset: u64,
    count: u16,
    table: Stage,
) -> Result<Vec<T>> {
    if count == 0 {
        return Ok(Vec::new());
    }

    source.seek(SeekFrom::Start(offset)).map_err(|err| {
        log::debug!("Cannot seek to {table} table at {offset:#x}: {err}");
        ElfParseError::InvalidOffset { table, offset }
    })?;
    log::debug!("Reading {count} {table} entries at {offset:#x}");

    // Not preallocated from the declared count.
    let mut entries = Vec::new();
    for _ in 0..count {
        entries.push(read_record(source, table)?);
    }
    Ok(entries)
}
