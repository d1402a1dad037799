pub mod elf;
pub mod program;
pub mod section;

use std::io;

/// A fixed-size record as laid out on disk.
pub trait Record: Sized + std::fmt::Debug + Copy {
    /// Number of bytes the record occupies in the file.
    const SIZE: usize;

    /// Decodes one record, consuming exactly [`Self::SIZE`] bytes in host byte order.
    ///
    /// A source that runs dry part way through yields
    /// [`io::ErrorKind::UnexpectedEof`].
    fn read_from<R: io::Read>(reader: &mut R) -> io::Result<Self>;
}
