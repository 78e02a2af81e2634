//! Object image loading: the first word of the file is the origin address,
//! every word after that is loaded starting there, big-endian on disk.

use super::memory::Memory;
use crate::error::LoadError;

use byteorder::{BigEndian, ReadBytesExt};
use std::io::{self, Read};
use std::path::Path;

/// Reads an LC-3 object image from `reader` into `mem`, starting at the
/// origin address encoded in the image's first word.
///
/// Stops silently at end of file; an image that runs past the top of
/// memory is truncated rather than treated as an error.
pub fn load<R: Read>(mem: &mut Memory, mut reader: R) -> io::Result<()> {
    let origin = reader.read_u16::<BigEndian>()?;
    let mut address = origin;
    loop {
        match reader.read_u16::<BigEndian>() {
            Ok(instr) => mem.write(address, instr),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        }
        address = address.wrapping_add(1);
    }
    Ok(())
}

/// Opens and loads the image at `path`, wrapping any I/O failure in a
/// [`LoadError`] that carries the offending path.
pub fn load_file(mem: &mut Memory, path: &Path) -> Result<(), LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })?;
    load(mem, file).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })
}
