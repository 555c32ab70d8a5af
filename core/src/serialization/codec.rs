//! Big-endian u64 codec
//!
//! Every serialized layout is a fixed number of 64-bit words written most
//! significant byte first. Stream helpers stage the whole layout in a stack
//! buffer so a stream sees one `write_all` / `read_exact` per layout.

use std::io::{Read, Write};

use super::SerializationError;

pub const WORD_SIZE: usize = std::mem::size_of::<u64>();

/// Largest layout in words (ChaCha20, 64 bytes).
pub const MAX_WORDS: usize = 8;

/// Write `value` into the first 8 bytes of `buffer`, returning the rest.
pub fn put_u64(value: u64, buffer: &mut [u8]) -> Result<&mut [u8], SerializationError> {
    ensure_capacity(WORD_SIZE, buffer.len())?;
    let (head, rest) = buffer.split_at_mut(WORD_SIZE);
    head.copy_from_slice(&value.to_be_bytes());
    Ok(rest)
}

/// Read a value from the first 8 bytes of `buffer`, returning the rest.
pub fn get_u64(buffer: &[u8]) -> Result<(u64, &[u8]), SerializationError> {
    ensure_capacity(WORD_SIZE, buffer.len())?;
    let (head, rest) = buffer.split_at(WORD_SIZE);
    let mut bytes = [0u8; WORD_SIZE];
    bytes.copy_from_slice(head);
    Ok((u64::from_be_bytes(bytes), rest))
}

/// Encode `words` back to back; returns the number of bytes written.
pub fn encode_words(words: &[u64], buffer: &mut [u8]) -> Result<usize, SerializationError> {
    let needed = words.len() * WORD_SIZE;
    ensure_capacity(needed, buffer.len())?;

    for (chunk, word) in buffer[..needed].chunks_exact_mut(WORD_SIZE).zip(words) {
        put_u64(*word, chunk)?;
    }
    Ok(needed)
}

/// Decode `words.len()` words; returns the number of bytes consumed.
pub fn decode_words(buffer: &[u8], words: &mut [u64]) -> Result<usize, SerializationError> {
    let needed = words.len() * WORD_SIZE;
    ensure_capacity(needed, buffer.len())?;

    let mut rest = buffer;
    for word in words.iter_mut() {
        let (value, tail) = get_u64(rest)?;
        *word = value;
        rest = tail;
    }
    Ok(needed)
}

pub fn write_words<W: Write + ?Sized>(
    words: &[u64],
    target: &mut W,
) -> Result<(), SerializationError> {
    let mut bytes = [0u8; MAX_WORDS * WORD_SIZE];
    let written = encode_words(words, &mut bytes)?;
    target.write_all(&bytes[..written])?;
    Ok(())
}

/// Fill `words` from `source`. A stream that ends early surfaces as
/// `io::ErrorKind::UnexpectedEof`.
pub fn read_words<R: Read + ?Sized>(
    source: &mut R,
    words: &mut [u64],
) -> Result<(), SerializationError> {
    let mut bytes = [0u8; MAX_WORDS * WORD_SIZE];
    let needed = words.len() * WORD_SIZE;
    ensure_capacity(needed, bytes.len())?;

    source.read_exact(&mut bytes[..needed])?;
    decode_words(&bytes[..needed], words)?;
    Ok(())
}

fn ensure_capacity(needed: usize, available: usize) -> Result<(), SerializationError> {
    if available < needed {
        return Err(SerializationError::BufferTooSmall { needed, available });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, ErrorKind};

    #[test]
    fn test_put_u64_is_big_endian() {
        let mut buffer = [0u8; 10];
        let rest = put_u64(0x0102030405060708, &mut buffer).unwrap();
        assert_eq!(rest.len(), 2);
        assert_eq!(&buffer[..8], &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_get_u64_returns_remainder() {
        let buffer = [0, 0, 0, 0, 0, 0, 0, 1, 0xff];
        let (value, rest) = get_u64(&buffer).unwrap();
        assert_eq!(value, 1);
        assert_eq!(rest, &[0xff]);
    }

    #[test]
    fn test_short_buffer_rejected() {
        let mut buffer = [0u8; 15];
        match encode_words(&[1, 2], &mut buffer) {
            Err(SerializationError::BufferTooSmall { needed, available }) => {
                assert_eq!(needed, 16);
                assert_eq!(available, 15);
            }
            other => panic!("expected BufferTooSmall, got {:?}", other),
        }
        assert_eq!(buffer, [0u8; 15], "nothing written on failure");
    }

    #[test]
    fn test_stream_words() {
        let mut target = Vec::new();
        write_words(&[u64::MAX, 0, 0x2a], &mut target).unwrap();
        assert_eq!(target.len(), 24);
        assert_eq!(target[23], 0x2a);

        let mut words = [0u64; 3];
        read_words(&mut Cursor::new(&target), &mut words).unwrap();
        assert_eq!(words, [u64::MAX, 0, 0x2a]);
    }

    #[test]
    fn test_short_stream_is_unexpected_eof() {
        let mut words = [0u64; 2];
        let err = read_words(&mut Cursor::new(vec![0u8; 12]), &mut words).unwrap_err();
        match err {
            SerializationError::Io(e) => assert_eq!(e.kind(), ErrorKind::UnexpectedEof),
            other => panic!("expected Io, got {:?}", other),
        }
    }
}
