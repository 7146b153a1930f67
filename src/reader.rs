use std::io::{BufReader, ErrorKind, Read};

use crate::{Error, FormatError};

/// Buffered reader over an abstract byte source with one-byte pushback.
///
/// This is the primitive substrate the decoder is built on: one byte of
/// lookahead is all the bencode grammar ever needs, so exactly one byte of
/// pushback is supported.
pub struct ByteStreamReader<R: Read> {
    source: BufReader<R>,
    pushback: Option<u8>,
}

impl<R: Read> ByteStreamReader<R> {
    /// Wrap a byte source.
    pub fn new(source: R) -> Self {
        Self {
            source: BufReader::new(source),
            pushback: None,
        }
    }

    /// Consume and return one byte, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the source. `Interrupted` reads are
    /// retried.
    pub fn read_byte(&mut self) -> Result<Option<u8>, Error> {
        if let Some(b) = self.pushback.take() {
            return Ok(Some(b));
        }
        let mut buf = [0u8; 1];
        loop {
            match self.source.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Push exactly one byte back; the next [`read_byte`](Self::read_byte)
    /// returns it.
    ///
    /// # Panics
    ///
    /// Panics if a byte is already pushed back. The format never requires
    /// more than one byte of lookahead.
    pub fn unread_byte(&mut self, byte: u8) {
        assert!(
            self.pushback.is_none(),
            "only one byte of pushback is supported"
        );
        self.pushback = Some(byte);
    }

    /// Return the next byte without consuming it, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the source.
    pub fn peek_byte(&mut self) -> Result<Option<u8>, Error> {
        let next = self.read_byte()?;
        if let Some(b) = next {
            self.unread_byte(b);
        }
        Ok(next)
    }

    /// Fill `buf` from the stream, returning how many bytes were read.
    ///
    /// A count shorter than `buf.len()` means the stream ended first.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the source.
    pub fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        let mut filled = 0;
        if let Some(b) = self.pushback.take() {
            if buf.is_empty() {
                self.pushback = Some(b);
                return Ok(0);
            }
            buf[0] = b;
            filled = 1;
        }
        while filled < buf.len() {
            match self.source.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(filled)
    }

    /// Accumulate bytes until `stop` is seen; `stop` is consumed but excluded
    /// from the result.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnexpectedEndOfStream`] if the stream ended
    /// before any byte was accumulated, or
    /// [`FormatError::StopSymbolNotReached`] if bytes were accumulated but
    /// the stream ended without the stop byte. I/O errors propagate.
    pub fn read_until(&mut self, stop: u8) -> Result<Vec<u8>, Error> {
        let mut accumulated = Vec::new();
        loop {
            match self.read_byte()? {
                Some(b) if b == stop => return Ok(accumulated),
                Some(b) => accumulated.push(b),
                None if accumulated.is_empty() => {
                    return Err(FormatError::UnexpectedEndOfStream.into())
                }
                None => return Err(FormatError::StopSymbolNotReached(stop as char).into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(bytes: &[u8]) -> ByteStreamReader<&[u8]> {
        ByteStreamReader::new(bytes)
    }

    #[test]
    fn read_byte_then_eof() {
        let mut r = reader(b"a");
        assert_eq!(r.read_byte().unwrap(), Some(b'a'));
        assert_eq!(r.read_byte().unwrap(), None);
        assert_eq!(r.read_byte().unwrap(), None);
    }

    #[test]
    fn pushback_is_returned_first() {
        let mut r = reader(b"bc");
        assert_eq!(r.read_byte().unwrap(), Some(b'b'));
        r.unread_byte(b'b');
        assert_eq!(r.read_byte().unwrap(), Some(b'b'));
        assert_eq!(r.read_byte().unwrap(), Some(b'c'));
    }

    #[test]
    fn peek_does_not_consume() {
        let mut r = reader(b"x");
        assert_eq!(r.peek_byte().unwrap(), Some(b'x'));
        assert_eq!(r.read_byte().unwrap(), Some(b'x'));
        assert_eq!(r.peek_byte().unwrap(), None);
    }

    #[test]
    fn read_exact_into_reports_short_reads() {
        let mut r = reader(b"abc");
        let mut buf = [0u8; 5];
        assert_eq!(r.read_exact_into(&mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], b"abc");
    }

    #[test]
    fn read_exact_into_drains_pushback() {
        let mut r = reader(b"yz");
        let b = r.read_byte().unwrap().unwrap();
        r.unread_byte(b);
        let mut buf = [0u8; 2];
        assert_eq!(r.read_exact_into(&mut buf).unwrap(), 2);
        assert_eq!(&buf, b"yz");
    }

    #[test]
    fn read_until_excludes_stop() {
        let mut r = reader(b"123:rest");
        assert_eq!(r.read_until(b':').unwrap(), b"123");
        assert_eq!(r.read_byte().unwrap(), Some(b'r'));
    }

    #[test]
    fn read_until_empty_at_eof() {
        let mut r = reader(b"");
        let err = r.read_until(b'e').unwrap_err();
        assert_eq!(
            err.as_format(),
            Some(&FormatError::UnexpectedEndOfStream)
        );
    }

    #[test]
    fn read_until_partial_at_eof() {
        let mut r = reader(b"42");
        let err = r.read_until(b'e').unwrap_err();
        assert_eq!(
            err.as_format(),
            Some(&FormatError::StopSymbolNotReached('e'))
        );
    }
}
