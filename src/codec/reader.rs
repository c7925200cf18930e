use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Error, Result};
use super::SectionKind;

const MAX_STRING_LEN: usize = 1024 * 1024;

/// Binary reader over a world file.
///
/// Offsets are always absolute positions in the whole file, also for a
/// reader bounded to one section, so errors point at the byte in the file.
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    pos: usize,
    end: usize,
    section: SectionKind,
}

impl<'a> BinaryReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0, end: data.len(), section: SectionKind::Header }
    }

    /// A reader over `[start, end)` of the same file. Reads past `end`
    /// fail with `CorruptSection` unless `end` is the end of the file.
    pub fn bounded(&self, start: usize, end: usize, section: SectionKind) -> Result<BinaryReader<'a>> {
        if start > end || end > self.data.len() {
            return Err(Error::CorruptHeader {
                offset: start,
                reason: format!("{section} section [{start}, {end}) outside file of {} bytes", self.data.len()),
            });
        }
        Ok(Self { data: self.data, pos: start, end, section })
    }

    pub fn section(&self) -> SectionKind {
        self.section
    }

    pub fn remaining(&self) -> usize {
        self.end.saturating_sub(self.pos)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Jump to an absolute offset inside this reader's bounds.
    pub fn seek(&mut self, offset: usize) -> Result<()> {
        if offset > self.end {
            return Err(self.out_of_bounds(offset - self.pos));
        }
        self.pos = offset;
        Ok(())
    }

    fn out_of_bounds(&self, need: usize) -> Error {
        if self.end < self.data.len() {
            Error::CorruptSection { section: self.section, offset: self.pos, bound: self.end }
        } else {
            Error::TruncatedInput { offset: self.pos, need, have: self.remaining() }
        }
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        if self.remaining() < n {
            return Err(self.out_of_bounds(n));
        }
        self.pos += n;
        Ok(())
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(self.out_of_bounds(n));
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.read_bytes(2)?))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(LittleEndian::read_i16(self.read_bytes(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.read_bytes(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(self.read_bytes(8)?))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(LittleEndian::read_i64(self.read_bytes(8)?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(LittleEndian::read_f64(self.read_bytes(8)?))
    }

    /// Read a 7-bit encoded length (low groups first, high bit = more follow)
    pub fn read_var_len(&mut self) -> Result<usize> {
        let start = self.pos;
        let mut value = 0usize;
        for shift in (0..35).step_by(7) {
            let byte = self.read_u8()?;
            value |= ((byte & 0x7F) as usize) << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(Error::MalformedField {
            offset: start,
            field: "string length",
            reason: "length prefix longer than 5 bytes".into(),
        })
    }

    /// Read a length-prefixed UTF-8 string
    pub fn read_string(&mut self) -> Result<String> {
        let start = self.pos;
        let len = self.read_var_len()?;
        if len > MAX_STRING_LEN {
            return Err(Error::MalformedField {
                offset: start,
                field: "string",
                reason: format!("{len} bytes (max {MAX_STRING_LEN})"),
            });
        }
        let bytes = self.read_bytes(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| Error::MalformedField {
            offset: start,
            field: "string",
            reason: "invalid UTF-8".into(),
        })
    }

    /// Read `n` booleans packed eight to a byte, least significant bit first
    pub fn read_bits(&mut self, n: usize) -> Result<Vec<bool>> {
        let bytes = self.read_bytes(n.div_ceil(8))?;
        Ok((0..n).map(|i| bytes[i / 8] & (1 << (i % 8)) != 0).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_primitives() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let mut reader = BinaryReader::new(&data);

        assert_eq!(reader.read_u8().unwrap(), 0x01);
        assert_eq!(reader.read_u16().unwrap(), 0x0302);
        assert_eq!(reader.read_u32().unwrap(), 0x07060504);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_truncated_read_does_not_advance() {
        let data = [0xAA, 0xBB, 0xCC];
        let mut reader = BinaryReader::new(&data);
        reader.read_u8().unwrap();

        match reader.read_u32() {
            Err(Error::TruncatedInput { offset, need, have }) => {
                assert_eq!((offset, need, have), (1, 4, 2));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.read_u16().unwrap(), 0xCCBB);
    }

    #[test]
    fn test_bounded_reader_reports_section() {
        let data = [0u8; 16];
        let file = BinaryReader::new(&data);
        let mut props = file.bounded(4, 10, SectionKind::Properties).unwrap();
        assert_eq!(props.position(), 4);
        props.read_u32().unwrap();

        match props.read_u32() {
            Err(Error::CorruptSection { section, offset, bound }) => {
                assert_eq!(section, SectionKind::Properties);
                assert_eq!((offset, bound), (8, 10));
            }
            other => panic!("unexpected {other:?}"),
        }

        // A section ending at the end of the file is a truncation instead.
        let mut last = file.bounded(12, 16, SectionKind::Signs).unwrap();
        assert!(matches!(last.read_u64(), Err(Error::TruncatedInput { offset: 12, .. })));
    }

    #[test]
    fn test_bounded_outside_file() {
        let data = [0u8; 4];
        let file = BinaryReader::new(&data);
        assert!(matches!(
            file.bounded(2, 5, SectionKind::Tiles),
            Err(Error::CorruptHeader { .. })
        ));
    }

    #[test]
    fn test_seek() {
        let data = [1, 2, 3, 4];
        let mut reader = BinaryReader::new(&data);
        reader.seek(3).unwrap();
        assert_eq!(reader.read_u8().unwrap(), 4);
        reader.seek(4).unwrap();
        assert!(reader.is_empty());
        assert!(reader.seek(5).is_err());
    }

    #[test]
    fn test_read_string() {
        let data = [0x05, b'h', b'e', b'l', b'l', b'o'];
        let mut reader = BinaryReader::new(&data);
        assert_eq!(reader.read_string().unwrap(), "hello");
    }

    #[test]
    fn test_read_var_len_multi_byte() {
        // 300 = 0b1_0010_1100 -> 0xAC 0x02
        let data = [0xAC, 0x02];
        let mut reader = BinaryReader::new(&data);
        assert_eq!(reader.read_var_len().unwrap(), 300);

        let data = [0xFF; 6];
        let mut reader = BinaryReader::new(&data);
        assert!(matches!(reader.read_var_len(), Err(Error::MalformedField { offset: 0, .. })));
    }

    #[test]
    fn test_read_bits() {
        let data = [0b0000_0101, 0b0000_0010];
        let mut reader = BinaryReader::new(&data);
        let bits = reader.read_bits(10).unwrap();
        assert_eq!(bits.len(), 10);
        assert_eq!(
            bits.iter().enumerate().filter(|(_, b)| **b).map(|(i, _)| i).collect::<Vec<_>>(),
            vec![0, 2, 9]
        );
        assert!(reader.is_empty());
    }
}
