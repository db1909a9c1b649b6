use std::io;

use arrayref::array_ref;
use solana_program::pubkey::Pubkey;

pub trait ReadExt: io::Read {
    #[inline]
    fn read_u8(&mut self) -> io::Result<u8> {
        let mut buf = [0; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    #[inline]
    fn read_u32_le(&mut self) -> io::Result<u32> {
        let mut buf = [0; 4];
        self.read_exact(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    #[inline]
    fn read_i64_le(&mut self) -> io::Result<i64> {
        let mut buf = [0; 8];
        self.read_exact(&mut buf)?;
        Ok(i64::from_le_bytes(buf))
    }

    #[inline]
    fn read_bytes(&mut self, len: usize) -> io::Result<Vec<u8>> {
        let mut buf = vec![0; len];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }
}
impl<R: io::Read + ?Sized> ReadExt for R {}

pub trait WriteExt: io::Write {
    #[inline]
    fn write_u8(&mut self, n: u8) -> io::Result<()> {
        self.write_all(&n.to_le_bytes())
    }

    #[inline]
    fn write_u32_le(&mut self, n: u32) -> io::Result<()> {
        self.write_all(&n.to_le_bytes())
    }

    #[inline]
    fn write_i64_le(&mut self, n: i64) -> io::Result<()> {
        self.write_all(&n.to_le_bytes())
    }
}
impl<W: io::Write + ?Sized> WriteExt for W {}

/// Reads a [`Pubkey`] from the front of a slice. `bytes` must be at least 32 long.
#[inline]
pub fn pubkey_from_slice(bytes: &[u8]) -> Pubkey {
    Pubkey::new_from_array(*array_ref![bytes, 0, 32])
}
