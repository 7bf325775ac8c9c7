use crate::error::WireError;

/// Widest integer a single field may carry.
pub const MAX_INT_WIDTH: usize = 4;

/// Borrow `len` bytes starting at `offset`.
///
/// # Errors
///
/// Returns [`WireError::UnexpectedEof`] if fewer than `len` bytes remain.
pub fn take(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], WireError> {
    offset
        .checked_add(len)
        .and_then(|end| buf.get(offset..end))
        .ok_or(WireError::UnexpectedEof {
            offset,
            needed: len,
        })
}

/// Read an unsigned little-endian integer of `width` bytes at `offset`.
///
/// | Bytes              | Width | Value      |
/// |--------------------|-------|------------|
/// | `[0x64]`           | 1     | 100        |
/// | `[0xC4, 0x09]`     | 2     | 2500       |
/// | `[0x13, 0x8A, 0x01]` | 3   | 100_883    |
///
/// # Errors
///
/// - [`WireError::UnsupportedWidth`] if `width` is 0 or above 4.
/// - [`WireError::UnexpectedEof`] if the buffer is too short.
pub fn read_uint_le(buf: &[u8], offset: usize, width: usize) -> Result<u32, WireError> {
    if width == 0 || width > MAX_INT_WIDTH {
        return Err(WireError::UnsupportedWidth { width });
    }
    let bytes = take(buf, offset, width)?;
    let mut scratch = [0u8; MAX_INT_WIDTH];
    scratch[..width].copy_from_slice(bytes);
    Ok(u32::from_le_bytes(scratch))
}

/// Read a two's-complement little-endian integer of `width` bytes.
///
/// The value is sign-extended from bit `8 * width - 1`, so a 3-byte
/// `[0xFF, 0xFF, 0xFF]` reads as -1 rather than 16 777 215.
///
/// # Errors
///
/// Same as [`read_uint_le`].
pub fn read_int_le(buf: &[u8], offset: usize, width: usize) -> Result<i32, WireError> {
    let raw = read_uint_le(buf, offset, width)?;
    let unused = 32 - 8 * u32::try_from(width).map_err(|_| WireError::UnsupportedWidth { width })?;
    // Shift the sign bit up to bit 31, then arithmetic-shift back down.
    #[allow(clippy::cast_possible_wrap)]
    let value = ((raw << unused) as i32) >> unused;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_widths() {
        assert_eq!(read_uint_le(&[0x64], 0, 1).unwrap(), 100);
        assert_eq!(read_uint_le(&[0xC4, 0x09], 0, 2).unwrap(), 2500);
        assert_eq!(read_uint_le(&[0x13, 0x8A, 0x01], 0, 3).unwrap(), 100_883);
        assert_eq!(
            read_uint_le(&[0xFF, 0xFF, 0xFF, 0xFF], 0, 4).unwrap(),
            u32::MAX
        );
    }

    #[test]
    fn signed_values_are_sign_extended() {
        assert_eq!(read_int_le(&[0xCE, 0xFF], 0, 2).unwrap(), -50);
        assert_eq!(read_int_le(&[0xFF], 0, 1).unwrap(), -1);
        assert_eq!(read_int_le(&[0xFF, 0xFF, 0xFF], 0, 3).unwrap(), -1);
        assert_eq!(read_int_le(&[0x00, 0x00, 0x80], 0, 3).unwrap(), -8_388_608);
        assert_eq!(read_int_le(&[0x7F], 0, 1).unwrap(), 127);
        assert_eq!(
            read_int_le(&[0x00, 0x00, 0x00, 0x80], 0, 4).unwrap(),
            i32::MIN
        );
    }

    #[test]
    fn reads_at_offset() {
        let buf = [0xAA, 0x34, 0x12, 0xBB];
        assert_eq!(read_uint_le(&buf, 1, 2).unwrap(), 0x1234);
    }

    #[test]
    fn truncated_read_reports_offset() {
        let result = read_uint_le(&[0x01, 0x02], 1, 2);
        assert_eq!(
            result,
            Err(WireError::UnexpectedEof {
                offset: 1,
                needed: 2
            })
        );
    }

    #[test]
    fn offset_past_end() {
        assert!(matches!(
            take(&[0x01], 5, 1),
            Err(WireError::UnexpectedEof { offset: 5, .. })
        ));
    }

    #[test]
    fn rejects_bad_widths() {
        assert_eq!(
            read_uint_le(&[0; 8], 0, 0),
            Err(WireError::UnsupportedWidth { width: 0 })
        );
        assert_eq!(
            read_int_le(&[0; 8], 0, 5),
            Err(WireError::UnsupportedWidth { width: 5 })
        );
    }

    #[test]
    fn take_zero_bytes_at_end() {
        assert_eq!(take(&[0x01], 1, 0).unwrap(), &[] as &[u8]);
    }
}
