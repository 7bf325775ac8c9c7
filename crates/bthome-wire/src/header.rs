use crate::error::WireError;

/// 16-bit service data UUID assigned to BTHome.
pub const SERVICE_UUID: u16 = 0xFCD2;

/// Size of the device information byte that opens every payload.
pub const HEADER_SIZE: usize = 1;

/// Bit offset of the 3-bit protocol version inside the header byte.
const VERSION_SHIFT: u8 = 5;

/// Device information flags.
///
/// Bit layout:
///   bit 0 = encryption
///   bit 2 = trigger based device (irregular advertising interval)
///   bits 5-7 = protocol version
///
/// Bits 1, 3 and 4 are kept in the raw byte but not interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderFlags(u8);

impl HeaderFlags {
    /// Payload is encrypted (AES-CCM) and cannot be walked as plain fields.
    pub const ENCRYPTED: Self = Self(0b0000_0001);

    /// Device sends advertisements on events rather than on a timer.
    pub const TRIGGER: Self = Self(0b0000_0100);

    /// No flag bits set: plaintext, timer based, version 0.
    pub const NONE: Self = Self(0);

    pub fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u8 {
        self.0
    }

    pub fn is_encrypted(self) -> bool {
        self.0 & Self::ENCRYPTED.0 != 0
    }

    pub fn is_trigger(self) -> bool {
        self.0 & Self::TRIGGER.0 != 0
    }

    /// Protocol version carried in the top three bits.
    pub fn version(self) -> u8 {
        self.0 >> VERSION_SHIFT
    }
}

/// The single header byte at offset 0 of a BTHome service data payload.
///
/// ```text
/// ┌───────┬──────────────────────────────┐
/// │ Bits  │ Meaning                      │
/// ├───────┼──────────────────────────────┤
/// │ 0     │ encrypted                    │
/// │ 1     │ reserved                     │
/// │ 2     │ trigger based                │
/// │ 3-4   │ reserved                     │
/// │ 5-7   │ version (2 for BTHome v2)    │
/// └───────┴──────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PacketHeader {
    pub version: u8,
    pub flags: HeaderFlags,
}

impl PacketHeader {
    /// Parse the header from the first byte of `buf`.
    ///
    /// The version is reported as found; no version is rejected here.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnexpectedEof`] if `buf` is empty.
    pub fn read_from(buf: &[u8]) -> Result<Self, WireError> {
        let raw = *buf.first().ok_or(WireError::UnexpectedEof {
            offset: 0,
            needed: HEADER_SIZE,
        })?;
        let flags = HeaderFlags::from_raw(raw);
        Ok(Self {
            version: flags.version(),
            flags,
        })
    }

    pub fn is_encrypted(&self) -> bool {
        self.flags.is_encrypted()
    }

    pub fn is_trigger(&self) -> bool {
        self.flags.is_trigger()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_v2_header() {
        let header = PacketHeader::read_from(&[0b0100_0000]).unwrap();
        assert_eq!(header.version, 2);
        assert!(!header.is_encrypted());
        assert!(!header.is_trigger());
    }

    #[test]
    fn encrypted_and_trigger_bits() {
        let header = PacketHeader::read_from(&[0b0100_0101]).unwrap();
        assert_eq!(header.version, 2);
        assert!(header.is_encrypted());
        assert!(header.is_trigger());
    }

    #[test]
    fn reserved_bits_are_kept_but_ignored() {
        let header = PacketHeader::read_from(&[0b0101_1010]).unwrap();
        assert_eq!(header.version, 2);
        assert!(!header.is_encrypted());
        assert!(!header.is_trigger());
        assert_eq!(header.flags.raw(), 0b0101_1010);
    }

    #[test]
    fn version_uses_top_three_bits() {
        assert_eq!(HeaderFlags::from_raw(0xE0).version(), 7);
        assert_eq!(HeaderFlags::from_raw(0x1F).version(), 0);
    }

    #[test]
    fn reject_empty_buffer() {
        assert_eq!(
            PacketHeader::read_from(&[]),
            Err(WireError::UnexpectedEof {
                offset: 0,
                needed: 1
            })
        );
    }

    #[test]
    fn flags_default_is_none() {
        let flags = HeaderFlags::default();
        assert_eq!(flags, HeaderFlags::NONE);
        assert!(!flags.is_encrypted());
        assert!(!flags.is_trigger());
    }
}
