//! Tagged 32-byte balance-holder identifier.

use core::fmt;

use alloy_primitives::{Address, U256};

use crate::error::{ExchangeError, Result};

/// Tag byte for an external account.
const TAG_EXTERNAL: u8 = 0x01;
/// Tag byte for an internal (custodial) account.
const TAG_INTERNAL: u8 = 0x02;
/// Tag byte for a pool.
const TAG_POOL: u8 = 0x03;

/// Maximum width of a pool identifier in bits.
const POOL_ID_BITS: usize = 248;

/// Byte offset where the 20-byte address starts under tags 0x01/0x02.
const ADDRESS_OFFSET: usize = 12;

/// Description returned for any structurally invalid location.
const INVALID: &str = "invalid location";

/// Who holds a balance, classified from a [`Location`]'s byte layout.
///
/// `Invalid` covers every structural malformation: an unknown tag byte, or
/// non-zero reserved bytes under the account tags. Classification is total
/// so batch callers are never interrupted by one bad value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    /// An external account, identified by its 20-byte address.
    External(Address),
    /// An internal (custodial) account, identified by its 20-byte address.
    Internal(Address),
    /// A pool, identified by an unsigned integer of up to 248 bits.
    Pool(U256),
    /// A structurally malformed location.
    Invalid,
}

/// A tagged 32-byte identifier of a balance holder.
///
/// Byte layout, big-endian left to right:
///
/// | Byte 0 | Bytes 1–11 | Bytes 12–31 |
/// |--------|------------|-------------|
/// | `0x01` external | zero (reserved) | 20-byte address |
/// | `0x02` internal | zero (reserved) | 20-byte address |
/// | `0x03` pool | big-endian pool id (bytes 1–31) | |
///
/// Any other tag value, or non-zero reserved bytes under the account tags,
/// makes the location invalid. Decoding detects and reports this via
/// [`classify`](Self::classify) rather than silently coercing.
///
/// # Examples
///
/// ```
/// use alloy_primitives::{Address, U256};
/// use tideswap_core::domain::Location;
///
/// let loc = Location::external(Address::new([0x11; 20]));
/// assert!(loc.to_string().ends_with("external balance"));
///
/// let pool = Location::pool(U256::from(7u8)).expect("7 fits 248 bits");
/// assert_eq!(pool.to_string(), "poolID 7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct Location([u8; 32]);

impl Location {
    /// Encodes an external account holder.
    pub fn external(address: Address) -> Self {
        Self::tagged_address(TAG_EXTERNAL, address)
    }

    /// Encodes an internal (custodial) account holder.
    pub fn internal(address: Address) -> Self {
        Self::tagged_address(TAG_INTERNAL, address)
    }

    fn tagged_address(tag: u8, address: Address) -> Self {
        let mut bytes = [0u8; 32];
        bytes[0] = tag;
        bytes[ADDRESS_OFFSET..].copy_from_slice(address.as_slice());
        Self(bytes)
    }

    /// Encodes a pool holder from its numeric identifier.
    ///
    /// The identifier is embedded right-aligned in bytes 1–31.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::RangeExceeded`] if `pool_id` does not fit in
    /// 248 bits.
    pub fn pool(pool_id: U256) -> Result<Self> {
        if pool_id.bit_len() > POOL_ID_BITS {
            return Err(ExchangeError::RangeExceeded("pool id exceeds 248 bits"));
        }
        // id < 2^248, so the top byte of the big-endian form is free for the tag.
        let mut bytes = pool_id.to_be_bytes::<32>();
        bytes[0] = TAG_POOL;
        Ok(Self(bytes))
    }

    /// Reinterprets raw bytes as a location without validation.
    ///
    /// Malformed input is accepted here and surfaces as
    /// [`LocationKind::Invalid`] on classification.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the 32-byte wire representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Classifies the holder from the byte layout. Total.
    #[must_use]
    pub fn classify(&self) -> LocationKind {
        match self.0[0] {
            tag @ (TAG_EXTERNAL | TAG_INTERNAL) => {
                if self.0[1..ADDRESS_OFFSET].iter().any(|b| *b != 0) {
                    return LocationKind::Invalid;
                }
                let address = Address::from_slice(&self.0[ADDRESS_OFFSET..]);
                if tag == TAG_EXTERNAL {
                    LocationKind::External(address)
                } else {
                    LocationKind::Internal(address)
                }
            }
            TAG_POOL => {
                let mut id = self.0;
                id[0] = 0;
                LocationKind::Pool(U256::from_be_bytes(id))
            }
            _ => LocationKind::Invalid,
        }
    }

    /// Describes an arbitrary byte string as a holder. Never fails.
    ///
    /// Returns one of:
    ///
    /// - `"<EIP-55 address> external balance"`
    /// - `"<EIP-55 address> internal balance"`
    /// - `"poolID <decimal>"`
    /// - `"invalid location"` — wrong length, unknown tag, or dirty
    ///   reserved bytes.
    #[must_use]
    pub fn describe(bytes: &[u8]) -> String {
        match <[u8; 32]>::try_from(bytes) {
            Ok(fixed) => Self::from_bytes(fixed).to_string(),
            Err(_) => INVALID.to_string(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.classify() {
            LocationKind::External(address) => {
                write!(f, "{} external balance", address.to_checksum(None))
            }
            LocationKind::Internal(address) => {
                write!(f, "{} internal balance", address.to_checksum(None))
            }
            LocationKind::Pool(id) => write!(f, "poolID {id}"),
            LocationKind::Invalid => f.write_str(INVALID),
        }
    }
}
