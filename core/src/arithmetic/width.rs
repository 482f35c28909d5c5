use super::InvalidBitWidth;

/// Largest supported width. Operands are `u64`, so `2^bits - 1` must fit in
/// one with a bit to spare.
pub const MAX_BIT_WIDTH: u32 = 63;

/// Number of bits every operand and result must fit in.
///
/// ```
/// use bitcalc_core::arithmetic::BitWidth;
///
/// let width = BitWidth::new(8).unwrap();
/// assert_eq!(width.max_value(), 255);
/// assert!(BitWidth::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitWidth(u32);

impl BitWidth {
    pub fn new(bits: u32) -> Result<Self, InvalidBitWidth> {
        if (1..=MAX_BIT_WIDTH).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(InvalidBitWidth { width: bits })
        }
    }

    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    /// `2^bits - 1`.
    #[inline]
    pub fn max_value(self) -> u64 {
        (1u64 << self.0) - 1
    }
}

impl Default for BitWidth {
    fn default() -> Self {
        Self(8)
    }
}

impl TryFrom<u32> for BitWidth {
    type Error = InvalidBitWidth;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl core::fmt::Display for BitWidth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-bit", self.0)
    }
}
