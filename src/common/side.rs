const LEFT: u8 = 0x00;
const RIGHT: u8 = 0x01;

/// Which side of the path a sibling digest occupies. The numeric tags are
/// part of the cross-implementation encoding contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Side {
    Left = LEFT,
    Right = RIGHT,
}

impl From<Side> for u8 {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => LEFT,
            Side::Right => RIGHT,
        }
    }
}

#[derive(Debug, Clone, derive_more::Display)]
pub enum SideError {
    #[display(fmt = "side {_0} is not valid")]
    InvalidSide(u8),
}

impl TryFrom<u8> for Side {
    type Error = SideError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            LEFT => Ok(Side::Left),
            RIGHT => Ok(Side::Right),
            _ => Err(SideError::InvalidSide(byte)),
        }
    }
}
