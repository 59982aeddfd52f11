use crate::common::SideError;

#[derive(Debug, Clone, derive_more::Display)]
pub enum DeserializeError {
    #[display(fmt = "{}", _0)]
    SideError(SideError),
}

impl From<SideError> for DeserializeError {
    fn from(err: SideError) -> Self {
        DeserializeError::SideError(err)
    }
}
