pub(crate) mod decimal;
pub(crate) mod scan;
pub(crate) mod span;

/// This serialises the numeric types into their fixed binary layout.
pub trait Serialize {
    fn serialize(&self, buff: &mut Vec<u8>);
}
