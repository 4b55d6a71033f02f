mod decoder;
mod error;

pub use decoder::Decoder;
pub use error::Error;

pub trait Decode<'b>: Sized {
    fn decode(d: &mut Decoder<'b>) -> Result<Self, Error>;
}

impl<'b> Decode<'b> for bool {
    fn decode(d: &mut Decoder<'b>) -> Result<Self, Error> {
        d.bool()
    }
}

impl<'b> Decode<'b> for u8 {
    fn decode(d: &mut Decoder<'b>) -> Result<Self, Error> {
        d.u8()
    }
}

impl<'b> Decode<'b> for u16 {
    fn decode(d: &mut Decoder<'b>) -> Result<Self, Error> {
        d.u16()
    }
}

impl<'b> Decode<'b> for u32 {
    fn decode(d: &mut Decoder<'b>) -> Result<Self, Error> {
        d.u32()
    }
}

impl<'b> Decode<'b> for u64 {
    fn decode(d: &mut Decoder<'b>) -> Result<Self, Error> {
        d.u64()
    }
}

impl<'b> Decode<'b> for &'b [u8] {
    fn decode(d: &mut Decoder<'b>) -> Result<Self, Error> {
        d.bytes()
    }
}

impl<'b> Decode<'b> for Vec<u8> {
    fn decode(d: &mut Decoder<'b>) -> Result<Self, Error> {
        Ok(d.bytes()?.to_vec())
    }
}

impl<'b> Decode<'b> for String {
    fn decode(d: &mut Decoder<'b>) -> Result<Self, Error> {
        Ok(d.string()?.into_owned())
    }
}
