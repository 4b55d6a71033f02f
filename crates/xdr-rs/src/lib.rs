mod decode;
pub mod pad;

pub mod de {
    pub use super::decode::*;
}

pub fn decode<'b, T>(bytes: &'b [u8]) -> Result<T, de::Error>
where
    T: de::Decode<'b>,
{
    let mut d = de::Decoder::new(bytes);

    d.decode()
}
