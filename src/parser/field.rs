//! Fixed-width little-endian fields and the structure declarations built from them.
//!
//! Every SPE structure is a packed C struct. Each field type knows its byte
//! width and how to pull itself off the front of the input, so a structure
//! is decoded by reading its fields in declaration order. Offsets are never
//! written down by hand: they fall out of the running sum of field sizes.

use serde::Serialize;
use winnow::{
    Parser,
    binary::{le_f32, le_f64, le_i16, le_i32, le_u8, le_u16, le_u32},
    combinator::repeat,
    error::ContextError,
};

/// One entry of a structure's layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub size: usize,
    pub offset: usize,
}

/// A value with a fixed on-disk width.
pub trait Field: Sized {
    /// Width in bytes.
    const SIZE: usize;

    fn decode(input: &mut &[u8]) -> Result<Self, ContextError>;

    #[cfg(test)]
    fn encode(&self, out: &mut Vec<u8>);
}

macro_rules! le_field {
    ($($ty:ty => $parser:ident),+ $(,)?) => {$(
        impl Field for $ty {
            const SIZE: usize = std::mem::size_of::<$ty>();

            fn decode(input: &mut &[u8]) -> Result<Self, ContextError> {
                $parser.parse_next(input)
            }

            #[cfg(test)]
            fn encode(&self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }
        }
    )+};
}

le_field! {
    u8 => le_u8,
    u16 => le_u16,
    i16 => le_i16,
    u32 => le_u32,
    i32 => le_i32,
    f32 => le_f32,
    f64 => le_f64,
}

impl<T: Field, const N: usize> Field for [T; N] {
    const SIZE: usize = T::SIZE * N;

    fn decode(input: &mut &[u8]) -> Result<Self, ContextError> {
        let items: Vec<T> = repeat(N, T::decode).parse_next(input)?;
        // repeat(N, ..) either yields exactly N items or fails above
        items.try_into().map_err(|_| ContextError::new())
    }

    #[cfg(test)]
    fn encode(&self, out: &mut Vec<u8>) {
        for item in self {
            item.encode(out);
        }
    }
}

/// Declares a packed SPE structure.
///
/// Generates the struct itself, its [`Field`] impl (size is the sum of the
/// field sizes, decoding reads fields in order) and a `layout()` table.
macro_rules! spe_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$field_meta:meta])* pub $field:ident : $ty:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            $( $(#[$field_meta])* pub $field: $ty, )+
        }

        impl $name {
            /// Name, byte size and byte offset of every field, in on-disk order.
            pub fn layout() -> Vec<$crate::parser::field::FieldSpec> {
                let mut offset = 0;
                let mut fields = Vec::new();
                $(
                    let size = <$ty as $crate::parser::field::Field>::SIZE;
                    fields.push($crate::parser::field::FieldSpec {
                        name: stringify!($field),
                        size,
                        offset,
                    });
                    offset += size;
                )+
                debug_assert_eq!(offset, <Self as $crate::parser::field::Field>::SIZE);
                fields
            }
        }

        impl $crate::parser::field::Field for $name {
            const SIZE: usize = 0 $( + <$ty as $crate::parser::field::Field>::SIZE )+;

            fn decode(input: &mut &[u8]) -> Result<Self, ::winnow::error::ContextError> {
                Ok(Self {
                    $( $field: <$ty as $crate::parser::field::Field>::decode(input)?, )+
                })
            }

            #[cfg(test)]
            fn encode(&self, out: &mut Vec<u8>) {
                $( $crate::parser::field::Field::encode(&self.$field, out); )+
            }
        }
    };
}

pub(crate) use spe_struct;
