//! Decoders for the primitive encodings found in a header store.
//!
//! Every numeric value is stored big-endian. Strings are NUL terminated, string
//! arrays are consecutive NUL terminated strings.

use nom::multi::count;
use nom::number::complete::{be_i32, be_u16};
use nom::{IResult, Parser};

use crate::constants::{SIZE_OF_INT32, SIZE_OF_UINT16};
use crate::errors::*;

type NomError<'a> = nom::error::Error<&'a [u8]>;
type ItemParser<'a, T> = fn(&'a [u8]) -> IResult<&'a [u8], T, NomError<'a>>;

fn binary_error(required: usize, data: &[u8]) -> Error {
    Error::BinaryDecode {
        required,
        available: data.len(),
    }
}

/// Decode a single big-endian `i32` from the start of `data`.
pub fn decode_int32(data: &[u8]) -> Result<i32> {
    let (_rest, value) = be_i32::<&[u8], NomError>(data)
        .map_err(|_| binary_error(SIZE_OF_INT32, data))?;
    Ok(value)
}

/// Decode `length / 4` big-endian `i32` values.
pub fn decode_int32_array(data: &[u8], length: u32) -> Result<Vec<i32>> {
    decode_array(data, length, SIZE_OF_INT32, be_i32)
}

/// Decode `length / 2` big-endian `u16` values.
pub fn decode_uint16_array(data: &[u8], length: u32) -> Result<Vec<u16>> {
    decode_array(data, length, SIZE_OF_UINT16, be_u16)
}

fn decode_array<'a, T>(
    data: &'a [u8],
    length: u32,
    width: usize,
    item: ItemParser<'a, T>,
) -> Result<Vec<T>> {
    let num_items = length as usize / width;
    let (_rest, items) = count(item, num_items)
        .parse(data)
        .map_err(|_| binary_error(num_items * width, data))?;
    Ok(items)
}

/// Split a string array on NUL.
///
/// The terminating NUL of the last element produces an empty trailing segment
/// which is dropped. A payload missing that final NUL keeps all of its segments.
pub fn decode_nul_string_array(data: &[u8]) -> Vec<String> {
    let mut elements = data
        .split(|byte| *byte == 0)
        .map(|raw| String::from_utf8_lossy(raw).into_owned())
        .collect::<Vec<_>>();
    if elements.last().is_some_and(|last| last.is_empty()) {
        elements.pop();
    }
    elements
}

/// Decode a single string, dropping any trailing NUL padding.
pub fn decode_nul_string(data: &[u8]) -> String {
    let end = data
        .iter()
        .rposition(|byte| *byte != 0)
        .map_or(0, |last| last + 1);
    String::from_utf8_lossy(&data[..end]).into_owned()
}
