/*******************************************************************************
*   (c) 2024 Zondax AG
*
*  Licensed under the Apache License, Version 2.0 (the "License");
*  you may not use this file except in compliance with the License.
*  You may obtain a copy of the License at
*
*      http://www.apache.org/licenses/LICENSE-2.0
*
*  Unless required by applicable law or agreed to in writing, software
*  distributed under the License is distributed on an "AS IS" BASIS,
*  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
*  See the License for the specific language governing permissions and
*  limitations under the License.
********************************************************************************/
use nom::bytes::complete::take;

use crate::{constants::U64_SIZE, parser::ParserError};

/// Kind of an RLP encoded item, as told by its prefix byte
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "derive-debug"), derive(Debug))]
pub enum RlpKind {
    /// A value in `[0x00, 0x7f]`, which is its own encoding
    Byte,
    String,
    List,
}

/// A view over a decoded RLP item, `data` never includes the prefix
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "derive-debug"), derive(Debug))]
pub struct RlpItem<'b> {
    pub kind: RlpKind,
    pub data: &'b [u8],
}

impl<'b> RlpItem<'b> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_list(&self) -> bool {
        self.kind == RlpKind::List
    }
}

// Reads the big endian length that follows a long form marker
fn long_length(data: &[u8], num_bytes: usize) -> Result<usize, nom::Err<ParserError>> {
    if num_bytes > U64_SIZE {
        return Err(ParserError::ValueOutOfRange.into());
    }

    let num = data
        .get(1..)
        .ok_or(ParserError::UnexpectedBufferEnd)?
        .get(..num_bytes)
        .ok_or(ParserError::UnexpectedBufferEnd)?;

    let mut array = [0; U64_SIZE];
    array[U64_SIZE - num_bytes..].copy_from_slice(num);

    usize::try_from(u64::from_be_bytes(array)).map_err(|_| ParserError::ValueOutOfRange.into())
}

/// Returns the remaining bytes from data along with the
/// found item.
///
/// At least one byte is consumed on success
pub fn parse_rlp_item(data: &[u8]) -> Result<(&[u8], RlpItem<'_>), nom::Err<ParserError>> {
    let marker = *data.first().ok_or(ParserError::UnexpectedBufferEnd)?;

    let (kind, read, to_read) = match marker {
        0..=0x7F => {
            let item = RlpItem {
                kind: RlpKind::Byte,
                data: &data[..1],
            };
            return Ok((&data[1..], item));
        }
        sstring @ 0x80..=0xB7 => (RlpKind::String, 1, (sstring - 0x80) as usize),
        string @ 0xB8..=0xBF => {
            // For strings longer than 55 bytes the length is encoded
            // differently.
            // The number of bytes that compose the length is encoded
            // in the marker
            // And then the length is just the number BE encoded
            let num_bytes = (string - 0xB7) as usize;
            let len = long_length(data, num_bytes)?;
            (RlpKind::String, 1 + num_bytes, len)
        }
        slist @ 0xC0..=0xF7 => (RlpKind::List, 1, (slist - 0xC0) as usize),
        list @ 0xF8.. => {
            let num_bytes = (list - 0xF7) as usize;
            let len = long_length(data, num_bytes)?;
            (RlpKind::List, 1 + num_bytes, len)
        }
    };

    let (rem, item) = take(to_read)(&data[read..])?;

    Ok((rem, RlpItem { kind, data: item }))
}
