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
use crate::{constants::U64_SIZE, parser::ParserError};

#[cfg_attr(any(test, feature = "derive-debug"), derive(Debug))]
pub enum IntStrToFpStrError {
    BufferFull,
    BufferTooShort,
    /// Digit at .0 is not an ascii number
    NotAllDigitsAreNumbers(usize),
}

/// Return the len of the string until null termination
pub fn strlen(bytes: &[u8]) -> usize {
    bytes.split(|&n| n == 0).next().unwrap_or(bytes).len()
}

/// Converts a slice of bytes in big-endian
/// to an u64 integer
pub fn bytes_to_u64(input: &[u8]) -> Result<u64, ParserError> {
    let mut raw = [0; U64_SIZE];

    if input.len() <= U64_SIZE {
        raw[U64_SIZE - input.len()..].copy_from_slice(input);
        return Ok(u64::from_be_bytes(raw));
    }
    Err(ParserError::ValueOutOfRange)
}

#[inline(never)]
/// Converts an integer number string
/// to a fixed point number string, in place
///
/// Returns Ok(subslice) which is the subslice with actual content,
/// trimming excess bytes
pub fn intstr_to_fpstr_inplace(
    s: &mut [u8],
    decimals: usize,
) -> Result<&mut [u8], IntStrToFpStrError> {
    if s.is_empty() {
        return Err(IntStrToFpStrError::BufferTooShort);
    }

    //find the length of the string
    // if no 0s are found then the entire string is full with digits
    // so we return error
    let mut num_chars = strlen(s);

    if num_chars == s.len() {
        return Err(IntStrToFpStrError::BufferFull);
    }

    //empty input string
    // let's just write a 0
    if num_chars == 0 {
        s[0] = b'0';
        num_chars = 1;
    }

    let mut first_digit_idx = None;
    //check that all are ascii numbers
    // and find the first digit
    for (i, c) in s[..num_chars].iter().enumerate() {
        if !c.is_ascii_digit() {
            return Err(IntStrToFpStrError::NotAllDigitsAreNumbers(i));
        }

        if *c != b'0' {
            first_digit_idx = Some(i);
            break;
        }
    }

    if let Some(idx) = first_digit_idx {
        //move first_digit.. to the front
        s.copy_within(idx..num_chars, 0);

        //zero out the remaining
        s[num_chars - idx..].fill(0);

        num_chars -= idx;
    } else {
        //all 0s, keep only the first one
        s[1..].fill(0);
        num_chars = 1;
    }

    if decimals == 0 {
        return Ok(&mut s[..num_chars]);
    }

    //        0123456789012     <-decimal places
    //        abcd              < numChars = 4
    //                 abcd     < shift
    //        000000000abcd     < fill
    //        0.00000000abcd    < add decimal point

    // the result needs room for the padding, the point
    // and the null terminator
    let needed = core::cmp::max(num_chars, decimals + 1) + 2;
    if needed > s.len() {
        return Err(IntStrToFpStrError::BufferTooShort);
    }

    if num_chars < decimals + 1 {
        let padding = decimals - num_chars + 1;
        s.copy_within(..num_chars, padding);

        //fill the front with zeros
        s[..padding].fill(b'0');
        num_chars += padding;
    }

    // add decimal point
    let point_position = num_chars - decimals;
    //shift content
    // by 1 space after point
    s.copy_within(point_position..num_chars, point_position + 1);
    s[point_position] = b'.';
    num_chars += 1;

    Ok(&mut s[..num_chars])
}
