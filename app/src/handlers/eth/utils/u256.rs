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
#![allow(clippy::assign_op_pattern, clippy::ptr_offset_with_cast)]

use crate::{
    constants::U256_SIZE,
    parser::{intstr_to_fpstr_inplace, ParserError},
    utils::handle_ui_message,
};

uint::construct_uint! {
    /// Little-endian 256-bit integer
    pub struct U256(4);
}

impl U256 {
    /// The largest value,
    /// 115792089237316195423570985008687907853269984665640564039457584007913129639935
    /// is 78 characters long
    pub const FORMATTED_SIZE_DECIMAL: usize = 78;

    /// Reads a big endian number of up to 32 bytes
    pub fn try_from_big_endian(num: &[u8]) -> Result<Self, ParserError> {
        if num.len() > U256_SIZE {
            return Err(ParserError::ValueOutOfRange);
        }

        Ok(Self::from_big_endian(num))
    }

    /// Will format the number in the provided buffer and return the slice
    /// of the given buffer that was actually written
    ///
    /// To make sure there are enough bytes, use a buffer of size [`Self::FORMATTED_SIZE_DECIMAL`]
    pub fn to_lexical(mut self, bytes: &mut [u8]) -> Result<&mut [u8], ParserError> {
        let ten = Self::from(10u8);

        //write it from the front
        // starting with the least significant digit,
        // the slice is reversed at the end
        let mut i = 0;
        loop {
            let (this, digit) = self.div_mod(ten);
            let digit = digit.low_u64() as u8;

            *bytes.get_mut(i).ok_or(ParserError::UnexpectedBufferEnd)? = b'0' + digit;
            i += 1;

            //we are done
            if this.is_zero() {
                let bytes = &mut bytes[..i];
                bytes.reverse();

                break Ok(bytes);
            }

            self = this;
        }
    }
}

/// Renders a big endian number of up to 256 bits,
/// `decimal_point` places are moved behind the point
#[inline(never)]
pub fn render_u256(
    num: &[u8],
    decimal_point: usize,
    message: &mut [u8],
    page: u8,
) -> Result<u8, ParserError> {
    // room for the point, the leading zero and the terminator
    let mut u256_str = [0; U256::FORMATTED_SIZE_DECIMAL + 3];

    let amount = U256::try_from_big_endian(num)?;
    amount.to_lexical(&mut u256_str)?;

    let out = intstr_to_fpstr_inplace(&mut u256_str, decimal_point)
        .map_err(|_| ParserError::UnexpectedBufferEnd)?;

    handle_ui_message(out, message, page)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::string::ToString;

    use super::*;
    use crate::parser::strlen;

    fn formatting_impl(value: U256) {
        let mut buffer = [0; U256::FORMATTED_SIZE_DECIMAL];

        let expected = value.to_string();

        assert_eq!(expected.as_bytes(), &*value.to_lexical(&mut buffer).unwrap())
    }

    fn render(num: &[u8], decimals: usize) -> std::string::String {
        let mut message = [0u8; 100];
        render_u256(num, decimals, &mut message, 0).unwrap();
        std::string::String::from_utf8(message[..strlen(&message)].to_vec()).unwrap()
    }

    #[test]
    fn formatting_max() {
        formatting_impl(U256::max_value());
    }

    #[test]
    fn formatting_zero() {
        formatting_impl(U256::zero());
    }

    #[test]
    fn small_buffer() {
        let mut buffer = [0; 2];
        assert_eq!(
            U256::from(100u8).to_lexical(&mut buffer).unwrap_err(),
            ParserError::UnexpectedBufferEnd
        );
    }

    #[test]
    fn render_numbers() {
        assert_eq!(render(&[], 0), "0");
        assert_eq!(render(&[0xfd, 0xe8], 0), "65000");
        assert_eq!(render(&[0x0d, 0xe0, 0xb6, 0xb3, 0xa7, 0x64, 0x00, 0x00], 18), "1.000000000000000000");
        assert_eq!(render(&[0x01], 18), "0.000000000000000001");
        assert_eq!(render(&[0xff; 32], 0), U256::max_value().to_string());
    }

    #[test]
    fn render_too_wide() {
        let mut message = [0u8; 100];
        assert_eq!(
            render_u256(&[0x01; 33], 0, &mut message, 0).unwrap_err(),
            ParserError::ValueOutOfRange
        );
    }

    proptest! {
        #[test]
        fn formatting(a: u64, b: u64, c: u64, d: u64) {
            formatting_impl(U256([a, b, c, d]))
        }
    }
}
