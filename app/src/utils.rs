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
mod app_mode;
pub use app_mode::*;

mod keccak;
pub use keccak::keccak_digest;

mod ui;
pub use ui::*;

pub struct OutputBufferTooSmall;

pub fn hex_encode(
    input: impl AsRef<[u8]>,
    output: &mut [u8],
) -> Result<usize, OutputBufferTooSmall> {
    let input = input.as_ref();

    if input.len() * 2 > output.len() {
        return Err(OutputBufferTooSmall);
    }

    const HEX_CHARS_LOWER: &[u8; 16] = b"0123456789abcdef";

    for (byte, out) in input.iter().zip(output.chunks_mut(2)) {
        let high = HEX_CHARS_LOWER[((byte & 0xf0) >> 4) as usize];
        let low = HEX_CHARS_LOWER[(byte & 0xf) as usize];

        //number of items guaranteed
        // as we checked the size beforehand so
        // output will always be at least the right length
        // to encode input
        out[0] = high;
        out[1] = low;
    }

    Ok(input.len() * 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex() {
        let mut out = [0u8; 8];
        let len = hex_encode([0xde, 0xad, 0x0b, 0xef], &mut out).ok().unwrap();
        assert_eq!(&out[..len], b"dead0bef");

        let mut small = [0u8; 3];
        assert!(hex_encode([0xde, 0xad], &mut small).is_err());
    }
}
