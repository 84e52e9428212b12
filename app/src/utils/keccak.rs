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
use tiny_keccak::{Hasher, Keccak};

use crate::constants::KECCAK_DIGEST_LEN;

/// Keccak-256 of `input`, as used for ethereum transaction hashes
pub fn keccak_digest(input: &[u8]) -> [u8; KECCAK_DIGEST_LEN] {
    let mut hasher = Keccak::v256();
    hasher.update(input);

    let mut out = [0; KECCAK_DIGEST_LEN];
    hasher.finalize(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(
            hex::encode(keccak_digest(&[])),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }
}
