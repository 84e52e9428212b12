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

/// peaq mainnet
pub const PEAQ_MAINNET_CHAINID: u64 = 3338;
/// agung testnet
pub const PEAQ_TESTNET_CHAINID: u64 = 9990;
/// krest canary network
pub const PEAQ_CANARY_CHAINID: u64 = 2241;

/// Chain identifiers this application accepts to sign for
pub const SUPPORTED_NETWORKS_EVM: [u64; 3] = [
    PEAQ_MAINNET_CHAINID,
    PEAQ_TESTNET_CHAINID,
    PEAQ_CANARY_CHAINID,
];

/// Decimals of the native coin, used to render the `Value` of
/// non-token transactions
pub const COIN_DECIMALS: usize = 18;

/// Number of bytes of the `data` field shown as a hex preview
pub const DATA_BYTES_TO_PRINT: usize = 10;

pub const ETH_ADDRESS_LEN: usize = 20;
pub const KECCAK_DIGEST_LEN: usize = 32;

pub const U64_SIZE: usize = core::mem::size_of::<u64>();
/// Largest integer the number formatter accepts, in bytes
pub const U256_SIZE: usize = 32;

/// Size of an ABI encoded argument
pub const ABI_WORD_LEN: usize = 32;
pub const SELECTOR_LEN: usize = 4;

/// Flag set in the signing info when the y-coordinate of R is odd
pub const CX_ECCINFO_PARITY_ODD: u32 = 0x01;

/// Legacy signatures without replay protection
pub const V_BASE_LEGACY: u8 = 27;
/// EIP-155 replay protected signatures
pub const V_BASE_EIP155: u32 = 35;
