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
use core::{mem::MaybeUninit, ptr::addr_of_mut};

use crate::{
    constants::SUPPORTED_NETWORKS_EVM,
    parser::{bytes_to_u64, parse_rlp_item, FromBytes, ParserError, RlpItem, RlpKind},
};

/// A validated chain identifier, it keeps the raw bytes
/// as they came in the transaction
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "derive-debug"), derive(Debug))]
pub struct ChainId<'b> {
    raw: &'b [u8],
    id: u64,
}

impl<'b> ChainId<'b> {
    /// Interprets `item` as a big endian integer and checks it
    /// against the supported networks
    pub fn from_rlp(item: &RlpItem<'b>) -> Result<Self, ParserError> {
        let id = match item.len() {
            x if x > 1 => bytes_to_u64(item.data)?,
            // case were the prefix is the byte itself
            1 if item.kind == RlpKind::Byte => item.data[0] as u64,
            _ => return Err(ParserError::UnexpectedError),
        };

        if !Self::is_supported(id) {
            crate::sys::zemu_log_reject("ChainId::from_rlp\x00", ParserError::InvalidChainId);
            return Err(ParserError::InvalidChainId);
        }

        Ok(Self { raw: item.data, id })
    }

    pub fn is_supported(id: u64) -> bool {
        SUPPORTED_NETWORKS_EVM.iter().any(|supported| *supported == id)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn raw(&self) -> &'b [u8] {
        self.raw
    }
}

impl<'b> FromBytes<'b> for ChainId<'b> {
    #[inline(never)]
    fn from_bytes_into(
        input: &'b [u8],
        out: &mut MaybeUninit<Self>,
    ) -> Result<&'b [u8], nom::Err<ParserError>> {
        crate::sys::zemu_log_stack("ChainId::from_bytes_into\x00");

        let (rem, item) = parse_rlp_item(input)?;
        let chain_id = Self::from_rlp(&item)?;

        //good ptr and no uninit reads
        let out = out.as_mut_ptr();
        unsafe {
            addr_of_mut!((*out).raw).write(chain_id.raw);
            addr_of_mut!((*out).id).write(chain_id.id);
        }

        Ok(rem)
    }
}
