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

use super::BaseLegacy;
use crate::parser::{parse_rlp_item, ChainId, FromBytes, ParserError, RlpItem};

#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "derive-debug"), derive(Debug))]
pub struct Eip2930<'b> {
    chain_id: ChainId<'b>,
    pub base: BaseLegacy<'b>,
    access_list: RlpItem<'b>,
    // R and S are not accepted at
    // parse time for typed transactions
}

impl<'b> Eip2930<'b> {
    pub fn chain_id(&self) -> &ChainId<'b> {
        &self.chain_id
    }

    pub fn access_list(&self) -> &RlpItem<'b> {
        &self.access_list
    }
}

impl<'b> FromBytes<'b> for Eip2930<'b> {
    #[inline(never)]
    fn from_bytes_into(
        input: &'b [u8],
        out: &mut MaybeUninit<Self>,
    ) -> Result<&'b [u8], nom::Err<ParserError>> {
        crate::sys::zemu_log_stack("Eip2930::from_bytes_into\x00");

        // get out pointer
        let out = out.as_mut_ptr();

        // chainID
        let (rem, id) = parse_rlp_item(input)?;
        let chain_id = ChainId::from_rlp(&id)?;

        let base_out = unsafe { &mut *addr_of_mut!((*out).base).cast() };
        let rem = BaseLegacy::from_bytes_into(rem, base_out)?;

        // access list
        let (rem, access_list) = parse_rlp_item(rem)?;
        if !access_list.is_list() {
            return Err(ParserError::UnexpectedType.into());
        }

        if !rem.is_empty() {
            return Err(ParserError::UnexpectedCharacters.into());
        }

        unsafe {
            addr_of_mut!((*out).chain_id).write(chain_id);
            addr_of_mut!((*out).access_list).write(access_list);
        }

        Ok(rem)
    }
}
