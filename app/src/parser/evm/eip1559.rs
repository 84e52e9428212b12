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

use crate::parser::{parse_rlp_item, Address, ChainId, FromBytes, ParserError, RlpItem};

#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "derive-debug"), derive(Debug))]
pub struct Eip1559<'b> {
    chain_id: ChainId<'b>,
    pub nonce: &'b [u8],
    pub priority_fee: &'b [u8],
    pub max_fee: &'b [u8],
    pub gas_limit: &'b [u8],
    pub to: Option<Address<'b>>,
    pub value: &'b [u8],
    pub data: &'b [u8],
    access_list: RlpItem<'b>,
}

impl<'b> Eip1559<'b> {
    pub fn chain_id(&self) -> &ChainId<'b> {
        &self.chain_id
    }

    pub fn access_list(&self) -> &RlpItem<'b> {
        &self.access_list
    }
}

impl<'b> FromBytes<'b> for Eip1559<'b> {
    #[inline(never)]
    fn from_bytes_into(
        input: &'b [u8],
        out: &mut MaybeUninit<Self>,
    ) -> Result<&'b [u8], nom::Err<ParserError>> {
        crate::sys::zemu_log_stack("Eip1559::from_bytes_into\x00");

        // get out pointer
        let out = out.as_mut_ptr();

        // chainID
        let (rem, id) = parse_rlp_item(input)?;
        let chain_id = ChainId::from_rlp(&id)?;

        // nonce
        let (rem, nonce) = parse_rlp_item(rem)?;

        // max_priority_fee
        let (rem, priority_fee) = parse_rlp_item(rem)?;

        // max_fee
        let (rem, max_fee) = parse_rlp_item(rem)?;

        // gas limit
        let (rem, gas_limit) = parse_rlp_item(rem)?;

        // to
        let (rem, raw_address) = parse_rlp_item(rem)?;
        let address = Address::from_to_field(raw_address.data)?;

        // value
        let (rem, value) = parse_rlp_item(rem)?;

        // data
        let (rem, data) = parse_rlp_item(rem)?;

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
            addr_of_mut!((*out).nonce).write(nonce.data);
            addr_of_mut!((*out).priority_fee).write(priority_fee.data);
            addr_of_mut!((*out).max_fee).write(max_fee.data);
            addr_of_mut!((*out).gas_limit).write(gas_limit.data);
            addr_of_mut!((*out).to).write(address);
            addr_of_mut!((*out).value).write(value.data);
            addr_of_mut!((*out).data).write(data.data);
            addr_of_mut!((*out).access_list).write(access_list);
        }

        Ok(rem)
    }
}
