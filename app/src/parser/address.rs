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
use nom::bytes::complete::take;

use crate::{
    constants::ETH_ADDRESS_LEN,
    parser::{FromBytes, ParserError},
    utils::{handle_ui_message, hex_encode},
};

#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "derive-debug"), derive(Debug))]
pub struct Address<'b>(&'b [u8; ETH_ADDRESS_LEN]);

impl<'b> Address<'b> {
    /// Reads the `to` field of a transaction, an empty
    /// field means a contract creation
    pub fn from_to_field(raw: &'b [u8]) -> Result<Option<Self>, ParserError> {
        match raw.len() {
            0 => Ok(None),
            ETH_ADDRESS_LEN => {
                let mut address = MaybeUninit::uninit();
                _ = Self::from_bytes_into(raw, &mut address)?;
                // from_bytes_into wrote the only field
                Ok(Some(unsafe { address.assume_init() }))
            }
            _ => Err(ParserError::InvalidAddress),
        }
    }

    pub fn raw_address(&self) -> &'b [u8; ETH_ADDRESS_LEN] {
        self.0
    }

    pub fn render_eth_address(&self, message: &mut [u8], page: u8) -> Result<u8, ParserError> {
        let prefix = b"0x";
        let mut out = [0; ETH_ADDRESS_LEN * 2 + 2];
        let mut sz = prefix.len();
        out[..prefix.len()].copy_from_slice(&prefix[..]);

        sz += hex_encode(self.0, &mut out[prefix.len()..])
            .map_err(|_| ParserError::UnexpectedBufferEnd)?;

        handle_ui_message(&out[..sz], message, page)
    }
}

impl<'b> FromBytes<'b> for Address<'b> {
    #[inline(never)]
    fn from_bytes_into(
        input: &'b [u8],
        out: &mut MaybeUninit<Self>,
    ) -> Result<&'b [u8], nom::Err<ParserError>> {
        let (rem, addr) = take(ETH_ADDRESS_LEN)(input)?;
        let addr = arrayref::array_ref!(addr, 0, ETH_ADDRESS_LEN);

        //good ptr and no uninit reads
        let out = out.as_mut_ptr();
        unsafe {
            addr_of_mut!((*out).0).write(addr);
        }

        Ok(rem)
    }
}
