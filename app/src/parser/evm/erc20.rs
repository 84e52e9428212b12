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

use nom::{bytes::complete::take, number::complete::be_u32};

use crate::{
    constants::{ABI_WORD_LEN, ETH_ADDRESS_LEN, SELECTOR_LEN},
    parser::{Address, FromBytes, ParserError},
};

const PADDING_LEN: usize = ABI_WORD_LEN - ETH_ADDRESS_LEN;

/// A call to `transfer(address,uint256)` on an ERC-20 contract
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "derive-debug"), derive(Debug))]
pub struct Erc20Transfer<'b> {
    contract: Address<'b>,
    receiver: Address<'b>,
    amount: &'b [u8; ABI_WORD_LEN],
}

impl<'b> Erc20Transfer<'b> {
    pub const SELECTOR: u32 = 0xa9059cbb;
    pub const CALLDATA_LEN: usize = SELECTOR_LEN + 2 * ABI_WORD_LEN;

    /// Recognizes a token transfer out of the `to` and `data` fields
    /// of a parsed transaction.
    ///
    /// Anything that is not exactly a transfer call to a contract
    /// is not classified, there is no error case here.
    pub fn classify(to: Option<&Address<'b>>, data: &'b [u8]) -> Option<Self> {
        let contract = to?;

        if data.len() != Self::CALLDATA_LEN {
            return None;
        }

        let mut transfer = MaybeUninit::uninit();
        let rem = Self::calldata_into(data, &mut transfer).ok()?;
        if !rem.is_empty() {
            return None;
        }

        unsafe {
            addr_of_mut!((*transfer.as_mut_ptr()).contract).write(*contract);
            // calldata_into wrote the remaining fields
            Some(transfer.assume_init())
        }
    }

    // Decodes the call data, leaving the contract to the caller
    fn calldata_into(
        input: &'b [u8],
        out: &mut MaybeUninit<Self>,
    ) -> Result<&'b [u8], nom::Err<ParserError>> {
        crate::sys::zemu_log_stack("Erc20Transfer::calldata_into\x00");

        let (rem, selector) = be_u32(input)?;
        if selector != Self::SELECTOR {
            return Err(ParserError::UnexpectedValue.into());
        }

        // addresses are left padded to a full word
        let (rem, padding) = take(PADDING_LEN)(rem)?;
        if padding.iter().any(|b| *b != 0) {
            return Err(ParserError::InvalidAddress.into());
        }

        // get out pointer
        let out = out.as_mut_ptr();

        let receiver = unsafe { &mut *addr_of_mut!((*out).receiver).cast() };
        let rem = Address::from_bytes_into(rem, receiver)?;

        let (rem, amount) = take(ABI_WORD_LEN)(rem)?;
        let amount = arrayref::array_ref!(amount, 0, ABI_WORD_LEN);

        unsafe {
            addr_of_mut!((*out).amount).write(amount);
        }

        Ok(rem)
    }

    /// The token contract, which is the `to` of the transaction
    pub fn contract(&self) -> &Address<'b> {
        &self.contract
    }

    /// The token recipient, taken from the call arguments
    pub fn receiver(&self) -> &Address<'b> {
        &self.receiver
    }

    /// Big endian amount in token base units
    pub fn amount(&self) -> &'b [u8; ABI_WORD_LEN] {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTRACT: &str = "6b175474e89094c44da98b954eedeac495271d0f";
    const CALLDATA: &str = "a9059cbb0000000000000000000000005a0b54d5dc17e0aadc383d2db43b0a0d3e029c4c0000000000000000000000000000000000000000000000000de0b6b3a7640000";

    fn contract() -> std::vec::Vec<u8> {
        hex::decode(CONTRACT).unwrap()
    }

    #[test]
    fn recognizes_transfer() {
        let contract = contract();
        let to = Address::from_to_field(&contract).unwrap();
        let data = hex::decode(CALLDATA).unwrap();

        let transfer = Erc20Transfer::classify(to.as_ref(), &data).unwrap();
        assert_eq!(transfer.contract().raw_address(), contract.as_slice());
        assert_eq!(
            transfer.receiver().raw_address(),
            hex::decode("5a0b54d5dc17e0aadc383d2db43b0a0d3e029c4c")
                .unwrap()
                .as_slice()
        );
        assert_eq!(&transfer.amount()[24..], &[0x0d, 0xe0, 0xb6, 0xb3, 0xa7, 0x64, 0x00, 0x00]);
    }

    #[test]
    fn requires_contract() {
        let data = hex::decode(CALLDATA).unwrap();
        assert!(Erc20Transfer::classify(None, &data).is_none());
    }

    #[test]
    fn rejects_other_shapes() {
        let contract = contract();
        let to = Address::from_to_field(&contract).unwrap();
        let data = hex::decode(CALLDATA).unwrap();

        // approve(address,uint256)
        let mut approve = data.clone();
        approve[..4].copy_from_slice(&[0x09, 0x5e, 0xa7, 0xb3]);
        assert!(Erc20Transfer::classify(to.as_ref(), &approve).is_none());

        // dirty padding
        let mut dirty = data.clone();
        dirty[4] = 0x01;
        assert!(Erc20Transfer::classify(to.as_ref(), &dirty).is_none());

        // extra argument bytes
        let mut long = data.clone();
        long.push(0x00);
        assert!(Erc20Transfer::classify(to.as_ref(), &long).is_none());

        // missing amount
        assert!(Erc20Transfer::classify(to.as_ref(), &data[..36]).is_none());

        assert!(Erc20Transfer::classify(to.as_ref(), &[]).is_none());
    }
}
