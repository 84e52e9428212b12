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

/// Fields shared by legacy and EIP-2930 transactions, in wire order
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "derive-debug"), derive(Debug))]
pub struct BaseLegacy<'b> {
    pub nonce: &'b [u8],
    pub gas_price: &'b [u8],
    pub gas_limit: &'b [u8],
    pub to: Option<Address<'b>>,
    pub value: &'b [u8],
    pub data: &'b [u8],
}

impl<'b> FromBytes<'b> for BaseLegacy<'b> {
    #[inline(never)]
    fn from_bytes_into(
        input: &'b [u8],
        out: &mut MaybeUninit<Self>,
    ) -> Result<&'b [u8], nom::Err<ParserError>> {
        crate::sys::zemu_log_stack("BaseLegacy::from_bytes_into\x00");

        // get out pointer
        let out = out.as_mut_ptr();

        // nonce
        let (rem, nonce) = parse_rlp_item(input)?;

        // gas price
        let (rem, gas_price) = parse_rlp_item(rem)?;

        // gas limit
        let (rem, gas_limit) = parse_rlp_item(rem)?;

        // to
        let (rem, raw_address) = parse_rlp_item(rem)?;
        let address = Address::from_to_field(raw_address.data)?;

        // value
        let (rem, value) = parse_rlp_item(rem)?;

        // data
        let (rem, data) = parse_rlp_item(rem)?;

        //good ptr and no uninit reads
        unsafe {
            addr_of_mut!((*out).nonce).write(nonce.data);
            addr_of_mut!((*out).gas_price).write(gas_price.data);
            addr_of_mut!((*out).gas_limit).write(gas_limit.data);
            addr_of_mut!((*out).to).write(address);
            addr_of_mut!((*out).value).write(value.data);
            addr_of_mut!((*out).data).write(data.data);
        }

        Ok(rem)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "derive-debug"), derive(Debug))]
pub struct Legacy<'b> {
    pub base: BaseLegacy<'b>,
    // None for transactions that predate EIP-155
    chain_id: Option<ChainId<'b>>,
    // R and S must be empty or zero
    // so they are not kept, they
    // only mark the EIP-155 tail
}

impl<'b> Legacy<'b> {
    pub fn chain_id(&self) -> Option<&ChainId<'b>> {
        self.chain_id.as_ref()
    }

    // r and s of an unsigned EIP-155 template
    fn is_empty_signature_value(item: &RlpItem<'_>) -> bool {
        !item.is_list() && (item.is_empty() || item.data == [0])
    }
}

impl<'b> FromBytes<'b> for Legacy<'b> {
    #[inline(never)]
    fn from_bytes_into(
        input: &'b [u8],
        out: &mut MaybeUninit<Self>,
    ) -> Result<&'b [u8], nom::Err<ParserError>> {
        crate::sys::zemu_log_stack("Legacy::from_bytes_into\x00");

        // get out pointer
        let out = out.as_mut_ptr();

        let base_out = unsafe { &mut *addr_of_mut!((*out).base).cast() };
        let rem = BaseLegacy::from_bytes_into(input, base_out)?;

        // nothing else, the transaction is not EIP-155 compliant
        if rem.is_empty() {
            unsafe {
                addr_of_mut!((*out).chain_id).write(None);
            }
            return Ok(rem);
        }

        // chainID
        let (rem, id) = parse_rlp_item(rem)?;
        let chain_id = ChainId::from_rlp(&id)?;

        let (rem, r) = parse_rlp_item(rem)?;
        let (rem, s) = parse_rlp_item(rem)?;
        if !Self::is_empty_signature_value(&r) || !Self::is_empty_signature_value(&s) {
            crate::sys::zemu_log_reject("Legacy::from_bytes_into\x00", ParserError::InvalidRsValues);
            return Err(ParserError::InvalidRsValues.into());
        }

        if !rem.is_empty() {
            return Err(ParserError::UnexpectedCharacters.into());
        }

        unsafe {
            addr_of_mut!((*out).chain_id).write(Some(chain_id));
        }

        Ok(rem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ERC20_EIP155: &str = "f86b098504a817c80082fde8946b175474e89094c44da98b954eedeac495271d0f80b844a9059cbb0000000000000000000000005a0b54d5dc17e0aadc383d2db43b0a0d3e029c4c0000000000000000000000000000000000000000000000000de0b6b3a7640000820d0a8080";
    const PRE_EIP155: &str = "e880843b9aca008252089428ee52a8f3d6e5d15f8b131996950d7f296c7952880de0b6b3a764000080";

    fn list_body(tx: &[u8]) -> &[u8] {
        let (_, item) = parse_rlp_item(tx).unwrap();
        item.data
    }

    // re-encodes the list with the r and s values replaced
    fn with_signature(r: &[u8], s: &[u8]) -> std::vec::Vec<u8> {
        let tx = hex::decode(ERC20_EIP155).unwrap();
        let body = list_body(&tx);
        // drop the two trailing 0x80
        let mut body = body[..body.len() - 2].to_vec();
        body.extend_from_slice(r);
        body.extend_from_slice(s);
        body
    }

    #[test]
    fn parse_eip155() {
        let tx = hex::decode(ERC20_EIP155).unwrap();
        let (rem, legacy) = Legacy::from_bytes(list_body(&tx)).unwrap();

        assert!(rem.is_empty());
        assert_eq!(legacy.chain_id().unwrap().id(), 3338);
        assert_eq!(legacy.base.nonce, &[0x09]);
        assert_eq!(legacy.base.gas_price, &[0x04, 0xa8, 0x17, 0xc8, 0x00]);
        assert_eq!(legacy.base.gas_limit, &[0xfd, 0xe8]);
        assert!(legacy.base.value.is_empty());
        assert_eq!(legacy.base.data.len(), 68);
        assert_eq!(
            legacy.base.to.unwrap().raw_address(),
            hex::decode("6b175474e89094c44da98b954eedeac495271d0f")
                .unwrap()
                .as_slice()
        );
    }

    #[test]
    fn parse_pre_eip155() {
        let tx = hex::decode(PRE_EIP155).unwrap();
        let (_, legacy) = Legacy::from_bytes(list_body(&tx)).unwrap();

        assert!(legacy.chain_id().is_none());
        assert!(legacy.base.nonce.is_empty());
        assert!(legacy.base.data.is_empty());
        assert_eq!(
            legacy.base.value,
            &[0x0d, 0xe0, 0xb6, 0xb3, 0xa7, 0x64, 0x00, 0x00]
        );
    }

    #[test]
    fn zero_signature_values() {
        let cases: [(&[u8], &[u8]); 4] = [
            (&[0x80], &[0x80]),
            (&[0x00], &[0x00]),
            (&[0x00], &[0x80]),
            (&[0x80], &[0x00]),
        ];
        for (r, s) in cases {
            let body = with_signature(r, s);
            assert!(Legacy::from_bytes(&body).is_ok());
        }
    }

    #[test]
    fn non_zero_signature_values() {
        for byte in 1..=u8::MAX {
            // bytes above 0x7f need a string prefix
            let encoded = if byte < 0x80 {
                std::vec![byte]
            } else {
                std::vec![0x81, byte]
            };

            let body = with_signature(&encoded, &[0x80]);
            assert_eq!(
                Legacy::from_bytes(&body).unwrap_err(),
                nom::Err::Error(ParserError::InvalidRsValues)
            );

            let body = with_signature(&[0x80], &encoded);
            assert_eq!(
                Legacy::from_bytes(&body).unwrap_err(),
                nom::Err::Error(ParserError::InvalidRsValues)
            );
        }

        // an empty list is not an empty value
        let body = with_signature(&[0xC0], &[0x80]);
        assert_eq!(
            Legacy::from_bytes(&body).unwrap_err(),
            nom::Err::Error(ParserError::InvalidRsValues)
        );

        // two bytes, even if zero
        let body = with_signature(&[0x82, 0x00, 0x00], &[0x80]);
        assert_eq!(
            Legacy::from_bytes(&body).unwrap_err(),
            nom::Err::Error(ParserError::InvalidRsValues)
        );
    }

    #[test]
    fn trailing_bytes_after_signature() {
        let mut body = with_signature(&[0x80], &[0x80]);
        body.push(0x80);
        assert_eq!(
            Legacy::from_bytes(&body).unwrap_err(),
            nom::Err::Error(ParserError::UnexpectedCharacters)
        );
    }

    #[test]
    fn incomplete_tail() {
        let tx = hex::decode(ERC20_EIP155).unwrap();
        let body = list_body(&tx);
        // chain id without r and s
        let body = &body[..body.len() - 2];
        assert_eq!(
            Legacy::from_bytes(body).unwrap_err(),
            nom::Err::Error(ParserError::UnexpectedBufferEnd)
        );
    }

    #[test]
    fn unsupported_chain() {
        // ethereum mainnet
        let mut body = list_body(&hex::decode(PRE_EIP155).unwrap()).to_vec();
        body.extend_from_slice(&[0x01, 0x80, 0x80]);
        assert_eq!(
            Legacy::from_bytes(&body).unwrap_err(),
            nom::Err::Error(ParserError::InvalidChainId)
        );
    }

    #[test]
    fn invalid_to_length() {
        // `to` of 19 bytes
        let mut body = std::vec![0x80, 0x80, 0x80, 0x93];
        body.extend_from_slice(&[0xAA; 19]);
        body.extend_from_slice(&[0x80, 0x80]);
        assert_eq!(
            Legacy::from_bytes(&body).unwrap_err(),
            nom::Err::Error(ParserError::InvalidAddress)
        );
    }
}
