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

mod eip1559;
mod eip2930;
mod erc20;
mod legacy;
mod tx_type;

pub use eip1559::Eip1559;
pub use eip2930::Eip2930;
pub use erc20::Erc20Transfer;
pub use legacy::{BaseLegacy, Legacy};
pub use tx_type::EthTxType;

#[repr(C)]
struct LegacyVariant<'b>(EthTxType, Legacy<'b>);

#[repr(C)]
struct Eip2930Variant<'b>(EthTxType, Eip2930<'b>);

#[repr(C)]
struct Eip1559Variant<'b>(EthTxType, Eip1559<'b>);

// DO not change the representation nor the order
// of the variants, the tag must match EthTxType
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[cfg_attr(any(test, feature = "derive-debug"), derive(Debug))]
pub enum EthTransaction<'b> {
    Legacy(Legacy<'b>),
    Eip2930(Eip2930<'b>),
    Eip1559(Eip1559<'b>),
}

impl<'b> EthTransaction<'b> {
    /// Parses the whole of `input` as one transaction into `out`
    pub fn new_into(input: &'b [u8], out: &mut MaybeUninit<Self>) -> Result<(), ParserError> {
        _ = Self::from_bytes_into(input, out)?;
        Ok(())
    }

    pub fn tx_type(&self) -> EthTxType {
        match self {
            Self::Legacy(_) => EthTxType::Legacy,
            Self::Eip2930(_) => EthTxType::Eip2930,
            Self::Eip1559(_) => EthTxType::Eip1559,
        }
    }

    /// None only for legacy transactions without EIP-155 replay protection
    pub fn chain_id(&self) -> Option<&ChainId<'b>> {
        match self {
            Self::Legacy(t) => t.chain_id(),
            Self::Eip2930(t) => Some(t.chain_id()),
            Self::Eip1559(t) => Some(t.chain_id()),
        }
    }

    pub fn nonce(&self) -> &'b [u8] {
        match self {
            Self::Legacy(t) => t.base.nonce,
            Self::Eip2930(t) => t.base.nonce,
            Self::Eip1559(t) => t.nonce,
        }
    }

    pub fn gas_price(&self) -> Option<&'b [u8]> {
        match self {
            Self::Legacy(t) => Some(t.base.gas_price),
            Self::Eip2930(t) => Some(t.base.gas_price),
            Self::Eip1559(_) => None,
        }
    }

    pub fn max_priority_fee(&self) -> Option<&'b [u8]> {
        match self {
            Self::Eip1559(t) => Some(t.priority_fee),
            _ => None,
        }
    }

    pub fn max_fee(&self) -> Option<&'b [u8]> {
        match self {
            Self::Eip1559(t) => Some(t.max_fee),
            _ => None,
        }
    }

    pub fn gas_limit(&self) -> &'b [u8] {
        match self {
            Self::Legacy(t) => t.base.gas_limit,
            Self::Eip2930(t) => t.base.gas_limit,
            Self::Eip1559(t) => t.gas_limit,
        }
    }

    /// The recipient, None for contract creations
    pub fn to(&self) -> Option<&Address<'b>> {
        match self {
            Self::Legacy(t) => t.base.to.as_ref(),
            Self::Eip2930(t) => t.base.to.as_ref(),
            Self::Eip1559(t) => t.to.as_ref(),
        }
    }

    pub fn value(&self) -> &'b [u8] {
        match self {
            Self::Legacy(t) => t.base.value,
            Self::Eip2930(t) => t.base.value,
            Self::Eip1559(t) => t.value,
        }
    }

    pub fn data(&self) -> &'b [u8] {
        match self {
            Self::Legacy(t) => t.base.data,
            Self::Eip2930(t) => t.base.data,
            Self::Eip1559(t) => t.data,
        }
    }

    pub fn access_list(&self) -> Option<&RlpItem<'b>> {
        match self {
            Self::Legacy(_) => None,
            Self::Eip2930(t) => Some(t.access_list()),
            Self::Eip1559(t) => Some(t.access_list()),
        }
    }
}

impl<'b> FromBytes<'b> for EthTransaction<'b> {
    #[inline(never)]
    fn from_bytes_into(
        input: &'b [u8],
        out: &mut MaybeUninit<Self>,
    ) -> Result<&'b [u8], nom::Err<ParserError>> {
        crate::sys::zemu_log_stack("EthTransaction::from_bytes_into\x00");

        // get transaction data as the eip2718 defines transactions structure as follow:
        // version || rlp[tx_fields]
        // version for eip1559 = 2,
        // for eip2930 = 1,
        // for legacy it does not have a version
        let (rem, tx_type) = EthTxType::from_bytes(input)?;

        // parse rlp[] part in order to get the transaction bytes
        let (rem, tx) = parse_rlp_item(rem)?;
        if !tx.is_list() {
            return Err(ParserError::UnexpectedValue.into());
        }

        // one transaction per buffer
        if !rem.is_empty() {
            return Err(ParserError::UnexpectedCharacters.into());
        }

        match tx_type {
            EthTxType::Legacy => {
                let out = out.as_mut_ptr() as *mut LegacyVariant;
                let legacy = unsafe { &mut *addr_of_mut!((*out).1).cast() };
                _ = Legacy::from_bytes_into(tx.data, legacy)?;

                //pointer is valid
                unsafe {
                    addr_of_mut!((*out).0).write(EthTxType::Legacy);
                }
            }
            EthTxType::Eip2930 => {
                let out = out.as_mut_ptr() as *mut Eip2930Variant;
                let eip = unsafe { &mut *addr_of_mut!((*out).1).cast() };
                _ = Eip2930::from_bytes_into(tx.data, eip)?;

                //pointer is valid
                unsafe {
                    addr_of_mut!((*out).0).write(EthTxType::Eip2930);
                }
            }
            EthTxType::Eip1559 => {
                let out = out.as_mut_ptr() as *mut Eip1559Variant;
                let eip = unsafe { &mut *addr_of_mut!((*out).1).cast() };
                _ = Eip1559::from_bytes_into(tx.data, eip)?;

                //pointer is valid
                unsafe {
                    addr_of_mut!((*out).0).write(EthTxType::Eip1559);
                }
            }
        }

        Ok(rem)
    }
}
