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

use crate::parser::{Erc20Transfer, EthTransaction, EthTxType, ParserError};

pub mod signing;
pub mod ui;

pub use signing::{compute_v, parity_from_info};
pub use ui::{EthField, EthTxUi};

pub mod utils {
    mod u256;
    pub use u256::{render_u256, U256};
}

/// A parsed transaction along with the buffer it was read from
/// and its clear signing classification.
///
/// Building one is the only way to get a transaction, so a failed
/// parse never leaves a stale record around
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "derive-debug"), derive(Debug))]
pub struct EthTxContext<'b> {
    raw: &'b [u8],
    tx: EthTransaction<'b>,
    erc20: Option<Erc20Transfer<'b>>,
}

impl<'b> EthTxContext<'b> {
    /// Parses `raw` straight into `out`, which is only
    /// initialized when this returns `Ok`
    #[inline(never)]
    pub fn parse_into(raw: &'b [u8], out: &mut MaybeUninit<Self>) -> Result<(), ParserError> {
        crate::sys::zemu_log_stack("EthTxContext::parse_into\x00");

        let out = out.as_mut_ptr();

        let tx = unsafe { &mut *addr_of_mut!((*out).tx).cast() };
        EthTransaction::new_into(raw, tx)?;

        // new_into succeeded so the transaction is fully written
        let tx = unsafe { MaybeUninit::<EthTransaction<'b>>::assume_init_ref(tx) };
        let erc20 = Erc20Transfer::classify(tx.to(), tx.data());

        unsafe {
            addr_of_mut!((*out).raw).write(raw);
            addr_of_mut!((*out).erc20).write(erc20);
        }

        Ok(())
    }

    /// Same as [`EthTxContext::parse_into`] for callers
    /// that can afford the context on their own stack
    pub fn parse(raw: &'b [u8]) -> Result<Self, ParserError> {
        let mut out = MaybeUninit::uninit();
        Self::parse_into(raw, &mut out)?;
        // parse_into initializes every field on success
        Ok(unsafe { out.assume_init() })
    }

    /// The whole buffer, type marker included
    pub fn raw(&self) -> &'b [u8] {
        self.raw
    }

    pub fn tx(&self) -> &EthTransaction<'b> {
        &self.tx
    }

    pub fn tx_type(&self) -> EthTxType {
        self.tx.tx_type()
    }

    pub fn erc20(&self) -> Option<&Erc20Transfer<'b>> {
        self.erc20.as_ref()
    }

    pub fn is_erc20_transfer(&self) -> bool {
        self.erc20.is_some()
    }

    /// Only token transfers are clear signed, anything
    /// else needs expert mode to be shown
    pub fn validate(&self, expert: bool) -> Result<(), ParserError> {
        if !self.is_erc20_transfer() && !expert {
            crate::sys::zemu_log_reject("EthTxContext::validate\x00", ParserError::UnsupportedTx);
            return Err(ParserError::UnsupportedTx);
        }

        Ok(())
    }

    pub fn compute_v(&self, parity_odd: bool) -> u8 {
        compute_v(&self.tx, parity_odd)
    }

    pub fn ui(&self, expert: bool) -> EthTxUi<'_, 'b> {
        EthTxUi::new(self, expert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EIP1559_ERC20: &str = "02f86f8227060984773594008506fc23ac0082fde8946b175474e89094c44da98b954eedeac495271d0f80b844a9059cbb0000000000000000000000005a0b54d5dc17e0aadc383d2db43b0a0d3e029c4c0000000000000000000000000000000000000000000000000de0b6b3a7640000c0";
    const EIP1559_DEPLOY: &str = "02f3820d0a80843b9aca008477359400830493e080809d6080604052348015600f57600080fd5b50603f80601d6000396000f3fec0";

    #[test]
    fn classification() {
        let data = hex::decode(EIP1559_ERC20).unwrap();
        let ctx = EthTxContext::parse(&data).unwrap();
        assert!(ctx.is_erc20_transfer());
        assert_eq!(ctx.tx_type(), EthTxType::Eip1559);
        assert_eq!(ctx.raw(), data.as_slice());

        let data = hex::decode(EIP1559_DEPLOY).unwrap();
        let ctx = EthTxContext::parse(&data).unwrap();
        assert!(!ctx.is_erc20_transfer());
        assert!(ctx.erc20().is_none());
    }

    #[test]
    fn validation_gate() {
        let data = hex::decode(EIP1559_ERC20).unwrap();
        let ctx = EthTxContext::parse(&data).unwrap();
        assert!(ctx.validate(false).is_ok());
        assert!(ctx.validate(true).is_ok());

        let data = hex::decode(EIP1559_DEPLOY).unwrap();
        let ctx = EthTxContext::parse(&data).unwrap();
        assert_eq!(ctx.validate(false).unwrap_err(), ParserError::UnsupportedTx);
        assert!(ctx.validate(true).is_ok());
    }

    #[test]
    fn parse_in_place() {
        let data = hex::decode(EIP1559_ERC20).unwrap();
        let mut out = MaybeUninit::uninit();
        EthTxContext::parse_into(&data, &mut out).unwrap();

        let ctx = unsafe { out.assume_init() };
        assert_eq!(ctx, EthTxContext::parse(&data).unwrap());
        assert!(ctx.is_erc20_transfer());

        let mut out = MaybeUninit::uninit();
        assert_eq!(
            EthTxContext::parse_into(&data[..data.len() - 1], &mut out).unwrap_err(),
            ParserError::UnexpectedBufferEnd
        );
    }

    #[test]
    fn parse_errors_are_plain() {
        assert_eq!(
            EthTxContext::parse(&[0x00, 0xC0]).unwrap_err(),
            ParserError::UnsupportedTx
        );
        assert_eq!(EthTxContext::parse(&[]).unwrap_err(), ParserError::UnexpectedError);
    }
}
