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
use arrayvec::ArrayVec;

use super::{utils::render_u256, EthTxContext};
use crate::{
    constants::{COIN_DECIMALS, DATA_BYTES_TO_PRINT, KECCAK_DIGEST_LEN},
    parser::{DisplayableItem, EthTxType, ParserError},
    utils::{handle_ui_message, handle_ui_title, hex_encode, keccak_digest},
};

/// Longest table, a token transfer in a fee market transaction
pub const MAX_ROWS: usize = 10;

const ELLIPSIS: &[u8] = b"...";

/// Every field that can be shown for a transaction
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "derive-debug"), derive(Debug))]
pub enum EthField {
    Receiver,
    Contract,
    Amount,
    To,
    Nonce,
    MaxPriorityFee,
    MaxFee,
    GasLimit,
    GasPrice,
    /// Native value as a plain integer
    Value,
    /// Native value in coin units
    CoinValue,
    Data,
    Hash,
}

impl EthField {
    pub fn label(&self) -> &'static [u8] {
        match self {
            Self::Receiver => b"Receiver",
            Self::Contract => b"Contract",
            Self::Amount => b"Amount",
            Self::To => b"To",
            Self::Nonce => b"Nonce",
            Self::MaxPriorityFee => b"Max Priority Fee",
            Self::MaxFee => b"Max Fee",
            Self::GasLimit => b"Gas limit",
            Self::GasPrice => b"Gas price",
            Self::Value | Self::CoinValue => b"Value",
            Self::Data => b"Data",
            Self::Hash => b"Eth-Hash",
        }
    }
}

pub type Rows = ArrayVec<EthField, MAX_ROWS>;

fn push_rows(rows: &mut Rows, fields: &[EthField]) -> Result<(), ParserError> {
    rows.try_extend_from_slice(fields)
        .map_err(|_| ParserError::UnexpectedNumberItems)
}

/// Display projection of a parsed transaction.
///
/// Token transfers get a curated table, anything else is only
/// shown field by field when `expert` is set
pub struct EthTxUi<'a, 'b> {
    ctx: &'a EthTxContext<'b>,
    expert: bool,
}

impl<'a, 'b> EthTxUi<'a, 'b> {
    pub fn new(ctx: &'a EthTxContext<'b>, expert: bool) -> Self {
        Self { ctx, expert }
    }

    /// The ordered list of fields for this transaction
    pub fn rows(&self) -> Result<Rows, ParserError> {
        let fee_market = self.ctx.tx_type() == EthTxType::Eip1559;
        let mut rows = Rows::new();

        if self.ctx.is_erc20_transfer() {
            push_rows(
                &mut rows,
                &[
                    EthField::Receiver,
                    EthField::Contract,
                    EthField::Amount,
                    EthField::Nonce,
                ],
            )?;
            if fee_market {
                push_rows(
                    &mut rows,
                    &[EthField::MaxPriorityFee, EthField::MaxFee, EthField::GasLimit],
                )?;
            } else {
                push_rows(&mut rows, &[EthField::GasLimit, EthField::GasPrice])?;
            }
            push_rows(&mut rows, &[EthField::Value, EthField::Data, EthField::Hash])?;

            return Ok(rows);
        }

        if !self.expert {
            return Err(ParserError::UnsupportedTx);
        }

        let tx = self.ctx.tx();
        if tx.to().is_some() {
            push_rows(&mut rows, &[EthField::To])?;
        }
        push_rows(&mut rows, &[EthField::CoinValue])?;
        if !tx.data().is_empty() {
            push_rows(&mut rows, &[EthField::Data])?;
        }
        if fee_market {
            push_rows(
                &mut rows,
                &[EthField::MaxPriorityFee, EthField::MaxFee, EthField::GasLimit],
            )?;
        } else {
            push_rows(&mut rows, &[EthField::GasLimit, EthField::GasPrice])?;
        }
        push_rows(&mut rows, &[EthField::Nonce, EthField::Hash])?;

        Ok(rows)
    }

    fn render_field(&self, field: EthField, message: &mut [u8], page: u8) -> Result<u8, ParserError> {
        let tx = self.ctx.tx();
        let erc20 = || self.ctx.erc20().ok_or(ParserError::NoData);

        match field {
            EthField::Receiver => erc20()?.receiver().render_eth_address(message, page),
            EthField::Contract => erc20()?.contract().render_eth_address(message, page),
            EthField::Amount => render_u256(erc20()?.amount(), 0, message, page),
            EthField::To => {
                let to = tx.to().ok_or(ParserError::NoData)?;
                to.render_eth_address(message, page)
            }
            EthField::Nonce => render_u256(tx.nonce(), 0, message, page),
            EthField::MaxPriorityFee => {
                let fee = tx.max_priority_fee().ok_or(ParserError::NoData)?;
                render_u256(fee, 0, message, page)
            }
            EthField::MaxFee => {
                let fee = tx.max_fee().ok_or(ParserError::NoData)?;
                render_u256(fee, 0, message, page)
            }
            EthField::GasLimit => render_u256(tx.gas_limit(), 0, message, page),
            EthField::GasPrice => {
                let price = tx.gas_price().ok_or(ParserError::NoData)?;
                render_u256(price, 0, message, page)
            }
            EthField::Value => render_u256(tx.value(), 0, message, page),
            EthField::CoinValue => render_u256(tx.value(), COIN_DECIMALS, message, page),
            EthField::Data => render_data_preview(tx.data(), message, page),
            EthField::Hash => self.render_hash(message, page),
        }
    }

    fn render_hash(&self, message: &mut [u8], page: u8) -> Result<u8, ParserError> {
        let hash = keccak_digest(self.ctx.raw());

        let mut out = [0; KECCAK_DIGEST_LEN * 2];
        let sz = hex_encode(hash, &mut out).map_err(|_| ParserError::UnexpectedBufferEnd)?;

        handle_ui_message(&out[..sz], message, page)
    }
}

/// Hex of the first bytes of `data`, with an ellipsis when there is more
fn render_data_preview(data: &[u8], message: &mut [u8], page: u8) -> Result<u8, ParserError> {
    let mut out = [0; DATA_BYTES_TO_PRINT * 2 + ELLIPSIS.len()];

    let shown = &data[..core::cmp::min(data.len(), DATA_BYTES_TO_PRINT)];
    let mut sz = hex_encode(shown, &mut out).map_err(|_| ParserError::UnexpectedBufferEnd)?;

    if data.len() > DATA_BYTES_TO_PRINT {
        out[sz..sz + ELLIPSIS.len()].copy_from_slice(ELLIPSIS);
        sz += ELLIPSIS.len();
    }

    handle_ui_message(&out[..sz], message, page)
}

impl<'a, 'b> DisplayableItem for EthTxUi<'a, 'b> {
    fn num_items(&self) -> Result<u8, ParserError> {
        let rows = self.rows()?;
        // at most MAX_ROWS
        Ok(rows.len() as u8)
    }

    #[inline(never)]
    fn render_item(
        &self,
        item_n: u8,
        title: &mut [u8],
        message: &mut [u8],
        page: u8,
    ) -> Result<u8, ParserError> {
        crate::sys::zemu_log_stack("EthTxUi::render_item\x00");

        title.fill(0);
        message.fill(0);

        let rows = self.rows()?;
        let field = *rows
            .get(item_n as usize)
            .ok_or(ParserError::DisplayPageOutOfRange)?;

        handle_ui_title(field.label(), title)?;
        self.render_field(field, message, page)
    }
}
