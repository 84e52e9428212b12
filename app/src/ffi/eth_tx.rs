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
#![allow(non_snake_case)]

use core::{
    mem::MaybeUninit,
    ptr::{addr_of, addr_of_mut},
};

use crate::{
    handlers::eth::{parity_from_info, EthTxContext},
    parser::{DisplayableItem, ParserError},
    utils::expert_mode_enabled,
};

/// The transaction under review, it borrows the C staging buffer
/// handed to `_readEth` which must outlive it.
/// Only initialized while `ETH_TX_READY` is set
static mut ETH_TX: MaybeUninit<EthTxContext<'static>> = MaybeUninit::uninit();
static mut ETH_TX_READY: bool = false;

unsafe fn current_tx() -> Option<&'static EthTxContext<'static>> {
    if *addr_of!(ETH_TX_READY) {
        Some((*addr_of!(ETH_TX)).assume_init_ref())
    } else {
        None
    }
}

unsafe fn reset_tx() {
    addr_of_mut!(ETH_TX_READY).write(false);
}

fn code(result: Result<(), ParserError>) -> u32 {
    match result {
        Ok(()) => ParserError::ParserOk as u32,
        Err(e) => e as u32,
    }
}

/// Parses the transaction in `buffer`, replacing any previous one
///
/// # Safety
/// `buffer` must point to `len` readable bytes that stay valid and
/// unmodified until the next call to `_readEth` or `_cleanEth`
#[no_mangle]
pub unsafe extern "C" fn _readEth(buffer: *const u8, len: u32) -> u32 {
    crate::zlog("_readEth\x00");

    // a failed parse must not leave the previous transaction around
    reset_tx();

    if buffer.is_null() {
        return ParserError::ContextMismatch as u32;
    }

    let data = core::slice::from_raw_parts(buffer, len as usize);

    // parsed straight into the static record
    match EthTxContext::parse_into(data, &mut *addr_of_mut!(ETH_TX)) {
        Ok(()) => {
            addr_of_mut!(ETH_TX_READY).write(true);
            ParserError::ParserOk as u32
        }
        Err(e) => e as u32,
    }
}

/// Checks the parsed transaction can be shown to the user
///
/// # Safety
/// Must not be called concurrently with any other function of this module
#[no_mangle]
pub unsafe extern "C" fn _validateTxEth() -> u32 {
    let Some(tx) = current_tx() else {
        return ParserError::NoData as u32;
    };

    code(tx.validate(expert_mode_enabled()))
}

/// # Safety
/// `num_items` must be null or valid for writes
#[no_mangle]
pub unsafe extern "C" fn _getNumItemsEth(num_items: *mut u8) -> u32 {
    if num_items.is_null() {
        return ParserError::ContextMismatch as u32;
    }
    *num_items = 0;

    let Some(tx) = current_tx() else {
        return ParserError::NoData as u32;
    };

    match tx.ui(expert_mode_enabled()).num_items() {
        Ok(n) => {
            *num_items = n;
            ParserError::ParserOk as u32
        }
        Err(e) => e as u32,
    }
}

/// Renders the `page_idx` page of the `display_idx` item
///
/// # Safety
/// `out_key` and `out_val` must be null or valid for `key_len` and `val_len`
/// bytes of writes, `page_count` must be null or valid for writes
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn _getItemEth(
    display_idx: u8,
    out_key: *mut u8,
    key_len: u16,
    out_val: *mut u8,
    val_len: u16,
    page_idx: u8,
    page_count: *mut u8,
) -> u32 {
    if out_key.is_null() || out_val.is_null() || page_count.is_null() {
        return ParserError::ContextMismatch as u32;
    }
    *page_count = 0;

    let key = core::slice::from_raw_parts_mut(out_key, key_len as usize);
    let value = core::slice::from_raw_parts_mut(out_val, val_len as usize);

    let Some(tx) = current_tx() else {
        return ParserError::NoData as u32;
    };

    match tx
        .ui(expert_mode_enabled())
        .render_item(display_idx, key, value, page_idx)
    {
        Ok(pages) => {
            *page_count = pages;
            ParserError::ParserOk as u32
        }
        Err(e) => e as u32,
    }
}

/// Computes the V byte of the signature, `info` is the
/// flags word returned by the device signing function
///
/// # Safety
/// `v` must be null or valid for writes
#[no_mangle]
pub unsafe extern "C" fn _computeV(info: u32, v: *mut u8) -> u32 {
    if v.is_null() {
        return ParserError::ContextMismatch as u32;
    }

    let Some(tx) = current_tx() else {
        return ParserError::NoData as u32;
    };

    *v = tx.compute_v(parity_from_info(info));
    ParserError::ParserOk as u32
}

/// Drops the parsed transaction
///
/// # Safety
/// Must not be called concurrently with any other function of this module
#[no_mangle]
pub unsafe extern "C" fn _cleanEth() {
    reset_tx();
}
