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
#![no_std]
#![no_builtins]
#![macro_use]
#![allow(clippy::manual_range_contains)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod constants;
pub mod ffi;
pub mod handlers;
pub mod parser;
mod sys;
pub mod utils;

pub use handlers::eth::{compute_v, EthTxContext, EthTxUi};
pub use parser::{
    ChainId, DisplayableItem, Erc20Transfer, EthTransaction, EthTxType, FromBytes, ParserError,
};

#[cfg(all(not(test), target_os = "none"))]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {}
}

/// Emits a trace line through the `log` facade.
///
/// Device builds compile this out by enabling one of
/// the `max_level_*` features of `log`
pub fn zlog(msg: &str) {
    sys::zemu_log_stack(msg);
}
