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
use prelude::*;

use proptest::prelude::*;

#[test]
fn typed_v_is_the_parity() {
    for chain in [MAINNET, TESTNET, CANARY] {
        let builder = TxBuilder::erc20().chain(Some(chain));
        for raw in [builder.eip2930(), builder.eip1559()] {
            let ctx = EthTxContext::parse(&raw).unwrap();
            assert_eq!(ctx.compute_v(false), 0);
            assert_eq!(ctx.compute_v(true), 1);
        }
    }
}

#[test]
fn legacy_without_replay_protection() {
    let raw = TxBuilder::plain_transfer().chain(None).legacy();
    let ctx = EthTxContext::parse(&raw).unwrap();

    assert_eq!(ctx.compute_v(false), 27);
    assert_eq!(ctx.compute_v(true), 28);
}

#[test]
fn legacy_eip155() {
    for chain in [MAINNET, TESTNET, CANARY] {
        let raw = TxBuilder::erc20().chain(Some(chain)).legacy();
        let ctx = EthTxContext::parse(&raw).unwrap();

        for parity in [false, true] {
            let expected = (35 + parity as u64 + 2 * chain) % 256;
            assert_eq!(ctx.compute_v(parity) as u64, expected);
        }
    }

    // 35 + 1 + 2 * 3338 = 6712
    let raw = TxBuilder::erc20().legacy();
    let ctx = EthTxContext::parse(&raw).unwrap();
    assert_eq!(ctx.compute_v(true), 56);
}

#[test]
fn free_function_matches_context() {
    let raw = TxBuilder::erc20().legacy();
    let ctx = EthTxContext::parse(&raw).unwrap();

    assert_eq!(compute_v(ctx.tx(), true), ctx.compute_v(true));
}

proptest! {
    #[test]
    fn typed_v_ignores_chain(chain in prop::sample::select(vec![MAINNET, TESTNET, CANARY]), parity: bool) {
        let raw = TxBuilder::erc20().chain(Some(chain)).eip1559();
        let ctx = EthTxContext::parse(&raw).unwrap();
        prop_assert_eq!(ctx.compute_v(parity), parity as u8);
    }
}
