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
use crate::{
    constants::{CX_ECCINFO_PARITY_ODD, V_BASE_EIP155, V_BASE_LEGACY},
    parser::EthTransaction,
};

/// Reads the parity flag out of the signing info
/// returned by the device crypto library
pub fn parity_from_info(info: u32) -> bool {
    info & CX_ECCINFO_PARITY_ODD == CX_ECCINFO_PARITY_ODD
}

/// Computes the V component of the signature
///
/// It is necessary to write the right V
/// component as it depends on the transaction type,
/// the chainID and the parity of the signature,
/// this procedure is defined by EIP-155.
pub fn compute_v(tx: &EthTransaction<'_>, parity_odd: bool) -> u8 {
    let parity = parity_odd as u8;

    match tx {
        // typed transactions only carry the parity
        EthTransaction::Eip2930(_) | EthTransaction::Eip1559(_) => parity,
        EthTransaction::Legacy(legacy) => match legacy.chain_id() {
            // according to app-ethereum this is the legacy non eip155 conformant
            // so V should be made before EIP155 which had
            // 27 + {0, 1}
            None => V_BASE_LEGACY + parity,
            Some(chain_id) => {
                // clamp instead of wrapping, only the low byte goes
                // into the signature anyway
                let doubled = u32::try_from(chain_id.id())
                    .unwrap_or(u32::MAX)
                    .saturating_mul(2);
                let v = (V_BASE_EIP155 + parity as u32).saturating_add(doubled);
                v as u8
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::FromBytes;

    const LEGACY_3338: &str = "f86b098504a817c80082fde8946b175474e89094c44da98b954eedeac495271d0f80b844a9059cbb0000000000000000000000005a0b54d5dc17e0aadc383d2db43b0a0d3e029c4c0000000000000000000000000000000000000000000000000de0b6b3a7640000820d0a8080";
    const PRE_EIP155: &str = "e880843b9aca008252089428ee52a8f3d6e5d15f8b131996950d7f296c7952880de0b6b3a764000080";
    const EIP2930_2241: &str = "01f86a8208c1098504a817c80082fde8946b175474e89094c44da98b954eedeac495271d0f80b844a9059cbb0000000000000000000000005a0b54d5dc17e0aadc383d2db43b0a0d3e029c4c0000000000000000000000000000000000000000000000000de0b6b3a7640000c0";
    const EIP1559_9990: &str = "02f86f8227060984773594008506fc23ac0082fde8946b175474e89094c44da98b954eedeac495271d0f80b844a9059cbb0000000000000000000000005a0b54d5dc17e0aadc383d2db43b0a0d3e029c4c0000000000000000000000000000000000000000000000000de0b6b3a7640000c0";

    fn v_for(tx: &str, parity_odd: bool) -> u8 {
        let data = hex::decode(tx).unwrap();
        let (_, tx) = EthTransaction::from_bytes(&data).unwrap();
        compute_v(&tx, parity_odd)
    }

    #[test]
    fn typed_transactions() {
        for tx in [EIP2930_2241, EIP1559_9990] {
            assert_eq!(v_for(tx, false), 0);
            assert_eq!(v_for(tx, true), 1);
        }
    }

    #[test]
    fn legacy_pre_eip155() {
        assert_eq!(v_for(PRE_EIP155, false), 27);
        assert_eq!(v_for(PRE_EIP155, true), 28);
    }

    #[test]
    fn legacy_eip155() {
        // 35 + 1 + 2 * 3338 = 6712
        assert_eq!(v_for(LEGACY_3338, true), (6712u32 % 256) as u8);
        assert_eq!(v_for(LEGACY_3338, false), (6711u32 % 256) as u8);
    }

    #[test]
    fn parity_flag() {
        assert!(parity_from_info(0x01));
        assert!(parity_from_info(0x03));
        assert!(!parity_from_info(0x02));
        assert!(!parity_from_info(0x00));
    }
}
