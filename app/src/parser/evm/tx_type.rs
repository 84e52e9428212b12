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
use crate::parser::ParserError;

pub const EIP2930_TX: u8 = 0x01;
pub const EIP1559_TX: u8 = 0x02;
/// Lowest RLP list prefix, a legacy transaction starts with it
pub const LEGACY_TX_MIN: u8 = 0xC0;

// Important: do not change the repr attribute,
// as this type is used as the tag field
// for the EthTransaction enum which has the same representation
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum EthTxType {
    Legacy,
    Eip2930,
    Eip1559,
}

impl EthTxType {
    /// Reads the EIP-2718 envelope marker.
    ///
    /// The marker is consumed for typed transactions, a legacy
    /// transaction has none so its first byte, the list prefix,
    /// is left for the RLP decoder.
    pub fn from_bytes(input: &[u8]) -> Result<(&[u8], Self), ParserError> {
        // an empty buffer never reaches the parser, the C side checks it
        let tx_type = *input.first().ok_or(ParserError::UnexpectedError)?;

        match tx_type {
            EIP2930_TX => Ok((&input[1..], Self::Eip2930)),
            EIP1559_TX => Ok((&input[1..], Self::Eip1559)),
            LEGACY_TX_MIN.. => Ok((input, Self::Legacy)),
            _ => {
                crate::sys::zemu_log_reject("EthTxType::from_bytes\x00", ParserError::UnsupportedTx);
                Err(ParserError::UnsupportedTx)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_markers_are_consumed() {
        let (rem, tx_type) = EthTxType::from_bytes(&[0x01, 0xC0]).unwrap();
        assert_eq!(tx_type, EthTxType::Eip2930);
        assert_eq!(rem, &[0xC0]);

        let (rem, tx_type) = EthTxType::from_bytes(&[0x02, 0xC0]).unwrap();
        assert_eq!(tx_type, EthTxType::Eip1559);
        assert_eq!(rem, &[0xC0]);
    }

    #[test]
    fn legacy_keeps_list_prefix() {
        for prefix in 0xC0..=0xFF {
            let input = [prefix, 0x00];
            let (rem, tx_type) = EthTxType::from_bytes(&input).unwrap();
            assert_eq!(tx_type, EthTxType::Legacy);
            assert_eq!(rem, &input);
        }
    }

    #[test]
    fn unsupported_markers() {
        for marker in (0x00..0xC0).filter(|m| *m != EIP2930_TX && *m != EIP1559_TX) {
            assert_eq!(
                EthTxType::from_bytes(&[marker, 0xC0]).unwrap_err(),
                ParserError::UnsupportedTx
            );
        }
    }

    #[test]
    fn empty_buffer() {
        assert_eq!(
            EthTxType::from_bytes(&[]).unwrap_err(),
            ParserError::UnexpectedError
        );
    }
}
