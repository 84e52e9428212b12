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
use nom::error::ErrorKind;

/// Error codes shared with the C application, `ParserOk` must stay 0
#[repr(u32)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ParserError {
    ParserOk = 0,
    // Generic errors
    NoData,
    DisplayPageOutOfRange,
    UnexpectedError,
    ContextMismatch,
    // Malformed input
    UnexpectedType,
    UnexpectedValue,
    UnexpectedBufferEnd,
    UnexpectedCharacters,
    UnexpectedNumberItems,
    ValueOutOfRange,
    InvalidAddress,
    // Policy
    InvalidChainId,
    InvalidRsValues,
    UnsupportedTx,
}

impl ParserError {
    /// Malformed input, as opposed to well formed bytes refused by policy
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedType
                | Self::UnexpectedValue
                | Self::UnexpectedBufferEnd
                | Self::UnexpectedCharacters
                | Self::UnexpectedNumberItems
                | Self::ValueOutOfRange
                | Self::InvalidAddress
        )
    }

    pub fn is_policy_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidChainId | Self::InvalidRsValues | Self::UnsupportedTx
        )
    }
}

impl From<ErrorKind> for ParserError {
    fn from(err: ErrorKind) -> Self {
        match err {
            ErrorKind::Eof => ParserError::UnexpectedBufferEnd,
            ErrorKind::Permutation => ParserError::UnexpectedType,
            ErrorKind::TooLarge => ParserError::ValueOutOfRange,
            _ => ParserError::UnexpectedError,
        }
    }
}

impl<I> nom::error::ParseError<I> for ParserError {
    fn from_error_kind(_input: I, kind: ErrorKind) -> Self {
        Self::from(kind)
    }

    // We don't have enough memory resources to use here an array with the last
    // N errors to be used as a backtrace, so that, we just propagate here the latest
    // reported error
    fn append(_input: I, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl From<ParserError> for nom::Err<ParserError> {
    fn from(error: ParserError) -> Self {
        nom::Err::Error(error)
    }
}

impl From<nom::Err<Self>> for ParserError {
    fn from(e: nom::Err<Self>) -> Self {
        match e {
            nom::Err::Error(e) => e,
            nom::Err::Failure(e) => e,
            nom::Err::Incomplete(_) => Self::UnexpectedBufferEnd,
        }
    }
}

impl From<ParserError> for u32 {
    fn from(e: ParserError) -> Self {
        e as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_is_zero() {
        assert_eq!(u32::from(ParserError::ParserOk), 0);
    }

    #[test]
    fn nom_errors_keep_the_reported_error() {
        let err: nom::Err<ParserError> = ParserError::InvalidChainId.into();
        assert_eq!(ParserError::from(err), ParserError::InvalidChainId);

        let eof = nom::bytes::complete::take::<_, _, ParserError>(2usize)(&[0u8][..]);
        assert_eq!(
            ParserError::from(eof.unwrap_err()),
            ParserError::UnexpectedBufferEnd
        );
    }

    #[test]
    fn error_kinds() {
        assert!(ParserError::UnexpectedCharacters.is_malformed_input());
        assert!(!ParserError::UnexpectedCharacters.is_policy_rejection());
        assert!(ParserError::InvalidRsValues.is_policy_rejection());
        assert!(!ParserError::DisplayPageOutOfRange.is_malformed_input());
    }
}
