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

/// Writes the `page`-th chunk of `item` into `out`, null terminated,
/// and returns how many pages `item` spans given the size of `out`
pub fn handle_ui_message(item: &[u8], out: &mut [u8], page: u8) -> Result<u8, ParserError> {
    // reserve the last byte for the null terminator
    let m_len = out.len().saturating_sub(1);
    if m_len == 0 {
        return Err(ParserError::UnexpectedBufferEnd);
    }

    let n_pages = core::cmp::max(1, item.len().div_ceil(m_len));
    let n_pages = u8::try_from(n_pages).map_err(|_| ParserError::ValueOutOfRange)?;

    if page >= n_pages {
        return Err(ParserError::DisplayPageOutOfRange);
    }

    let chunk = item.chunks(m_len).nth(page as usize).unwrap_or(&[]);

    out[..chunk.len()].copy_from_slice(chunk);
    out[chunk.len()] = 0;

    Ok(n_pages)
}

/// Copies `label` into `title`, null terminated
pub fn handle_ui_title(label: &[u8], title: &mut [u8]) -> Result<(), ParserError> {
    if label.len() >= title.len() {
        return Err(ParserError::UnexpectedBufferEnd);
    }

    title[..label.len()].copy_from_slice(label);
    title[label.len()] = 0;

    Ok(())
}
