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

/// Traces an entry point, trimming the C-style terminator that
/// call sites keep so the same literals can be handed to the C side.
pub fn zemu_log_stack(s: &str) {
    log::trace!("{}", s.trim_end_matches('\x00'));
}

/// Reports a rejected transaction along with the reason.
pub fn zemu_log_reject(s: &str, err: crate::parser::ParserError) {
    log::debug!("{} rejected: {}", s.trim_end_matches('\x00'), err as u32);
}
