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
use rslib::{DisplayableItem, EthTxContext};

fn main() {
    loop {
        honggfuzz::fuzz!(|data: &[u8]| {
            let Ok(ctx) = EthTxContext::parse(data) else {
                return;
            };

            _ = ctx.validate(true);
            _ = ctx.compute_v(data.len() % 2 == 0);

            let ui = ctx.ui(true);
            let Ok(count) = ui.num_items() else {
                return;
            };

            let mut title = [0u8; 32];
            let mut message = [0u8; 64];
            for item in 0..count {
                let Ok(pages) = ui.render_item(item, &mut title, &mut message, 0) else {
                    continue;
                };
                for page in 1..pages {
                    _ = ui.render_item(item, &mut title, &mut message, page);
                }
            }
        });
    }
}
