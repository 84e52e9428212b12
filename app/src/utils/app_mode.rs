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
use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(any(unix, windows))] {
        use core::sync::atomic::{AtomicBool, Ordering};

        /// Provide a mock for host builds and tests
        static EXPERT_MODE: AtomicBool = AtomicBool::new(false);

        /// Toggles the expert mode mock
        pub fn set_expert_mode(enabled: bool) {
            EXPERT_MODE.store(enabled, Ordering::Relaxed);
        }

        fn app_mode_expert() -> bool {
            EXPERT_MODE.load(Ordering::Relaxed)
        }
    } else {
        extern "C" {
            ///Link to the C code
            #[link_name = "app_mode_expert"]
            fn c_app_mode_expert() -> bool;
        }

        fn app_mode_expert() -> bool {
            //safe: the C side only reads its own settings
            unsafe { c_app_mode_expert() }
        }
    }
}

/// Returns if expert mode is enabled in this execution,
/// which allows reviewing transactions that are not clear signed
pub fn expert_mode_enabled() -> bool {
    app_mode_expert()
}
