// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! One-shot delayed actions on the main loop
//!
//! The controller never sleeps. It hands the pair evaluation to a
//! scheduler, which runs it later on the same thread. In the app that is
//! the GLib main loop; tests drive a manual scheduler instead.

use std::time::Duration;

/// Runs an action once after a delay, on the calling thread's event loop
pub trait DelayScheduler {
    fn schedule_once(&self, delay: Duration, action: Box<dyn FnOnce()>);
}

/// Schedules actions on the default GLib main context
#[derive(Clone, Copy, Debug, Default)]
pub struct GlibScheduler;

impl DelayScheduler for GlibScheduler {
    fn schedule_once(&self, delay: Duration, action: Box<dyn FnOnce()>) {
        glib::timeout_add_local_once(delay, action);
    }
}
