//! Lightweight interval-timing instrumentation for the hot paths of the
//! lexer and the bitwise opcode family.
//!
//! Compiled out entirely unless the `profiler` feature is enabled, in which
//! case every event is recorded through `measureme` into a trace file a
//! host application can inspect offline. This crate never reaches for
//! `log`/`tracing` here: the lineage this code is drawn from never needed
//! more than event timing for this subsystem, and a textual logger would
//! be the wrong tool for a per-token, per-opcode hot path.

#![allow(missing_copy_implementations, missing_debug_implementations)]

#[cfg(feature = "profiler")]
use measureme::{EventId, Profiler, TimingGuard};
#[cfg(feature = "profiler")]
use once_cell::sync::OnceCell;
use std::fmt::{self, Debug};
#[cfg(feature = "profiler")]
use std::{
    path::Path,
    thread::{current, ThreadId},
};

#[cfg(feature = "profiler")]
pub struct EngineProfiler {
    profiler: Profiler,
}

/// This static instance should never be public; all access goes through
/// `global()`, which takes care of lazy init and synchronization.
#[cfg(feature = "profiler")]
static mut INSTANCE: OnceCell<EngineProfiler> = OnceCell::new();

#[cfg(feature = "profiler")]
impl EngineProfiler {
    pub fn start_event(&self, label: &str, category: &str) -> TimingGuard<'_> {
        let kind = self.profiler.alloc_string(category);
        let id = EventId::from_label(self.profiler.alloc_string(label));
        let thread_id = Self::thread_id_to_u32(current().id());
        self.profiler
            .start_recording_interval_event(kind, id, thread_id)
    }

    pub fn default() -> Self {
        let profiler =
            Profiler::new(Path::new("./ejs_core_trace")).expect("must be able to create file");
        Self { profiler }
    }

    pub fn global() -> &'static Self {
        unsafe { INSTANCE.get_or_init(Self::default) }
    }

    fn thread_id_to_u32(tid: ThreadId) -> u32 {
        unsafe { std::mem::transmute::<ThreadId, u64>(tid) as u32 }
    }
}

impl Debug for EngineProfiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt("no debug implemented", f)
    }
}

#[cfg(not(feature = "profiler"))]
pub struct EngineProfiler;

#[allow(clippy::unused_unit, clippy::unused_self)]
#[cfg(not(feature = "profiler"))]
impl EngineProfiler {
    pub fn start_event(&self, _label: &str, _category: &str) {}

    pub fn global() -> Self {
        Self
    }
}
