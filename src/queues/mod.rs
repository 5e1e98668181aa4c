pub mod event;
pub mod pending;
pub mod drop_tail;
pub mod trace_generator;
pub mod bottleneck;
