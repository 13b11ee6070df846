/// State management module
///
/// This module handles all screen state, including:
/// - The snapshot data model (data.rs)
/// - Transition rules applied to snapshots (screen.rs)
/// - The persistent key-value store (store.rs)

pub mod data;
pub mod screen;
pub mod store;
