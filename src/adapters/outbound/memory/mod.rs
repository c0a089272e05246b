/// In-memory adapters, used as test doubles and for previewing output
mod in_memory_emitter;

pub use in_memory_emitter::InMemorySettingsEmitter;
