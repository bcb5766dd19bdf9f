pub mod ipset;

pub use ipset::{ApplyIpSetUseCase, CompiledRule};
