mod apply_ipset;

pub use apply_ipset::{ApplyIpSetUseCase, CompiledRule};
