pub mod dns;
pub mod ipset;
