mod dry_run;
mod netlink_message;
mod service;

#[cfg(target_os = "linux")]
mod netlink;
#[cfg(not(target_os = "linux"))]
mod unsupported;

pub use dry_run::DryRunIpSetWriter;
pub use netlink_message::{decode_ack, encode_add_request, IPSET_MAXNAMELEN};
pub use service::IpSetService;

#[cfg(target_os = "linux")]
pub use netlink::NetlinkIpSetWriter;
#[cfg(not(target_os = "linux"))]
pub use unsupported::NetlinkIpSetWriter;
