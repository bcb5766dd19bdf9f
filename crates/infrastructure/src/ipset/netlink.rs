use super::netlink_message::{decode_ack, encode_add_request};
use ferrous_ipset_application::ports::IpSetWriter;
use ferrous_ipset_domain::{SetEntry, SetMutationError};
use std::io;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tracing::trace;

const RECV_BUFFER_SIZE: usize = 8192;

/// Writes entries into kernel ipsets over `NETLINK_NETFILTER`.
///
/// Each call opens its own socket, so the writer holds no lock and can be
/// shared between threads.
pub struct NetlinkIpSetWriter {
    seq: AtomicU32,
    ack_timeout: Duration,
}

impl NetlinkIpSetWriter {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(1))
    }

    pub fn with_timeout(ack_timeout: Duration) -> Self {
        Self {
            seq: AtomicU32::new(1),
            ack_timeout,
        }
    }

    fn open_socket(&self) -> Result<OwnedFd, SetMutationError> {
        let raw = unsafe {
            libc::socket(
                libc::AF_NETLINK,
                libc::SOCK_RAW | libc::SOCK_CLOEXEC,
                libc::NETLINK_NETFILTER,
            )
        };
        if raw < 0 {
            return Err(last_os_error("socket"));
        }
        let fd = unsafe { OwnedFd::from_raw_fd(raw) };

        let mut local: libc::sockaddr_nl = unsafe { std::mem::zeroed() };
        local.nl_family = libc::AF_NETLINK as libc::sa_family_t;
        let rc = unsafe {
            libc::bind(
                fd.as_raw_fd(),
                &local as *const libc::sockaddr_nl as *const libc::sockaddr,
                std::mem::size_of::<libc::sockaddr_nl>() as libc::socklen_t,
            )
        };
        if rc < 0 {
            return Err(last_os_error("bind"));
        }

        let timeout = libc::timeval {
            tv_sec: self.ack_timeout.as_secs() as libc::time_t,
            tv_usec: self.ack_timeout.subsec_micros() as libc::suseconds_t,
        };
        let rc = unsafe {
            libc::setsockopt(
                fd.as_raw_fd(),
                libc::SOL_SOCKET,
                libc::SO_RCVTIMEO,
                &timeout as *const libc::timeval as *const libc::c_void,
                std::mem::size_of::<libc::timeval>() as libc::socklen_t,
            )
        };
        if rc < 0 {
            return Err(last_os_error("setsockopt"));
        }

        Ok(fd)
    }

    fn send(&self, fd: &OwnedFd, request: &[u8]) -> Result<(), SetMutationError> {
        let mut kernel: libc::sockaddr_nl = unsafe { std::mem::zeroed() };
        kernel.nl_family = libc::AF_NETLINK as libc::sa_family_t;

        let sent = unsafe {
            libc::sendto(
                fd.as_raw_fd(),
                request.as_ptr() as *const libc::c_void,
                request.len(),
                0,
                &kernel as *const libc::sockaddr_nl as *const libc::sockaddr,
                std::mem::size_of::<libc::sockaddr_nl>() as libc::socklen_t,
            )
        };
        if sent < 0 {
            return Err(last_os_error("sendto"));
        }
        Ok(())
    }

    fn wait_ack(&self, fd: &OwnedFd, seq: u32, set_name: &str) -> Result<(), SetMutationError> {
        let mut buf = vec![0u8; RECV_BUFFER_SIZE];

        loop {
            let n = unsafe {
                libc::recv(
                    fd.as_raw_fd(),
                    buf.as_mut_ptr() as *mut libc::c_void,
                    buf.len(),
                    0,
                )
            };
            if n < 0 {
                let err = io::Error::last_os_error();
                return Err(match err.kind() {
                    io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => {
                        SetMutationError::Io("timed out waiting for netlink ack".to_string())
                    }
                    _ => SetMutationError::Io(format!("recv: {}", err)),
                });
            }

            if decode_ack(&buf[..n as usize], seq, set_name)? {
                return Ok(());
            }
        }
    }
}

impl Default for NetlinkIpSetWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl IpSetWriter for NetlinkIpSetWriter {
    fn add_cidr(&self, entry: &SetEntry) -> Result<(), SetMutationError> {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let request = encode_add_request(entry, seq)?;

        let fd = self.open_socket()?;
        self.send(&fd, &request)?;
        self.wait_ack(&fd, seq, &entry.set_name)?;

        trace!(seq, entry = %entry, "ipset entry added");
        Ok(())
    }
}

fn last_os_error(op: &str) -> SetMutationError {
    let err = io::Error::last_os_error();
    match err.raw_os_error() {
        Some(libc::EPERM) | Some(libc::EACCES) => SetMutationError::PermissionDenied,
        _ => SetMutationError::Io(format!("{}: {}", op, err)),
    }
}
