//! ipset netlink request encoding and ack decoding.
//!
//! Layout of an `IPSET_CMD_ADD` request:
//!
//! ```text
//! nlmsghdr | nfgenmsg | PROTOCOL | SETNAME | DATA { IP { IPADDR_IPV4|6 }, CIDR }
//! ```

use ferrous_ipset_domain::{SetEntry, SetMutationError};
use std::net::IpAddr;

const NLMSG_HDRLEN: usize = 16;
const NLA_HDRLEN: usize = 4;
const NLMSG_ERROR: u16 = 0x02;
const NLM_F_REQUEST: u16 = 0x01;
const NLM_F_ACK: u16 = 0x04;
const NLA_F_NESTED: u16 = 1 << 15;
const NLA_F_NET_BYTEORDER: u16 = 1 << 14;

const NFNETLINK_V0: u8 = 0;
const NFPROTO_IPV4: u8 = 2;
const NFPROTO_IPV6: u8 = 10;

const NFNL_SUBSYS_IPSET: u16 = 6;
const IPSET_CMD_ADD: u16 = 9;
const IPSET_PROTOCOL: u8 = 6;
pub const IPSET_MAXNAMELEN: usize = 32;

const IPSET_ATTR_PROTOCOL: u16 = 1;
const IPSET_ATTR_SETNAME: u16 = 2;
const IPSET_ATTR_DATA: u16 = 7;
const IPSET_ATTR_IP: u16 = 1;
const IPSET_ATTR_CIDR: u16 = 3;
const IPSET_ATTR_IPADDR_IPV4: u16 = 1;
const IPSET_ATTR_IPADDR_IPV6: u16 = 2;

const ENOENT: i32 = 2;
const EPERM: i32 = 1;

#[inline]
fn align4(len: usize) -> usize {
    (len + 3) & !3
}

struct NetlinkBuffer {
    buf: Vec<u8>,
}

impl NetlinkBuffer {
    fn new(msg_type: u16, flags: u16, seq: u32) -> Self {
        let mut buf = Vec::with_capacity(96);
        buf.extend_from_slice(&0u32.to_ne_bytes());
        buf.extend_from_slice(&msg_type.to_ne_bytes());
        buf.extend_from_slice(&flags.to_ne_bytes());
        buf.extend_from_slice(&seq.to_ne_bytes());
        buf.extend_from_slice(&0u32.to_ne_bytes());
        Self { buf }
    }

    fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    fn pad(&mut self) {
        let padded = align4(self.buf.len());
        self.buf.resize(padded, 0);
    }

    fn put_attr(&mut self, attr_type: u16, payload: &[u8]) {
        let len = (NLA_HDRLEN + payload.len()) as u16;
        self.buf.extend_from_slice(&len.to_ne_bytes());
        self.buf.extend_from_slice(&attr_type.to_ne_bytes());
        self.buf.extend_from_slice(payload);
        self.pad();
    }

    fn begin_nested(&mut self, attr_type: u16) -> usize {
        let start = self.buf.len();
        self.buf.extend_from_slice(&0u16.to_ne_bytes());
        self.buf.extend_from_slice(&(attr_type | NLA_F_NESTED).to_ne_bytes());
        start
    }

    fn end_nested(&mut self, start: usize) {
        let len = (self.buf.len() - start) as u16;
        self.buf[start..start + 2].copy_from_slice(&len.to_ne_bytes());
    }

    fn finish(mut self) -> Vec<u8> {
        let len = self.buf.len() as u32;
        self.buf[0..4].copy_from_slice(&len.to_ne_bytes());
        self.buf
    }
}

/// Encodes an add request for `entry`. Existing elements are not reported
/// as errors because `NLM_F_EXCL` is left unset.
pub fn encode_add_request(entry: &SetEntry, seq: u32) -> Result<Vec<u8>, SetMutationError> {
    let name = entry.set_name.as_bytes();
    if name.is_empty() || name.len() >= IPSET_MAXNAMELEN || name.contains(&0) {
        return Err(SetMutationError::InvalidSetName(entry.set_name.to_string()));
    }

    let (family, addr_attr, addr_bytes): (u8, u16, Vec<u8>) = match entry.address {
        IpAddr::V4(ip) => (NFPROTO_IPV4, IPSET_ATTR_IPADDR_IPV4, ip.octets().to_vec()),
        IpAddr::V6(ip) => (NFPROTO_IPV6, IPSET_ATTR_IPADDR_IPV6, ip.octets().to_vec()),
    };

    let mut msg = NetlinkBuffer::new(
        (NFNL_SUBSYS_IPSET << 8) | IPSET_CMD_ADD,
        NLM_F_REQUEST | NLM_F_ACK,
        seq,
    );

    // nfgenmsg: family, version, res_id (big endian)
    msg.put_bytes(&[family, NFNETLINK_V0, 0, 0]);

    msg.put_attr(IPSET_ATTR_PROTOCOL, &[IPSET_PROTOCOL]);

    let mut set_name = Vec::with_capacity(name.len() + 1);
    set_name.extend_from_slice(name);
    set_name.push(0);
    msg.put_attr(IPSET_ATTR_SETNAME, &set_name);

    let data = msg.begin_nested(IPSET_ATTR_DATA);
    let ip = msg.begin_nested(IPSET_ATTR_IP);
    msg.put_attr(addr_attr | NLA_F_NET_BYTEORDER, &addr_bytes);
    msg.end_nested(ip);
    msg.put_attr(IPSET_ATTR_CIDR, &[entry.prefix_length]);
    msg.end_nested(data);

    Ok(msg.finish())
}

/// Scans a receive buffer for the ack of `seq`.
///
/// `Ok(true)` when the kernel acknowledged the request, `Ok(false)` when the
/// buffer holds no ack for it yet.
pub fn decode_ack(buf: &[u8], seq: u32, set_name: &str) -> Result<bool, SetMutationError> {
    let mut offset = 0;

    while offset + NLMSG_HDRLEN <= buf.len() {
        let msg_len = read_u32(buf, offset) as usize;
        let msg_type = u16::from_ne_bytes([buf[offset + 4], buf[offset + 5]]);
        let msg_seq = read_u32(buf, offset + 8);

        if msg_len < NLMSG_HDRLEN || offset + msg_len > buf.len() {
            return Err(SetMutationError::Io(format!(
                "truncated netlink message ({} bytes at offset {})",
                msg_len, offset
            )));
        }

        if msg_type == NLMSG_ERROR && msg_seq == seq {
            if msg_len < NLMSG_HDRLEN + 4 {
                return Err(SetMutationError::Io("short netlink error message".to_string()));
            }
            let code = read_u32(buf, offset + NLMSG_HDRLEN) as i32;
            return match code {
                0 => Ok(true),
                code => Err(errno_to_error(-code, set_name)),
            };
        }

        offset += align4(msg_len);
    }

    Ok(false)
}

fn read_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_ne_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

fn errno_to_error(errno: i32, set_name: &str) -> SetMutationError {
    match errno {
        ENOENT => SetMutationError::SetNotFound(set_name.to_string()),
        EPERM => SetMutationError::PermissionDenied,
        code => SetMutationError::Kernel { code },
    }
}
