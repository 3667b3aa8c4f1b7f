use std::sync::OnceLock;

use log::trace;

/// Byte order of the running host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
}

const PROBE: u16 = 0x0102;
// PROBE laid out in network order
const PROBE_NETWORK: [u8; 2] = [0x01, 0x02];

static HOST_ORDER: OnceLock<ByteOrder> = OnceLock::new();

impl ByteOrder {
    /// The host byte order, probed on first use and cached for the rest of the process.
    pub fn host() -> ByteOrder {
        *HOST_ORDER.get_or_init(|| {
            let order = Self::probe(PROBE.to_ne_bytes());
            trace!("[byte_order] detected host byte order: {order:?}");
            order
        })
    }

    fn probe(native: [u8; 2]) -> ByteOrder {
        if native == PROBE_NETWORK {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }

    fn is_network(self) -> bool {
        self == ByteOrder::BigEndian
    }
}

/// Host to network, 16 bits
#[inline]
pub fn hton16(x: u16) -> u16 {
    hton16_on(ByteOrder::host(), x)
}

/// Host to network, 32 bits
#[inline]
pub fn hton32(x: u32) -> u32 {
    hton32_on(ByteOrder::host(), x)
}

/// Host to network, 64 bits
#[inline]
pub fn hton64(x: u64) -> u64 {
    hton64_on(ByteOrder::host(), x)
}

/// Network to host, 16 bits. Same permutation as [`hton16`].
#[inline]
pub fn ntoh16(x: u16) -> u16 {
    hton16(x)
}

/// Network to host, 32 bits. Same permutation as [`hton32`].
#[inline]
pub fn ntoh32(x: u32) -> u32 {
    hton32(x)
}

/// Network to host, 64 bits. Same permutation as [`hton64`].
#[inline]
pub fn ntoh64(x: u64) -> u64 {
    hton64(x)
}

fn hton16_on(order: ByteOrder, x: u16) -> u16 {
    if order.is_network() {
        return x;
    }
    x.swap_bytes()
}

fn hton32_on(order: ByteOrder, x: u32) -> u32 {
    if order.is_network() {
        return x;
    }
    x.swap_bytes()
}

/// Each 32-bit half is converted on its own, then the halves trade places.
fn hton64_on(order: ByteOrder, x: u64) -> u64 {
    if order.is_network() {
        return x;
    }
    let lo = (x & 0x0000_0000_FFFF_FFFF) as u32;
    let hi = (x >> 32) as u32;
    let new_hi = u64::from(hton32_on(order, lo));
    let new_lo = u64::from(hton32_on(order, hi));
    new_hi << 32 | new_lo
}

/// Raw bit patterns that travel in network byte order
pub trait NetworkOrder: Copy {
    fn to_network(self) -> Self;

    fn to_host(self) -> Self;
}

macro_rules! impl_network_order {
    ($($t:ty => $hton:ident, $ntoh:ident);* $(;)?) => {
        $(
            impl NetworkOrder for $t {
                #[inline]
                fn to_network(self) -> Self {
                    $hton(self)
                }

                #[inline]
                fn to_host(self) -> Self {
                    $ntoh(self)
                }
            }
        )*
    };
}

impl_network_order! {
    u16 => hton16, ntoh16;
    u32 => hton32, ntoh32;
    u64 => hton64, ntoh64;
}
