//! Decoding of the packed hex address:port tokens in /proc/net tables
use std::net::Ipv4Addr;

use crate::error::ScanError;
use crate::net::EndpointAddress;

/// Decode one `AAAAAAAA:PPPP` token, e.g. `"0100007F:1F90"` -> 127.0.0.1:8080.
///
/// The address half is the kernel's little-endian byte order: each hex pair is
/// one octet, and the four octets are reversed to obtain dotted-quad order.
/// The port half is a plain big-endian 16-bit value, no swap.
pub fn decode(token: &str) -> Result<EndpointAddress, ScanError> {
    let malformed = || ScanError::MalformedAddress(token.to_string());

    let (addr_hex, port_hex) = token.split_once(':').ok_or_else(malformed)?;
    if addr_hex.len() != 8 || !addr_hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }
    if port_hex.len() != 4 || !port_hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = u8::from_str_radix(&addr_hex[2 * i..2 * i + 2], 16).map_err(|_| malformed())?;
    }
    octets.reverse();

    let port = u16::from_str_radix(port_hex, 16).map_err(|_| malformed())?;

    Ok(EndpointAddress {
        ip: Ipv4Addr::from(octets),
        port,
    })
}
