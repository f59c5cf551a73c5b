//! Server-side group selection.
//!
//! Both queries look at the *effective* peer list: the peer's advertised
//! groups if it sent any we recognise, otherwise our own local list.

use crate::connection::ConnectionGroups;
use crate::crypto::kx::KeyExchangeAlgorithm;
use crate::msgs::enums::NamedGroup;

/// The strongest `kind` of key exchange the effective peer list allows.
///
/// Zero means none.
pub fn maximum_bits(conn: &ConnectionGroups, kind: KeyExchangeAlgorithm) -> u32 {
    conn.effective_peer()
        .iter()
        .map(|info| info.bits(kind))
        .max()
        .unwrap_or(0)
}

/// Pick the group to use for `kind` of key exchange.
///
/// This is the first effective peer group of at least `minimum_bits`, so the
/// peer's preference order wins over strength.  Groups with no strength for
/// `kind` (a finite field when asking for ECDHE, say) never match, even when
/// `minimum_bits` is zero.
pub fn select_server(
    conn: &ConnectionGroups,
    kind: KeyExchangeAlgorithm,
    minimum_bits: u32,
) -> Option<NamedGroup> {
    conn.effective_peer()
        .iter()
        .find(|info| {
            let bits = info.bits(kind);
            bits > 0 && bits >= minimum_bits
        })
        .map(|info| info.group())
}
