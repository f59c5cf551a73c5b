use crate::error::InvalidMessage;
use crate::msgs::codec::{Codec, Reader};
use crate::msgs::enums::NamedGroup;

/// The body of the `supported_groups` extension (RFC 8446 section 4.2.7).
///
/// On the wire this is a `u16` byte length followed by that many bytes of
/// `u16` group identifiers, in preference order.  Unknown identifiers are
/// kept as [`NamedGroup::Unknown`]; dropping them is a negotiation decision,
/// not a decoding one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SupportedGroups(pub Vec<NamedGroup>);

impl Codec<'_> for SupportedGroups {
    fn encode(&self, bytes: &mut Vec<u8>) {
        let len = self.0.len() * 2;
        (len as u16).encode(bytes);
        for group in &self.0 {
            group.encode(bytes);
        }
    }

    fn read(r: &mut Reader<'_>) -> Result<Self, InvalidMessage> {
        let len = u16::read(r)? as usize;
        let mut sub = r.sub(len)?;

        let mut groups = Vec::with_capacity(len / 2);
        while sub.any_left() {
            groups.push(NamedGroup::read(&mut sub)?);
        }

        Ok(Self(groups))
    }
}
