use super::MultiaddrSet;
use multiaddr::Multiaddr;
use peeraddr_common::{AddressConfig, Result};
use tracing::debug;

/// Manager for the addresses a peer exposes to the network
///
/// Owns three multiaddr sets: addresses to listen on, an announce
/// amendment advertised on top of them, and a no-announce set withheld
/// from advertisement. The effective announce list is derived on every
/// read; nothing is cached.
#[derive(Debug)]
pub struct AddressManager {
    listen: MultiaddrSet,
    announce: MultiaddrSet,
    no_announce: MultiaddrSet,
}

impl AddressManager {
    /// Build a manager from the configured multiaddr strings
    ///
    /// Any malformed entry in any of the three lists is fatal; a manager
    /// is never constructed from partially-valid input.
    pub fn new(config: AddressConfig) -> Result<Self> {
        let manager = Self {
            listen: MultiaddrSet::from_strings(&config.listen)?,
            announce: MultiaddrSet::from_strings(&config.announce)?,
            no_announce: MultiaddrSet::from_strings(&config.no_announce)?,
        };

        debug!(
            "Address manager created: {} listen, {} announce, {} no-announce",
            manager.listen.len(),
            manager.announce.len(),
            manager.no_announce.len()
        );

        Ok(manager)
    }

    /// Addresses the peer should bind transports to, in insertion order
    pub fn listen(&self) -> Vec<Multiaddr> {
        self.listen.to_vec()
    }

    /// Addresses to advertise to other peers
    ///
    /// Computed as the listen addresses followed by the announce
    /// amendment, minus every address equal to a no-announce entry.
    /// Filtering compares whole multiaddrs: an address that merely
    /// extends a no-announce entry with extra protocols (for example
    /// `/ip4/127.0.0.1/tcp/8080` against a no-announce `/ip4/127.0.0.1`)
    /// is still announced.
    pub fn announce(&self) -> Vec<Multiaddr> {
        self.listen
            .iter()
            .chain(self.announce.iter())
            .filter(|ma| !self.no_announce.has(ma))
            .cloned()
            .collect()
    }

    /// Addresses withheld from advertisement
    pub fn no_announce(&self) -> Vec<Multiaddr> {
        self.no_announce.to_vec()
    }

    /// Swap the listen set for the addresses the transports actually bound
    ///
    /// Called after listening on the configured addresses, which may have
    /// produced different concrete ones (an ephemeral port, say). Returns
    /// the resulting listen addresses.
    ///
    /// The no-announce set is left untouched: a no-announce entry keyed to
    /// an address whose port just changed keeps matching the old form.
    /// TODO: reconcile no_announce when a replaced listen address changes
    /// the port behind one of its entries.
    pub fn replace_listen(&mut self, new_addresses: Vec<Multiaddr>) -> Vec<Multiaddr> {
        let existing = self.listen.to_vec();
        self.listen.replace(&existing, new_addresses);

        let new_listen = self.listen.to_vec();
        debug!(
            "Replaced {} listen addresses with {}",
            existing.len(),
            new_listen.len()
        );
        new_listen
    }
}
