//! Peer address tracking
//!
//! A peer exposes three sets of multiaddrs: the addresses it listens on,
//! extra addresses to announce, and addresses withheld from announcement.
//! [`AddressManager`] composes them into the list actually advertised to
//! other peers; [`MultiaddrSet`] is the deduplicated collection backing
//! each of the three.

mod manager;
mod set;

pub use manager::AddressManager;
pub use set::MultiaddrSet;
