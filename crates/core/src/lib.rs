pub mod address;

pub use address::{AddressManager, MultiaddrSet};

// Re-export the address type so callers don't need a direct multiaddr dependency
pub use multiaddr::Multiaddr;
