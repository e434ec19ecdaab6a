use multiaddr::Multiaddr;
use peeraddr_common::{AddressError, Result};

/// Ordered, deduplicated collection of multiaddrs
///
/// Membership is decided by multiaddr value equality (encoded bytes), so
/// two addresses parsed from the same string through different paths count
/// as one element. Insertion order is preserved and observable. Lookups
/// are linear scans; a peer exposes at most a few dozen addresses.
#[derive(Debug, Clone, Default)]
pub struct MultiaddrSet {
    addresses: Vec<Multiaddr>,
}

impl MultiaddrSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a list of multiaddr strings into a set
    ///
    /// Fails on the first malformed entry; duplicates among the valid
    /// entries collapse into one element.
    pub fn from_strings<I, S>(addresses: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for address in addresses {
            let address = address.as_ref();
            let parsed: Multiaddr = address
                .parse()
                .map_err(|err: multiaddr::Error| {
                    AddressError::invalid_multiaddr(address, err.to_string())
                })?;
            set.add(parsed);
        }
        Ok(set)
    }

    /// Add a multiaddr to the set
    ///
    /// Appends at the end if no equal element is present; a duplicate is a
    /// no-op. Returns whether the set changed.
    pub fn add(&mut self, address: Multiaddr) -> bool {
        if self.has(&address) {
            return false;
        }
        self.addresses.push(address);
        true
    }

    /// Whether an equal multiaddr is present
    pub fn has(&self, address: &Multiaddr) -> bool {
        self.addresses.iter().any(|a| a == address)
    }

    /// Remove the first multiaddr equal to the given one, if any
    pub fn delete(&mut self, address: &Multiaddr) {
        if let Some(index) = self.addresses.iter().position(|a| a == address) {
            self.addresses.remove(index);
        }
    }

    /// Delete every address in `existing`, then add every address in `fresh`
    ///
    /// Deletions match by value, not by position; entries of `existing`
    /// that are absent are skipped silently.
    pub fn replace(&mut self, existing: &[Multiaddr], fresh: Vec<Multiaddr>) {
        for address in existing {
            self.delete(address);
        }
        for address in fresh {
            self.add(address);
        }
    }

    /// Snapshot of the set in insertion order
    ///
    /// The returned vector is independent of internal storage: mutating it
    /// never affects the set, and later set mutation never affects it.
    pub fn to_vec(&self) -> Vec<Multiaddr> {
        self.addresses.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Multiaddr> {
        self.addresses.iter()
    }

    pub fn clear(&mut self) {
        self.addresses.clear();
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ma(s: &str) -> Multiaddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_strings_parses_and_dedups() {
        let set = MultiaddrSet::from_strings([
            "/ip4/127.0.0.1/tcp/4001",
            "/ip4/10.0.0.1/tcp/4001",
            "/ip4/127.0.0.1/tcp/4001",
        ])
        .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(
            set.to_vec(),
            vec![ma("/ip4/127.0.0.1/tcp/4001"), ma("/ip4/10.0.0.1/tcp/4001")]
        );
    }

    #[test]
    fn test_from_strings_rejects_malformed_entry() {
        let err = MultiaddrSet::from_strings(["/ip4/127.0.0.1/tcp/4001", "not-a-multiaddr"])
            .unwrap_err();
        assert!(matches!(
            err,
            AddressError::InvalidMultiaddr { ref input, .. } if input == "not-a-multiaddr"
        ));
    }

    #[test]
    fn test_add_equal_value_is_noop() {
        let mut set = MultiaddrSet::new();
        assert!(set.add(ma("/ip4/1.2.3.4/tcp/1")));
        // Distinct instance, same encoded value
        assert!(!set.add(ma("/ip4/1.2.3.4/tcp/1")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut set = MultiaddrSet::new();
        set.add(ma("/ip4/1.2.3.4/tcp/1"));
        set.add(ma("/ip4/5.6.7.8/tcp/2"));
        set.add(ma("/ip4/1.2.3.4/tcp/1"));
        set.add(ma("/ip4/9.9.9.9/tcp/3"));

        assert_eq!(
            set.to_vec(),
            vec![
                ma("/ip4/1.2.3.4/tcp/1"),
                ma("/ip4/5.6.7.8/tcp/2"),
                ma("/ip4/9.9.9.9/tcp/3"),
            ]
        );
    }

    #[test]
    fn test_has_matches_by_value() {
        let set = MultiaddrSet::from_strings(["/ip4/127.0.0.1/tcp/8080"]).unwrap();
        assert!(set.has(&ma("/ip4/127.0.0.1/tcp/8080")));
        assert!(!set.has(&ma("/ip4/127.0.0.1/tcp/8081")));
        // Encapsulation is not equality
        assert!(!set.has(&ma("/ip4/127.0.0.1")));
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut set = MultiaddrSet::from_strings(["/ip4/1.2.3.4/tcp/1"]).unwrap();
        set.delete(&ma("/ip4/5.6.7.8/tcp/2"));
        assert_eq!(set.len(), 1);

        set.delete(&ma("/ip4/1.2.3.4/tcp/1"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_replace_swaps_contents_with_overlap() {
        let mut set =
            MultiaddrSet::from_strings(["/ip4/1.2.3.4/tcp/1", "/ip4/5.6.7.8/tcp/2"]).unwrap();
        let existing = set.to_vec();

        set.replace(
            &existing,
            vec![ma("/ip4/5.6.7.8/tcp/2"), ma("/ip4/9.9.9.9/tcp/3")],
        );

        assert_eq!(
            set.to_vec(),
            vec![ma("/ip4/5.6.7.8/tcp/2"), ma("/ip4/9.9.9.9/tcp/3")]
        );
    }

    #[test]
    fn test_snapshots_are_independent() {
        let mut set = MultiaddrSet::from_strings(["/ip4/1.2.3.4/tcp/1"]).unwrap();
        let before = set.to_vec();

        let mut tampered = set.to_vec();
        tampered.push(ma("/ip4/5.6.7.8/tcp/2"));
        assert_eq!(set.len(), 1);

        set.add(ma("/ip4/9.9.9.9/tcp/3"));
        assert_eq!(before, vec![ma("/ip4/1.2.3.4/tcp/1")]);
    }

    #[test]
    fn test_clear_empties_set() {
        let mut set =
            MultiaddrSet::from_strings(["/ip4/1.2.3.4/tcp/1", "/ip4/5.6.7.8/tcp/2"]).unwrap();
        set.clear();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
    }
}
