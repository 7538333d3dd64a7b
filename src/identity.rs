//! Owner and group name resolution

use uzers::{Groups, Users, UsersCache};

/// Resolves numeric ids to display names.
///
/// Implementations never fail: an unknown id is rendered as its number.
pub trait IdentityLookup {
    fn owner_name(&self, uid: u32) -> String;
    fn group_name(&self, gid: u32) -> String;
}

/// Lookup through the system user and group databases, cached per run.
pub struct SystemIdentity {
    cache: UsersCache,
}

impl SystemIdentity {
    pub fn new() -> Self {
        Self {
            cache: UsersCache::new(),
        }
    }
}

impl Default for SystemIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityLookup for SystemIdentity {
    fn owner_name(&self, uid: u32) -> String {
        self.cache
            .get_user_by_uid(uid)
            .map(|user| user.name().to_string_lossy().into_owned())
            .unwrap_or_else(|| uid.to_string())
    }

    fn group_name(&self, gid: u32) -> String {
        self.cache
            .get_group_by_gid(gid)
            .map(|group| group.name().to_string_lossy().into_owned())
            .unwrap_or_else(|| gid.to_string())
    }
}

/// Renders every id as its number.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumericIdentity;

impl IdentityLookup for NumericIdentity {
    fn owner_name(&self, uid: u32) -> String {
        uid.to_string()
    }

    fn group_name(&self, gid: u32) -> String {
        gid.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_identity() {
        assert_eq!(NumericIdentity.owner_name(1000), "1000");
        assert_eq!(NumericIdentity.group_name(0), "0");
    }

    #[test]
    fn test_system_identity_falls_back_to_number() {
        // Ids this large are not allocated on any sane system
        let lookup = SystemIdentity::new();
        assert_eq!(lookup.owner_name(4_000_000_000), "4000000000");
        assert_eq!(lookup.group_name(4_000_000_001), "4000000001");
    }
}
