//! System-container filtering.

/// Reserved name prefix for containers the store keeps for itself.
pub const SYSTEM_CONTAINER_PREFIX: &str = "system";

/// Check whether a container name belongs to the store itself.
///
/// Case-sensitive literal prefix match, no trimming or normalization; an
/// empty name is a user name. System containers are never purged.
pub fn is_system_container(name: &str) -> bool {
    name.starts_with(SYSTEM_CONTAINER_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_names() {
        assert!(is_system_container("system.indexes"));
        assert!(is_system_container("system.users"));
        assert!(is_system_container("system"));
    }

    #[test]
    fn test_user_names() {
        assert!(!is_system_container("orders"));
        assert!(!is_system_container("users"));
        // Case-sensitive, no trimming.
        assert!(!is_system_container("System.indexes"));
        assert!(!is_system_container(" system.indexes"));
    }

    #[test]
    fn test_empty_name() {
        assert!(!is_system_container(""));
    }
}
