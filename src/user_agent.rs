//! User-Agent string for outbound API traffic.

/// Default User-Agent for cat API requests (identifies the tool).
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("catbucket/{version}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_is_name_and_crate_version() {
        let ua = default_user_agent();
        assert_eq!(
            ua.strip_prefix("catbucket/"),
            Some(env!("CARGO_PKG_VERSION")),
            "UA must be catbucket/<crate version>: {ua}"
        );
    }
}
