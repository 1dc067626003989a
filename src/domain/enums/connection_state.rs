//! Connection lifecycle state.

wire_enum! {
    /// Whether a connection can currently be used to authenticate.
    pub enum ConnectionState {
        Active => "active",
        Inactive => "inactive",
        Draft => "draft",
        Validating => "validating",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_wire_strings_round_trip() {
        for variant in ConnectionState::ALL {
            let decoded: ConnectionState =
                serde_json::from_str(&serde_json::to_string(variant).unwrap()).unwrap();
            assert_eq!(&decoded, variant);
            assert_eq!(&ConnectionState::from_str(variant.as_str()).unwrap(), variant);
        }
    }

    #[test]
    fn test_unknown_state_rejected() {
        assert!(ConnectionState::from_str("deleted").is_err());
        assert!(ConnectionState::from_str("Active").is_err());
    }
}
