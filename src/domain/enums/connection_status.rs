//! Legacy linked/unlinked connection status.

wire_enum! {
    /// Linked status of a connection.
    ///
    /// Deprecated by the API in favour of [`super::ConnectionState`]; still
    /// returned on older connection records.
    pub enum ConnectionStatus {
        Linked => "linked",
        Unlinked => "unlinked",
    }
}
