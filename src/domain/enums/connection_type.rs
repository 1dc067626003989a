//! SSO connection provider types.

wire_enum! {
    /// Identity provider behind a [`crate::domain::entities::Connection`].
    ///
    /// Also used as the `provider` parameter when generating an authorization URL.
    pub enum ConnectionType {
        AdfsSaml => "ADFSSAML",
        AzureSaml => "AzureSAML",
        GenericOidc => "GenericOIDC",
        GenericSaml => "GenericSAML",
        GoogleOAuth => "GoogleOAuth",
        MagicLink => "MagicLink",
        OktaSaml => "OktaSAML",
        OneLoginSaml => "OneLoginSAML",
        PingFederateSaml => "PingFederateSAML",
        PingOneSaml => "PingOneSAML",
        VmwareSaml => "VMwareSAML",
    }
}
