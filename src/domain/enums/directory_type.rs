//! Directory Sync provider types.

wire_enum! {
    /// The kind of external directory a WorkOS Directory is synced from.
    pub enum DirectoryType {
        AzureScimV2_0 => "azure scim v2.0",
        GenericScimV1_1 => "generic scim v1.1",
        GenericScimV2_0 => "generic scim v2.0",
        OktaScimV1_1 => "okta scim v1.1",
        OktaScimV2_0 => "okta scim v2.0",
        BambooHr => "bamboohr",
        GSuiteDirectory => "gsuite directory",
        Workday => "workday",
    }
}
