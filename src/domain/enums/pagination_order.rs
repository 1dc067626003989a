//! Sort order for paginated list endpoints.

wire_enum! {
    /// Order in which list endpoints return records, by creation time.
    pub enum PaginationOrder {
        Asc => "asc",
        Desc => "desc",
    }
}
