use an_core::Identity;

/// Result of hydrating the identity record - distinguishes "not found" from corruption.
#[derive(Debug, Default)]
pub struct LoadResult {
    pub identity: Option<Identity>,
    /// Present if a record existed but could not be parsed
    pub corruption_error: Option<String>,
}
