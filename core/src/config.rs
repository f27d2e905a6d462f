pub struct Config {
    /// Suppresses decorative output.
    ///
    /// Level 1 drops headers and separators, level 2 reduces commands to
    /// their bare result values.
    pub quiet: u8,
}
