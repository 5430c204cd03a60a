#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Encode top-level sections on the rayon thread pool. The output is
    /// identical to sequential encoding.
    pub parallel_sections: bool,
    /// Warn when non-custom sections are not in ascending id order.
    /// Sections are always emitted in the order given.
    pub check_section_order: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            parallel_sections: false,
            check_section_order: true,
        }
    }
}
