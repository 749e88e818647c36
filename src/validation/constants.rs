/// Maximum length for task titles, after trimming surrounding whitespace.
pub const MAX_TITLE_LEN: usize = 100;

/// Maximum length for task descriptions.
pub const MAX_DESCRIPTION_LEN: usize = 500;
