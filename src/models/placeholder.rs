// src/models/placeholder.rs

/// The literal tokens the page template is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Source,
    MinifiedSize,
    GzipSize,
    Cloc,
}

impl Placeholder {
    pub const ALL: [Self; 4] = [Self::Source, Self::MinifiedSize, Self::GzipSize, Self::Cloc];

    #[inline]
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Source => "SOURCE",
            Self::MinifiedSize => "MINIFIED_SIZE",
            Self::GzipSize => "GZIP_SIZE",
            Self::Cloc => "CLOC",
        }
    }
}
