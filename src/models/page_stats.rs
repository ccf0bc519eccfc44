// src/models/page_stats.rs

const KIB: u64 = 1024;

/// Numbers shown on the generated page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PageStats {
    pub minified_bytes: u64,
    pub gzip_bytes: u64,
    pub code_lines: u64,
}

impl PageStats {
    #[inline]
    #[must_use]
    pub const fn new(minified_bytes: u64, gzip_bytes: u64, code_lines: u64) -> Self {
        Self {
            minified_bytes,
            gzip_bytes,
            code_lines,
        }
    }

    /// Minified bundle size in whole KiB, rounded half-up.
    #[inline]
    #[must_use]
    pub fn minified_kib(&self) -> String {
        format_whole_kib(self.minified_bytes)
    }

    /// Gzipped bundle size in whole KiB, rounded half-up.
    #[inline]
    #[must_use]
    pub fn gzip_kib(&self) -> String {
        format_whole_kib(self.gzip_bytes)
    }

    /// Code lines divided by 1024, one decimal place, rounded half-up.
    #[inline]
    #[must_use]
    pub fn kloc(&self) -> String {
        let tenths = div_round_half_up(u128::from(self.code_lines) * 10, u128::from(KIB));
        format!("{}.{}", tenths / 10, tenths % 10)
    }
}

// Integer arithmetic keeps ties exact, so 150.5 KiB always becomes 151.
fn format_whole_kib(bytes: u64) -> String {
    div_round_half_up(u128::from(bytes), u128::from(KIB)).to_string()
}

const fn div_round_half_up(value: u128, divisor: u128) -> u128 {
    (value + divisor / 2) / divisor
}
