//! Shared utility functions for wine cellar crates.

/// Calendar and year parsing helpers
pub mod dates {
    use chrono::Datelike;

    /// The current calendar year, read from the local system clock.
    pub fn current_year() -> i32 {
        chrono::Local::now().year()
    }

    /// Parse a year the way a browser `parseInt` would.
    ///
    /// Leading whitespace and an optional sign are accepted, then the leading
    /// run of ASCII digits is taken and anything after it is ignored
    /// ("2025-2030" parses as 2025). Returns `None` when no digits follow.
    pub fn parse_year(s: &str) -> Option<i32> {
        let s = s.trim_start();
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let digits_end = rest
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_end == 0 {
            return None;
        }
        let value: i32 = rest[..digits_end].parse().ok()?;
        Some(if negative { -value } else { value })
    }

}

/// Hex color helpers for chart series
pub mod color {
    use anyhow::{anyhow, bail};

    /// Parse a `#rrggbb` (or `rrggbb`) color into its channels.
    pub fn parse_hex(hex: &str) -> anyhow::Result<(u8, u8, u8)> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            bail!("invalid hex color: {}", hex);
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&h[range], 16).map_err(|e| anyhow!("invalid hex color {}: {}", hex, e))
        };
        Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format channels as a lowercase `#rrggbb` string.
    pub fn to_hex((r, g, b): (u8, u8, u8)) -> String {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Blend a color toward white by `ratio` (0 = unchanged, 1 or more = white).
    pub fn lighten(hex: &str, ratio: f64) -> anyhow::Result<String> {
        let ratio = ratio.clamp(0.0, 1.0);
        let (r, g, b) = parse_hex(hex)?;
        let blend = |c: u8| -> u8 {
            let c = f64::from(c);
            (c + (255.0 - c) * ratio).round().min(255.0) as u8
        };
        Ok(to_hex((blend(r), blend(g), blend(b))))
    }

    /// Monochrome ramp of `n` colors derived from `base`.
    ///
    /// Series `i` of `n` is the base lightened by `0.3 + i / (n * 1.5)`.
    pub fn ramp(base: &str, n: usize) -> anyhow::Result<Vec<String>> {
        (0..n)
            .map(|i| lighten(base, 0.3 + i as f64 / (n as f64 * 1.5)))
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_and_format() {
            assert_eq!(parse_hex("#7b1e3a").unwrap(), (0x7b, 0x1e, 0x3a));
            assert_eq!(to_hex((0x7b, 0x1e, 0x3a)), "#7b1e3a");
            assert!(parse_hex("#fff").is_err());
            assert!(parse_hex("#zzzzzz").is_err());
        }

        #[test]
        fn test_lighten() {
            assert_eq!(lighten("#000000", 0.5).unwrap(), "#808080");
            assert_eq!(lighten("#7b1e3a", 0.0).unwrap(), "#7b1e3a");
            // Ratios past 1 clamp at full white
            assert_eq!(lighten("#7b1e3a", 1.4).unwrap(), "#ffffff");
        }

        #[test]
        fn test_ramp() {
            assert!(ramp("#7b1e3a", 0).unwrap().is_empty());

            let colors = ramp("#102030", 3).unwrap();
            assert_eq!(colors.len(), 3);
            // 0.3, 0.3 + 1/4.5, 0.3 + 2/4.5
            assert_eq!(colors[0], "#58636e");
            assert_eq!(colors[1], "#8d949c");
            assert_eq!(colors[2], "#c2c6ca");
        }
    }
}
