// SPDX-License-Identifier: Apache-2.0

pub fn human_readable_size(size: u64) -> String {
    if size > 10 * 1024 * 1024 * 1024 {
        format!("{:.2} GiB", size as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if size > 10 * 1024 * 1024 {
        format!("{:.2} MiB", size as f64 / (1024.0 * 1024.0))
    } else if size > 10 * 1024 {
        format!("{:.2} KiB", size as f64 / 1024.0)
    } else {
        format!("{} bytes", size)
    }
}

/// Splits a Liberty list string such as `"0.1, 0.2 0.4"` on commas and
/// whitespace, dropping empty pieces.
pub fn split_list(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c == ',' || c.is_ascii_whitespace())
        .filter(|piece| !piece.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_readable_size() {
        assert_eq!(human_readable_size(512), "512 bytes");
        assert_eq!(human_readable_size(20 * 1024), "20.00 KiB");
        assert_eq!(human_readable_size(64 * 1024 * 1024), "64.00 MiB");
    }

    #[test]
    fn test_split_list() {
        let pieces: Vec<&str> = split_list(" 0.1, 0.2  0.4,").collect();
        assert_eq!(pieces, vec!["0.1", "0.2", "0.4"]);
    }
}
