//! 本地时钟文本

/// 时钟刷新间隔（毫秒）
pub const CLOCK_REFRESH_MS: u32 = 10_000;

/// 格式化为 `HH:MM`
pub fn format_clock(hours: u32, minutes: u32) -> String {
    format!("{:02}:{:02}", hours % 24, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_padded() {
        assert_eq!(format_clock(7, 5), "07:05");
        assert_eq!(format_clock(23, 59), "23:59");
        assert_eq!(format_clock(0, 0), "00:00");
    }
}
