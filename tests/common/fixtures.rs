//! Static log corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative device log
//! lines. [`corpus_high_volume`] builds a larger synthetic corpus on demand.

/// Device lines in the `<timestamp>:<level>:<address>:<content>` layout, one
/// of them stamped before the default cutoff.
pub const CORPUS_DEVICE: &[&str] = &[
    "2025-03-11T05:30:54.867Z:I:0x00100000:[LOG] hoge.c-100: overflow detected",
    "2024-12-31T23:59:59.000Z:I:0x1:[LOG] foo: bar",
    "[05:30:55.000001] 2025-03-11T05:30:55.001Z:I:0x00100000:[LOG] hoge.c-101: pump on [default_visible]",
    "2025-03-11T05:30:55.500Z:W:0x00200000:[WARN] motor: stalled at 30%",
    "[LOG] bare line without delimiter",
    "sensor.c-7: untimestamped reading",
    "2025-03-11T05:30:56.000Z:I:0x00100000:[LOG] hoge.c-101: pump off [default_visible]",
];

/// Lines that yield no record under the default configuration.
pub const CORPUS_REJECTED: &[&str] = &[
    "2024-12-31T23:59:59.000Z:I:0x1:[LOG] foo: bar",
    "2025-02-30T10:00:00.000Z:I:0x1:[LOG] foo: bad date",
    "[LOG] no delimiter at all",
    "just some text",
    "name:without-space",
];

/// Build a device line from its parts.
pub fn device_line(timestamp: &str, name: &str, comment: &str) -> String {
    format!("{timestamp}:I:0x00100000:[LOG] {name}: {comment}")
}

/// Generate `n` synthetic device lines, every tenth one malformed and every
/// seventh one marked `[default_visible]`.
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let ts = format!(
                "2025-01-15T{:02}:{:02}:{:02}.{:03}Z",
                i / 3600 % 24,
                i / 60 % 60,
                i % 60,
                i % 1000
            );
            if i % 10 == 0 {
                return format!("{ts}:E:0x1:[LOG] malformed line {i}");
            }
            let marker = if i % 7 == 0 { " [default_visible]" } else { "" };
            device_line(&ts, &format!("unit{}.c-{}", i % 5, i % 13), &format!("event {i}{marker}"))
        })
        .collect()
}
