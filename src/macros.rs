// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Append one formatted line to a `String` buffer (SVG markup, summaries).
/// Writing into a `String` cannot fail, so the `fmt::Result` is discarded.
#[macro_export]
macro_rules! wln {
    ($buf:expr, $($arg:tt)*) => {{
        use ::std::fmt::Write as _;
        let _ = ::std::writeln!($buf, $($arg)*);
    }};
}
