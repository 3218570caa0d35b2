/// Asserts that each of the expected strings occurs in the content, in the given order.
#[macro_export]
macro_rules! assert_contains_inorder {
    ($content:expr, [$($expected:expr),* $(,)?]) => {{
        let content: &str = $content.as_ref();
        let mut remaining = content;
        $(
            let expected: &str = $expected;
            match remaining.find(expected) {
                Some(index) => remaining = &remaining[index + expected.len()..],
                None => panic!(
                    "expected '{}' not found (in order). content:\n{}",
                    expected, content
                ),
            }
        )*
        let _ = remaining;
    }};
}
