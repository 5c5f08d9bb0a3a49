/// `namespace ‖ key`.
#[doc(hidden)]
pub fn concat(namespace: &[u8], key: &[u8]) -> Vec<u8> {
    [namespace, key].concat()
}

/// Strip `namespace` off the front of `key`. The inverse of [`concat`].
///
/// `key` must start with `namespace`; this is only checked in debug builds.
#[doc(hidden)]
pub fn trim(namespace: &[u8], key: &[u8]) -> Vec<u8> {
    debug_assert!(
        key.starts_with(namespace),
        "key doesn't start with the namespace"
    );
    key[namespace.len()..].to_vec()
}

/// The smallest byte string greater than every string starting with `bytes`,
/// used as the exclusive upper bound when scanning a namespace.
///
/// Trailing `0xff` bytes are dropped and the byte before them incremented.
/// Returns `None` if `bytes` is all `0xff` (or empty), in which case the scan
/// has no upper bound.
#[doc(hidden)]
pub fn namespace_upper_bound(bytes: &[u8]) -> Option<Vec<u8>> {
    let last = bytes.iter().rposition(|byte| *byte != u8::MAX)?;
    let mut bound = bytes[..=last].to_vec();
    bound[last] += 1;
    Some(bound)
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test_case(b"abc", Some(b"abd".to_vec()); "simple")]
    #[test_case(b"ab\xff", Some(b"ac".to_vec()); "trailing max byte")]
    #[test_case(b"\xff\xff", None; "all max bytes")]
    fn upper_bounds(bytes: &[u8], expect: Option<Vec<u8>>) {
        assert_eq!(namespace_upper_bound(bytes), expect);
    }

    #[test]
    fn concat_and_trim_work() {
        let joined = concat(b"local", b"key");
        assert_eq!(joined, b"localkey".to_vec());
        assert_eq!(trim(b"local", &joined), b"key".to_vec());
    }
}
