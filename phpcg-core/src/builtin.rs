//! Classification of PHP built-in type names.

/// Type tokens that never take a namespace qualifier.
pub const BUILTIN_TYPES: [&str; 10] = [
    "self", "array", "callable", "bool", "float", "int", "string", "void", "iterable", "object",
];

/// Returns true if `ty` is one of [`BUILTIN_TYPES`].
///
/// Matching is exact: `Int` or `\int` are not built-in.
pub fn is_builtin(ty: &str) -> bool {
    BUILTIN_TYPES.contains(&ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_types() {
        for ty in BUILTIN_TYPES {
            assert!(is_builtin(ty), "{ty} should be built-in");
        }
    }

    #[test]
    fn test_user_types() {
        assert!(!is_builtin("DateTime"));
        assert!(!is_builtin("Foo\\Bar"));
        assert!(!is_builtin(""));
    }

    #[test]
    fn test_exact_match_only() {
        assert!(!is_builtin("Int"));
        assert!(!is_builtin("ARRAY"));
        assert!(!is_builtin("\\string"));
        assert!(!is_builtin(" bool"));
    }
}
