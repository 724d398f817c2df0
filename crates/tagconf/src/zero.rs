//! Zero-value detection.
//!
//! A type's zero value is its `Default`; a field is zero when it compares
//! equal to a freshly constructed default. Comparison is structural
//! (`PartialEq`), so two independently built zero values always match.

/// Returns `true` if `value` equals `T::default()`.
pub fn is_zero<T>(value: &T) -> bool
where
    T: Default + PartialEq,
{
    *value == T::default()
}
