//! Construction macros.

/// Creates a [`Set`](crate::Set) from a list of values.
///
/// Duplicates collapse silently; `set![]` is an empty set.
///
/// # Examples
///
/// ```rust
/// use setkit::set;
///
/// let set = set!["a", "b", "b"];
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("a"));
/// assert!(set.contains("b"));
/// assert!(!set.contains("c"));
/// ```
#[macro_export]
macro_rules! set {
    (@single $($x:tt)*) => (());
    (@count $($rest:expr),*) => (<[()]>::len(&[$($crate::set!(@single $rest)),*]));

    ($($element:expr,)+) => { $crate::set!($($element),+) };
    ($($element:expr),*) => {
        {
            let _cap = $crate::set!(@count $($element),*);
            let mut _set = $crate::Set::with_capacity(_cap);
            $(
                _set.insert($element);
            )*
            _set
        }
    };
}
