///
/// catalog
///
/// Build a `TypeCatalog` from a list of types, rejecting duplicates.
///
/// ```
/// use rolekit::catalog;
///
/// let shape = catalog![u32, f64].unwrap();
/// assert!(shape.contains_type::<u32>());
/// assert_eq!(shape.len(), 2);
///
/// assert!(catalog![u32, u32].is_err());
/// ```
#[macro_export]
macro_rules! catalog {
    [] => {
        $crate::TypeCatalog::new(::std::vec::Vec::<$crate::TypeToken>::new())
    };
    [$($ty:ty),+ $(,)?] => {
        $crate::TypeCatalog::new([$($crate::TypeToken::of::<$ty>()),+])
    };
}
