/// Internal helper to emit token-based trait impls (`Display`, `FromStr`, ...)
/// only when the `base58` feature is enabled.
#[doc(hidden)]
#[cfg(feature = "base58")]
#[macro_export]
macro_rules! cfg_base58 {
    ($($item:item)*) => { $($item)* };
}

#[doc(hidden)]
#[cfg(not(feature = "base58"))]
#[macro_export]
macro_rules! cfg_base58 {
    ($($item:item)*) => {};
}

/// Counterpart of [`cfg_base58!`] for items that replace the token-based
/// impls when the feature is off.
#[doc(hidden)]
#[cfg(feature = "base58")]
#[macro_export]
macro_rules! cfg_not_base58 {
    ($($item:item)*) => {};
}

#[doc(hidden)]
#[cfg(not(feature = "base58"))]
#[macro_export]
macro_rules! cfg_not_base58 {
    ($($item:item)*) => { $($item)* };
}
