#[cfg(feature = "tracing")]
macro_rules! pwtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "pagewindow", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! pwtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! pwdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "pagewindow", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! pwdebug {
    ($($tt:tt)*) => {};
}
