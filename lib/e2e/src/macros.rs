/// Shorthand for broadcasting the transaction built by `$e` to the network.
#[macro_export]
macro_rules! send {
    ($e:expr) => {
        $e.send().await
    };
}

/// Shorthand for broadcasting the transaction built by `$e` to the network,
/// and then waiting for it to get confirmed.
#[macro_export]
macro_rules! watch {
    ($e:expr) => {
        $crate::send!($e)?.watch().await
    };
}

/// Shorthand for broadcasting the transaction built by `$e` to the network,
/// waiting for it to get confirmed, and then fetching its receipt.
#[macro_export]
macro_rules! receipt {
    ($e:expr) => {
        $crate::send!($e)?.get_receipt().await
    };
}
