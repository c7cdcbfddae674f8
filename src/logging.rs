// `defmt` or `log` when one of them is enabled, no-op otherwise

#[cfg(feature = "defmt")]
#[allow(unused_imports)]
pub(crate) use defmt::{debug, trace, warn};
#[cfg(feature = "log")]
#[allow(unused_imports)]
pub(crate) use log::{debug, trace, warn};

#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! noop {
    ($($arg:tt)*) => {};
}
#[cfg(not(any(feature = "defmt", feature = "log")))]
#[allow(unused_imports)]
pub(crate) use noop as debug;
#[cfg(not(any(feature = "defmt", feature = "log")))]
#[allow(unused_imports)]
pub(crate) use noop as trace;
#[cfg(not(any(feature = "defmt", feature = "log")))]
#[allow(unused_imports)]
pub(crate) use noop as warn;
