//! Status codes
//!
//! Every syscall that can fail returns a `zx_status_t`. `ZX_OK` is zero and
//! every error is a small negative number. [`Status`] is the typed view of
//! the error half; `ZX_OK` never becomes a `Status`, it becomes `Ok(())`.

use crate::types::zx_status_t;
use thiserror::Error;

pub const ZX_OK: zx_status_t = 0;

macro_rules! status_codes {
    ($( $variant:ident => $name:ident = $value:literal, $message:literal; )*) => {
        $( pub const $name: zx_status_t = $value; )*

        /// A non-OK syscall status
        #[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
        pub enum Status {
            $(
                #[error("{}", self.message())]
                $variant,
            )*
            /// A code this table does not know about
            #[error("unknown status {0}")]
            Unknown(zx_status_t),
        }

        impl Status {
            /// Every known error, in table order
            pub const ALL: &'static [Status] = &[$( Status::$variant ),*];

            /// Lifts a raw status into a `Result`
            pub fn from_raw(raw: zx_status_t) -> Result<(), Status> {
                match raw {
                    ZX_OK => Ok(()),
                    $( $value => Err(Status::$variant), )*
                    other => Err(Status::Unknown(other)),
                }
            }

            /// Returns the raw value for this status
            pub fn into_raw(self) -> zx_status_t {
                match self {
                    $( Status::$variant => $value, )*
                    Status::Unknown(raw) => raw,
                }
            }

            /// Returns the C constant name, e.g. `ZX_ERR_BAD_HANDLE`
            pub fn name(&self) -> &'static str {
                match self {
                    $( Status::$variant => stringify!($name), )*
                    Status::Unknown(_) => "ZX_ERR_UNKNOWN",
                }
            }

            /// Short human-readable description
            pub fn message(&self) -> &'static str {
                match self {
                    $( Status::$variant => $message, )*
                    Status::Unknown(_) => "unknown status",
                }
            }

            /// Looks a status up by its C constant name
            pub fn from_name(name: &str) -> Option<Status> {
                match name {
                    $( stringify!($name) => Some(Status::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

status_codes! {
    Internal => ZX_ERR_INTERNAL = -1, "internal error";
    NotSupported => ZX_ERR_NOT_SUPPORTED = -2, "operation not supported";
    NoResources => ZX_ERR_NO_RESOURCES = -3, "no resources";
    NoMemory => ZX_ERR_NO_MEMORY = -4, "out of memory";
    InternalIntrRetry => ZX_ERR_INTERNAL_INTR_RETRY = -6, "interrupted, retry";
    InvalidArgs => ZX_ERR_INVALID_ARGS = -10, "invalid arguments";
    BadHandle => ZX_ERR_BAD_HANDLE = -11, "bad handle";
    WrongType => ZX_ERR_WRONG_TYPE = -12, "wrong object type";
    BadSyscall => ZX_ERR_BAD_SYSCALL = -13, "bad syscall number";
    OutOfRange => ZX_ERR_OUT_OF_RANGE = -14, "argument out of range";
    BufferTooSmall => ZX_ERR_BUFFER_TOO_SMALL = -15, "buffer too small";
    BadState => ZX_ERR_BAD_STATE = -20, "bad state";
    TimedOut => ZX_ERR_TIMED_OUT = -21, "timed out";
    ShouldWait => ZX_ERR_SHOULD_WAIT = -22, "should wait";
    Canceled => ZX_ERR_CANCELED = -23, "canceled";
    PeerClosed => ZX_ERR_PEER_CLOSED = -24, "peer closed";
    NotFound => ZX_ERR_NOT_FOUND = -25, "not found";
    AlreadyExists => ZX_ERR_ALREADY_EXISTS = -26, "already exists";
    AlreadyBound => ZX_ERR_ALREADY_BOUND = -27, "already bound";
    Unavailable => ZX_ERR_UNAVAILABLE = -28, "unavailable";
    AccessDenied => ZX_ERR_ACCESS_DENIED = -30, "access denied";
    Io => ZX_ERR_IO = -40, "i/o error";
    IoRefused => ZX_ERR_IO_REFUSED = -41, "i/o refused";
    IoDataIntegrity => ZX_ERR_IO_DATA_INTEGRITY = -42, "i/o data integrity failure";
    IoDataLoss => ZX_ERR_IO_DATA_LOSS = -43, "i/o data loss";
    IoNotPresent => ZX_ERR_IO_NOT_PRESENT = -44, "i/o device not present";
    IoOverrun => ZX_ERR_IO_OVERRUN = -45, "i/o overrun";
    IoMissedDeadline => ZX_ERR_IO_MISSED_DEADLINE = -46, "i/o missed deadline";
    IoInvalid => ZX_ERR_IO_INVALID = -47, "invalid i/o";
    BadPath => ZX_ERR_BAD_PATH = -50, "bad path";
    NotDir => ZX_ERR_NOT_DIR = -51, "not a directory";
    NotFile => ZX_ERR_NOT_FILE = -52, "not a file";
    FileBig => ZX_ERR_FILE_BIG = -53, "file too big";
    NoSpace => ZX_ERR_NO_SPACE = -54, "no space left";
    NotEmpty => ZX_ERR_NOT_EMPTY = -55, "not empty";
    Stop => ZX_ERR_STOP = -60, "stop";
    Next => ZX_ERR_NEXT = -61, "next";
    Async => ZX_ERR_ASYNC = -62, "async";
    ProtocolNotSupported => ZX_ERR_PROTOCOL_NOT_SUPPORTED = -70, "protocol not supported";
    AddressUnreachable => ZX_ERR_ADDRESS_UNREACHABLE = -71, "address unreachable";
    AddressInUse => ZX_ERR_ADDRESS_IN_USE = -72, "address in use";
    NotConnected => ZX_ERR_NOT_CONNECTED = -73, "not connected";
    ConnectionRefused => ZX_ERR_CONNECTION_REFUSED = -74, "connection refused";
    ConnectionReset => ZX_ERR_CONNECTION_RESET = -75, "connection reset";
    ConnectionAborted => ZX_ERR_CONNECTION_ABORTED = -76, "connection aborted";
}

/// Converts a raw syscall result into a `Result`
pub fn ok(raw: zx_status_t) -> Result<(), Status> {
    Status::from_raw(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_is_not_an_error() {
        assert_eq!(Status::from_raw(ZX_OK), Ok(()));
        assert_eq!(ok(0), Ok(()));
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(Status::from_raw(-11), Err(Status::BadHandle));
        assert_eq!(Status::from_raw(ZX_ERR_PEER_CLOSED), Err(Status::PeerClosed));
        assert_eq!(Status::BadHandle.into_raw(), ZX_ERR_BAD_HANDLE);
        assert_eq!(Status::BadHandle.name(), "ZX_ERR_BAD_HANDLE");
    }

    #[test]
    fn test_every_raw_value_survives() {
        for raw in -600..0 {
            let status = Status::from_raw(raw).unwrap_err();
            assert_eq!(status.into_raw(), raw);
        }
        let status = Status::from_raw(17).unwrap_err();
        assert_eq!(status, Status::Unknown(17));
    }

    #[test]
    fn test_names_are_unique_and_resolvable() {
        for status in Status::ALL {
            assert_eq!(Status::from_name(status.name()), Some(*status));
        }
        assert_eq!(Status::from_name("ZX_OK"), None);
        assert_eq!(Status::from_name("ZX_ERR_UNKNOWN"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Status::TimedOut.to_string(), "timed out");
        assert_eq!(Status::Unknown(-999).to_string(), "unknown status -999");
    }

    #[test]
    fn test_question_mark_propagation() {
        fn call(raw: zx_status_t) -> Result<u32, Status> {
            ok(raw)?;
            Ok(7)
        }

        assert_eq!(call(ZX_OK), Ok(7));
        assert_eq!(call(ZX_ERR_ACCESS_DENIED), Err(Status::AccessDenied));
    }
}
