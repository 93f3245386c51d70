use std::process::ExitStatus;

use crate::errors::LaunchError;

pub fn normalize_exit(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(code) = status.code() {
            code
        } else if let Some(sig) = status.signal() {
            128 + sig
        } else {
            1
        }
    }
    #[cfg(windows)]
    {
        status.code().unwrap_or(1)
    }
}

/// Maps a non-success exit status to the matching [`LaunchError`].
pub fn check_status(status: ExitStatus) -> Result<(), LaunchError> {
    if status.success() {
        return Ok(());
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return Err(LaunchError::Signal { signal });
        }
    }

    Err(LaunchError::UnexpectedExit {
        code: normalize_exit(status),
    })
}
