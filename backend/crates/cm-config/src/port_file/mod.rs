pub(crate) mod port_file_info;

/// Check if a process with the given PID is currently running.
#[cfg(unix)]
pub fn is_process_running(pid: u32) -> bool {
    // SAFETY: kill with signal 0 only checks existence, no signal is sent.
    unsafe { libc::kill(pid as i32, 0) == 0 }
}

#[cfg(not(unix))]
pub fn is_process_running(_pid: u32) -> bool {
    // Assume alive; the client gets a connection error if it is not.
    true
}
