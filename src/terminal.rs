/// Terminal width for table layout: $COLUMNS first, then the tty, with a
/// floor of 72 and a wide default when neither answers.
pub fn width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .or_else(tty_width)
        .map_or(120, |cols| cols.max(72))
}

#[cfg(unix)]
fn tty_width() -> Option<usize> {
    use libc::{STDOUT_FILENO, TIOCGWINSZ, ioctl, winsize};

    unsafe {
        let mut ws: winsize = std::mem::zeroed();
        if ioctl(STDOUT_FILENO, TIOCGWINSZ, &mut ws) == 0 && ws.ws_col > 0 {
            return Some(ws.ws_col as usize);
        }
    }
    None
}

#[cfg(not(unix))]
fn tty_width() -> Option<usize> {
    None
}
