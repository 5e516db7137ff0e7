//! Opening links outside the terminal

use std::io;

/// Something that can show a URL to the user
pub trait LinkOpener {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// The platform's default web browser
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        webbrowser::open(url)
    }
}

/// Open `url`, logging instead of failing
pub fn open_link(opener: &dyn LinkOpener, url: &str) {
    log::debug!("Opening {}", url);
    if let Err(e) = opener.open(url) {
        log::error!("Failed to open {}: {}", url, e);
    }
}
