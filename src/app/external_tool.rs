//! Hand-off to the external AI studio in the user's browser.

use crate::log_error;

/// Where "Open AI Studio" sends the user.
pub const AI_STUDIO_URL: &str = "https://aistudio.google.com/prompts/new_chat";

pub trait UrlOpener {
    fn open_url(&self, url: &str) -> std::io::Result<()>;
}

/// Opens URLs with the platform's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open_url(&self, url: &str) -> std::io::Result<()> {
        open::that(url)
    }
}

/// Launch the AI studio page. A launch failure is logged, never raised.
pub fn open_ai_studio(opener: &dyn UrlOpener) -> bool {
    match opener.open_url(AI_STUDIO_URL) {
        Ok(()) => true,
        Err(e) => {
            log_error!("Failed to open {}: {}", AI_STUDIO_URL, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FailingOpener {
        attempts: RefCell<Vec<String>>,
    }

    impl UrlOpener for FailingOpener {
        fn open_url(&self, url: &str) -> std::io::Result<()> {
            self.attempts.borrow_mut().push(url.to_string());
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no browser"))
        }
    }

    #[test]
    fn test_launch_failure_is_swallowed() {
        let opener = FailingOpener {
            attempts: RefCell::new(Vec::new()),
        };
        assert!(!open_ai_studio(&opener));
        assert_eq!(*opener.attempts.borrow(), vec![AI_STUDIO_URL.to_string()]);
    }
}
