#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::net::TcpListener;
    use std::rc::Rc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::buffer::Buffer;
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::browser::LinkOpener;
    use crate::config::Config;
    use crate::page::Location;
    use crate::worker::FetchRequest;

    /// Base URL on which nothing listens
    pub fn unreachable_base_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    /// Every row of a rendered buffer as a string
    pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Link opener that remembers what it was asked to open
    #[derive(Clone, Default)]
    pub struct RecordingOpener {
        pub opened: Rc<RefCell<Vec<String>>>,
        pub fail: bool,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> std::io::Result<()> {
            if self.fail {
                return Err(std::io::Error::other("no browser"));
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    /// App wired to a request channel the test can inspect
    pub struct TestApp {
        pub app: App,
        pub requests: UnboundedReceiver<FetchRequest>,
        pub opened: Rc<RefCell<Vec<String>>>,
    }

    impl TestApp {
        /// Requests issued so far
        pub fn drain_requests(&mut self) -> Vec<FetchRequest> {
            let mut drained = Vec::new();
            while let Ok(request) = self.requests.try_recv() {
                drained.push(request);
            }
            drained
        }
    }

    pub fn test_app_with(config: Config, location: Location, prefill: Option<&str>) -> TestApp {
        let (request_tx, requests) = unbounded_channel();
        let opener = RecordingOpener::default();
        let opened = Rc::clone(&opener.opened);
        let app = App::new(config, request_tx, Box::new(opener), location, prefill);
        TestApp {
            app,
            requests,
            opened,
        }
    }

    /// App on the home page with default config
    pub fn test_app() -> TestApp {
        test_app_with(Config::default(), Location::home(), None)
    }

    /// App on the results page for `query`
    pub fn results_app(query: &str) -> TestApp {
        test_app_with(Config::default(), Location::search(query), Some(query))
    }
}
