use tokio::sync::mpsc::UnboundedSender;

use crate::autocomplete::DismissalRegistry;
use crate::browser::{self, LinkOpener};
use crate::config::Config;
use crate::input::SearchInput;
use crate::layout::LayoutRegions;
use crate::page::{IdAllocator, InputId, Location, PageId, Route, active_query};
use crate::panels::{PanelFocus, Panels};
use crate::worker::{FetchRequest, FetchResponse};

/// What receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input(InputId),
    Panel(PanelFocus),
}

/// Everything that lives for exactly one page load
#[derive(Debug)]
pub struct Page {
    pub id: PageId,
    pub location: Location,
    /// Home: the centered field. Results: the header field.
    pub inputs: Vec<SearchInput>,
    pub panels: Panels,
    /// Active query (empty on the home page)
    pub query: String,
}

impl Page {
    pub fn route(&self) -> Route {
        self.location.route()
    }

    pub fn input_mut(&mut self, id: InputId) -> Option<&mut SearchInput> {
        self.inputs.iter_mut().find(|input| input.id == id)
    }
}

/// Application state
pub struct App {
    pub page: Page,
    pub focus: Focus,
    pub dismissal: DismissalRegistry,
    pub regions: LayoutRegions,
    config: Config,
    ids: IdAllocator,
    requests: UnboundedSender<FetchRequest>,
    opener: Box<dyn LinkOpener>,
    pub(super) should_quit: bool,
}

impl App {
    /// Create the app and load the first page
    ///
    /// `prefill` is the value of the page's search field; it defaults to the
    /// location's query.
    pub fn new(
        config: Config,
        requests: UnboundedSender<FetchRequest>,
        opener: Box<dyn LinkOpener>,
        location: Location,
        prefill: Option<&str>,
    ) -> Self {
        log::debug!("Loading {}", location);
        let mut ids = IdAllocator::new();
        let page = build_page(&mut ids, &config, location, prefill);
        let focus = first_input_focus(&page);

        let mut app = Self {
            page,
            focus,
            dismissal: DismissalRegistry::new(),
            regions: LayoutRegions::new(),
            config,
            ids,
            requests,
            opener,
            should_quit: false,
        };
        app.fire_panel_fetchers();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Replace the current page
    ///
    /// Inputs, dropdowns and panels of the old page are gone; responses still
    /// in flight for them will find nothing to update.
    pub fn load_page(&mut self, location: Location, prefill: Option<&str>) {
        log::debug!("Loading {}", location);
        self.page = build_page(&mut self.ids, &self.config, location, prefill);
        self.focus = first_input_focus(&self.page);
        self.dismissal.clear();
        self.regions.clear();
        self.fire_panel_fetchers();
    }

    /// Submit the search form with `value`
    pub fn submit(&mut self, value: &str) {
        log::debug!("Submitting search '{}'", value);
        self.load_page(Location::form_submission(), Some(value));
    }

    fn fire_panel_fetchers(&mut self) {
        if self.page.route() != Route::Results || self.page.query.is_empty() {
            return;
        }
        for request in self.page.panels.fetch_all(self.page.id, &self.page.query) {
            self.send(request);
        }
    }

    pub(super) fn send(&self, request: FetchRequest) {
        log::debug!("Requesting {}", request.kind());
        if let Err(e) = self.requests.send(request) {
            log::error!("Fetch worker is gone, dropping {} request", e.0.kind());
        }
    }

    /// Apply a response from the fetch worker
    pub fn apply_response(&mut self, response: FetchResponse) {
        match response {
            FetchResponse::Suggestions {
                input,
                seq,
                query,
                suggestions,
            } => {
                let Some(field) = self.page.input_mut(input) else {
                    log::debug!("Dropping suggestions for unloaded input {:?}", input);
                    return;
                };
                field.autocomplete.apply_suggestions(seq, &query, suggestions);
                let open = field.autocomplete.is_open();
                self.dismissal.sync(input, open);
            }
            FetchResponse::InstantAnswer { page, answer } => {
                if self.is_current(page, "instant answer") {
                    self.page.panels.apply_instant_answer(&answer);
                }
            }
            FetchResponse::Images { page, images } => {
                if self.is_current(page, "images") {
                    self.page.panels.apply_images(images);
                }
            }
            FetchResponse::RelatedTopics { page, topics } => {
                if self.is_current(page, "related topics") {
                    self.page.panels.apply_related_topics(topics);
                }
            }
        }
    }

    fn is_current(&self, page: PageId, kind: &str) -> bool {
        if page != self.page.id {
            log::debug!("Dropping {} for unloaded page {:?}", kind, page);
            return false;
        }
        true
    }

    /// Close every open dropdown except the one a click landed in
    pub fn dismiss_dropdowns(&mut self, inside: Option<InputId>) {
        for input in self.dismissal.dismiss(inside) {
            if let Some(field) = self.page.input_mut(input) {
                field.autocomplete.close();
            }
        }
    }

    /// Keyboard targets in Tab order
    pub fn focus_cycle(&self) -> Vec<Focus> {
        let mut cycle: Vec<Focus> = self.page.inputs.iter().map(|i| Focus::Input(i.id)).collect();
        if self.page.panels.images_visible() {
            cycle.push(Focus::Panel(PanelFocus::Images));
        }
        if self.page.panels.related_topics_visible() {
            cycle.push(Focus::Panel(PanelFocus::RelatedTopics));
        }
        cycle
    }

    pub fn panel_focus(&self) -> Option<PanelFocus> {
        match self.focus {
            Focus::Panel(panel) => Some(panel),
            Focus::Input(_) => None,
        }
    }

    pub(super) fn open_image(&self, index: usize) {
        let link = self
            .page
            .panels
            .images
            .as_ref()
            .and_then(|c| c.content())
            .and_then(|grid| grid.link(index));
        if let Some(url) = link {
            browser::open_link(self.opener.as_ref(), url);
        }
    }

    pub(super) fn open_topic(&self, index: usize) {
        let link = self
            .page
            .panels
            .related_topics
            .as_ref()
            .and_then(|c| c.content())
            .and_then(|list| list.link(index));
        if let Some(url) = link {
            browser::open_link(self.opener.as_ref(), url);
        }
    }
}

fn build_page(ids: &mut IdAllocator, config: &Config, location: Location, prefill: Option<&str>) -> Page {
    let discard_stale = config.autocomplete.discard_stale_responses;
    let value = prefill
        .or(location.query_param())
        .unwrap_or_default()
        .to_string();
    let input = SearchInput::attach(ids.input(), &value, discard_stale);

    let (panels, query) = match location.route() {
        Route::Home => (Panels::none(), String::new()),
        Route::Results => (
            Panels::from_config(&config.panels),
            active_query(&location, Some(input.value())),
        ),
    };

    Page {
        id: ids.page(),
        location,
        inputs: vec![input],
        panels,
        query,
    }
}

fn first_input_focus(page: &Page) -> Focus {
    Focus::Input(page.inputs[0].id)
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
