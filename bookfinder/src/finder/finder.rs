use crate::{
    catalog::{covers::Covers, Catalog},
    config::Config,
    error::Error,
    finder::{
        color_scheme::ColorScheme,
        command::Command,
        controller::{FetchRequest, SearchController},
        debouncer::Debouncer,
        form::{Edit, Field, Form},
        keymap::Keymap,
        message::{FetchCompleted, Input, Message, Settled},
        render::Render,
        terminal::Terminal,
    },
    utils::any::Any,
};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::{Stream, StreamExt};
use ratatui::Frame;
use std::{io::Error as IoError, sync::Arc, time::Duration};
use throbber_widgets_tui::ThrobberState;
use tokio::{
    sync::mpsc::{UnboundedReceiver, UnboundedSender},
    time::{Interval, MissedTickBehavior},
};

macro_rules! key_pattern {
    ($chr:ident) => {
        Event::Key(KeyEvent {
            code: KeyCode::Char($chr),
            modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            ..
        })
    };
}

pub struct Finder<C> {
    controller: SearchController,
    form: Form,
    debouncer: Debouncer<String>,
    keymap: Keymap,
    color_scheme: ColorScheme,
    covers: Covers,
    catalog: Arc<C>,
    completions_tx: UnboundedSender<FetchCompleted>,
    completions_rx: UnboundedReceiver<FetchCompleted>,
    spinner: Interval,
    throbber_state: ThrobberState,
    grid_offset: usize,
    max_grid_offset: usize,
}

impl<C: Catalog + 'static> Finder<C> {
    const SPINNER_PERIOD: Duration = Duration::from_millis(100);

    pub fn new(config: Config, initial_term: String, initial_page: u32, catalog: C) -> Self {
        let (completions_tx, completions_rx) = tokio::sync::mpsc::unbounded_channel();
        let mut spinner = tokio::time::interval(Self::SPINNER_PERIOD);

        spinner.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Self {
            controller: SearchController::new(initial_term, initial_page),
            form: Form::new(&config.profile),
            debouncer: Debouncer::new(config.debounce()),
            keymap: Keymap::new(&config.keymap),
            covers: Covers::new(config.catalog.covers_url),
            color_scheme: config.color_scheme,
            catalog: catalog.arc(),
            completions_tx,
            completions_rx,
            spinner,
            throbber_state: ThrobberState::default(),
            grid_offset: 0,
            max_grid_offset: 0,
        }
    }

    pub fn mount(&mut self) {
        let request_opt = self.controller.mount();

        self.dispatch(request_opt);
    }

    fn dispatch(&mut self, request_opt: Option<FetchRequest>) {
        let Some(FetchRequest { generation, query }) = request_opt else {
            return;
        };
        let catalog = self.catalog.clone();
        let completions_tx = self.completions_tx.clone();

        tracing::info!(issuing_generation = generation, title = query.title(), page = query.page());

        tokio::spawn(async move {
            let outcome = catalog.search(&query).await;

            completions_tx
                .send(FetchCompleted { generation, outcome })
                .warn()
                .unit();
        });
    }

    fn set_search_input(&mut self, text: String) {
        if text == self.controller.search_input() {
            return;
        }

        self.debouncer.schedule(text.clone());
        self.controller.set_search_input(text);
    }

    fn edit(&mut self, edit: Edit) {
        let focus = self.form.focus();

        if let Some(text) = self.form.text_mut(focus) {
            edit.apply(text);
        } else {
            debug_assert_eq!(focus, Field::Need);

            let mut text = self.controller.search_input().to_owned();

            edit.apply(&mut text);
            self.set_search_input(text);
        }
    }

    fn on_command(&mut self, command: Command) {
        match command {
            Command::ClearField => self.edit(Edit::Clear),
            Command::DeleteBackward => self.edit(Edit::DeleteBackward),
            Command::NextField => self.form.next_field(),
            Command::PreviousField => self.form.previous_field(),
            Command::NextPage => {
                let request_opt = self.controller.go_to_next_page();

                self.dispatch(request_opt);
            }
            Command::PreviousPage => {
                let request_opt = self.controller.go_to_previous_page();

                self.dispatch(request_opt);
            }
            // NOTE: the offset counts grid rows; the bound comes from the last drawn frame
            Command::ScrollDown { count } => {
                self.grid_offset = self.grid_offset.saturating_add(count).min(self.max_grid_offset);
            }
            Command::ScrollUp { count } => self.grid_offset = self.grid_offset.saturating_sub(count),
            Command::Quit => {}
        }
    }

    fn feed(&mut self, event: &Event) -> bool {
        if let Event::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..
        }) = event
        {
            return false;
        }

        match (self.keymap.get(event), event) {
            (Some(Command::Quit), _) => return true,
            (Some(command), _) => self.on_command(command),
            (None, key_pattern!(chr)) => self.edit(Edit::Insert(*chr)),
            (None, ignored_event) => tracing::debug!(?ignored_event),
        }

        false
    }

    // NOTE: returns whether the finder should quit
    pub fn update(&mut self, message: Message) -> bool {
        match message {
            Message::Input(Input { event }) => return self.feed(&event),
            Message::Settled(Settled { term }) => {
                let request_opt = self.controller.settle(term);

                self.dispatch(request_opt);
            }
            Message::FetchCompleted(completed) => {
                if self.controller.complete(completed) {
                    self.grid_offset = 0;
                }
            }
            Message::Tick => self.throbber_state.calc_next(),
        }

        false
    }

    // NOTE: None means the terminal event stream has ended
    pub async fn next_message<S: Stream<Item = Result<Event, IoError>> + Unpin>(
        &mut self,
        events: &mut S,
    ) -> Result<Option<Message>, Error> {
        let loading = self.controller.is_loading();
        let debouncing = self.debouncer.is_pending();
        let message: Message = tokio::select! {
            event_res_opt = events.next() => {
                let Some(event_res) = event_res_opt else { return None.ok(); };

                Input { event: event_res? }.into()
            }
            term = self.debouncer.settled(), if debouncing => Settled { term }.into(),
            Some(completed) = self.completions_rx.recv() => completed.into(),
            _instant = self.spinner.tick(), if loading => Message::Tick,
        };

        message.some().ok()
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.max_grid_offset = Render::new(
            &self.controller,
            &self.form,
            &self.color_scheme,
            &self.covers,
            &self.throbber_state,
            self.grid_offset,
        )
        .render(frame);

        // NOTE: a resize or a shorter page can shrink the grid below the current offset
        self.grid_offset = self.grid_offset.min(self.max_grid_offset);
    }

    pub async fn run(mut self) -> Result<(), Error> {
        let mut terminal = Terminal::new()?;
        let mut events = EventStream::new();

        self.mount();

        loop {
            terminal.draw(|frame| self.render(frame))?;

            let Some(message) = self.next_message(&mut events).await? else {
                break;
            };

            if self.update(message) {
                break;
            }
        }

        tracing::info!(quitting_with_debounced_term = self.controller.debounced_term());

        ().ok()
    }
}
