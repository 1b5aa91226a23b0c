use crate::{
    catalog::{covers::Covers, response::BookRecord},
    finder::{
        color_scheme::ColorScheme,
        controller::SearchController,
        form::{Field, Form},
    },
};
use derive_more::Constructor;
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use std::borrow::Cow;
use strum::IntoEnumIterator;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Constructor)]
pub struct Render<'a> {
    controller: &'a SearchController,
    form: &'a Form,
    color_scheme: &'a ColorScheme,
    covers: &'a Covers,
    throbber_state: &'a ThrobberState,
    grid_offset: usize,
}

impl Render<'_> {
    const TITLE: &'static str = "Book Finder";
    const EMPTY_HINT: &'static str = "Try searching for a title.";
    const LOADING_LABEL: &'static str = " Loading...";
    const NO_IMAGE: &'static str = "No Image";
    const PREVIOUS_LABEL: &'static str = "< Prev";
    const NEXT_LABEL: &'static str = "Next >";
    const FOOTER: &'static str = "tab: next field  pgup/pgdn: page  up/down: scroll  esc: quit";
    const ELLIPSIS: char = '\u{2026}';
    const FORM_HEIGHT: u16 = 3;
    const CARD_WIDTH: u16 = 30;
    const CARD_HEIGHT: u16 = 5;

    pub fn tail(text: &str, max_width: usize) -> Cow<'_, str> {
        if text.width() <= max_width {
            return Cow::Borrowed(text);
        }

        let mut width = Self::ELLIPSIS.width().unwrap_or(1);
        let mut begin = text.len();

        for (index, chr) in text.char_indices().rev() {
            let chr_width = chr.width().unwrap_or(0);

            if width + chr_width > max_width {
                break;
            }

            width += chr_width;
            begin = index;
        }

        Cow::Owned(std::format!("{}{}", Self::ELLIPSIS, &text[begin..]))
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Self::TITLE)
            .centered()
            .style(self.color_scheme.title.style());

        frame.render_widget(title, area);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let field_areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);

        for (field, field_area) in Field::iter().zip(field_areas.iter().copied()) {
            self.render_field(frame, field, field_area);
        }
    }

    fn render_field(&self, frame: &mut Frame, field: Field, area: Rect) {
        let focused = self.form.focus() == field;
        let text = self.form.text(field).unwrap_or_else(|| self.controller.search_input());
        let border_spec = if focused {
            &self.color_scheme.focused_input
        } else {
            &self.color_scheme.label
        };
        let block = Block::bordered()
            .title(field.label())
            .border_style(border_spec.style());
        let inner = block.inner(area);

        // NOTE: one column is kept free for the cursor
        let shown = Self::tail(text, usize::from(inner.width.saturating_sub(1)));
        let content = if text.is_empty() {
            Span::styled(field.placeholder(), self.color_scheme.placeholder.style())
        } else {
            Span::styled(shown.as_ref(), self.color_scheme.input.style())
        };

        frame.render_widget(Paragraph::new(content).block(block), area);

        if focused && !inner.is_empty() {
            let shown_width = if text.is_empty() { 0 } else { shown.width() };
            let cursor_x = u16::try_from(shown_width)
                .unwrap_or(u16::MAX)
                .min(inner.width.saturating_sub(1));

            frame.set_cursor_position(Position::new(inner.x + cursor_x, inner.y));
        }
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect) {
        let summary = if self.controller.results().is_empty() {
            std::format!("{} {}", self.controller.summary(), Self::EMPTY_HINT)
        } else {
            self.controller.summary()
        };

        frame.render_widget(Line::styled(summary, self.color_scheme.summary.style()), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        if self.controller.is_loading() {
            let style = self.color_scheme.loading.style();
            let spinner = Throbber::default().style(style).throbber_style(style);
            let line = Line::from(std::vec![
                spinner.to_symbol_span(self.throbber_state),
                Span::styled(Self::LOADING_LABEL, style),
            ]);

            frame.render_widget(line, area);
        } else if let Some(error) = self.controller.error() {
            let line = Line::styled(std::format!("! {error}"), self.color_scheme.error.style());

            frame.render_widget(line, area);
        }
    }

    // NOTE: returns the largest row offset the grid can scroll to at this size
    fn render_grid(&self, frame: &mut Frame, area: Rect) -> usize {
        let documents = &self.controller.results().documents;
        let columns = (area.width / Self::CARD_WIDTH).max(1);
        let card_width = area.width / columns;
        let visible_rows = area.height / Self::CARD_HEIGHT;

        if documents.is_empty() || card_width == 0 || visible_rows == 0 {
            return 0;
        }

        let total_rows = documents.len().div_ceil(usize::from(columns));
        let max_offset = total_rows.saturating_sub(usize::from(visible_rows));
        let first_row = self.grid_offset.min(max_offset);
        let cards = documents.iter().skip(first_row * usize::from(columns));
        let card_areas = (0..visible_rows).flat_map(|row| {
            (0..columns).map(move |column| {
                Rect::new(
                    area.x + column * card_width,
                    area.y + row * Self::CARD_HEIGHT,
                    card_width,
                    Self::CARD_HEIGHT,
                )
            })
        });

        for (record, card_area) in cards.zip(card_areas) {
            self.render_card(frame, record, card_area);
        }

        max_offset
    }

    fn render_card(&self, frame: &mut Frame, record: &BookRecord, area: Rect) {
        let block = Block::bordered().border_style(self.color_scheme.card.style());
        let inner = block.inner(area);
        let [cover_area, title_area] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
        let cover = match record.cover_id {
            Some(cover_id) => {
                let cover_url = self.covers.url(cover_id);
                let cover_url = Self::tail(&cover_url, usize::from(cover_area.width)).into_owned();

                Line::styled(cover_url, self.color_scheme.cover.style())
            }
            None => Line::styled(Self::NO_IMAGE, self.color_scheme.placeholder.style()),
        };
        let title = Paragraph::new(record.title.as_str())
            .wrap(Wrap { trim: true })
            .style(self.color_scheme.input.style());

        frame.render_widget(block, area);
        frame.render_widget(cover, cover_area);
        frame.render_widget(title, title_area);
    }

    fn render_pager(&self, frame: &mut Frame, area: Rect) {
        if !self.controller.shows_pager() {
            return;
        }

        let pager_style = self.color_scheme.pager.style();
        let previous_style = if self.controller.can_go_to_previous_page() {
            pager_style
        } else {
            self.color_scheme.disabled.style()
        };
        let pager = Line::from(std::vec![
            Span::styled(Self::PREVIOUS_LABEL, previous_style),
            Span::raw("   "),
            Span::styled(std::format!("Page {}", self.controller.page()), pager_style),
            Span::raw("   "),
            Span::styled(Self::NEXT_LABEL, pager_style),
        ])
        .centered();

        frame.render_widget(pager, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = Line::styled(Self::FOOTER, self.color_scheme.footer.style()).centered();

        frame.render_widget(footer, area);
    }

    pub fn render(&self, frame: &mut Frame) -> usize {
        let [title_area, form_area, summary_area, status_area, grid_area, pager_area, footer_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(Self::FORM_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(frame.area());

        self.render_title(frame, title_area);
        self.render_form(frame, form_area);
        self.render_summary(frame, summary_area);
        self.render_status(frame, status_area);
        let max_grid_offset = self.render_grid(frame, grid_area);

        self.render_pager(frame, pager_area);
        self.render_footer(frame, footer_area);

        max_grid_offset
    }
}

#[cfg(test)]
mod tests {
    use super::Render;
    use crate::{
        catalog::{
            covers::Covers,
            response::{BookRecord, ResultSet},
            FetchError,
        },
        config::Config,
        finder::{controller::SearchController, form::Form, message::FetchCompleted},
    };
    use ratatui::{backend::TestBackend, Terminal};
    use throbber_widgets_tui::ThrobberState;

    fn draw_at(controller: &SearchController, grid_offset: usize) -> (String, usize) {
        let config = Config::load(None).unwrap();
        let form = Form::new(&config.profile);
        let covers = Covers::new(config.catalog.covers_url.clone());
        let throbber_state = ThrobberState::default();
        let render = Render::new(controller, &form, &config.color_scheme, &covers, &throbber_state, grid_offset);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut max_grid_offset = 0;

        terminal.draw(|frame| max_grid_offset = render.render(frame)).unwrap();

        (terminal.backend().to_string(), max_grid_offset)
    }

    fn draw(controller: &SearchController) -> String {
        draw_at(controller, 0).0
    }

    fn searched(term: &str, outcome: Result<ResultSet, FetchError>) -> SearchController {
        let mut controller = SearchController::new(String::new(), 1);

        controller.mount();
        controller.set_search_input(term.into());

        let request = controller.settle(term.into()).unwrap();

        controller.complete(FetchCompleted {
            generation: request.generation,
            outcome,
        });

        controller
    }

    fn alchemist() -> ResultSet {
        ResultSet {
            documents: std::vec![BookRecord {
                title: "The Alchemist".into(),
                cover_id: Some(12345),
            }],
            total_found: 1,
        }
    }

    #[test]
    fn empty_state_shows_the_hint_and_no_pager() {
        let mut controller = SearchController::new(String::new(), 1);

        controller.mount();

        let view = draw(&controller);

        assert!(view.contains("No results yet. Try searching for a title."));
        assert!(view.contains("eg. The Alchemist"));
        assert!(view.contains("Alex"));
        assert!(view.contains("College Student"));
        assert!(!view.contains("Next >"));
        assert!(!view.contains("Loading..."));
    }

    #[test]
    fn alchemist_results_render_a_card_and_the_pager() {
        let view = draw(&searched("Alchemist", Ok(alchemist())));

        assert!(view.contains("Found 1 results, showing page 1"));
        assert!(view.contains("The Alchemist"));
        assert!(view.contains("/b/id/12345-M.jpg"));
        assert!(view.contains("< Prev"));
        assert!(view.contains("Page 1"));
        assert!(view.contains("Next >"));
        assert!(!view.contains("Loading..."));
    }

    #[test]
    fn missing_covers_use_the_placeholder() {
        let results = ResultSet {
            documents: std::vec![BookRecord {
                title: "Untitled Notes".into(),
                cover_id: None,
            }],
            total_found: 1,
        };
        let view = draw(&searched("notes", Ok(results)));

        assert!(view.contains("No Image"));
        assert!(view.contains("Untitled Notes"));
    }

    #[test]
    fn loading_shows_the_indicator() {
        let mut controller = SearchController::new("dune".into(), 1);

        controller.mount();

        assert!(draw(&controller).contains("Loading..."));
    }

    #[test]
    fn errors_are_shown_without_the_loading_indicator() {
        let view = draw(&searched("dune", Err(FetchError::Http(500))));

        assert!(view.contains("! HTTP 500"));
        assert!(!view.contains("Loading..."));
        assert!(view.contains("No results yet."));
    }

    // NOTE: 30 books make 10 rows of 3 cards; a 100x30 frame shows 4 rows
    #[test]
    fn grid_offset_skips_whole_rows_and_is_clamped() {
        let documents = (1..=30)
            .map(|number| BookRecord {
                title: std::format!("Book {number:02}"),
                cover_id: None,
            })
            .collect();
        let controller = searched(
            "books",
            Ok(ResultSet {
                documents,
                total_found: 30,
            }),
        );

        let (view, max_grid_offset) = draw_at(&controller, 2);

        assert_eq!(max_grid_offset, 6);
        assert!(!view.contains("Book 06"));
        assert!(view.contains("Book 07"));
        assert!(view.contains("Book 18"));
        assert!(!view.contains("Book 19"));

        let (view, _max_grid_offset) = draw_at(&controller, 99);

        assert!(!view.contains("Book 18"));
        assert!(view.contains("Book 19"));
        assert!(view.contains("Book 30"));
    }

    #[test]
    fn empty_grid_cannot_scroll() {
        let (_view, max_grid_offset) = draw_at(&searched("dune", Ok(ResultSet::default())), 5);

        assert_eq!(max_grid_offset, 0);
    }

    #[test]
    fn tail_keeps_the_end_of_long_text() {
        assert_eq!(Render::tail("short", 10), "short");
        assert_eq!(Render::tail("abcdefghij", 5), "\u{2026}ghij");
    }
}
