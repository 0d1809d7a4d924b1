use crate::state::{LyricsWidget, View};
use crate::ui::modern::{Focus, ModernUIState};
use crate::ui::spinner::Spinner;
use crate::ui::styles::Palette;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

pub const PLACEHOLDER: &str = "Artist - Song (e.g., Taylor Swift - Love Story)";
pub const HEADING: &str = "Lyrics Finder";
pub const SUBTITLE: &str = "Find lyrics for your favorite Taylor Swift songs right here!";
pub const COPYRIGHT: &str = "© 2025 Rhymo. All rights reserved.";

/// (label, address) pairs shown in the footer.
pub const FOOTER_LINKS: [(&str, &str); 3] = [
    ("GitHub", "github.com/upadhyayaniket29"),
    ("X", "x.com/Aniketu89741067"),
    ("LinkedIn", "linkedin.com/in/aniket-upadhyay-02ba07222"),
];

/// Draw the whole screen. Reads widget state only; the UI state receives the
/// hit areas needed for mouse handling.
pub fn draw(frame: &mut Frame, widget: &LyricsWidget, ui: &mut ModernUIState) {
    let palette = Palette::for_theme(widget.theme());
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let [nav, header, input, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(4),
    ])
    .areas(area);

    draw_navbar(frame, nav, widget, ui, &palette);
    draw_header(frame, header, &palette);
    draw_input(frame, input, widget, ui, &palette);

    ui.results_area = None;
    match widget.view() {
        View::Idle => {}
        View::Loading => {
            let spinner = Spinner::new(ui.spinner_tick)
                .style(Style::default().fg(palette.accent))
                .label("Loading…");
            frame.render_widget(spinner, body);
        }
        View::Panels { results, lyrics } => {
            let (results_rect, lyrics_rect) = match (results, lyrics) {
                (true, true) => {
                    let [left, right] = Layout::horizontal([
                        Constraint::Percentage(40),
                        Constraint::Percentage(60),
                    ])
                    .areas(body);
                    (Some(left), Some(right))
                }
                (true, false) => (Some(body), None),
                (false, true) => (None, Some(body)),
                (false, false) => (None, None),
            };
            if let Some(rect) = results_rect {
                draw_results(frame, rect, widget, ui, &palette);
            }
            if let Some(rect) = lyrics_rect {
                draw_lyrics(frame, rect, widget, ui, &palette);
            }
        }
    }

    draw_footer(frame, footer, &palette);
}

fn brand_line(palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled("♪ ", Style::default().fg(palette.accent)),
        Span::styled("Rhymo", palette.brand().fg(palette.brand)),
    ])
}

fn draw_navbar(
    frame: &mut Frame,
    area: Rect,
    widget: &LyricsWidget,
    ui: &mut ModernUIState,
    palette: &Palette,
) {
    let block = Block::bordered()
        .border_style(palette.muted())
        .style(palette.panel());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, right] = Layout::horizontal([Constraint::Min(0), Constraint::Length(8)]).areas(inner);
    frame.render_widget(Paragraph::new(brand_line(palette)), left);

    let toggle = Line::from(vec![
        Span::styled(
            Palette::theme_icon(widget.theme()),
            Style::default().fg(palette.icon),
        ),
        Span::styled(" ^T", palette.muted()),
    ]);
    frame.render_widget(Paragraph::new(toggle).alignment(Alignment::Right), right);
    ui.theme_button = right;
}

fn draw_header(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::styled(HEADING, palette.title()),
        Line::styled(SUBTITLE, palette.muted()),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_input(
    frame: &mut Frame,
    area: Rect,
    widget: &LyricsWidget,
    ui: &ModernUIState,
    palette: &Palette,
) {
    let focused = ui.focus == Focus::Input;
    let border = if focused {
        Style::default().fg(palette.accent)
    } else {
        palette.muted()
    };
    let block = Block::bordered()
        .title(" Search ")
        .border_style(border)
        .style(palette.panel());
    let inner = block.inner(area);

    let query = widget.query();
    let query_width = query.width() as u16;
    // Keep the cursor visible once the query outgrows the box.
    let offset = query_width.saturating_sub(inner.width.saturating_sub(1));
    let text = if query.is_empty() {
        Line::styled(PLACEHOLDER, palette.muted())
    } else {
        Line::raw(query)
    };
    frame.render_widget(Paragraph::new(text).block(block).scroll((0, offset)), area);

    if focused && inner.width > 0 {
        frame.set_cursor_position(Position::new(inner.x + query_width - offset, inner.y));
    }
}

fn draw_results(
    frame: &mut Frame,
    area: Rect,
    widget: &LyricsWidget,
    ui: &mut ModernUIState,
    palette: &Palette,
) {
    let focused = ui.focus == Focus::Results;
    let block = Block::bordered()
        .title(" Search Results ")
        .border_style(if focused {
            Style::default().fg(palette.accent)
        } else {
            palette.muted()
        })
        .style(palette.panel());
    ui.results_area = Some(block.inner(area));

    let items: Vec<ListItem> = widget
        .results()
        .iter()
        .map(|song| {
            ListItem::new(Line::from(vec![
                Span::styled(song.title.clone(), palette.title()),
                Span::styled(format!("  {}", song.artist), palette.muted()),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(palette.selected(focused))
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, area, &mut ui.list);
}

fn draw_lyrics(
    frame: &mut Frame,
    area: Rect,
    widget: &LyricsWidget,
    ui: &ModernUIState,
    palette: &Palette,
) {
    let block = Block::bordered()
        .title(" Lyrics ")
        .border_style(palette.lyrics())
        .style(palette.lyrics());
    let paragraph = Paragraph::new(widget.lyrics())
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((ui.lyrics_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(palette.muted())
        .style(palette.panel());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, right] = Layout::horizontal([Constraint::Min(0), Constraint::Length(52)]).areas(inner);
    let about = vec![brand_line(palette), Line::styled(COPYRIGHT, palette.muted())];
    frame.render_widget(Paragraph::new(about), left);

    let links: Vec<Line> = FOOTER_LINKS
        .iter()
        .map(|(label, address)| {
            Line::from(vec![
                Span::styled(format!("{label} "), palette.title()),
                Span::styled(*address, palette.muted()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(links).alignment(Alignment::Right), right);
}
