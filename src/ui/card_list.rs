//! Card list screen: the collection in the current sort order.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::i18n::Translator;
use crate::models::Card;
use crate::sort::{label, SortKey};
use crate::ui::components::truncate_to_width;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ENCOUNTER, COLOR_HEADER, COLOR_SORT_KEY};

const ORDER_SEPARATOR: &str = " › ";

/// Rows of chrome around the table: status line, borders, column header, hints.
const CHROME_ROWS: u16 = 5;

/// Everything the card list needs to draw.
#[derive(Debug, Clone, Copy)]
pub struct CardListView<'a> {
    pub cards: &'a [Card],
    pub sort_order: &'a [SortKey],
    /// First visible card
    pub scroll: usize,
    pub has_encounter_cards: bool,
}

/// Number of card rows that fit in a screen of `height` rows.
pub fn visible_card_rows(height: u16) -> usize {
    height.saturating_sub(CHROME_ROWS) as usize
}

/// "Sorted by: Type › Cost", or a placeholder for an empty order.
pub fn sort_status_line(order: &[SortKey], translator: &dyn Translator) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{} ", translator.translate("Sorted by:")),
        Style::default().fg(COLOR_DIM),
    )];

    if order.is_empty() {
        spans.push(Span::styled(
            translator.translate("collection order"),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        ));
        return Line::from(spans);
    }

    for (i, key) in order.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(ORDER_SEPARATOR, Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(
            label(*key, translator),
            Style::default().fg(COLOR_SORT_KEY),
        ));
    }
    Line::from(spans)
}

fn card_row(card: &Card, narrow: bool, max_name: usize) -> Row<'static> {
    let cost = card.cost.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string());
    let level = card.xp.map(|x| x.to_string()).unwrap_or_default();
    let source = match &card.encounter_code {
        Some(set) => Span::styled(set.clone(), Style::default().fg(COLOR_ENCOUNTER)),
        None => Span::raw(card.pack_code.clone()),
    };

    let mut cells = vec![
        Cell::from(truncate_to_width(&card.name, max_name)),
        Cell::from(card.type_code.clone()),
    ];
    if !narrow {
        cells.push(Cell::from(card.faction_code.clone()));
    }
    cells.push(Cell::from(cost));
    cells.push(Cell::from(level));
    cells.push(Cell::from(Line::from(source)));
    Row::new(cells)
}

fn column_widths(narrow: bool) -> Vec<Constraint> {
    let mut widths = vec![Constraint::Min(16), Constraint::Length(10)];
    if !narrow {
        widths.push(Constraint::Length(10));
    }
    widths.extend([
        Constraint::Length(4),
        Constraint::Length(5),
        Constraint::Length(14),
    ]);
    widths
}

fn header_row(narrow: bool, translator: &dyn Translator) -> Row<'static> {
    let mut titles = vec!["Name", "Type"];
    if !narrow {
        titles.push("Class");
    }
    titles.extend(["Cost", "Level", "Pack / Set"]);
    Row::new(
        titles
            .into_iter()
            .map(|t| Cell::from(translator.translate(t)))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD))
}

fn hint_line(has_encounter_cards: bool, translator: &dyn Translator) -> Line<'static> {
    let key = |k: &str| Span::styled(k.to_string(), Style::default().fg(COLOR_ACCENT));
    let text = |t: &str| Span::styled(format!(" {}  ", translator.translate(t)), Style::default().fg(COLOR_DIM));
    let encounter = if has_encounter_cards {
        "encounter sets on"
    } else {
        "encounter sets off"
    };
    Line::from(vec![
        key("s"),
        text("sort"),
        key("e"),
        text(encounter),
        key("↑↓"),
        text("scroll"),
        key("q"),
        text("quit"),
    ])
}

/// Render the card list into `area`.
pub fn render_card_list(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    view: &CardListView,
    translator: &dyn Translator,
) {
    let [status_area, table_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(sort_status_line(view.sort_order, translator)),
        status_area,
    );

    let narrow = ctx.is_narrow();
    let max_name = ctx.max_name_length();
    let visible = table_area.height.saturating_sub(3) as usize;
    let rows: Vec<Row> = view
        .cards
        .iter()
        .skip(view.scroll)
        .take(visible)
        .map(|card| card_row(card, narrow, max_name))
        .collect();

    let title = format!(" {} ({}) ", translator.translate("Cards"), view.cards.len());
    let table = Table::new(rows, column_widths(narrow))
        .header(header_row(narrow, translator))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER)),
        );
    frame.render_widget(table, table_area);

    frame.render_widget(
        Paragraph::new(hint_line(view.has_encounter_cards, translator)),
        hint_area,
    );
}
