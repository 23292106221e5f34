//! Inventory screen: dashboard, entry form, filterable table.

use chrono::NaiveDate;
use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, TableState, Widget},
};

use super::confirm_dialog::ConfirmDialog;
use crate::application::dto::NewRecordRequest;
use crate::application::services::{
    CategoryFilter, DashboardCounts, InventoryQuery, InventoryView, SortOrder, category_options,
};
use crate::domain::Notification;
use crate::domain::entities::{InventoryRecord, RecordId};
use crate::domain::keybinding::{Action, KeyMap, KeyScope};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    Dashboard, FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, RecordTable, StatusBar,
    TextInput, ThemedInput,
};
use crate::{NAME, VERSION};

const FIELD_COUNT: usize = 4;
const NAME_FIELD: usize = 0;
const CATEGORY_FIELD: usize = 1;
const QUANTITY_FIELD: usize = 2;
const EXPIRY_FIELD: usize = 3;

/// Focused area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// One of the four entry fields.
    Form(usize),
    /// The record table.
    Table,
}

/// What the app must do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenKeyResult {
    /// Handled locally.
    Consumed,
    /// No binding matched.
    Ignored,
    Quit,
    ToggleTheme,
    AddRecord(NewRecordRequest),
    /// Delete was confirmed for this record.
    DeleteRecord(RecordId),
}

pub struct InventoryScreenState {
    keymap: KeyMap,
    theme: Theme,
    focus: Focus,
    fields: [TextInput; FIELD_COUNT],
    table_state: TableState,
    query: InventoryQuery,
    category_options: Vec<String>,
    view: InventoryView,
    pending_delete: Option<RecordId>,
}

impl InventoryScreenState {
    #[must_use]
    pub fn new(keymap: KeyMap, theme: Theme, default_sort: SortOrder) -> Self {
        let mut state = Self {
            keymap,
            theme,
            focus: Focus::Form(NAME_FIELD),
            fields: [
                TextInput::new(" Name ").placeholder("e.g. Milk"),
                TextInput::new(" Category ").placeholder("e.g. Dairy"),
                TextInput::new(" Quantity ").placeholder("e.g. 2"),
                TextInput::new(" Expiry ").placeholder("YYYY-MM-DD"),
            ],
            table_state: TableState::default(),
            query: InventoryQuery {
                filter: CategoryFilter::All,
                sort: default_sort,
            },
            category_options: Vec::new(),
            view: InventoryView {
                rows: Vec::new(),
                counts: DashboardCounts::default(),
            },
            pending_delete: None,
        };
        state.sync_field_focus();
        state
    }

    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub const fn query(&self) -> &InventoryQuery {
        &self.query
    }

    #[must_use]
    pub const fn view(&self) -> &InventoryView {
        &self.view
    }

    #[must_use]
    pub const fn pending_delete(&self) -> Option<RecordId> {
        self.pending_delete
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<RecordId> {
        self.table_state
            .selected()
            .and_then(|i| self.view.rows.get(i))
            .map(|row| row.id)
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Rebuilds options, table rows and counters from the full list.
    ///
    /// Keeps the active filter while its category still exists.
    pub fn refresh(&mut self, records: &[InventoryRecord], today: NaiveDate) {
        self.category_options = category_options(records);
        self.query.filter =
            std::mem::take(&mut self.query.filter).retained_in(&self.category_options);
        self.view = InventoryView::build(records, &self.query, today);

        let len = self.view.rows.len();
        let selected = match self.table_state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.table_state.select(selected);

        if self
            .pending_delete
            .is_some_and(|id| records.iter().all(|r| r.id() != id))
        {
            self.pending_delete = None;
        }
    }

    /// Empties all four entry fields after a successful add.
    pub fn clear_form(&mut self) {
        self.fields.iter_mut().for_each(TextInput::clear);
    }

    fn form_request(&self) -> NewRecordRequest {
        NewRecordRequest::new(
            self.fields[NAME_FIELD].value(),
            self.fields[CATEGORY_FIELD].value(),
            self.fields[QUANTITY_FIELD].value(),
            self.fields[EXPIRY_FIELD].value(),
        )
    }

    const fn scope(&self) -> KeyScope {
        if self.pending_delete.is_some() {
            KeyScope::Confirm
        } else {
            match self.focus {
                Focus::Form(_) => KeyScope::Form,
                Focus::Table => KeyScope::Table,
            }
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.sync_field_focus();
    }

    fn sync_field_focus(&mut self) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.set_focused(self.focus == Focus::Form(i));
        }
    }

    fn focus_next(&mut self) {
        self.set_focus(match self.focus {
            Focus::Form(i) if i + 1 < FIELD_COUNT => Focus::Form(i + 1),
            Focus::Form(_) => Focus::Table,
            Focus::Table => Focus::Form(NAME_FIELD),
        });
    }

    fn focus_previous(&mut self) {
        self.set_focus(match self.focus {
            Focus::Form(0) => Focus::Table,
            Focus::Form(i) => Focus::Form(i - 1),
            Focus::Table => Focus::Form(FIELD_COUNT - 1),
        });
    }

    fn move_selection(&mut self, action: Action) {
        let len = self.view.rows.len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let next = match action {
            Action::NavigateUp => current.saturating_sub(1),
            Action::NavigateDown => (current + 1).min(len - 1),
            Action::SelectFirst => 0,
            Action::SelectLast => len - 1,
            _ => current,
        };
        self.table_state.select(Some(next));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenKeyResult {
        let scope = self.scope();

        let Some(action) = self.keymap.resolve(scope, &key) else {
            let focus = self.focus;
            return match focus {
                Focus::Form(i) if scope == KeyScope::Form && self.fields[i].handle_key(key) => {
                    ScreenKeyResult::Consumed
                }
                _ if scope == KeyScope::Confirm => ScreenKeyResult::Consumed,
                _ => ScreenKeyResult::Ignored,
            };
        };

        self.handle_action(action)
    }

    fn handle_action(&mut self, action: Action) -> ScreenKeyResult {
        match action {
            Action::Quit => return ScreenKeyResult::Quit,
            Action::ToggleTheme => return ScreenKeyResult::ToggleTheme,
            Action::Submit => return ScreenKeyResult::AddRecord(self.form_request()),
            Action::Confirm => {
                if let Some(id) = self.pending_delete.take() {
                    return ScreenKeyResult::DeleteRecord(id);
                }
            }
            Action::Cancel => self.pending_delete = None,
            Action::DeleteRecord => self.pending_delete = self.selected_id(),
            Action::CycleFilter => {
                self.query.filter = self.query.filter.cycled(&self.category_options);
            }
            Action::CycleSort => self.query.sort = self.query.sort.cycled(),
            Action::FocusNext => self.focus_next(),
            Action::FocusPrevious => self.focus_previous(),
            Action::FocusForm => self.set_focus(Focus::Form(NAME_FIELD)),
            Action::FocusTable => self.set_focus(Focus::Table),
            Action::ClearForm => self.clear_form(),
            Action::NavigateUp
            | Action::NavigateDown
            | Action::SelectFirst
            | Action::SelectLast => self.move_selection(action),
        }
        ScreenKeyResult::Consumed
    }

    fn pending_delete_name(&self) -> Option<&str> {
        let id = self.pending_delete?;
        self.view
            .rows
            .iter()
            .find(|row| row.id == id)
            .map(|row| row.name.as_str())
    }
}

/// Renders [`InventoryScreenState`] with the current notice.
pub struct InventoryScreen<'a> {
    notice: Option<&'a Notification>,
}

impl<'a> InventoryScreen<'a> {
    #[must_use]
    pub const fn new(notice: Option<&'a Notification>) -> Self {
        Self { notice }
    }
}

impl StatefulWidget for InventoryScreen<'_> {
    type State = InventoryScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        buf.set_style(area, state.theme.base_style);

        let [header_area, dashboard_area, form_area, table_area, status_area, footer_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(area);

        HeaderBar::new(NAME, VERSION)
            .selectors(state.query.filter.label(), state.query.sort.label())
            .mode(state.theme.mode)
            .style(HeaderBarStyle::from_theme(&state.theme))
            .render(header_area, buf);

        Dashboard::new(state.view.counts, &state.theme).render(dashboard_area, buf);

        render_form(state, form_area, buf);

        RecordTable::new(&state.view.rows, &state.theme)
            .focused(state.focus == Focus::Table)
            .render(table_area, buf, &mut state.table_state);

        (&StatusBar::from_notification(self.notice).base_style(state.theme.base_style))
            .render(status_area, buf);

        let scope = state.scope();
        let bindings = state.keymap.bar_bindings(scope);
        let count = format!("{} items", state.view.counts.total);
        FooterBar::new(&bindings)
            .scope(scope)
            .right_info(Some(count.as_str()))
            .style(FooterBarStyle::from_theme(&state.theme))
            .render(footer_area, buf);

        if let Some(name) = state.pending_delete_name() {
            ConfirmDialog::new(name, &state.theme).render(area, buf);
        }
    }
}

fn render_form(state: &InventoryScreenState, area: Rect, buf: &mut Buffer) {
    let areas = Layout::horizontal([
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Fill(1),
        Constraint::Length(14),
    ])
    .split(area);

    for (field, field_area) in state.fields.iter().zip(areas.iter()) {
        ThemedInput::new(field, &state.theme).render(*field_area, buf);
    }
}
